/// Gears: toothed discs mounted on an axle at a relative offset.
///
/// A gear's motion (axis, motored flag, direction, angular velocity) is a
/// copy of its axle's. Only the accumulated angle belongs to the gear.

use glam::Vec3;
use slotmap::new_key_type;
use super::axle::{AxleKey, Axis, Direction};

new_key_type! {
    /// Stable key for a Gear within a Scene.
    pub struct GearKey;
}

/// Gear shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GearKind {
    /// Spur gear meshing with gears on parallel axles
    #[default]
    Normal,
    /// Bevel gear meshing with gears on perpendicular axles
    Bevel,
}

impl GearKind {
    /// Kind from its scene-file name (`NORMAL` or `BEVEL`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "NORMAL" => Some(GearKind::Normal),
            "BEVEL" => Some(GearKind::Bevel),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GearKind::Normal => "NORMAL",
            GearKind::Bevel => "BEVEL",
        }
    }
}

/// Gear record as read from a scene description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GearDesc {
    pub name: String,
    pub kind: GearKind,
    /// Bevelled face is the front face (bevel gears only)
    pub front_face: bool,
    pub radius: f32,
    pub width: f32,
    pub teeth: i64,
    pub tooth_depth: f32,
    pub color: Vec3,
    /// Name of the owning axle
    pub axle: String,
    /// Offset along the axle axis from the axle position
    pub offset: f32,
}

impl GearDesc {
    /// Convenience constructor for a spur gear.
    pub fn normal(name: &str, axle: &str, radius: f32, teeth: i64) -> Self {
        Self {
            name: name.to_string(),
            kind: GearKind::Normal,
            radius,
            width: 0.5,
            teeth,
            tooth_depth: 0.1 * radius,
            axle: axle.to_string(),
            ..Default::default()
        }
    }

    /// Convenience constructor for a bevel gear.
    pub fn bevel(name: &str, axle: &str, radius: f32, teeth: i64) -> Self {
        Self {
            kind: GearKind::Bevel,
            ..Self::normal(name, axle, radius, teeth)
        }
    }
}

/// A gear inside a Scene.
#[derive(Debug, Clone)]
pub struct Gear {
    name: String,
    kind: GearKind,
    front_face: bool,
    radius: f32,
    width: f32,
    teeth: u32,
    tooth_depth: f32,
    color: Vec3,
    axle: AxleKey,
    offset: f32,
    pub(crate) position: Vec3,
    pub(crate) axis: Option<Axis>,
    pub(crate) motored: bool,
    pub(crate) angular_velocity: f32,
    pub(crate) direction: Direction,
    pub(crate) angle: f32,
}

impl Gear {
    /// Build a gear mounted on an already-resolved axle.
    ///
    /// Motion state starts unset; the solver fills it in.
    pub(crate) fn from_desc(desc: GearDesc, axle: AxleKey, teeth: u32) -> Self {
        Self {
            name: desc.name,
            kind: desc.kind,
            front_face: desc.front_face,
            radius: desc.radius,
            width: desc.width,
            teeth,
            tooth_depth: desc.tooth_depth,
            color: desc.color,
            axle,
            offset: desc.offset,
            position: Vec3::ZERO,
            axis: None,
            motored: false,
            angular_velocity: 0.0,
            direction: Direction::Undetermined,
            angle: 0.0,
        }
    }

    // ===== GETTERS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> GearKind {
        self.kind
    }

    pub fn front_face(&self) -> bool {
        self.front_face
    }

    /// Outer (tip) radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn teeth(&self) -> u32 {
        self.teeth
    }

    pub fn tooth_depth(&self) -> f32 {
        self.tooth_depth
    }

    /// Root radius: tip radius minus tooth depth
    pub fn root_radius(&self) -> f32 {
        self.radius - self.tooth_depth
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn axle(&self) -> AxleKey {
        self.axle
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Absolute position (valid after position resolution)
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Axis inherited from the axle; `None` before position resolution
    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    pub fn is_motored(&self) -> bool {
        self.motored
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Accumulated rotation angle in degrees (unsigned by direction)
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Rotation to apply when drawing: direction times accumulated angle
    pub fn rotation(&self) -> f32 {
        self.direction.sign() as f32 * self.angle
    }

    /// Advance the accumulated angle by `angular_velocity * elapsed_seconds`.
    pub(crate) fn advance(&mut self, elapsed_seconds: f32) {
        self.angle += self.angular_velocity * elapsed_seconds;
    }
}
