/// Axles: rotating shafts that own the motion state of their gears.
///
/// An axle is either a motor source (declared with a direction and an
/// angular velocity) or receives its motion through propagation.

use glam::Vec3;
use slotmap::new_key_type;

new_key_type! {
    /// Stable key for an Axle within a Scene.
    pub struct AxleKey;
}

/// Principal axis an axle (and every gear on it) rotates around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    /// Axis from its numeric selector (0 = X, 1 = Y, 2 = Z).
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            2 => Some(Axis::Z),
            _ => None,
        }
    }

    /// Numeric selector (0 = X, 1 = Y, 2 = Z)
    pub fn index(self) -> u32 {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along this axis
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Coordinate of `v` along this axis
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

/// Rotation direction. `Undetermined` means no drive has reached the part yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Reverse,
    #[default]
    Undetermined,
    Forward,
}

impl Direction {
    /// Direction from its numeric form (-1, 0, +1).
    pub fn from_sign(sign: i64) -> Option<Self> {
        match sign {
            -1 => Some(Direction::Reverse),
            0 => Some(Direction::Undetermined),
            1 => Some(Direction::Forward),
            _ => None,
        }
    }

    /// -1, 0 or +1
    pub fn sign(self) -> i32 {
        match self {
            Direction::Reverse => -1,
            Direction::Undetermined => 0,
            Direction::Forward => 1,
        }
    }

    /// Opposite direction; `Undetermined` stays undetermined.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Reverse => Direction::Forward,
            Direction::Undetermined => Direction::Undetermined,
            Direction::Forward => Direction::Reverse,
        }
    }

    pub fn is_determined(self) -> bool {
        self != Direction::Undetermined
    }
}

/// Axle record as read from a scene description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxleDesc {
    pub name: String,
    pub radius: f32,
    pub axis: Axis,
    pub color: Vec3,
    pub position: Vec3,
    pub length: f32,
    /// Motor source: drives the train with `direction` and `angular_velocity`
    pub motor: bool,
    pub angular_velocity: f32,
    pub direction: Direction,
}

impl AxleDesc {
    /// Convenience constructor for an idle axle; the remaining fields
    /// can be set with struct update syntax.
    pub fn new(name: &str, axis: Axis, position: Vec3) -> Self {
        Self {
            name: name.to_string(),
            axis,
            position,
            ..Default::default()
        }
    }

    /// Convenience constructor for a motor source.
    pub fn motor(name: &str, axis: Axis, position: Vec3, direction: Direction, angular_velocity: f32) -> Self {
        Self {
            motor: true,
            direction,
            angular_velocity,
            ..Self::new(name, axis, position)
        }
    }
}

/// A rotating shaft inside a Scene.
///
/// Axles are authoritative for motion: gears copy direction and angular
/// velocity from their axle after every propagation step.
#[derive(Debug, Clone)]
pub struct Axle {
    name: String,
    radius: f32,
    axis: Axis,
    color: Vec3,
    position: Vec3,
    length: f32,
    motor: bool,
    pub(crate) motored: bool,
    pub(crate) angular_velocity: f32,
    pub(crate) direction: Direction,
}

impl Axle {
    /// Build an axle from its description.
    ///
    /// Only motor sources keep the declared direction and velocity; any
    /// other axle starts undetermined and waits for propagation.
    pub(crate) fn from_desc(desc: AxleDesc) -> Self {
        let (direction, angular_velocity) = if desc.motor {
            (desc.direction, desc.angular_velocity)
        } else {
            (Direction::Undetermined, 0.0)
        };
        Self {
            name: desc.name,
            radius: desc.radius,
            axis: desc.axis,
            color: desc.color,
            position: desc.position,
            length: desc.length,
            motor: desc.motor,
            motored: desc.motor,
            angular_velocity,
            direction,
        }
    }

    // ===== GETTERS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    /// Declared as a motor source
    pub fn is_motor(&self) -> bool {
        self.motor
    }

    /// Motor source, or reached by propagation
    pub fn is_motored(&self) -> bool {
        self.motored
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Drop any propagated motion, keeping motor sources as declared.
    pub(crate) fn reset_motion(&mut self) {
        if !self.motor {
            self.motored = false;
            self.direction = Direction::Undetermined;
            self.angular_velocity = 0.0;
        }
    }
}
