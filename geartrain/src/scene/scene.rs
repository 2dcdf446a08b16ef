/// Scene: the axles, gears and belts of one gear train.
///
/// Uses SlotMaps so parts are addressed by stable keys instead of names.
/// Iteration order is declaration order (parts are never removed).

use glam::Vec3;
use slotmap::SlotMap;
use crate::error::{Error, Result};
use crate::{gt_debug, gt_err};
use super::axle::{Axle, AxleDesc, AxleKey, Direction};
use super::belt::{Belt, BeltDesc, BeltKey};
use super::gear::{Gear, GearDesc, GearKey};
use super::topology::TopologyIndex;

/// Complete scene description as produced by the loader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneDesc {
    /// Clear color for renderers
    pub background: Vec3,
    pub axles: Vec<AxleDesc>,
    pub gears: Vec<GearDesc>,
    pub belts: Vec<BeltDesc>,
}

/// A gear train with every name reference resolved.
///
/// Owned by the driver for the whole process lifetime and passed by
/// reference to the solver, the updater and the render sink.
#[derive(Debug, Clone)]
pub struct Scene {
    background: Vec3,
    axles: SlotMap<AxleKey, Axle>,
    gears: SlotMap<GearKey, Gear>,
    belts: SlotMap<BeltKey, Belt>,
    topology: TopologyIndex,
}

impl Scene {
    /// Build a scene from a description.
    ///
    /// Axles are registered first, then gears (resolving their axle),
    /// then belts (resolving both gears).
    ///
    /// # Errors
    ///
    /// - `DuplicateName` if two parts of the same kind share a name
    /// - `UnresolvedAxle` / `UnresolvedGear` for dangling references
    /// - `InvalidAxle` for a motor source without a direction
    /// - `InvalidGear` for a non-positive tooth count or radius
    /// - `InvalidBelt` for a belt looping onto a single gear
    pub fn from_desc(desc: SceneDesc) -> Result<Self> {
        let mut scene = Self {
            background: desc.background,
            axles: SlotMap::with_key(),
            gears: SlotMap::with_key(),
            belts: SlotMap::with_key(),
            topology: TopologyIndex::new(),
        };

        for axle_desc in desc.axles {
            scene.add_axle(axle_desc)?;
        }
        for gear_desc in desc.gears {
            scene.add_gear(gear_desc)?;
        }
        for belt_desc in desc.belts {
            scene.add_belt(belt_desc)?;
        }

        gt_debug!("geartrain::Scene", "Scene built: {} axles, {} gears, {} belts",
            scene.axles.len(), scene.gears.len(), scene.belts.len());

        Ok(scene)
    }

    fn add_axle(&mut self, desc: AxleDesc) -> Result<AxleKey> {
        self.topology.ensure_axle_free(&desc.name)
            .map_err(|e| gt_err!("geartrain::Scene", e))?;
        if desc.motor && !desc.direction.is_determined() {
            return Err(gt_err!("geartrain::Scene", Error::InvalidAxle {
                axle: desc.name,
                message: "motor source needs ADIRECTION -1 or 1".to_string(),
            }));
        }
        let name = desc.name.clone();
        let key = self.axles.insert(Axle::from_desc(desc));
        self.topology.register_axle(&name, key);
        Ok(key)
    }

    fn add_gear(&mut self, desc: GearDesc) -> Result<GearKey> {
        self.topology.ensure_gear_free(&desc.name)
            .map_err(|e| gt_err!("geartrain::Scene", e))?;
        let axle = self.topology.resolve_axle(&desc.name, &desc.axle)
            .map_err(|e| gt_err!("geartrain::Scene", e))?;

        let teeth = match u32::try_from(desc.teeth) {
            Ok(teeth) if teeth > 0 => teeth,
            _ => {
                return Err(gt_err!("geartrain::Scene", Error::InvalidGear {
                    gear: desc.name,
                    message: format!("tooth count must be positive (got {})", desc.teeth),
                }));
            }
        };
        if !(desc.radius > 0.0) {
            return Err(gt_err!("geartrain::Scene", Error::InvalidGear {
                gear: desc.name,
                message: format!("radius must be positive (got {})", desc.radius),
            }));
        }

        let name = desc.name.clone();
        let key = self.gears.insert(Gear::from_desc(desc, axle, teeth));
        self.topology.register_gear(&name, key);
        Ok(key)
    }

    fn add_belt(&mut self, desc: BeltDesc) -> Result<BeltKey> {
        self.topology.ensure_belt_free(&desc.name)
            .map_err(|e| gt_err!("geartrain::Scene", e))?;
        let gear1 = self.topology.resolve_gear(&desc.name, &desc.gear1)
            .map_err(|e| gt_err!("geartrain::Scene", e))?;
        let gear2 = self.topology.resolve_gear(&desc.name, &desc.gear2)
            .map_err(|e| gt_err!("geartrain::Scene", e))?;
        if gear1 == gear2 {
            return Err(gt_err!("geartrain::Scene", Error::InvalidBelt {
                belt: desc.name,
                message: "both ends on the same gear".to_string(),
            }));
        }

        let key = self.belts.insert(Belt::new(desc.name.clone(), gear1, gear2));
        self.topology.register_belt(&desc.name, key);
        Ok(key)
    }

    // ===== ACCESSORS =====

    pub fn background(&self) -> Vec3 {
        self.background
    }

    pub fn topology(&self) -> &TopologyIndex {
        &self.topology
    }

    pub fn axle(&self, key: AxleKey) -> Option<&Axle> {
        self.axles.get(key)
    }

    pub fn gear(&self, key: GearKey) -> Option<&Gear> {
        self.gears.get(key)
    }

    pub fn belt(&self, key: BeltKey) -> Option<&Belt> {
        self.belts.get(key)
    }

    /// Look up an axle by name
    pub fn find_axle(&self, name: &str) -> Option<&Axle> {
        self.topology.find_axle(name).and_then(|key| self.axles.get(key))
    }

    /// Look up a gear by name
    pub fn find_gear(&self, name: &str) -> Option<&Gear> {
        self.topology.find_gear(name).and_then(|key| self.gears.get(key))
    }

    /// Look up a belt by name
    pub fn find_belt(&self, name: &str) -> Option<&Belt> {
        self.topology.find_belt(name).and_then(|key| self.belts.get(key))
    }

    /// Iterate over all axles (key, axle) in declaration order
    pub fn axles(&self) -> impl Iterator<Item = (AxleKey, &Axle)> {
        self.axles.iter()
    }

    /// Iterate over all gears (key, gear) in declaration order
    pub fn gears(&self) -> impl Iterator<Item = (GearKey, &Gear)> {
        self.gears.iter()
    }

    /// Iterate over all belts (key, belt) in declaration order
    pub fn belts(&self) -> impl Iterator<Item = (BeltKey, &Belt)> {
        self.belts.iter()
    }

    pub fn axle_count(&self) -> usize {
        self.axles.len()
    }

    pub fn gear_count(&self) -> usize {
        self.gears.len()
    }

    pub fn belt_count(&self) -> usize {
        self.belts.len()
    }

    /// Number of axles currently carrying a drive
    pub fn motored_axle_count(&self) -> usize {
        self.axles.values().filter(|axle| axle.is_motored()).count()
    }

    // ===== SOLVER / UPDATER ACCESS =====

    pub(crate) fn axle_mut(&mut self, key: AxleKey) -> Option<&mut Axle> {
        self.axles.get_mut(key)
    }

    pub(crate) fn gear_mut(&mut self, key: GearKey) -> Option<&mut Gear> {
        self.gears.get_mut(key)
    }

    pub(crate) fn gears_mut(&mut self) -> impl Iterator<Item = (GearKey, &mut Gear)> {
        self.gears.iter_mut()
    }

    pub(crate) fn gear_keys(&self) -> Vec<GearKey> {
        self.gears.keys().collect()
    }

    pub(crate) fn belt_keys(&self) -> Vec<BeltKey> {
        self.belts.keys().collect()
    }

    /// Forget all propagated motion: non-motor axles become undetermined
    /// and gears return to the unset state they had after loading.
    pub(crate) fn reset_motion(&mut self) {
        for axle in self.axles.values_mut() {
            axle.reset_motion();
        }
        for gear in self.gears.values_mut() {
            gear.axis = None;
            gear.motored = false;
            gear.direction = Direction::Undetermined;
            gear.angular_velocity = 0.0;
        }
    }

    /// Place every gear on its axle: axle position plus the gear offset
    /// along the axle axis. Also copies the axle's current motion state.
    pub(crate) fn resolve_gear_positions(&mut self) {
        let axles = &self.axles;
        for gear in self.gears.values_mut() {
            if let Some(axle) = axles.get(gear.axle()) {
                gear.position = axle.position() + gear.offset() * axle.axis().unit();
            }
        }
        self.sync_gears_from_axles();
    }

    /// Copy axis, motored flag and (for motored axles) motion from every
    /// gear's axle onto the gear.
    pub(crate) fn sync_gears_from_axles(&mut self) {
        let axles = &self.axles;
        for gear in self.gears.values_mut() {
            if let Some(axle) = axles.get(gear.axle()) {
                gear.axis = Some(axle.axis());
                gear.motored = axle.motored;
                if axle.motored {
                    gear.direction = axle.direction;
                    gear.angular_velocity = axle.angular_velocity;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
