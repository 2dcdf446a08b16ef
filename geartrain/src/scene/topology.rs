/// Name lookup for scene parts.
///
/// Scene files cross-reference parts by name (gear -> axle, belt -> gears).
/// The index is built once while the Scene is assembled so every name is
/// resolved to a stable key exactly once; lookups that miss return `None`.

use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use super::axle::AxleKey;
use super::belt::BeltKey;
use super::gear::GearKey;

/// By-name index over the axles, gears and belts of a Scene.
#[derive(Debug, Clone, Default)]
pub struct TopologyIndex {
    axles: FxHashMap<String, AxleKey>,
    gears: FxHashMap<String, GearKey>,
    belts: FxHashMap<String, BeltKey>,
}

impl TopologyIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an axle by name
    pub fn find_axle(&self, name: &str) -> Option<AxleKey> {
        self.axles.get(name).copied()
    }

    /// Look up a gear by name
    pub fn find_gear(&self, name: &str) -> Option<GearKey> {
        self.gears.get(name).copied()
    }

    /// Look up a belt by name
    pub fn find_belt(&self, name: &str) -> Option<BeltKey> {
        self.belts.get(name).copied()
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

    /// Resolve the axle a gear is mounted on.
    pub fn resolve_axle(&self, gear: &str, axle: &str) -> Result<AxleKey> {
        self.find_axle(axle).ok_or_else(|| Error::UnresolvedAxle {
            gear: gear.to_string(),
            axle: axle.to_string(),
        })
    }

    /// Resolve one end of a belt.
    pub fn resolve_gear(&self, belt: &str, gear: &str) -> Result<GearKey> {
        self.find_gear(gear).ok_or_else(|| Error::UnresolvedGear {
            belt: belt.to_string(),
            gear: gear.to_string(),
        })
    }

    // ===== REGISTRATION =====

    /// Check a name is free before the part is inserted into its arena.
    pub(crate) fn ensure_axle_free(&self, name: &str) -> Result<()> {
        if self.axles.contains_key(name) {
            return Err(Error::DuplicateName { kind: "axle", name: name.to_string() });
        }
        Ok(())
    }

    pub(crate) fn ensure_gear_free(&self, name: &str) -> Result<()> {
        if self.gears.contains_key(name) {
            return Err(Error::DuplicateName { kind: "gear", name: name.to_string() });
        }
        Ok(())
    }

    pub(crate) fn ensure_belt_free(&self, name: &str) -> Result<()> {
        if self.belts.contains_key(name) {
            return Err(Error::DuplicateName { kind: "belt", name: name.to_string() });
        }
        Ok(())
    }

    pub(crate) fn register_axle(&mut self, name: &str, key: AxleKey) {
        self.axles.insert(name.to_string(), key);
    }

    pub(crate) fn register_gear(&mut self, name: &str, key: GearKey) {
        self.gears.insert(name.to_string(), key);
    }

    pub(crate) fn register_belt(&mut self, name: &str, key: BeltKey) {
        self.belts.insert(name.to_string(), key);
    }
}

#[cfg(test)]
#[path = "topology_tests.rs"]
mod tests;
