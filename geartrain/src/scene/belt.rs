/// Belts couple two spur gears without tooth contact.

use slotmap::new_key_type;
use super::gear::GearKey;

new_key_type! {
    /// Stable key for a Belt within a Scene.
    pub struct BeltKey;
}

/// Belt record as read from a scene description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeltDesc {
    pub name: String,
    pub gear1: String,
    pub gear2: String,
}

impl BeltDesc {
    pub fn new(name: &str, gear1: &str, gear2: &str) -> Self {
        Self {
            name: name.to_string(),
            gear1: gear1.to_string(),
            gear2: gear2.to_string(),
        }
    }
}

/// A belt inside a Scene, with both gears resolved.
#[derive(Debug, Clone)]
pub struct Belt {
    name: String,
    gear1: GearKey,
    gear2: GearKey,
}

impl Belt {
    pub(crate) fn new(name: String, gear1: GearKey, gear2: GearKey) -> Self {
        Self { name, gear1, gear2 }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gear1(&self) -> GearKey {
        self.gear1
    }

    pub fn gear2(&self) -> GearKey {
        self.gear2
    }
}
