/// Per-frame render data.
///
/// Instance records are `#[repr(C)]` and `Pod` so a GPU backend can upload
/// them to a storage buffer as-is (see `FrameSnapshot::gear_bytes`).

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use crate::scene::Scene;

/// One gear as drawn this frame (32 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GearInstance {
    /// World position of the gear center
    pub position: Vec3,
    /// Rotation about the gear axis in degrees (direction applied)
    pub rotation: f32,
    pub color: Vec3,
    /// 0 = X, 1 = Y, 2 = Z
    pub axis: u32,
}

/// One axle as drawn this frame (36 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct AxleInstance {
    pub position: Vec3,
    pub radius: f32,
    pub color: Vec3,
    pub length: f32,
    /// 0 = X, 1 = Y, 2 = Z
    pub axis: u32,
}

/// One belt as drawn this frame: the centers of the two gears it wraps.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct BeltInstance {
    pub start: Vec3,
    pub end: Vec3,
}

/// Everything a renderer reads from the scene for one frame.
///
/// Records are in scene declaration order; `gear_names` runs parallel to
/// `gears` for sinks that label their output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameSnapshot {
    pub background: Vec3,
    pub gears: Vec<GearInstance>,
    pub gear_names: Vec<String>,
    pub axles: Vec<AxleInstance>,
    pub belts: Vec<BeltInstance>,
}

impl FrameSnapshot {
    /// Capture the current state of a solved scene.
    pub fn capture(scene: &Scene) -> Self {
        let mut gears = Vec::with_capacity(scene.gear_count());
        let mut gear_names = Vec::with_capacity(scene.gear_count());
        for (_, gear) in scene.gears() {
            gears.push(GearInstance {
                position: gear.position(),
                rotation: gear.rotation(),
                color: gear.color(),
                axis: gear.axis().map(|axis| axis.index()).unwrap_or(0),
            });
            gear_names.push(gear.name().to_string());
        }

        let axles = scene.axles()
            .map(|(_, axle)| AxleInstance {
                position: axle.position(),
                radius: axle.radius(),
                color: axle.color(),
                length: axle.length(),
                axis: axle.axis().index(),
            })
            .collect();

        let belts = scene.belts()
            .filter_map(|(_, belt)| {
                let start = scene.gear(belt.gear1())?.position();
                let end = scene.gear(belt.gear2())?.position();
                Some(BeltInstance { start, end })
            })
            .collect();

        Self {
            background: scene.background(),
            gears,
            gear_names,
            axles,
            belts,
        }
    }

    /// Gear records as raw bytes for buffer upload
    pub fn gear_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.gears)
    }

    /// Axle records as raw bytes for buffer upload
    pub fn axle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.axles)
    }

    /// Belt records as raw bytes for buffer upload
    pub fn belt_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.belts)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
