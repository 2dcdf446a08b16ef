/// Update strategies.
///
/// An Updater advances the scene by the time elapsed since the last frame.
/// It runs once per frame, before the scene is handed to the render sink.

use crate::scene::Scene;

/// Strategy for advancing a solved scene in time.
///
/// `&mut self` allows stateful implementations (e.g. time scaling).
pub trait Updater {
    /// Advance the scene by `elapsed_seconds`.
    fn update(&mut self, scene: &mut Scene, elapsed_seconds: f32);
}

/// No-op updater. Leaves every gear where it is.
///
/// Used to inspect a solved train without it turning.
#[derive(Debug, Default)]
pub struct NoOpUpdater;

impl NoOpUpdater {
    pub fn new() -> Self {
        Self
    }
}

impl Updater for NoOpUpdater {
    fn update(&mut self, _scene: &mut Scene, _elapsed_seconds: f32) {}
}

/// Default updater. Accumulates each gear's angle from its angular velocity.
///
/// Angular velocities are in degrees per second, so the accumulated angle
/// is in degrees. Nothing is propagated here; the solver must have run.
#[derive(Debug, Default)]
pub struct KinematicUpdater {
    elapsed: f64,
    frames: u64,
}

impl KinematicUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total simulated time in seconds
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of updates applied
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Updater for KinematicUpdater {
    fn update(&mut self, scene: &mut Scene, elapsed_seconds: f32) {
        for (_, gear) in scene.gears_mut() {
            gear.advance(elapsed_seconds);
        }
        self.elapsed += elapsed_seconds as f64;
        self.frames += 1;
    }
}

#[cfg(test)]
#[path = "updater_tests.rs"]
mod tests;
