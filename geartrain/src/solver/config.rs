/// Solver configuration

/// Tunables for the kinematic solver.
///
/// The geometric factors default to the values the GearTrain scene files
/// were authored against; changing them changes which gears mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Upper bound on propagation passes. `None` uses the axle count + 1,
    /// which is always enough since every changing pass motors at least
    /// one more axle.
    pub max_passes: Option<usize>,
    /// Gears mesh when their center distance is below this fraction of the
    /// tangency distance (sum of radii, or hypotenuse for bevel gears).
    pub mesh_reach: f32,
    /// Parallel spur gears closer than this multiple of the sum of their
    /// root radii interfere.
    pub min_clearance: f32,
    /// Relative tolerance when comparing an established angular velocity
    /// with a newly propagated one.
    pub velocity_tolerance: f32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_passes: None,
            mesh_reach: 0.95,
            min_clearance: 1.1,
            velocity_tolerance: 1e-4,
        }
    }
}

impl SolverConfig {
    /// Pass cap for a scene with `axle_count` axles
    pub fn pass_limit(&self, axle_count: usize) -> usize {
        self.max_passes.unwrap_or(axle_count + 1).max(1)
    }

    /// Whether two angular velocities agree within `velocity_tolerance`
    pub fn velocities_match(&self, a: f32, b: f32) -> bool {
        let scale = a.abs().max(b.abs()).max(f32::MIN_POSITIVE);
        (a - b).abs() <= self.velocity_tolerance * scale
    }
}
