/// Kinematic solver. Infers how motion spreads through a gear train.
///
/// Solving runs in two phases:
/// 1. Position resolution: every gear is placed on its axle.
/// 2. Propagation: motored gears drive the gears they mesh with (or are
///    belted to), pass after pass, until nothing changes.
///
/// Axles are authoritative. Propagation writes the follower's axle, then
/// gears are re-synchronized from their axles.

use crate::error::{Error, Result};
use crate::scene::{GearKey, Scene};
use crate::{gt_bail, gt_debug, gt_err, gt_info, gt_trace, gt_warn};
use super::config::SolverConfig;
use super::contact::{self, Linkage};

/// Outcome of a successful solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    /// Propagation passes run, including the final pass that changed nothing
    pub passes: usize,
    /// Axles carrying a drive after the solve
    pub motored_axles: usize,
    /// Names of axles no drive reached
    pub idle_axles: Vec<String>,
}

/// Constraint-propagation solver for gear trains.
///
/// # Example
///
/// ```no_run
/// use geartrain::geartrain::{Scene, SceneLoader, KinematicSolver};
///
/// let desc = SceneLoader::default().load_file("geartrain.dat")?;
/// let mut scene = Scene::from_desc(desc)?;
/// let report = KinematicSolver::default().solve(&mut scene)?;
/// println!("{} axles turning", report.motored_axles);
/// # Ok::<(), geartrain::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct KinematicSolver {
    config: SolverConfig,
}

impl KinematicSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Resolve positions, then propagate motion to a fixed point.
    ///
    /// Any motion left over from a previous solve is discarded first, so
    /// solving the same scene twice gives the same result.
    ///
    /// # Errors
    ///
    /// Any configuration error found while propagating (`TooClose`,
    /// `InvalidBelt`, `BeltTooClose`, `ToothLinkage`, `BeltLinkage`,
    /// `NotConverged`). The scene must not be rendered after a failure.
    pub fn solve(&self, scene: &mut Scene) -> Result<SolveReport> {
        scene.reset_motion();
        self.resolve_positions(scene);
        let passes = self.propagate(scene)?;

        let idle_axles: Vec<String> = scene.axles()
            .filter(|(_, axle)| !axle.is_motored())
            .map(|(_, axle)| axle.name().to_string())
            .collect();
        for name in &idle_axles {
            gt_warn!("geartrain::Solver", "Axle {} is not driven by any motor", name);
        }

        let report = SolveReport {
            passes,
            motored_axles: scene.motored_axle_count(),
            idle_axles,
        };
        gt_info!("geartrain::Solver", "Solved in {} passes: {}/{} axles motored",
            report.passes, report.motored_axles, scene.axle_count());
        Ok(report)
    }

    /// Phase 1: place every gear on its axle and copy the axle's axis and
    /// motion onto it.
    pub fn resolve_positions(&self, scene: &mut Scene) {
        scene.resolve_gear_positions();
        for (_, gear) in scene.gears() {
            gt_trace!("geartrain::Solver", "Gear {} at {:?}", gear.name(), gear.position());
        }
    }

    /// Phase 2: run propagation passes until one changes nothing.
    ///
    /// Returns the number of passes run.
    ///
    /// # Errors
    ///
    /// `NotConverged` if the pass limit is reached while passes are still
    /// changing the scene, plus any error from [`propagate_pass`](Self::propagate_pass).
    pub fn propagate(&self, scene: &mut Scene) -> Result<usize> {
        let limit = self.config.pass_limit(scene.axle_count());
        for pass in 1..=limit {
            let changed = self.propagate_pass(scene)?;
            gt_debug!("geartrain::Solver", "Pass {}: {}", pass,
                if changed { "motion spread" } else { "fixed point" });
            if !changed {
                return Ok(pass);
            }
        }
        gt_bail!("geartrain::Solver", Error::NotConverged { passes: limit });
    }

    /// One propagation pass over every gear pair, then every belt.
    ///
    /// Returns whether any axle received a drive during the pass.
    pub fn propagate_pass(&self, scene: &mut Scene) -> Result<bool> {
        let mut changed = false;

        let gears = scene.gear_keys();
        for (i, &first) in gears.iter().enumerate() {
            for &second in &gears[i + 1..] {
                changed |= self.mesh_pair(scene, first, second)?;
            }
        }
        scene.sync_gears_from_axles();

        for belt_key in scene.belt_keys() {
            changed |= self.belt_pair(scene, belt_key)?;
        }
        scene.sync_gears_from_axles();

        Ok(changed)
    }

    fn mesh_pair(&self, scene: &mut Scene, first: GearKey, second: GearKey) -> Result<bool> {
        let (Some(g1), Some(g2)) = (scene.gear(first), scene.gear(second)) else {
            return Ok(false);
        };
        let meshed = contact::in_mesh(g1, g2, &self.config)
            .map_err(|e| gt_err!("geartrain::Solver", e))?;
        if !meshed {
            return Ok(false);
        }
        self.link(scene, first, second, Linkage::Teeth)
    }

    fn belt_pair(&self, scene: &mut Scene, belt_key: crate::scene::BeltKey) -> Result<bool> {
        let Some(belt) = scene.belt(belt_key) else {
            return Ok(false);
        };
        let (first, second) = (belt.gear1(), belt.gear2());
        let (Some(g1), Some(g2)) = (scene.gear(first), scene.gear(second)) else {
            return Ok(false);
        };
        contact::check_belt(belt.name(), g1, g2)
            .map_err(|e| gt_err!("geartrain::Solver", e))?;
        self.link(scene, first, second, Linkage::Belt)
    }

    /// Apply the drive rule to two linked gears.
    ///
    /// Exactly one motored: the other is driven. Both motored: they must
    /// already agree. Neither: nothing to do yet.
    fn link(&self, scene: &mut Scene, first: GearKey, second: GearKey, linkage: Linkage) -> Result<bool> {
        let (Some(g1), Some(g2)) = (scene.gear(first), scene.gear(second)) else {
            return Ok(false);
        };
        match (g1.is_motored(), g2.is_motored()) {
            (true, false) => self.drive(scene, first, second, linkage),
            (false, true) => self.drive(scene, second, first, linkage),
            (true, true) => {
                self.verify(scene, first, second, linkage)?;
                Ok(false)
            }
            (false, false) => Ok(false),
        }
    }

    /// Propagate from a motored driver onto the driven gear's axle.
    ///
    /// If the axle already has a direction the propagated motion must
    /// match it; otherwise the axle (and the driven gear) take it on.
    fn drive(&self, scene: &mut Scene, driver: GearKey, driven: GearKey, linkage: Linkage) -> Result<bool> {
        let (Some(d), Some(f)) = (scene.gear(driver), scene.gear(driven)) else {
            return Ok(false);
        };
        let velocity = contact::transmitted_velocity(d, f, linkage);
        let direction = match linkage {
            Linkage::Teeth => d.direction().reversed(),
            Linkage::Belt => d.direction(),
        };
        let axle_key = f.axle();
        let Some(axle) = scene.axle(axle_key) else {
            return Ok(false);
        };

        if axle.direction().is_determined() {
            if axle.direction() != direction
                || !self.config.velocities_match(axle.angular_velocity(), velocity)
            {
                gt_bail!("geartrain::Solver", self.linkage_error(d.name(), f.name(), linkage));
            }
            return Ok(false);
        }

        gt_debug!("geartrain::Solver", "{} drives {} ({:?}): axle {} at {} dir {}",
            d.name(), f.name(), linkage, axle.name(), velocity, direction.sign());

        if let Some(axle) = scene.axle_mut(axle_key) {
            axle.motored = true;
            axle.direction = direction;
            axle.angular_velocity = velocity;
        }
        if let Some(gear) = scene.gear_mut(driven) {
            gear.motored = true;
            gear.direction = direction;
            gear.angular_velocity = velocity;
        }
        Ok(true)
    }

    /// Both gears already motored: their motion must satisfy the linkage.
    fn verify(&self, scene: &Scene, first: GearKey, second: GearKey, linkage: Linkage) -> Result<()> {
        let (Some(g1), Some(g2)) = (scene.gear(first), scene.gear(second)) else {
            return Ok(());
        };
        let expected_direction = match linkage {
            Linkage::Teeth => g1.direction().reversed(),
            Linkage::Belt => g1.direction(),
        };
        let expected_velocity = contact::transmitted_velocity(g1, g2, linkage);
        if g2.direction() != expected_direction
            || !self.config.velocities_match(g2.angular_velocity(), expected_velocity)
        {
            gt_bail!("geartrain::Solver", self.linkage_error(g1.name(), g2.name(), linkage));
        }
        Ok(())
    }

    fn linkage_error(&self, gear1: &str, gear2: &str, linkage: Linkage) -> Error {
        let (gear1, gear2) = (gear1.to_string(), gear2.to_string());
        match linkage {
            Linkage::Teeth => Error::ToothLinkage { gear1, gear2 },
            Linkage::Belt => Error::BeltLinkage { gear1, gear2 },
        }
    }
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
