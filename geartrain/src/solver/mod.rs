//! Kinematic solver module
//!
//! Resolves gear positions and propagates motion through meshed gears,
//! bevel gears and belts until the train reaches a fixed point.

mod config;
mod contact;
mod solver;

pub use config::SolverConfig;
pub use contact::{check_belt, in_mesh, transmitted_velocity, Linkage};
pub use solver::{KinematicSolver, SolveReport};
