//! Simulation module
//!
//! Time integration: advances gear angles between frames.

mod updater;

pub use updater::{Updater, KinematicUpdater, NoOpUpdater};
