//! Scene loader module
//!
//! Parses GearTrain scene files (tagged records of axles, gears and
//! belts) into a `SceneDesc`.

mod config;
mod loader;
mod tokens;

pub use config::{LoaderConfig, NumericPolicy};
pub use loader::SceneLoader;
