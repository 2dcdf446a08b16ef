//! Scene module
//!
//! Provides the scene aggregate (axles, gears, belts), the part
//! descriptions produced by the loader, and the by-name topology index.

mod axle;
mod belt;
mod gear;
mod scene;
mod topology;

pub use axle::{Axle, AxleDesc, AxleKey, Axis, Direction};
pub use belt::{Belt, BeltDesc, BeltKey};
pub use gear::{Gear, GearDesc, GearKey, GearKind};
pub use scene::{Scene, SceneDesc};
pub use topology::TopologyIndex;
