//! Render sink module
//!
//! Everything a renderer needs from a solved scene, captured once per
//! frame, and the trait a renderer implements to receive it.

mod sink;
mod snapshot;

pub use sink::{RenderSink, RecordingSink};
pub use snapshot::{FrameSnapshot, GearInstance, AxleInstance, BeltInstance};
