/*!
# GearTrain

Scene loading and kinematic solving for gear-train simulations.

Given a declarative description of axles, gears and belts, the solver
works out where every gear sits, which gear drives which, and at what
angular velocity and direction, rejecting trains that cannot physically
exist (interfering gears, invalid belts, over-determined drives).

## Architecture

- **SceneLoader**: parses scene files into a `SceneDesc`
- **Scene**: owns axles, gears and belts; names resolved once into keys
- **TopologyIndex**: by-name lookup of scene parts
- **KinematicSolver**: position resolution + fixed-point motion propagation
- **Updater**: per-frame time integration of gear angles
- **RenderSink**: receives a `FrameSnapshot` of everything a renderer draws

Typical flow: load → `Scene::from_desc` → `KinematicSolver::solve` → each
frame `Updater::update` then `RenderSink::submit`.
*/

// Internal modules
mod error;
pub mod log;
pub mod loader;
pub mod render;
pub mod scene;
pub mod simulation;
pub mod solver;

pub use error::{Error, Result};

// Main geartrain namespace module
pub mod geartrain {
    // Error types
    pub use crate::error::{Error, Result};

    // Loading
    pub use crate::loader::{SceneLoader, LoaderConfig, NumericPolicy};

    // Scene
    pub use crate::scene::{
        Scene, SceneDesc, TopologyIndex,
        Axle, AxleDesc, AxleKey, Axis, Direction,
        Gear, GearDesc, GearKey, GearKind,
        Belt, BeltDesc, BeltKey,
    };

    // Solving and simulation
    pub use crate::solver::{KinematicSolver, SolverConfig, SolveReport};
    pub use crate::simulation::{Updater, KinematicUpdater, NoOpUpdater};

    // Rendering contract
    pub use crate::render::{RenderSink, RecordingSink, FrameSnapshot};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Log, Logger, LogEntry, LogSeverity, DefaultLogger};
    }
}

// Re-export math library at crate root
pub use glam;
