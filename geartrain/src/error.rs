//! Error types for GearTrain
//!
//! This module defines the error types used throughout the crate:
//! input errors raised while loading a scene, and configuration errors
//! raised while resolving names and solving the gear train.

use std::fmt;

/// Result type for GearTrain operations
pub type Result<T> = std::result::Result<T, Error>;

/// GearTrain errors
///
/// None of these are transient: they describe invalid static input,
/// so callers are expected to report them and abort.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Scene file missing or unreadable
    Io { path: String, message: String },

    /// Malformed scene description (line is 1-based)
    Parse { line: usize, message: String },

    /// Two records of the same kind share a name
    DuplicateName { kind: &'static str, name: String },

    /// A gear references an axle that does not exist
    UnresolvedAxle { gear: String, axle: String },

    /// A belt references a gear that does not exist
    UnresolvedGear { belt: String, gear: String },

    /// Axle declared in a way the solver cannot use
    InvalidAxle { axle: String, message: String },

    /// Gear dimensions that cannot take part in a ratio
    InvalidGear { gear: String, message: String },

    /// Two parallel spur gears interfere with each other
    TooClose { gear1: String, gear2: String },

    /// Belt between gears it cannot couple
    InvalidBelt { belt: String, message: String },

    /// Belt-coupled gears overlap
    BeltTooClose { gear1: String, gear2: String },

    /// Meshed gears are driven at contradictory speeds or directions
    ToothLinkage { gear1: String, gear2: String },

    /// Belt-coupled gears are driven at contradictory speeds or directions
    BeltLinkage { gear1: String, gear2: String },

    /// Propagation still changing after the configured number of passes
    NotConverged { passes: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, message } => write!(f, "Cannot read {}: {}", path, message),
            Error::Parse { line, message } => write!(f, "Parse error at line {}: {}", line, message),
            Error::DuplicateName { kind, name } => write!(f, "Duplicate {} name '{}'", kind, name),
            Error::UnresolvedAxle { gear, axle } => {
                write!(f, "Gear {} is mounted on unknown axle {}", gear, axle)
            }
            Error::UnresolvedGear { belt, gear } => {
                write!(f, "Belt {} references unknown gear {}", belt, gear)
            }
            Error::InvalidAxle { axle, message } => write!(f, "Axle {} invalid: {}", axle, message),
            Error::InvalidGear { gear, message } => write!(f, "Gear {} invalid: {}", gear, message),
            Error::TooClose { gear1, gear2 } => {
                write!(f, "Gear {} and {} are too close to each other", gear1, gear2)
            }
            Error::InvalidBelt { belt, message } => write!(f, "Belt {} invalid: {}", belt, message),
            Error::BeltTooClose { gear1, gear2 } => {
                write!(f, "Gears {} and {} too close to be linked with belts", gear1, gear2)
            }
            Error::ToothLinkage { gear1, gear2 } => {
                write!(f, "Error in tooth linkage of gears {} and {}", gear1, gear2)
            }
            Error::BeltLinkage { gear1, gear2 } => {
                write!(f, "Error in belt linkage of gears {} and {}", gear1, gear2)
            }
            Error::NotConverged { passes } => {
                write!(f, "Motion propagation did not settle after {} passes", passes)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
