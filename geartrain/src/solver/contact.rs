/// Geometric contact tests between gears.
///
/// These decide whether two gears are linked (by teeth or by a belt) and
/// reject arrangements that cannot physically exist. They only read gear
/// state; propagation is done by the solver.

use crate::error::{Error, Result};
use crate::scene::{Gear, GearKind};
use super::config::SolverConfig;

/// How motion crosses from one gear to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linkage {
    /// Tooth contact (spur or bevel): reverses direction, scales by teeth and radii
    Teeth,
    /// Belt: keeps direction, scales by radii only
    Belt,
}

/// Distance between the two gears along their shared axis.
fn lateral_separation(g1: &Gear, g2: &Gear) -> Option<f32> {
    let axis = g1.axis()?;
    Some((axis.component(g1.position()) - axis.component(g2.position())).abs())
}

/// Whether two gears are in tooth contact.
///
/// Spur gears mesh on parallel axles when they overlap laterally and sit
/// within reach of tangency. Bevel gears mesh on perpendicular axles when
/// their centers are within reach of the hypotenuse of their radii.
///
/// # Errors
///
/// `TooClose` when two spur gears on parallel axles are closer than the
/// clearance distance, whether or not they would mesh.
pub fn in_mesh(g1: &Gear, g2: &Gear, config: &SolverConfig) -> Result<bool> {
    if g1.axle() == g2.axle() || g1.kind() != g2.kind() {
        return Ok(false);
    }
    let (Some(axis1), Some(axis2)) = (g1.axis(), g2.axis()) else {
        return Ok(false);
    };
    let distance = g1.position().distance(g2.position());

    match g1.kind() {
        GearKind::Normal => {
            if axis1 != axis2 {
                return Ok(false);
            }
            if distance < config.min_clearance * (g1.root_radius() + g2.root_radius()) {
                return Err(Error::TooClose {
                    gear1: g1.name().to_string(),
                    gear2: g2.name().to_string(),
                });
            }
            let lateral = lateral_separation(g1, g2).unwrap_or(f32::INFINITY);
            Ok(lateral < (g1.width() + g2.width()) / 2.0
                && distance < config.mesh_reach * (g1.radius() + g2.radius()))
        }
        GearKind::Bevel => {
            if axis1 == axis2 {
                return Ok(false);
            }
            let reach = (g1.radius() * g1.radius() + g2.radius() * g2.radius()).sqrt();
            Ok(distance < config.mesh_reach * reach)
        }
    }
}

/// Check a belt can couple these two gears.
///
/// # Errors
///
/// - `InvalidBelt` unless both gears are spur gears on the same axis and
///   overlap laterally
/// - `BeltTooClose` when the gears themselves overlap
pub fn check_belt(belt: &str, g1: &Gear, g2: &Gear) -> Result<()> {
    let invalid = |message: &str| Error::InvalidBelt {
        belt: belt.to_string(),
        message: message.to_string(),
    };

    if g1.kind() != GearKind::Normal || g2.kind() != GearKind::Normal {
        return Err(invalid("belts only couple NORMAL gears"));
    }
    if g1.axis().is_none() || g1.axis() != g2.axis() {
        return Err(invalid("belted gears must share an axis"));
    }

    let lateral = lateral_separation(g1, g2).unwrap_or(f32::INFINITY);
    if lateral > (g1.width() + g2.width()) / 2.0 {
        return Err(invalid("belted gears are not in the same plane"));
    }

    if g1.position().distance(g2.position()) < g1.radius() + g2.radius() {
        return Err(Error::BeltTooClose {
            gear1: g1.name().to_string(),
            gear2: g2.name().to_string(),
        });
    }
    Ok(())
}

/// Angular velocity `driven` gets from `driver` across `linkage`.
pub fn transmitted_velocity(driver: &Gear, driven: &Gear, linkage: Linkage) -> f32 {
    let radius_ratio = driver.radius() / driven.radius();
    match linkage {
        Linkage::Teeth => {
            driver.angular_velocity() * driver.teeth() as f32 / driven.teeth() as f32 * radius_ratio
        }
        Linkage::Belt => driver.angular_velocity() * radius_ratio,
    }
}

#[cfg(test)]
#[path = "contact_tests.rs"]
mod tests;
