//! Unit tests for scene.rs
//!
//! Tests Scene construction from a SceneDesc, validation, lookups and the
//! position/motion helpers the solver relies on.

use crate::error::Error;
use crate::scene::{AxleDesc, Axis, BeltDesc, Direction, GearDesc, GearKind, Scene, SceneDesc};
use glam::Vec3;

// ============================================================================
// HELPERS
// ============================================================================

fn two_axle_desc() -> SceneDesc {
    SceneDesc {
        background: Vec3::new(0.1, 0.2, 0.3),
        axles: vec![
            AxleDesc::motor("AXLE1", Axis::Z, Vec3::ZERO, Direction::Forward, 10.0),
            AxleDesc::new("AXLE2", Axis::Z, Vec3::new(3.0, 0.0, 0.0)),
        ],
        gears: vec![
            GearDesc::normal("GEAR1", "AXLE1", 2.0, 20),
            GearDesc::normal("GEAR2", "AXLE2", 1.0, 10),
        ],
        belts: vec![],
    }
}

// ============================================================================
// CONSTRUCTION TESTS
// ============================================================================

#[test]
fn test_from_desc_counts_and_lookup() {
    let scene = Scene::from_desc(two_axle_desc()).unwrap();

    assert_eq!(scene.axle_count(), 2);
    assert_eq!(scene.gear_count(), 2);
    assert_eq!(scene.belt_count(), 0);
    assert_eq!(scene.background(), Vec3::new(0.1, 0.2, 0.3));
    assert_eq!(scene.topology().axle_count(), 2);

    let gear = scene.find_gear("GEAR2").unwrap();
    assert_eq!(gear.teeth(), 10);
    assert_eq!(gear.kind(), GearKind::Normal);
    let axle = scene.axle(gear.axle()).unwrap();
    assert_eq!(axle.name(), "AXLE2");
}

#[test]
fn test_iteration_is_declaration_order() {
    let scene = Scene::from_desc(two_axle_desc()).unwrap();
    let names: Vec<&str> = scene.gears().map(|(_, gear)| gear.name()).collect();
    assert_eq!(names, vec!["GEAR1", "GEAR2"]);
    let names: Vec<&str> = scene.axles().map(|(_, axle)| axle.name()).collect();
    assert_eq!(names, vec!["AXLE1", "AXLE2"]);
}

#[test]
fn test_empty_scene() {
    let scene = Scene::from_desc(SceneDesc::default()).unwrap();
    assert_eq!(scene.axle_count(), 0);
    assert_eq!(scene.motored_axle_count(), 0);
}

#[test]
fn test_motor_axle_keeps_declared_motion() {
    let scene = Scene::from_desc(two_axle_desc()).unwrap();

    let motor = scene.find_axle("AXLE1").unwrap();
    assert!(motor.is_motor());
    assert!(motor.is_motored());
    assert_eq!(motor.direction(), Direction::Forward);
    assert!((motor.angular_velocity() - 10.0).abs() < 1e-6);

    let idle = scene.find_axle("AXLE2").unwrap();
    assert!(!idle.is_motor());
    assert!(!idle.is_motored());
    assert_eq!(idle.direction(), Direction::Undetermined);
    assert_eq!(scene.motored_axle_count(), 1);
}

#[test]
fn test_non_motor_axle_ignores_declared_motion() {
    let mut desc = two_axle_desc();
    desc.axles[1].direction = Direction::Reverse;
    desc.axles[1].angular_velocity = 99.0;

    let scene = Scene::from_desc(desc).unwrap();
    let idle = scene.find_axle("AXLE2").unwrap();
    assert_eq!(idle.direction(), Direction::Undetermined);
    assert!(idle.angular_velocity().abs() < 1e-6);
}

#[test]
fn test_belt_resolves_both_gears() {
    let mut desc = two_axle_desc();
    desc.belts.push(BeltDesc::new("BELT1", "GEAR1", "GEAR2"));

    let scene = Scene::from_desc(desc).unwrap();
    let belt = scene.find_belt("BELT1").unwrap();
    assert_eq!(scene.gear(belt.gear1()).unwrap().name(), "GEAR1");
    assert_eq!(scene.gear(belt.gear2()).unwrap().name(), "GEAR2");
}

// ============================================================================
// VALIDATION TESTS
// ============================================================================

#[test]
fn test_duplicate_axle_name() {
    let mut desc = two_axle_desc();
    desc.axles.push(AxleDesc::new("AXLE1", Axis::X, Vec3::ZERO));

    let err = Scene::from_desc(desc).unwrap_err();
    assert_eq!(err, Error::DuplicateName { kind: "axle", name: "AXLE1".to_string() });
}

#[test]
fn test_duplicate_gear_name() {
    let mut desc = two_axle_desc();
    desc.gears.push(GearDesc::normal("GEAR1", "AXLE2", 1.0, 8));

    let err = Scene::from_desc(desc).unwrap_err();
    assert_eq!(err, Error::DuplicateName { kind: "gear", name: "GEAR1".to_string() });
}

#[test]
fn test_unresolved_axle() {
    let mut desc = two_axle_desc();
    desc.gears.push(GearDesc::normal("GEAR3", "AXLE9", 1.0, 8));

    let err = Scene::from_desc(desc).unwrap_err();
    assert_eq!(err, Error::UnresolvedAxle { gear: "GEAR3".to_string(), axle: "AXLE9".to_string() });
}

#[test]
fn test_unresolved_belt_gear() {
    let mut desc = two_axle_desc();
    desc.belts.push(BeltDesc::new("BELT1", "GEAR1", "GEAR7"));

    let err = Scene::from_desc(desc).unwrap_err();
    assert_eq!(err, Error::UnresolvedGear { belt: "BELT1".to_string(), gear: "GEAR7".to_string() });
}

#[test]
fn test_belt_on_single_gear_rejected() {
    let mut desc = two_axle_desc();
    desc.belts.push(BeltDesc::new("BELT1", "GEAR1", "GEAR1"));

    let err = Scene::from_desc(desc).unwrap_err();
    assert!(matches!(err, Error::InvalidBelt { ref belt, .. } if belt == "BELT1"));
}

#[test]
fn test_motor_without_direction_rejected() {
    let mut desc = two_axle_desc();
    desc.axles[0].direction = Direction::Undetermined;

    let err = Scene::from_desc(desc).unwrap_err();
    assert!(matches!(err, Error::InvalidAxle { ref axle, .. } if axle == "AXLE1"));
}

#[test]
fn test_non_positive_teeth_rejected() {
    for teeth in [0, -4] {
        let mut desc = two_axle_desc();
        desc.gears[1].teeth = teeth;
        let err = Scene::from_desc(desc).unwrap_err();
        assert!(matches!(err, Error::InvalidGear { ref gear, .. } if gear == "GEAR2"));
    }
}

#[test]
fn test_non_positive_radius_rejected() {
    let mut desc = two_axle_desc();
    desc.gears[0].radius = 0.0;
    let err = Scene::from_desc(desc).unwrap_err();
    assert!(matches!(err, Error::InvalidGear { ref gear, .. } if gear == "GEAR1"));

    let mut desc = two_axle_desc();
    desc.gears[0].radius = f32::NAN;
    assert!(Scene::from_desc(desc).is_err());
}

// ============================================================================
// POSITION / MOTION HELPERS
// ============================================================================

#[test]
fn test_resolve_gear_positions_applies_offset_along_axis() {
    let mut desc = two_axle_desc();
    desc.axles[1].axis = Axis::Y;
    desc.gears[1].offset = 2.0;

    let mut scene = Scene::from_desc(desc).unwrap();
    assert_eq!(scene.find_gear("GEAR2").unwrap().axis(), None);

    scene.resolve_gear_positions();

    let gear = scene.find_gear("GEAR2").unwrap();
    assert_eq!(gear.position(), Vec3::new(3.0, 2.0, 0.0));
    assert_eq!(gear.axis(), Some(Axis::Y));

    let gear = scene.find_gear("GEAR1").unwrap();
    assert_eq!(gear.position(), Vec3::ZERO);
    assert!(gear.is_motored());
    assert_eq!(gear.direction(), Direction::Forward);
    assert!((gear.angular_velocity() - 10.0).abs() < 1e-6);
}

#[test]
fn test_reset_motion_keeps_motor_sources() {
    let mut scene = Scene::from_desc(two_axle_desc()).unwrap();
    scene.resolve_gear_positions();

    let key = scene.topology().find_axle("AXLE2").unwrap();
    if let Some(axle) = scene.axle_mut(key) {
        axle.motored = true;
        axle.direction = Direction::Reverse;
        axle.angular_velocity = 40.0;
    }
    scene.sync_gears_from_axles();
    assert!(scene.find_gear("GEAR2").unwrap().is_motored());

    scene.reset_motion();

    let idle = scene.find_axle("AXLE2").unwrap();
    assert!(!idle.is_motored());
    assert_eq!(idle.direction(), Direction::Undetermined);
    let gear = scene.find_gear("GEAR2").unwrap();
    assert!(!gear.is_motored());
    assert_eq!(gear.axis(), None);

    assert!(scene.find_axle("AXLE1").unwrap().is_motored());
}
