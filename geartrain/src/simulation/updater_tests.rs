//! Unit tests for updater.rs
//!
//! Tests NoOpUpdater and KinematicUpdater angle integration.

use crate::scene::{AxleDesc, Axis, Direction, GearDesc, Scene, SceneDesc};
use crate::simulation::{KinematicUpdater, NoOpUpdater, Updater};
use crate::solver::KinematicSolver;
use glam::Vec3;

// ============================================================================
// HELPERS
// ============================================================================

fn solved_pair() -> Scene {
    let mut scene = Scene::from_desc(SceneDesc {
        axles: vec![
            AxleDesc::motor("AXLE1", Axis::Z, Vec3::ZERO, Direction::Forward, 10.0),
            AxleDesc::new("AXLE2", Axis::Z, Vec3::new(2.7, 0.0, 0.0)),
        ],
        gears: vec![
            GearDesc { tooth_depth: 0.5, ..GearDesc::normal("LARGE", "AXLE1", 2.0, 20) },
            GearDesc { tooth_depth: 0.25, ..GearDesc::normal("SMALL", "AXLE2", 1.0, 10) },
        ],
        ..Default::default()
    })
    .unwrap();
    KinematicSolver::default().solve(&mut scene).unwrap();
    scene
}

// ============================================================================
// NO-OP UPDATER
// ============================================================================

#[test]
fn test_noop_updater_leaves_angles() {
    let mut scene = solved_pair();
    let mut updater = NoOpUpdater::new();
    updater.update(&mut scene, 1.0);

    for (_, gear) in scene.gears() {
        assert!(gear.angle().abs() < 1e-6);
    }
}

// ============================================================================
// KINEMATIC UPDATER
// ============================================================================

#[test]
fn test_kinematic_updater_integrates_velocity() {
    let mut scene = solved_pair();
    let mut updater = KinematicUpdater::new();
    updater.update(&mut scene, 0.5);

    let large = scene.find_gear("LARGE").unwrap();
    assert!((large.angle() - 5.0).abs() < 1e-4);
    assert!((large.rotation() - 5.0).abs() < 1e-4);

    // Reverse gears accumulate a positive angle but rotate negatively
    let small = scene.find_gear("SMALL").unwrap();
    assert!((small.angle() - 20.0).abs() < 1e-3);
    assert!((small.rotation() + 20.0).abs() < 1e-3);
}

#[test]
fn test_kinematic_updater_accumulates_over_frames() {
    let mut scene = solved_pair();
    let mut updater = KinematicUpdater::new();
    for _ in 0..4 {
        updater.update(&mut scene, 0.25);
    }

    assert_eq!(updater.frames(), 4);
    assert!((updater.elapsed() - 1.0).abs() < 1e-9);
    let large = scene.find_gear("LARGE").unwrap();
    assert!((large.angle() - 10.0).abs() < 1e-4);
}

#[test]
fn test_kinematic_updater_zero_elapsed() {
    let mut scene = solved_pair();
    let mut updater = KinematicUpdater::new();
    updater.update(&mut scene, 0.0);

    assert_eq!(updater.frames(), 1);
    let small = scene.find_gear("SMALL").unwrap();
    assert!(small.angle().abs() < 1e-6);
}

#[test]
fn test_updater_as_trait_object() {
    let mut scene = solved_pair();
    let mut updaters: Vec<Box<dyn Updater>> = vec![
        Box::new(NoOpUpdater::new()),
        Box::new(KinematicUpdater::new()),
    ];
    for updater in updaters.iter_mut() {
        updater.update(&mut scene, 1.0);
    }
    let large = scene.find_gear("LARGE").unwrap();
    assert!((large.angle() - 10.0).abs() < 1e-4);
}
