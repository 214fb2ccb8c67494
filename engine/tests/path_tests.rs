//! Path Tests - Flythrough Playback and Tour Files
//!
//! Tests for the waypoint path animator (segment scheduling, consumption
//! discipline, interpolation) and the tour file format.

use glam::Vec3;
use parkwalk_engine::camera::{Camera, PathAnimator, Tour, TourError, Waypoint};

const TOLERANCE: f32 = 1e-6;

fn waypoint(position: Vec3, target: Vec3, fog: f32) -> Waypoint {
    Waypoint {
        position,
        target,
        fog,
        yaw: 0.0,
        pitch: 0.0,
    }
}

// ============================================================================
// PathAnimator Scheduling Tests
// ============================================================================

#[test]
fn test_two_waypoints_half_step() {
    let a = waypoint(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0), 0.0);
    let b = waypoint(Vec3::new(4.0, 2.0, 0.0), Vec3::new(4.0, 2.0, -1.0), 0.05);
    let mut animator = PathAnimator::with_step(vec![a, b], 0.5);

    // Tick 1: the pose at t = 0 is the first waypoint
    let pose = animator.advance().unwrap();
    assert_eq!(pose.position, a.position);
    assert_eq!(pose.target, a.target);
    assert_eq!(pose.fog, 0.0);

    // Tick 2: midpoint of the pair
    let pose = animator.advance().unwrap();
    assert_eq!(pose.position, Vec3::new(2.0, 1.0, 0.0));
    assert!((pose.fog - 0.025).abs() < TOLERANCE);

    // Tick 3: the segment is spent - the leading waypoint is popped and
    // the animator is finished, since the last waypoint is never a
    // standalone playback target
    assert!(animator.advance().is_none());
    assert_eq!(animator.remaining_waypoints(), 1);
    assert!(animator.is_finished());
}

#[test]
fn test_underfilled_lists_are_normal_termination() {
    let mut empty = PathAnimator::new(Vec::new());
    assert!(empty.advance().is_none());
    assert!(empty.is_finished());

    let only = waypoint(Vec3::ONE, Vec3::ZERO, 0.3);
    let mut single = PathAnimator::new(vec![only]);
    assert!(single.advance().is_none());
    // The lone waypoint is retained, never consumed
    assert_eq!(single.remaining_waypoints(), 1);
}

#[test]
fn test_single_waypoint_never_mutates_camera() {
    let mut camera = Camera::default();
    let view_before = camera.get_view_matrix();

    let mut animator = PathAnimator::new(vec![waypoint(
        Vec3::new(50.0, 50.0, 50.0),
        Vec3::ZERO,
        1.0,
    )]);
    if let Some(pose) = animator.advance() {
        camera.set_pose(pose.position, pose.target);
    }

    assert_eq!(camera.get_view_matrix(), view_before);
}

#[test]
fn test_waypoints_consumed_once_in_order() {
    let path: Vec<Waypoint> = (0..5)
        .map(|i| {
            waypoint(
                Vec3::new(i as f32, 0.0, 0.0),
                Vec3::new(i as f32, 0.0, -1.0),
                0.0,
            )
        })
        .collect();
    let mut animator = PathAnimator::with_step(path, 0.25);

    let mut last_x = f32::NEG_INFINITY;
    let mut poses = 0;
    while let Some(pose) = animator.advance() {
        assert!(pose.position.x >= last_x);
        last_x = pose.position.x;
        poses += 1;
    }

    // 4 segments x 4 poses each, strictly monotonic, fully consumed
    assert_eq!(poses, 16);
    assert!(animator.is_finished());
    assert_eq!(animator.remaining_waypoints(), 1);

    // A consumed animator stays finished; replaying needs a new one
    assert!(animator.advance().is_none());
}

#[test]
fn test_default_step_gives_250_ticks_per_segment() {
    let a = waypoint(Vec3::ZERO, Vec3::NEG_Z, 0.0);
    let b = waypoint(Vec3::X, Vec3::NEG_Z, 0.0);
    let mut animator = PathAnimator::new(vec![a, b]);

    let mut poses = 0;
    while animator.advance().is_some() {
        poses += 1;
    }
    assert_eq!(poses, 250);
}

#[test]
fn test_advance_with_time_is_frame_rate_independent() {
    let a = waypoint(Vec3::ZERO, Vec3::NEG_Z, 0.0);
    let b = waypoint(Vec3::new(10.0, 0.0, 0.0), Vec3::NEG_Z, 0.0);

    // Coarse frames: 2 second segment at 8 fps
    let mut coarse = PathAnimator::with_segment_seconds(vec![a, b], 2.0);
    let mut coarse_poses = 0;
    while coarse.advance_with_time(0.125).is_some() {
        coarse_poses += 1;
    }

    // Fine frames: same segment at 32 fps
    let mut fine = PathAnimator::with_segment_seconds(vec![a, b], 2.0);
    let mut fine_poses = 0;
    while fine.advance_with_time(0.03125).is_some() {
        fine_poses += 1;
    }

    // Both cover the same 2 seconds of playback
    assert_eq!(coarse_poses, 16);
    assert_eq!(fine_poses, 64);
}

// ============================================================================
// Interpolation Tests
// ============================================================================

#[test]
fn test_fog_interpolates_linearly() {
    let a = waypoint(Vec3::ZERO, Vec3::NEG_Z, 0.0);
    let b = waypoint(Vec3::X, Vec3::NEG_Z, 0.05);
    let mut animator = PathAnimator::with_step(vec![a, b], 0.25);

    let expected = [0.0, 0.0125, 0.025, 0.0375];
    for value in expected {
        let pose = animator.advance().unwrap();
        assert!((pose.fog - value).abs() < TOLERANCE);
    }
}

#[test]
fn test_playback_follows_interpolated_target_not_angles() {
    // Waypoints carry deliberately bogus yaw/pitch hints; playback must
    // face the interpolated target regardless.
    let a = Waypoint {
        position: Vec3::ZERO,
        target: Vec3::new(0.0, 0.0, -5.0),
        fog: 0.0,
        yaw: 999.0,
        pitch: -999.0,
    };
    let b = Waypoint {
        position: Vec3::new(2.0, 0.0, 0.0),
        target: Vec3::new(2.0, 0.0, -5.0),
        fog: 0.0,
        yaw: 123.0,
        pitch: 45.0,
    };
    let mut animator = PathAnimator::with_step(vec![a, b], 0.5);
    let _ = animator.advance();
    let pose = animator.advance().unwrap();

    let mut camera = Camera::default();
    camera.set_pose(pose.position, pose.target);
    let expected_front = (pose.target - pose.position).normalize();
    assert!((camera.get_front() - expected_front).length() < TOLERANCE);
}

#[test]
fn test_poses_drive_orthonormal_camera_along_authored_tour() {
    // Replay the built-in tour at coarse resolution through a real camera
    let tour = Tour::park_flythrough();
    let mut animator = PathAnimator::with_step(tour.waypoints, 0.1);
    let mut camera = Camera::default();

    let mut poses = 0;
    while let Some(pose) = animator.advance() {
        camera.set_pose(pose.position, pose.target);
        let front = camera.get_front();
        assert!(front.is_finite());
        assert!((front.length() - 1.0).abs() < 1e-4);
        poses += 1;
    }

    // 27 segments x 10 poses each
    assert_eq!(poses, 270);
}

// ============================================================================
// Tour File Tests
// ============================================================================

#[test]
fn test_builtin_tour_shape() {
    let tour = Tour::park_flythrough();
    assert_eq!(tour.name, "park-flythrough");
    assert_eq!(tour.waypoints.len(), 28);

    // Every authored waypoint has distinct position/target, as the camera
    // constructor requires
    for wp in &tour.waypoints {
        assert!(wp.position.distance(wp.target) > 0.1);
    }
}

#[test]
fn test_builtin_tour_fog_ramp() {
    let tour = Tour::park_flythrough();
    let fogs: Vec<f32> = tour.waypoints.iter().map(|w| w.fog).collect();
    assert_eq!(fogs[7], 0.0);
    assert_eq!(fogs[8], 0.05);
    assert_eq!(fogs[9], 0.05);
    assert_eq!(fogs[10], 0.0);
}

#[test]
fn test_tour_round_trip() {
    let tour = Tour::park_flythrough();
    let json = tour.to_json().unwrap();
    let back = Tour::from_json(&json).unwrap();
    assert_eq!(back.name, tour.name);
    assert_eq!(back.waypoints, tour.waypoints);
}

#[test]
fn test_tour_error_variants() {
    assert!(matches!(Tour::from_json("[1, 2"), Err(TourError::Json(_))));
    assert!(matches!(
        Tour::from_json(r#"{"name": "x", "waypoints": []}"#),
        Err(TourError::TooShort { count: 0 })
    ));
    assert!(matches!(
        Tour::load("no/such/tour.json"),
        Err(TourError::Io(_))
    ));
}
