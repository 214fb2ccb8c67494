//! Flythrough Path Animator Module
//!
//! Replays an authored sequence of camera waypoints as a smooth trajectory,
//! independent of user input, terminating automatically when the list is
//! exhausted. Interpolation is strictly linear per field with no easing, and
//! waypoints are consumed strictly forward - nothing is ever revisited and a
//! run cannot be restarted without constructing a new animator.
//!
//! Playback is driven by position/target interpolation only. Each waypoint
//! also records the yaw/pitch the author was looking with, but those are
//! orientation *hints* for tooling and inspection: interpolating position and
//! target directly guarantees the camera always faces its interpolated
//! target, where independently interpolated Euler angles would fight gimbal
//! effects. Do not "fix" playback to use them.

use std::collections::VecDeque;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Default interpolation step per fixed tick: 250 ticks per segment.
pub const DEFAULT_STEP: f32 = 0.004;

/// Default segment duration for time-based playback, in seconds.
///
/// Tuned to match the fixed-step pacing at 60 ticks per second
/// (250 ticks / 60 Hz). Changing this rescales the whole flythrough.
pub const DEFAULT_SEGMENT_SECONDS: f32 = 250.0 / 60.0;

/// One authored pose on a flythrough path.
///
/// `yaw` and `pitch` (degrees) record the author's look angles at capture
/// time but are not used for playback - see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Camera position in world space.
    pub position: Vec3,
    /// Look-at target in world space.
    pub target: Vec3,
    /// Scene fog density at this waypoint.
    #[serde(default)]
    pub fog: f32,
    /// Recorded yaw in degrees (orientation hint, unused for playback).
    #[serde(default)]
    pub yaw: f32,
    /// Recorded pitch in degrees (orientation hint, unused for playback).
    #[serde(default)]
    pub pitch: f32,
}

/// An interpolated camera pose produced by one animator tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Interpolated camera position.
    pub position: Vec3,
    /// Interpolated look-at target.
    pub target: Vec3,
    /// Interpolated fog density.
    pub fog: f32,
}

/// Waypoint-based camera path animator.
///
/// Construct with the full waypoint list, then call [`advance`] once per
/// tick (or [`advance_with_time`] once per frame) until it returns `None`.
/// Fewer than two waypoints produce no motion at all.
///
/// [`advance`]: PathAnimator::advance
/// [`advance_with_time`]: PathAnimator::advance_with_time
#[derive(Debug, Clone)]
pub struct PathAnimator {
    waypoints: VecDeque<Waypoint>,
    /// Interpolation position within the current segment, in [0, 1).
    progress: f32,
    /// Progress increment per fixed tick.
    step: f32,
    /// Seconds per segment for time-based playback.
    segment_seconds: f32,
}

impl PathAnimator {
    /// Create an animator over the given waypoints with the default pacing.
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self {
            waypoints: VecDeque::from(waypoints),
            progress: 0.0,
            step: DEFAULT_STEP,
            segment_seconds: DEFAULT_SEGMENT_SECONDS,
        }
    }

    /// Create an animator with a custom fixed-tick step.
    pub fn with_step(waypoints: Vec<Waypoint>, step: f32) -> Self {
        Self {
            step,
            ..Self::new(waypoints)
        }
    }

    /// Create an animator with a custom segment duration for time-based
    /// playback.
    pub fn with_segment_seconds(waypoints: Vec<Waypoint>, segment_seconds: f32) -> Self {
        Self {
            segment_seconds,
            ..Self::new(waypoints)
        }
    }

    /// Number of waypoints still queued (including the current left
    /// endpoint).
    #[inline]
    pub fn remaining_waypoints(&self) -> usize {
        self.waypoints.len()
    }

    /// Interpolation progress within the current segment, in [0, 1].
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the path has been fully consumed.
    ///
    /// True once fewer than two waypoints remain; the final waypoint is only
    /// ever an interpolation endpoint, never a standalone target.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.waypoints.len() < 2
    }

    /// Advance one fixed tick and return the interpolated pose, or `None`
    /// once the path is exhausted.
    ///
    /// Each segment yields exactly `1 / step` poses (250 with the default
    /// step); when the progress reaches 1.0 the leading waypoint is
    /// discarded and interpolation continues from the start of the next
    /// segment in the same call.
    pub fn advance(&mut self) -> Option<CameraPose> {
        self.step_pose(self.step)
    }

    /// Advance by elapsed wall-clock time and return the interpolated pose.
    ///
    /// Frame-rate-independent variant: progress accumulates as
    /// `dt_seconds / segment_seconds`, so each segment takes
    /// `segment_seconds` regardless of tick rate. Pacing constants authored
    /// for [`advance`] must be re-tuned, not reused, when switching.
    pub fn advance_with_time(&mut self, dt_seconds: f32) -> Option<CameraPose> {
        self.step_pose(dt_seconds / self.segment_seconds)
    }

    fn step_pose(&mut self, increment: f32) -> Option<CameraPose> {
        if self.waypoints.len() < 2 {
            return None;
        }

        // The previous tick finished its segment: consume the leading
        // waypoint and start the next pair at progress zero.
        if self.progress >= 1.0 {
            self.waypoints.pop_front();
            self.progress = 0.0;
            if self.waypoints.len() < 2 {
                return None;
            }
        }

        let a = &self.waypoints[0];
        let b = &self.waypoints[1];
        let t = self.progress;

        let pose = CameraPose {
            position: a.position.lerp(b.position, t),
            target: a.target.lerp(b.target, t),
            fog: a.fog + (b.fog - a.fog) * t,
        };

        self.progress += increment;
        Some(pose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn two_point_path() -> Vec<Waypoint> {
        vec![
            waypoint(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 0.0),
            waypoint(Vec3::new(2.0, 0.0, 0.0), Vec3::new(2.0, 0.0, -1.0), 0.05),
        ]
    }

    #[test]
    fn test_half_step_schedule() {
        let mut animator = PathAnimator::with_step(two_point_path(), 0.5);

        // Tick 1: pose at t = 0, identical to the first waypoint
        let pose = animator.advance().unwrap();
        assert_eq!(pose.position, Vec3::ZERO);
        assert_eq!(pose.fog, 0.0);

        // Tick 2: midpoint
        let pose = animator.advance().unwrap();
        assert_eq!(pose.position, Vec3::new(1.0, 0.0, 0.0));
        assert!((pose.fog - 0.025).abs() < TOLERANCE);

        // Tick 3: progress reached 1.0, the leading waypoint is consumed
        // and only one remains - no pose, finished
        assert!(animator.advance().is_none());
        assert_eq!(animator.remaining_waypoints(), 1);
        assert!(animator.is_finished());

        // And it stays finished
        assert!(animator.advance().is_none());
    }

    #[test]
    fn test_fog_midpoint_interpolation() {
        let mut animator = PathAnimator::with_step(two_point_path(), 0.5);
        let _ = animator.advance();
        let pose = animator.advance().unwrap();
        assert!((pose.fog - 0.025).abs() < TOLERANCE);
    }

    #[test]
    fn test_empty_and_single_waypoint_produce_no_motion() {
        let mut animator = PathAnimator::new(Vec::new());
        assert!(animator.is_finished());
        assert!(animator.advance().is_none());

        let mut animator =
            PathAnimator::new(vec![waypoint(Vec3::ONE, Vec3::ZERO, 0.0)]);
        assert!(animator.is_finished());
        assert!(animator.advance().is_none());
        assert_eq!(animator.remaining_waypoints(), 1);
    }

    #[test]
    fn test_poses_per_segment_matches_step() {
        // 4 poses per segment at step 0.25, across 3 segments
        let path = vec![
            waypoint(Vec3::ZERO, Vec3::NEG_Z, 0.0),
            waypoint(Vec3::X, Vec3::NEG_Z, 0.0),
            waypoint(Vec3::new(2.0, 0.0, 0.0), Vec3::NEG_Z, 0.0),
            waypoint(Vec3::new(3.0, 0.0, 0.0), Vec3::NEG_Z, 0.0),
        ];
        let mut animator = PathAnimator::with_step(path, 0.25);

        let mut poses = 0;
        while animator.advance().is_some() {
            poses += 1;
        }
        assert_eq!(poses, 12);
        assert!(animator.is_finished());
    }

    #[test]
    fn test_consumption_is_strictly_forward() {
        let path = vec![
            waypoint(Vec3::ZERO, Vec3::NEG_Z, 0.0),
            waypoint(Vec3::X, Vec3::NEG_Z, 0.0),
            waypoint(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_Z, 0.0),
        ];
        let mut animator = PathAnimator::with_step(path, 0.5);

        let mut last_x = f32::NEG_INFINITY;
        while let Some(pose) = animator.advance() {
            assert!(pose.position.x >= last_x);
            last_x = pose.position.x;
        }
    }

    #[test]
    fn test_last_waypoint_only_reached_as_right_endpoint() {
        let mut animator = PathAnimator::with_step(two_point_path(), 0.5);
        let mut final_pose = None;
        while let Some(pose) = animator.advance() {
            final_pose = Some(pose);
        }
        // The final yielded pose is the segment midpoint, not the last
        // waypoint itself
        assert_eq!(final_pose.unwrap().position, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_advance_with_time_segment_duration() {
        let mut animator = PathAnimator::with_segment_seconds(two_point_path(), 2.0);

        // Four half-second frames cover the single segment
        for _ in 0..4 {
            assert!(animator.advance_with_time(0.5).is_some());
        }
        assert!(animator.advance_with_time(0.5).is_none());
        assert!(animator.is_finished());
    }

    #[test]
    fn test_default_pacing_constants() {
        let animator = PathAnimator::new(two_point_path());
        assert_eq!(animator.remaining_waypoints(), 2);
        assert_eq!(animator.progress(), 0.0);
        assert!((DEFAULT_STEP - 0.004).abs() < f32::EPSILON);
        assert!((DEFAULT_SEGMENT_SECONDS * 60.0 - 250.0).abs() < 1e-3);
    }

    #[test]
    fn test_waypoint_json_round_trip() {
        let original = waypoint(Vec3::new(-5.803, 0.717, 15.29), Vec3::new(-5.683, 0.775, 14.302), 0.05);
        let json = serde_json::to_string(&original).unwrap();
        let back: Waypoint = serde_json::from_str(&json).unwrap();
        assert_eq!(original, back);
    }
}
