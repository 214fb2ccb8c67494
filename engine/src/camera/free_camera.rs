//! Free Camera Module
//!
//! A look-at camera for walking through a static scene. The camera keeps an
//! explicit orthonormal basis (front/right/up) that is recomputed from the
//! position/target pair on every mutation rather than integrated across
//! frames, so floating-point error never accumulates in the orientation.
//!
//! Two mutators and one accessor:
//! - [`Camera::translate`] moves position and target together along a basis
//!   vector (rigid translation, orientation unchanged)
//! - [`Camera::rotate`] sets the orientation from absolute yaw/pitch angles
//!   and re-targets one unit ahead of the position
//! - [`Camera::get_view_matrix`] builds the standard look-at transform
//!
//! Pitch clamping is deliberately NOT done here: the input layer owns the
//! ±89 degree limit and passes pre-clamped absolute angles. Out-of-range
//! pitch still produces a normalized front vector (the view flips, it does
//! not NaN).

use glam::{Mat4, Vec3};

/// Squared-length threshold below which a direction is treated as degenerate.
const DEGENERATE_EPSILON: f32 = 1e-12;

/// Discrete movement direction for camera translation.
///
/// Forward/Backward follow the front vector, Left/Right the right vector,
/// Up/Down the up vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Free look-at camera.
///
/// Holds a world-space position, the point being looked at, and the derived
/// orthonormal basis. Position and target always stay one rigid body under
/// translation; rotation re-derives the basis and keeps
/// `target == position + front`.
///
/// Callers must supply distinct position/target points. Coincident points
/// are guarded: the previous basis (or the default -Z basis at construction)
/// is kept instead of producing NaN.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    /// World-up hint used to re-derive the basis after pose injection.
    world_up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.0, 0.0, -10.0),
            Vec3::Y,
        )
    }
}

impl Camera {
    /// Create a camera at `position` looking at `target` with the given
    /// world-up hint.
    ///
    /// The basis is derived as `front = normalize(target - position)`,
    /// `right = normalize(world_up x front)`, `up = front x right`.
    pub fn new(position: Vec3, target: Vec3, world_up: Vec3) -> Self {
        let mut camera = Self {
            position,
            target,
            front: Vec3::NEG_Z,
            right: Vec3::NEG_X,
            up: Vec3::Y,
            world_up,
        };
        camera.rebuild_basis();
        camera
    }

    /// Get the camera position in world space.
    #[inline]
    pub fn get_position(&self) -> Vec3 {
        self.position
    }

    /// Get the point the camera is looking at.
    #[inline]
    pub fn get_target(&self) -> Vec3 {
        self.target
    }

    /// Get the normalized front (view) direction.
    #[inline]
    pub fn get_front(&self) -> Vec3 {
        self.front
    }

    /// Get the normalized right direction.
    #[inline]
    pub fn get_right(&self) -> Vec3 {
        self.right
    }

    /// Get the normalized up direction.
    #[inline]
    pub fn get_up(&self) -> Vec3 {
        self.up
    }

    /// Build the view matrix from the current position, target, and up.
    ///
    /// Pure function of the current state - calling it twice without an
    /// intervening mutation returns the identical matrix.
    pub fn get_view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Translate the camera along one of its basis vectors.
    ///
    /// Position and target move together, so translation never changes the
    /// orientation. `speed` is distance per call; the caller is responsible
    /// for any frame-rate scaling.
    pub fn translate(&mut self, direction: MoveDirection, speed: f32) {
        let offset = match direction {
            MoveDirection::Forward => self.front * speed,
            MoveDirection::Backward => -self.front * speed,
            MoveDirection::Left => -self.right * speed,
            MoveDirection::Right => self.right * speed,
            MoveDirection::Up => self.up * speed,
            MoveDirection::Down => -self.up * speed,
        };
        self.position += offset;
        self.target += offset;
    }

    /// Set the orientation from absolute yaw/pitch angles in degrees.
    ///
    /// The front vector is rebuilt with the standard spherical-to-Cartesian
    /// conversion, the right vector is re-derived against the previous up,
    /// and the target is placed one unit ahead of the position
    /// (`target = position + front`).
    ///
    /// Pitch is expected to be pre-clamped to ±89 degrees by the input
    /// layer; values beyond that still yield a unit-length front but flip
    /// the view over the pole.
    pub fn rotate(&mut self, pitch: f32, yaw: f32) {
        let yaw_rad = yaw.to_radians();
        let pitch_rad = pitch.to_radians();

        let front = Vec3::new(
            yaw_rad.cos() * pitch_rad.cos(),
            pitch_rad.sin(),
            yaw_rad.sin() * pitch_rad.cos(),
        );
        self.front = front.normalize();

        // Re-orthogonalize against the previous up rather than the world up,
        // so the triad stays continuous across successive rotations.
        let right = self.front.cross(self.up);
        if right.length_squared() > DEGENERATE_EPSILON {
            self.right = right.normalize();
            self.up = self.right.cross(self.front).normalize();
        }

        self.target = self.position + self.front;
    }

    /// Inject an externally computed pose (flythrough playback).
    ///
    /// Writes position and target and re-derives the full basis from the
    /// world-up hint, so the orthonormality invariant holds after injection
    /// exactly as it does after construction. A coincident position/target
    /// pair keeps the previous basis.
    pub fn set_pose(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
        self.rebuild_basis();
    }

    /// Recompute front/right/up from position, target, and the world-up
    /// hint. Leaves the previous basis untouched when the inputs are
    /// degenerate (coincident points, or front parallel to world up).
    fn rebuild_basis(&mut self) {
        let to_target = self.target - self.position;
        if to_target.length_squared() <= DEGENERATE_EPSILON {
            return;
        }
        let front = to_target.normalize();

        let right = self.world_up.cross(front);
        if right.length_squared() <= DEGENERATE_EPSILON {
            return;
        }

        self.front = front;
        self.right = right.normalize();
        self.up = self.front.cross(self.right).normalize();
    }
}
