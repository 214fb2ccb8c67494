//! Mouse Look Module
//!
//! Drag-to-look state for the free camera. Pointer deltas are converted to
//! absolute yaw/pitch angles in degrees at a fixed per-pixel sensitivity,
//! and pitch is clamped to ±89 degrees here - the camera itself does not
//! clamp, the input layer owns that invariant.

/// Pitch clamp bound in degrees. Keeps the camera off the poles where the
/// look-at basis would degenerate.
pub const PITCH_LIMIT_DEG: f32 = 89.0;

/// Default look sensitivity in degrees per pixel of pointer travel.
pub const DEFAULT_SENSITIVITY: f32 = 0.3;

/// Initial yaw in degrees: -90 faces the -Z axis.
const INITIAL_YAW_DEG: f32 = -90.0;

/// Drag-to-look mouse state.
///
/// Accumulates absolute yaw/pitch while the look button is held. The first
/// pointer event after the drag starts only records the anchor position, so
/// grabbing the mouse never jerks the view.
///
/// # Example
///
/// ```rust,ignore
/// let mut look = MouseLook::new();
/// look.set_drag(true);
/// if let Some((pitch, yaw)) = look.handle_move(x, y) {
///     camera.rotate(pitch, yaw);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MouseLook {
    /// Degrees of rotation per pixel of pointer travel.
    sensitivity: f32,
    /// Absolute yaw in degrees, unrestricted.
    yaw: f32,
    /// Absolute pitch in degrees, clamped to ±[`PITCH_LIMIT_DEG`].
    pitch: f32,
    /// Whether the look button is currently held.
    dragging: bool,
    /// Last pointer position while dragging.
    last_pos: Option<(f64, f64)>,
}

impl Default for MouseLook {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            yaw: INITIAL_YAW_DEG,
            pitch: 0.0,
            dragging: false,
            last_pos: None,
        }
    }
}

impl MouseLook {
    /// Create a new mouse-look state with default sensitivity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mouse-look state with custom sensitivity (degrees/pixel).
    pub fn with_sensitivity(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            ..Self::default()
        }
    }

    /// Current absolute angles as `(pitch, yaw)` in degrees.
    #[inline]
    pub fn angles(&self) -> (f32, f32) {
        (self.pitch, self.yaw)
    }

    /// Whether the look button is currently held.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Press or release the look button.
    ///
    /// Releasing clears the drag anchor so the next drag starts fresh.
    pub fn set_drag(&mut self, pressed: bool) {
        self.dragging = pressed;
        if !pressed {
            self.last_pos = None;
        }
    }

    /// Feed a pointer position in window coordinates.
    ///
    /// Returns the updated `(pitch, yaw)` in degrees when the pointer moved
    /// during a drag, `None` otherwise. Screen y grows downward, so moving
    /// the pointer up raises the pitch.
    pub fn handle_move(&mut self, x: f64, y: f64) -> Option<(f32, f32)> {
        if !self.dragging {
            return None;
        }
        let Some((last_x, last_y)) = self.last_pos else {
            self.last_pos = Some((x, y));
            return None;
        };

        let dx = (x - last_x) as f32;
        let dy = (last_y - y) as f32; // reversed: screen y grows downward
        self.last_pos = Some((x, y));

        self.yaw += dx * self.sensitivity;
        self.pitch =
            (self.pitch + dy * self.sensitivity).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);

        Some((self.pitch, self.yaw))
    }

    /// Reset to the initial orientation (yaw -90, pitch 0).
    pub fn reset(&mut self) {
        let sensitivity = self.sensitivity;
        *self = Self {
            sensitivity,
            ..Self::default()
        };
    }
}
