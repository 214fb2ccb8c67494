//! Input Module
//!
//! Provides platform-agnostic input handling for keyboard and mouse.
//! This module is decoupled from any specific windowing system (like winit)
//! to allow for flexible integration: the application maps window events to
//! generic key codes and pointer positions, and reads movement/look state
//! back out each tick.

pub mod keyboard;
pub mod mouse;

// Re-export commonly used types at module level
pub use keyboard::{KeyCode, MovementKeys};
pub use mouse::{MouseLook, DEFAULT_SENSITIVITY, PITCH_LIMIT_DEG};

/// Combined input state for both keyboard and mouse.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Held movement keys.
    pub movement: MovementKeys,
    /// Drag-to-look mouse state.
    pub look: MouseLook,
}

impl InputState {
    /// Create a new input state with all inputs in their default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any movement input is active (held keys or an active look
    /// drag).
    pub fn is_moving(&self) -> bool {
        self.movement.any_pressed() || self.look.is_dragging()
    }
}
