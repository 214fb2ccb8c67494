//! Camera Module
//!
//! Provides the free look-at camera and the waypoint flythrough animator.
//! This module is window-system agnostic - it only deals with camera state
//! and math, so everything in it can be unit tested without a GPU.

pub mod free_camera;
pub mod path;
pub mod tour;

pub use free_camera::{Camera, MoveDirection};
pub use path::{CameraPose, PathAnimator, Waypoint, DEFAULT_SEGMENT_SECONDS, DEFAULT_STEP};
pub use tour::{Tour, TourError};
