//! Parkwalk Engine Library
//!
//! A small scene-walkthrough engine: a free look-at camera, a waypoint-based
//! flythrough animator, and the thin wgpu plumbing needed to put both on
//! screen. The camera and animator are window-system agnostic and fully
//! testable without a GPU.
//!
//! # Modules
//!
//! - [`camera`] - Free camera, waypoint path animator, and tour files
//! - [`input`] - Platform-agnostic keyboard and mouse-look state
//! - [`render`] - wgpu render state, scene uniforms, skybox, shader loading
//! - [`world`] - Authored scene constants (sun, fog color, spawn pose)
//!
//! # Example
//!
//! ```ignore
//! use parkwalk_engine::camera::{Camera, MoveDirection, PathAnimator, Tour};
//! use glam::Vec3;
//!
//! // Interactive mode: move and look around.
//! let mut camera = Camera::new(
//!     Vec3::new(0.0, 0.0, 3.0),
//!     Vec3::new(0.0, 0.0, -10.0),
//!     Vec3::Y,
//! );
//! camera.translate(MoveDirection::Forward, 0.1);
//! camera.rotate(-3.3, -83.1); // pitch, yaw in degrees
//! let view = camera.get_view_matrix();
//!
//! // Presentation mode: replay an authored flythrough.
//! let mut animator = PathAnimator::new(Tour::park_flythrough().waypoints);
//! while let Some(pose) = animator.advance() {
//!     camera.set_pose(pose.position, pose.target);
//!     // upload camera.get_view_matrix() and pose.fog
//! }
//! ```

pub mod camera;
pub mod input;
pub mod render;
pub mod world;

// Re-export the core camera types at crate level for convenience
pub use camera::{Camera, CameraPose, MoveDirection, PathAnimator, Tour, TourError, Waypoint};
// Re-export commonly used input types
pub use input::{InputState, KeyCode, MouseLook, MovementKeys};
// Re-export render plumbing types
pub use render::{RenderConfig, RenderState, SceneUniforms};
// Re-export world types
pub use world::SceneSettings;
