//! World Module
//!
//! Contains the authored scene configuration: lighting, fog color, and the
//! camera spawn pose. These are the constants the render loop feeds into the
//! scene uniforms each frame.

pub mod scene;

pub use scene::SceneSettings;
