//! Render Module
//!
//! This module contains the thin wgpu plumbing for the viewer: one render
//! state struct owning every GPU resource, the scene uniform block, the
//! skybox cubemap, and shader loading. The camera and animator never touch
//! anything in here - they only produce the pose that
//! [`uniforms::SceneUniforms`] carries to the shader.

pub mod pipeline;
pub mod shader_loader;
pub mod sky_cubemap;
pub mod uniforms;

// Re-export commonly used types for convenience
pub use pipeline::{RenderConfig, RenderState};
pub use shader_loader::{create_shader_module, load_shader_file, ShaderSource};
pub use sky_cubemap::{SkyCubemap, SkyboxError};
pub use uniforms::{SceneUniforms, FOG_CLEAR, FOG_DENSE};
