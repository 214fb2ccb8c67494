//! Shader Loading Utilities
//!
//! Provides utilities for loading and compiling WGSL shaders for the render
//! pipeline. Supports both embedded (compile-time) and runtime shader
//! loading; the viewer ships with its shader embedded but can hot-load an
//! edited copy from disk during scene authoring.

use std::path::Path;

/// Shader source that can be either embedded at compile time or loaded at
/// runtime.
pub enum ShaderSource {
    /// Embedded shader source (faster, no file I/O at runtime)
    Embedded(&'static str),
    /// Runtime-loaded shader source
    Runtime(String),
}

impl ShaderSource {
    /// Get the shader source as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            ShaderSource::Embedded(s) => s,
            ShaderSource::Runtime(s) => s.as_str(),
        }
    }
}

/// Load a shader from the filesystem at runtime.
///
/// # Arguments
/// * `path` - Path to the WGSL shader file
///
/// # Returns
/// The shader source as a string, or an error if the file couldn't be read.
pub fn load_shader_file(path: impl AsRef<Path>) -> Result<ShaderSource, std::io::Error> {
    let source = std::fs::read_to_string(path)?;
    Ok(ShaderSource::Runtime(source))
}

/// Create a wgpu shader module from the given source.
///
/// # Arguments
/// * `device` - The wgpu device to create the shader module on
/// * `label` - Label for debugging
/// * `source` - The WGSL shader source
pub fn create_shader_module(
    device: &wgpu::Device,
    label: &str,
    source: &ShaderSource,
) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.as_str().into()),
    })
}

/// Shader paths used by the viewer for runtime reloading.
pub mod paths {
    /// The park scene raymarcher
    pub const PARK_SCENE: &str = "src/shaders/park_scene.wgsl";
}

/// Embedded shaders that are compiled into the binary.
/// These are loaded at compile time for faster startup.
pub mod embedded {
    /// The park scene raymarcher, embedded at compile time.
    pub const PARK_SCENE: &str = include_str!("../../../src/shaders/park_scene.wgsl");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_source_embedded() {
        let source = ShaderSource::Embedded("void main() {}");
        assert_eq!(source.as_str(), "void main() {}");
    }

    #[test]
    fn test_shader_source_runtime() {
        let source = ShaderSource::Runtime("void main() {}".to_string());
        assert_eq!(source.as_str(), "void main() {}");
    }

    #[test]
    fn test_embedded_park_scene_has_entry_points() {
        assert!(embedded::PARK_SCENE.contains("vs_main"));
        assert!(embedded::PARK_SCENE.contains("fs_main"));
    }
}
