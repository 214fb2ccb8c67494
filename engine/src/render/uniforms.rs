//! Uniform Structs for GPU Shaders
//!
//! Contains the GPU-compatible uniform buffer structure that must match the
//! WGSL layout exactly. This block is the render-facing pose: whichever pose
//! source ran this tick (interactive input or the flythrough animator)
//! writes position/target/fog here, and the shader reads nothing else.

use glam::{Mat4, Vec3};

/// Fog density preset for the dense fog key (X).
pub const FOG_DENSE: f32 = 0.05;

/// Fog density preset for the clear key (C).
pub const FOG_CLEAR: f32 = 0.0;

/// Scene uniforms for the park shader.
/// Must match the WGSL struct layout exactly!
///
/// WGSL layout (144 bytes total - vec3 fields padded by the trailing scalar):
///   offset   0: view_proj (mat4x4<f32>)   = 64 bytes
///   offset  64: camera_pos (vec3<f32>)    = 12 bytes
///   offset  76: time (f32)                = 4 bytes
///   offset  80: camera_target (vec3<f32>) = 12 bytes
///   offset  92: fog_density (f32)         = 4 bytes
///   offset  96: sun_dir (vec3<f32>)       = 12 bytes
///   offset 108: ambient (f32)             = 4 bytes
///   offset 112: fog_color (vec3<f32>)     = 12 bytes
///   offset 124: use_skybox (u32)          = 4 bytes
///   offset 128: resolution (vec2<f32>)    = 8 bytes
///   offset 136: _pad (vec2<f32>)          = 8 bytes
///   Total: 144 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    /// Combined projection * view matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub camera_pos: [f32; 3],
    /// Elapsed time in seconds (drives the pinwheel and water ripple).
    pub time: f32,
    /// Camera look-at target in world space.
    pub camera_target: [f32; 3],
    /// Exponential-squared fog density; 0 disables fog.
    pub fog_density: f32,
    /// Normalized direction toward the sun.
    pub sun_dir: [f32; 3],
    /// Ambient light level.
    pub ambient: f32,
    /// Fog color, also the horizon haze color.
    pub fog_color: [f32; 3],
    /// 1 = sample the cubemap skybox, 0 = procedural gradient sky.
    pub use_skybox: u32,
    /// Viewport resolution in pixels.
    pub resolution: [f32; 2],
    pub _pad: [f32; 2],
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: [0.0, 0.0, 3.0],
            time: 0.0,
            camera_target: [0.0, 0.0, -10.0],
            fog_density: FOG_CLEAR,
            sun_dir: [0.1576, 0.9458, 0.2837], // normalize(5, 30, 9)
            ambient: 0.35,
            fog_color: [0.7, 0.7, 0.7],
            use_skybox: 0,
            resolution: [1024.0, 768.0],
            _pad: [0.0; 2],
        }
    }
}

impl SceneUniforms {
    /// Create new uniforms with the given camera position and target.
    pub fn new(camera_pos: Vec3, camera_target: Vec3) -> Self {
        Self {
            camera_pos: camera_pos.to_array(),
            camera_target: camera_target.to_array(),
            ..Default::default()
        }
    }

    /// Write the combined projection * view matrix.
    pub fn set_view_proj(&mut self, view_proj: Mat4) {
        self.view_proj = view_proj.to_cols_array_2d();
    }

    /// Write the camera pose fields.
    pub fn set_camera(&mut self, position: Vec3, target: Vec3) {
        self.camera_pos = position.to_array();
        self.camera_target = target.to_array();
    }

    /// Update resolution based on window size.
    pub fn set_resolution(&mut self, width: u32, height: u32) {
        self.resolution = [width as f32, height as f32];
    }

    /// Update time for animations.
    pub fn set_time(&mut self, time: f32) {
        self.time = time;
    }
}

// Compile-time assertion to verify the struct size matches the WGSL layout
const _: () = {
    assert!(
        std::mem::size_of::<SceneUniforms>() == 144,
        "SceneUniforms must be 144 bytes to match WGSL"
    );
};

static_assertions::assert_impl_all!(SceneUniforms: bytemuck::Pod, bytemuck::Zeroable);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uniforms() {
        let uniforms = SceneUniforms::default();
        assert_eq!(uniforms.camera_pos, [0.0, 0.0, 3.0]);
        assert_eq!(uniforms.camera_target, [0.0, 0.0, -10.0]);
        assert_eq!(uniforms.fog_density, FOG_CLEAR);
        assert_eq!(uniforms.use_skybox, 0);
        assert_eq!(uniforms.resolution, [1024.0, 768.0]);
    }

    #[test]
    fn test_sun_dir_is_normalized() {
        let uniforms = SceneUniforms::default();
        let [x, y, z] = uniforms.sun_dir;
        let length = (x * x + y * y + z * z).sqrt();
        assert!((length - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_set_camera() {
        let mut uniforms = SceneUniforms::default();
        uniforms.set_camera(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(uniforms.camera_pos, [1.0, 2.0, 3.0]);
        assert_eq!(uniforms.camera_target, [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_set_resolution() {
        let mut uniforms = SceneUniforms::default();
        uniforms.set_resolution(2560, 1440);
        assert_eq!(uniforms.resolution, [2560.0, 1440.0]);
    }

    #[test]
    fn test_set_view_proj_round_trips() {
        let mut uniforms = SceneUniforms::default();
        let matrix = Mat4::perspective_rh(45f32.to_radians(), 4.0 / 3.0, 0.1, 100.0);
        uniforms.set_view_proj(matrix);
        assert_eq!(Mat4::from_cols_array_2d(&uniforms.view_proj), matrix);
    }

    #[test]
    fn test_pod_byte_size() {
        let uniforms = SceneUniforms::default();
        assert_eq!(bytemuck::bytes_of(&uniforms).len(), 144);
    }
}
