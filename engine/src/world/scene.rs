//! Scene Settings
//!
//! Authored constants for the park scene: sun direction, ambient level, fog
//! color, and the camera spawn pose. Kept in one place so the viewer and the
//! tests agree on the scene's starting state.

use glam::Vec3;

use crate::input::DEFAULT_SENSITIVITY;
use crate::render::SceneUniforms;

/// Authored scene configuration.
#[derive(Debug, Clone)]
pub struct SceneSettings {
    /// Direction toward the sun (normalized on use).
    pub sun_dir: Vec3,
    /// Ambient light level.
    pub ambient: f32,
    /// Fog and horizon haze color.
    pub fog_color: Vec3,
    /// Camera spawn position.
    pub spawn_position: Vec3,
    /// Camera spawn look-at target.
    pub spawn_target: Vec3,
    /// Distance moved per held-key tick.
    pub move_speed: f32,
    /// Mouse look sensitivity in degrees per pixel.
    pub look_sensitivity: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            sun_dir: Vec3::new(5.0, 30.0, 9.0),
            ambient: 0.35,
            fog_color: Vec3::new(0.7, 0.7, 0.7),
            spawn_position: Vec3::new(0.0, 0.0, 3.0),
            spawn_target: Vec3::new(0.0, 0.0, -10.0),
            move_speed: 0.1,
            look_sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

impl SceneSettings {
    /// Build the initial scene uniforms: spawn pose plus lighting/fog
    /// constants.
    pub fn base_uniforms(&self) -> SceneUniforms {
        let mut uniforms = SceneUniforms::new(self.spawn_position, self.spawn_target);
        uniforms.sun_dir = self.sun_dir.normalize().to_array();
        uniforms.ambient = self.ambient;
        uniforms.fog_color = self.fog_color.to_array();
        uniforms
    }
}
