//! Park Scene Walkthrough
//!
//! Run with: `cargo run --bin park-scene [tour.json]`
//!
//! Renders the park from a free look-at camera, with a scripted flythrough
//! presentation over the authored waypoint tour. With no argument the
//! built-in park flythrough plays; a tour JSON path on the command line
//! replaces it.
//!
//! Controls:
//! - WASD: Move camera
//! - Mouse left-drag: Look around
//! - Space / Ctrl: Move up / down
//! - X / C: Dense fog / clear fog
//! - P: Start the flythrough presentation
//! - U: Print the current camera pose (for tour authoring)
//! - R: Reset camera
//! - ESC: Cancel presentation, or exit

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use glam::Mat4;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowAttributes, WindowId};

use parkwalk_engine::camera::{Camera, MoveDirection, PathAnimator, Tour};
use parkwalk_engine::input::{InputState, KeyCode};
use parkwalk_engine::render::shader_loader::embedded;
use parkwalk_engine::render::{
    RenderConfig, RenderState, SceneUniforms, ShaderSource, FOG_CLEAR, FOG_DENSE,
};
use parkwalk_engine::world::SceneSettings;

/// Directory searched for the six skybox faces.
const SKYBOX_DIR: &str = "assets/skybox";

/// Movement pacing: move_speed is authored as distance per tick at this rate.
const TICKS_PER_SECOND: f32 = 60.0;

// ============================================================================
// APP STATE
// ============================================================================

struct AppState {
    window: Arc<Window>,
    render: RenderState,
    uniforms: SceneUniforms,
    settings: SceneSettings,

    camera: Camera,
    input: InputState,

    // Presentation playback; `None` while in interactive mode
    tour: Tour,
    presentation: Option<PathAnimator>,
    fog_density: f32,

    // Timing
    start_time: Instant,
    last_frame_time: Instant,

    // FPS tracking
    frame_count: u32,
    fps_update_time: Instant,
    current_fps: f32,
}

impl AppState {
    fn new(window: Arc<Window>, tour: Tour) -> Self {
        let settings = SceneSettings::default();

        let render = RenderState::new(
            window.clone(),
            RenderConfig::default(),
            &ShaderSource::Embedded(embedded::PARK_SCENE),
            Some(Path::new(SKYBOX_DIR)),
        );

        let camera = Camera::new(
            settings.spawn_position,
            settings.spawn_target,
            glam::Vec3::Y,
        );
        let uniforms = settings.base_uniforms();

        let mut input = InputState::new();
        input.look = parkwalk_engine::input::MouseLook::with_sensitivity(
            settings.look_sensitivity,
        );

        let now = Instant::now();

        Self {
            window,
            render,
            uniforms,
            settings,
            camera,
            input,
            tour,
            presentation: None,
            fog_density: FOG_CLEAR,
            start_time: now,
            last_frame_time: now,
            frame_count: 0,
            fps_update_time: now,
            current_fps: 0.0,
        }
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.render.resize(new_size.width, new_size.height);
    }

    /// Per-tick update. Exactly one pose source runs each tick: the
    /// flythrough animator while a presentation is active, interactive
    /// input otherwise.
    fn update(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        self.update_fps(now);

        if let Some(animator) = self.presentation.as_mut() {
            match animator.advance_with_time(dt) {
                Some(pose) => {
                    self.camera.set_pose(pose.position, pose.target);
                    self.fog_density = pose.fog;
                }
                None => {
                    println!("[Presentation] Flythrough finished");
                    self.presentation = None;
                }
            }
        } else {
            let speed = self.settings.move_speed * dt * TICKS_PER_SECOND;
            let keys = self.input.movement;
            if keys.forward {
                self.camera.translate(MoveDirection::Forward, speed);
            }
            if keys.backward {
                self.camera.translate(MoveDirection::Backward, speed);
            }
            if keys.left {
                self.camera.translate(MoveDirection::Left, speed);
            }
            if keys.right {
                self.camera.translate(MoveDirection::Right, speed);
            }
            if keys.up {
                self.camera.translate(MoveDirection::Up, speed);
            }
            if keys.down {
                self.camera.translate(MoveDirection::Down, speed);
            }
        }
    }

    fn update_fps(&mut self, now: Instant) {
        self.frame_count += 1;
        let elapsed = (now - self.fps_update_time).as_secs_f32();
        if elapsed >= 1.0 {
            self.current_fps = self.frame_count as f32 / elapsed;
            self.frame_count = 0;
            self.fps_update_time = now;

            let mode = if self.presentation.is_some() {
                "presentation"
            } else {
                "free"
            };
            self.window.set_title(&format!(
                "Park Walkthrough | FPS: {:.0} | Camera: {mode}",
                self.current_fps
            ));
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let aspect = self.render.config.width as f32 / self.render.config.height as f32;
        let view = self.camera.get_view_matrix();
        let projection = Mat4::perspective_rh(45f32.to_radians(), aspect, 0.1, 100.0);

        self.uniforms.set_view_proj(projection * view);
        self.uniforms
            .set_camera(self.camera.get_position(), self.camera.get_target());
        self.uniforms.fog_density = self.fog_density;
        self.uniforms
            .set_time(self.start_time.elapsed().as_secs_f32());
        self.uniforms
            .set_resolution(self.render.config.width, self.render.config.height);
        self.uniforms.use_skybox = u32::from(self.render.skybox_loaded);

        self.render.write_uniforms(&self.uniforms);
        self.render.render()
    }

    fn start_presentation(&mut self) {
        println!(
            "[Presentation] Starting '{}' ({} waypoints)",
            self.tour.name,
            self.tour.waypoints.len()
        );
        self.input.movement.reset();
        self.presentation = Some(PathAnimator::new(self.tour.waypoints.clone()));
    }

    fn cancel_presentation(&mut self) {
        if self.presentation.take().is_some() {
            println!("[Presentation] Cancelled");
            self.fog_density = FOG_CLEAR;
        }
    }

    fn reset_camera(&mut self) {
        self.camera = Camera::new(
            self.settings.spawn_position,
            self.settings.spawn_target,
            glam::Vec3::Y,
        );
        self.input.look.reset();
        self.fog_density = FOG_CLEAR;
        println!("[Camera] Reset to spawn");
    }

    /// Print the current pose in tour-waypoint form (U key). This is how
    /// tour waypoints are captured: walk the scene, print, paste into JSON.
    fn print_pose(&self) {
        let position = self.camera.get_position();
        let target = self.camera.get_target();
        let (pitch, yaw) = self.input.look.angles();
        println!(
            "[Pose] {{\"position\": [{:.3}, {:.3}, {:.3}], \"target\": [{:.3}, {:.3}, {:.3}], \
             \"fog\": {}, \"yaw\": {:.1}, \"pitch\": {:.1}}}",
            position.x, position.y, position.z, target.x, target.y, target.z, self.fog_density,
            yaw, pitch
        );
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if self.input.movement.handle_key(key, pressed) {
            return;
        }
        if !pressed {
            return;
        }

        match key {
            KeyCode::X => {
                if self.presentation.is_none() {
                    self.fog_density = FOG_DENSE;
                    println!("[Fog] Dense (density {FOG_DENSE})");
                }
            }
            KeyCode::C => {
                if self.presentation.is_none() {
                    self.fog_density = FOG_CLEAR;
                    println!("[Fog] Clear");
                }
            }
            KeyCode::P => self.start_presentation(),
            KeyCode::R => self.reset_camera(),
            KeyCode::U => self.print_pose(),
            _ => {}
        }
    }

    fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button == MouseButton::Left {
            self.input.look.set_drag(pressed);
        }
    }

    fn handle_mouse_move(&mut self, x: f64, y: f64) {
        // The look drag only steers the camera in interactive mode; the
        // angles still accumulate so the view does not jump afterwards.
        if let Some((pitch, yaw)) = self.input.look.handle_move(x, y) {
            if self.presentation.is_none() {
                self.camera.rotate(pitch, yaw);
            }
        }
    }
}

/// Map winit key codes onto the engine's generic key codes.
fn map_key(code: winit::keyboard::KeyCode) -> KeyCode {
    use winit::keyboard::KeyCode as Winit;
    match code {
        Winit::KeyW => KeyCode::W,
        Winit::KeyA => KeyCode::A,
        Winit::KeyS => KeyCode::S,
        Winit::KeyD => KeyCode::D,
        Winit::Space => KeyCode::Space,
        Winit::ControlLeft => KeyCode::ControlLeft,
        Winit::ControlRight => KeyCode::ControlRight,
        Winit::KeyC => KeyCode::C,
        Winit::KeyP => KeyCode::P,
        Winit::KeyR => KeyCode::R,
        Winit::KeyU => KeyCode::U,
        Winit::KeyX => KeyCode::X,
        Winit::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

// ============================================================================
// APPLICATION HANDLER
// ============================================================================

struct App {
    tour: Tour,
    state: Option<AppState>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        println!("[Park] Creating window...");
        let window_attrs = WindowAttributes::default()
            .with_title("Park Walkthrough")
            .with_inner_size(PhysicalSize::new(1024, 768));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );
        self.state = Some(AppState::new(window, self.tour.clone()));

        println!("[Park] Ready! Controls:");
        println!("  WASD - Move camera");
        println!("  Left-drag - Look around");
        println!("  Space/Ctrl - Up/Down");
        println!("  X/C - Dense fog / clear fog");
        println!("  P - Play the flythrough presentation");
        println!("  U - Print current pose (tour authoring)");
        println!("  R - Reset camera");
        println!("  ESC - Cancel presentation / exit");
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.resize(new_size);
            }
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;
                let key = map_key(code);

                if key == KeyCode::Escape && pressed {
                    if state.presentation.is_some() {
                        state.cancel_presentation();
                    } else {
                        event_loop.exit();
                    }
                    return;
                }

                state.handle_key(key, pressed);
            }
            WindowEvent::MouseInput {
                button,
                state: btn_state,
                ..
            } => {
                state.handle_mouse_button(button, btn_state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                state.handle_mouse_move(position.x, position.y);
            }
            WindowEvent::RedrawRequested => {
                state.update();

                match state.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let size = state.window.inner_size();
                        state.resize(size);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                    Err(e) => eprintln!("Render error: {:?}", e),
                }

                state.window.request_redraw();
            }
            _ => {}
        }
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn main() {
    println!("=== Park Walkthrough ===");

    let tour = match std::env::args().nth(1) {
        Some(path) => match Tour::load(&path) {
            Ok(tour) => {
                println!("[Park] Loaded tour '{}' from {path}", tour.name);
                tour
            }
            Err(e) => {
                eprintln!("[Park] Failed to load tour {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Tour::park_flythrough(),
    };

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App { tour, state: None };
    event_loop.run_app(&mut app).expect("Event loop error");
}
