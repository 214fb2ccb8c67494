//! Render Pipeline Module
//!
//! Contains the RenderState struct that owns all wgpu resources for the
//! viewer: device, queue, surface, the fullscreen raymarch pipeline, the
//! scene uniform buffer, and the skybox binding. Everything render-related
//! hangs off this one struct and is passed into the frame loop explicitly -
//! no globals.

use std::path::Path;
use std::sync::Arc;

use winit::window::Window;

use super::shader_loader::{create_shader_module, ShaderSource};
use super::sky_cubemap::SkyCubemap;
use super::uniforms::SceneUniforms;

/// Configuration for initializing the render pipeline.
pub struct RenderConfig {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Enable VSync (false = Immediate present mode for uncapped FPS)
    pub vsync: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            vsync: true,
        }
    }
}

/// Core render state holding all wgpu resources.
///
/// The scene is drawn as a single fullscreen-triangle raymarch pass: the
/// shader reads the camera pose and fog from [`SceneUniforms`] and produces
/// ground, park objects, and sky in one draw, so no vertex or depth buffers
/// are needed.
pub struct RenderState {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    /// Skybox cubemap; a 1x1 placeholder when no assets are installed.
    skybox: SkyCubemap,
    /// Whether real skybox faces were loaded (drives the `use_skybox`
    /// uniform).
    pub skybox_loaded: bool,
}

impl RenderState {
    /// Initialize the render pipeline with the given window and
    /// configuration.
    ///
    /// This sets up:
    /// - wgpu instance, adapter, device, and queue
    /// - Surface configuration (present mode per `config.vsync`)
    /// - Shader module from the provided source
    /// - Scene uniform buffer and the skybox cubemap binding
    /// - The fullscreen raymarch pipeline
    ///
    /// `skybox_dir`, when given, is searched for the six cubemap faces; a
    /// missing or broken skybox falls back to the procedural gradient sky.
    pub fn new(
        window: Arc<Window>,
        config: RenderConfig,
        shader_source: &ShaderSource,
        skybox_dir: Option<&Path>,
    ) -> Self {
        let size = window.inner_size();
        let width = if size.width > 0 { size.width } else { config.width };
        let height = if size.height > 0 { size.height } else { config.height };

        println!("[RenderState] Window size: {}x{}", width, height);

        // Create wgpu instance
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // Create surface
        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create surface");

        // Request adapter
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("Failed to find suitable adapter");

        println!("[RenderState] Using GPU: {}", adapter.get_info().name);

        // Request device
        let (device, queue) = pollster::block_on(
            adapter.request_device(&wgpu::DeviceDescriptor::default()),
        )
        .expect("Failed to create device");

        // Configure surface with an sRGB format when available
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let present_mode = if config.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::Immediate
        };

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        // Skybox: real faces when installed, placeholder + gradient sky
        // otherwise
        let (skybox, skybox_loaded) = match skybox_dir {
            Some(dir) => match SkyCubemap::from_files(&device, &queue, dir) {
                Ok(skybox) => (skybox, true),
                Err(e) => {
                    println!("[RenderState] No skybox ({e}); using gradient sky");
                    (SkyCubemap::placeholder(&device, &queue), false)
                }
            },
            None => (SkyCubemap::placeholder(&device, &queue), false),
        };

        // Shader module
        let shader = create_shader_module(&device, "park_scene_shader", shader_source);

        // Uniform buffer
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniform_buffer"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Bind group: uniforms + skybox cubemap + sampler
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::Cube,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let skybox_entries = skybox.bind_group_entries(1);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bind_group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                skybox_entries[0].clone(),
                skybox_entries[1].clone(),
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Fullscreen raymarch pipeline: no vertex buffers, no depth buffer
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            device,
            queue,
            surface,
            config: surface_config,
            pipeline,
            uniform_buffer,
            bind_group,
            skybox,
            skybox_loaded,
        }
    }

    /// Reconfigure the surface after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Upload the scene uniforms for this frame.
    pub fn write_uniforms(&self, uniforms: &SceneUniforms) {
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Face resolution of the loaded skybox (1 for the placeholder).
    pub fn skybox_size(&self) -> u32 {
        self.skybox.size
    }

    /// Draw one frame: a single fullscreen raymarch pass.
    pub fn render(&self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scene_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.draw(0..3, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
