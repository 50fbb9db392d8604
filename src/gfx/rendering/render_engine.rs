//! WGPU-based rendering engine
//!
//! Owns the surface, device and render targets, and draws a [`Scene`] in a
//! single multisampled pass: lit triangle meshes first, then unlit lines.

use std::sync::Arc;

use log::{info, warn};
use wgpu::Device;

use crate::{
    error::RenderError,
    gfx::{
        geometry::Topology,
        resources::{
            global_bindings::{update_global_ubo, GlobalBindings, GlobalUBO},
            texture_resource::TextureResource,
        },
        scene::{object::create_object_bind_group_layout, DrawObject, Scene},
    },
    wgpu_utils::BindGroupLayoutWithDesc,
};

use super::pipeline_manager::{PipelineConfig, PipelineManager};

/// Sample count requested when antialiasing is on
pub const MSAA_SAMPLES: u32 = 4;

const MESH_PIPELINE: &str = "Mesh";
const LINES_PIPELINE: &str = "Lines";

/// Picks the MSAA sample count the surface format can actually do
pub fn choose_sample_count(antialias: bool, flags: wgpu::TextureFormatFeatureFlags) -> u32 {
    if antialias && flags.sample_count_supported(MSAA_SAMPLES) {
        MSAA_SAMPLES
    } else {
        1
    }
}

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    sample_count: u32,
    depth_texture: TextureResource,
    msaa_target: Option<TextureResource>,
    pub pipeline_manager: PipelineManager,
    global_ubo: GlobalUBO,
    global_bindings: GlobalBindings,
    object_layout: BindGroupLayoutWithDesc,
}

impl RenderEngine {
    /// Creates a new render engine for the given window
    ///
    /// # Arguments
    /// * `window` - Window surface target for rendering
    /// * `width` - Initial surface width in pixels
    /// * `height` - Initial surface height in pixels
    /// * `antialias` - Request 4x MSAA (falls back to 1x if unsupported)
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        antialias: bool,
    ) -> Result<RenderEngine, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        let adapter_info = adapter.get_info();
        info!(
            "Using adapter '{}' ({:?})",
            adapter_info.name, adapter_info.backend
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits {
                    max_texture_dimension_2d: 4096,
                    ..wgpu::Limits::downlevel_defaults()
                },
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or(RenderError::NoSurfaceFormat)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_capabilities
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        info!("Surface format {:?}, {}x{}", format, config.width, config.height);

        let format_flags = adapter.get_texture_format_features(format).flags;
        let sample_count = choose_sample_count(antialias, format_flags);
        if antialias && sample_count == 1 {
            warn!(
                "{:?} does not support {}x MSAA, rendering without antialiasing",
                format, MSAA_SAMPLES
            );
        }
        info!("Rendering with {}x multisampling", sample_count);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, sample_count, "depth_texture");
        let msaa_target = (sample_count > 1).then(|| {
            TextureResource::create_msaa_target(&device, &config, sample_count, "msaa_target")
        });

        // Initialize global uniform bindings for camera and lighting
        let global_ubo = GlobalUBO::new(&device);
        let global_bindings = GlobalBindings::new(&device, &global_ubo);
        let object_layout = create_object_bind_group_layout(&device);

        let device_handle: Arc<Device> = device.into();
        let mut pipeline_manager = PipelineManager::new(device_handle.clone());

        pipeline_manager.load_shader("mesh", include_str!("mesh.wgsl"));

        let base_config = PipelineConfig::default()
            .with_shader("mesh")
            .with_cull_mode(None)
            .with_depth_format(TextureResource::DEPTH_FORMAT)
            .with_sample_count(sample_count)
            .with_bind_group_layouts(vec![
                global_bindings.bind_group_layout().clone(),
                object_layout.layout.clone(),
            ])
            .with_color_targets(vec![Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })]);

        pipeline_manager.register_pipeline(
            MESH_PIPELINE,
            base_config.clone().with_label("MESH"),
        );
        pipeline_manager.register_pipeline(
            LINES_PIPELINE,
            base_config
                .with_label("LINES")
                .with_fragment_entry("fs_unlit")
                .with_primitive_topology(wgpu::PrimitiveTopology::LineList),
        );
        pipeline_manager.create_all_pipelines()?;

        Ok(RenderEngine {
            surface,
            device: device_handle,
            queue,
            config,
            sample_count,
            depth_texture,
            msaa_target,
            pipeline_manager,
            global_ubo,
            global_bindings,
            object_layout,
        })
    }

    /// Creates GPU buffers for scene objects that do not have them yet
    pub fn prepare_scene(&self, scene: &mut Scene) {
        scene.init_gpu_resources(&self.device, &self.object_layout);
    }

    /// Uploads camera, light and per-object uniforms for the next frame
    pub fn update(&mut self, scene: &mut Scene) {
        update_global_ubo(&mut self.global_ubo, &self.queue, scene);
        scene.sync_gpu(&self.queue);
    }

    /// Renders one frame of `scene`
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    /// Running out of memory is the only surface failure returned as an error.
    pub fn render_frame(&mut self, scene: &Scene) -> Result<(), RenderError> {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => {
                warn!("Skipping frame: {}", e);
                return Ok(());
            }
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let (view, resolve_target) = match &self.msaa_target {
            Some(msaa) => (&msaa.view, Some(&surface_texture_view)),
            None => (&surface_texture_view, None),
        };

        let mesh_pipeline = self.pipeline_manager.pipeline(MESH_PIPELINE)?;
        let lines_pipeline = self.pipeline_manager.pipeline(LINES_PIPELINE)?;

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(scene.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);

            render_pass.set_pipeline(mesh_pipeline);
            for object in scene.drawable_objects(Topology::Triangles) {
                render_pass.draw_object(object);
            }

            render_pass.set_pipeline(lines_pipeline);
            for object in scene.drawable_objects(Topology::Lines) {
                render_pass.draw_object(object);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }

    /// Resizes the surface and recreates the depth and MSAA targets
    ///
    /// Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);

        self.depth_texture = TextureResource::create_depth_texture(
            &self.device,
            &self.config,
            self.sample_count,
            "depth_texture",
        );
        if self.msaa_target.is_some() {
            self.msaa_target = Some(TextureResource::create_msaa_target(
                &self.device,
                &self.config,
                self.sample_count,
                "msaa_target",
            ));
        }
    }
}
