use crate::camera::Camera;
use crate::constants::{HEART_SEGMENT_SAMPLES, MSAA_SAMPLES, PARTICLE_SIZE, PLANE_SIZE, PLANE_Z};
use crate::core::{Palette, SceneLayout};
use glam::{Mat4, Quat, Vec3};
use web_sys as web;

mod gradient;
mod helpers;
mod hearts;
mod particles;
mod targets;

pub(crate) use hearts::HeartInstance;

use gradient::{create_gradient_resources, GradientResources, GradientUniforms};
use hearts::{create_heart_resources, HeartResources};
use particles::{create_particle_resources, ParticleResources};
use targets::RenderTargets;

/// Per-frame values shared by every scene shader.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FrameUniforms {
    proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    resolution: [f32; 2],
    time: f32,
    _pad: f32,
}

/// What the frame loop hands the renderer each tick.
pub struct SceneFrame<'f> {
    pub time: f32,
    pub camera: &'f Camera,
    pub plane_offset_y: f32,
    pub hearts: &'f [HeartInstance],
}

pub struct SceneRenderer<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    frame_buffer: wgpu::Buffer,
    gradient: GradientResources,
    particles: ParticleResources,
    hearts: HeartResources,
    palette: Palette,

    width: u32,
    height: u32,
}

impl<'a> SceneRenderer<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        layout: &SceneLayout,
        palette: Palette,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height, format, MSAA_SAMPLES);
        let frame_buffer = helpers::create_uniform_buffer(
            &device,
            "frame_uniforms",
            std::mem::size_of::<FrameUniforms>(),
        );
        let gradient = create_gradient_resources(&device, &frame_buffer, format, MSAA_SAMPLES);
        let particles = create_particle_resources(
            &device,
            &frame_buffer,
            &layout.particles,
            PARTICLE_SIZE,
            format,
            MSAA_SAMPLES,
        );
        let hearts = create_heart_resources(
            &device,
            &frame_buffer,
            layout.hearts.len(),
            HEART_SEGMENT_SAMPLES,
            format,
            MSAA_SAMPLES,
        );
        log::info!(
            "[scene] surface {}x{} format={:?} particles={} hearts={}",
            width,
            height,
            format,
            particles.count,
            layout.hearts.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            frame_buffer,
            gradient,
            particles,
            hearts,
            palette,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.reconfigure();
        }
    }

    /// Reconfigure the surface at its current size, e.g. after it was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, self.width, self.height);
    }

    pub fn render(&mut self, scene: &SceneFrame<'_>) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms = FrameUniforms {
            proj: scene.camera.projection_matrix().to_cols_array_2d(),
            view: scene.camera.view_matrix().to_cols_array_2d(),
            resolution: [self.width as f32, self.height as f32],
            time: scene.time,
            _pad: 0.0,
        };
        self.queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&uniforms));

        let plane_model = Mat4::from_scale_rotation_translation(
            Vec3::new(PLANE_SIZE, PLANE_SIZE, 1.0),
            Quat::IDENTITY,
            Vec3::new(0.0, scene.plane_offset_y, PLANE_Z),
        );
        let gradient = GradientUniforms::new(plane_model, &self.palette);
        self.queue.write_buffer(
            &self.gradient.uniform_buffer,
            0,
            bytemuck::bytes_of(&gradient),
        );

        let heart_count = scene.hearts.len().min(self.hearts.capacity);
        if heart_count > 0 {
            self.queue.write_buffer(
                &self.hearts.instance_vb,
                0,
                bytemuck::cast_slice(&scene.hearts[..heart_count]),
            );
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Back to front: plane, hearts, then additive particles.
            rpass.set_pipeline(&self.gradient.pipeline);
            rpass.set_bind_group(0, &self.gradient.bind_group, &[]);
            rpass.draw(0..6, 0..1);

            if heart_count > 0 {
                rpass.set_pipeline(&self.hearts.pipeline);
                rpass.set_bind_group(0, &self.hearts.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.hearts.shape_vb.slice(..));
                rpass.set_vertex_buffer(1, self.hearts.instance_vb.slice(..));
                rpass.draw(0..self.hearts.vertex_count, 0..heart_count as u32);
            }

            if self.particles.count > 0 {
                rpass.set_pipeline(&self.particles.pipeline);
                rpass.set_bind_group(0, &self.particles.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.particles.instance_vb.slice(..));
                rpass.draw(0..6, 0..self.particles.count);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
