use super::helpers::{self, ScenePipelineDesc};
use crate::core::Palette;
use glam::Mat4;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GradientUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) colors: [[f32; 4]; 4],
}

impl GradientUniforms {
    pub(crate) fn new(model: Mat4, palette: &Palette) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            colors: palette.colors.map(|[r, g, b]| [r, g, b, 1.0]),
        }
    }
}

pub(crate) struct GradientResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_gradient_resources(
    device: &wgpu::Device,
    frame_buffer: &wgpu::Buffer,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
) -> GradientResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("gradient_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::GRADIENT_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("gradient_bgl"),
        entries: &[helpers::uniform_entry(0), helpers::uniform_entry(1)],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("gradient_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_scene_pipeline(
        device,
        &ScenePipelineDesc {
            label: "gradient_pipeline",
            layout: &pl,
            shader: &shader,
            vs_entry: "vs_plane",
            fs_entry: "fs_gradient",
            buffers: &[],
            blend: wgpu::BlendState::REPLACE,
        },
        color_format,
        sample_count,
    );
    let uniform_buffer = helpers::create_uniform_buffer(
        device,
        "gradient_uniforms",
        std::mem::size_of::<GradientUniforms>(),
    );
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("gradient_bg"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: uniform_buffer.as_entire_binding(),
            },
        ],
    });

    GradientResources {
        pipeline,
        uniform_buffer,
        bind_group,
    }
}
