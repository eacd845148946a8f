use super::helpers::{self, ScenePipelineDesc};
use crate::core::{linear_from_hex, ParticleSeed, ACCENT_AMBER, ACCENT_CORAL};
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParticleUniforms {
    pub(crate) color1: [f32; 4],
    pub(crate) color2: [f32; 4],
    pub(crate) size: f32,
    pub(crate) _pad: [f32; 3],
}

impl ParticleUniforms {
    pub(crate) fn new(size: f32) -> Self {
        let [r1, g1, b1] = linear_from_hex(ACCENT_AMBER);
        let [r2, g2, b2] = linear_from_hex(ACCENT_CORAL);
        Self {
            color1: [r1, g1, b1, 1.0],
            color2: [r2, g2, b2, 1.0],
            size,
            _pad: [0.0; 3],
        }
    }
}

const PARTICLE_ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
    0 => Float32x3,
    1 => Float32,
    2 => Float32,
    3 => Float32,
];

pub(crate) struct ParticleResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) instance_vb: wgpu::Buffer,
    pub(crate) count: u32,
}

/// Upload the particle seeds once; they never change after startup.
pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    frame_buffer: &wgpu::Buffer,
    seeds: &[ParticleSeed],
    size: f32,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
) -> ParticleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("particles_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::PARTICLES_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("particles_bgl"),
        entries: &[helpers::uniform_entry(0), helpers::uniform_entry(1)],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("particles_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ParticleSeed>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &PARTICLE_ATTRS,
    }];
    let pipeline = helpers::make_scene_pipeline(
        device,
        &ScenePipelineDesc {
            label: "particles_pipeline",
            layout: &pl,
            shader: &shader,
            vs_entry: "vs_particle",
            fs_entry: "fs_particle",
            buffers: &buffers,
            blend: helpers::ADDITIVE_BLENDING,
        },
        color_format,
        sample_count,
    );
    let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particles_uniforms"),
        contents: bytemuck::bytes_of(&ParticleUniforms::new(size)),
        usage: wgpu::BufferUsages::UNIFORM,
    });
    let instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particles_instances"),
        contents: bytemuck::cast_slice(seeds),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("particles_bg"),
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

    ParticleResources {
        pipeline,
        bind_group,
        instance_vb,
        count: seeds.len() as u32,
    }
}
