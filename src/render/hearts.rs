use super::helpers::{self, ScenePipelineDesc};
use crate::core::{heart_triangles, linear_from_hex, HeartPose, HeartSeed, HeartTint};
use crate::core::{ACCENT_AMBER, ACCENT_CORAL};
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct HeartInstance {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
}

impl HeartInstance {
    pub fn new(seed: &HeartSeed, pose: &HeartPose) -> Self {
        let hex = match seed.tint {
            HeartTint::Amber => ACCENT_AMBER,
            HeartTint::Coral => ACCENT_CORAL,
        };
        let [r, g, b] = linear_from_hex(hex);
        Self {
            model: pose.model_matrix().to_cols_array_2d(),
            color: [r, g, b, seed.opacity],
        }
    }
}

const SHAPE_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    1 => Float32x4,
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
];

pub(crate) struct HeartResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) shape_vb: wgpu::Buffer,
    pub(crate) vertex_count: u32,
    pub(crate) instance_vb: wgpu::Buffer,
    pub(crate) capacity: usize,
}

pub(crate) fn create_heart_resources(
    device: &wgpu::Device,
    frame_buffer: &wgpu::Buffer,
    heart_count: usize,
    segment_samples: usize,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
) -> HeartResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("hearts_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::HEARTS_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("hearts_bgl"),
        entries: &[helpers::uniform_entry(0)],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("hearts_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let buffers = [
        // slot 0: shared outline triangles
        wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 2) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &SHAPE_ATTRS,
        },
        // slot 1: per-heart transform and tint
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<HeartInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        },
    ];
    let pipeline = helpers::make_scene_pipeline(
        device,
        &ScenePipelineDesc {
            label: "hearts_pipeline",
            layout: &pl,
            shader: &shader,
            vs_entry: "vs_heart",
            fs_entry: "fs_heart",
            buffers: &buffers,
            blend: wgpu::BlendState::ALPHA_BLENDING,
        },
        color_format,
        sample_count,
    );

    let triangles = heart_triangles(segment_samples);
    let shape_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("heart_shape_vb"),
        contents: bytemuck::cast_slice(&triangles),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let capacity = heart_count.max(1);
    let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("heart_instances"),
        size: (std::mem::size_of::<HeartInstance>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("hearts_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: frame_buffer.as_entire_binding(),
        }],
    });

    HeartResources {
        pipeline,
        bind_group,
        shape_vb,
        vertex_count: triangles.len() as u32,
        instance_vb,
        capacity,
    }
}
