//! Player cylinder renderer

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::pipeline::{DEPTH_FORMAT, create_camera_bind_group};
use crate::vertex::MeshVertex;

/// Player instance data - passed as vertex instance
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PlayerInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
    pub height: f32,
    /// 0 = normal, 1 = fully highlighted
    pub highlight: f32,
    pub _padding: [f32; 2],
}

impl PlayerInstance {
    pub fn new(position: Vec3, radius: f32, height: f32, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            radius,
            color,
            height,
            highlight: 0.0,
            _padding: [0.0; 2],
        }
    }

    pub fn with_highlight(mut self, highlight: f32) -> Self {
        self.highlight = highlight.clamp(0.0, 1.0);
        self
    }
}

/// Instanced cylinders standing on the ground plane
pub struct PlayerRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
    max_instances: u32,
    bind_group: wgpu::BindGroup,
}

impl PlayerRenderer {
    const MAX_INSTANCES: u32 = 64;

    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Player Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/player.wgsl").into()),
        });

        let bind_group = create_camera_bind_group(
            device,
            "Player Camera Bind Group",
            camera_bind_group_layout,
            camera_buffer,
        );

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Player Pipeline Layout"),
            bind_group_layouts: &[camera_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Player Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[
                    MeshVertex::layout(),
                    // Instance buffer
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<PlayerInstance>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &[
                            // position + radius
                            wgpu::VertexAttribute {
                                offset: 0,
                                shader_location: 2,
                                format: wgpu::VertexFormat::Float32x4,
                            },
                            // color
                            wgpu::VertexAttribute {
                                offset: 16,
                                shader_location: 3,
                                format: wgpu::VertexFormat::Float32x4,
                            },
                            // height + highlight
                            wgpu::VertexAttribute {
                                offset: 32,
                                shader_location: 4,
                                format: wgpu::VertexFormat::Float32x4,
                            },
                        ],
                    },
                ],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let (vertices, indices) = generate_cylinder(24);
        let index_count = indices.len() as u32;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Player Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Player Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Player Instance Buffer"),
            size: (Self::MAX_INSTANCES as usize * std::mem::size_of::<PlayerInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count,
            instance_buffer,
            instance_count: 0,
            max_instances: Self::MAX_INSTANCES,
            bind_group,
        }
    }

    pub fn update_instances(&mut self, queue: &wgpu::Queue, instances: &[PlayerInstance]) {
        let count = instances.len().min(self.max_instances as usize);
        if count < instances.len() {
            tracing::warn!("Dropping {} player instances over the limit", instances.len() - count);
        }
        self.instance_count = count as u32;
        if count > 0 {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances[..count]));
        }
    }

    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.instance_count == 0 {
            return;
        }

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..self.instance_count);
    }
}

/// Unit cylinder: radius 1, from y = 0 to y = 1, with a top cap.
///
/// Triangles wind counter-clockwise seen from outside.
fn generate_cylinder(segments: u32) -> (Vec<MeshVertex>, Vec<u32>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // Side: bottom and top rings with outward normals
    for seg in 0..=segments {
        let theta = std::f32::consts::TAU * seg as f32 / segments as f32;
        let (sin, cos) = theta.sin_cos();
        let normal = [cos, 0.0, sin];
        vertices.push(MeshVertex {
            position: [cos, 0.0, sin],
            normal,
        });
        vertices.push(MeshVertex {
            position: [cos, 1.0, sin],
            normal,
        });
    }
    for seg in 0..segments {
        let bottom = seg * 2;
        let top = bottom + 1;
        let next_bottom = bottom + 2;
        let next_top = bottom + 3;

        indices.extend_from_slice(&[bottom, top, next_bottom]);
        indices.extend_from_slice(&[next_bottom, top, next_top]);
    }

    // Top cap
    let center = vertices.len() as u32;
    vertices.push(MeshVertex {
        position: [0.0, 1.0, 0.0],
        normal: [0.0, 1.0, 0.0],
    });
    for seg in 0..=segments {
        let theta = std::f32::consts::TAU * seg as f32 / segments as f32;
        let (sin, cos) = theta.sin_cos();
        vertices.push(MeshVertex {
            position: [cos, 1.0, sin],
            normal: [0.0, 1.0, 0.0],
        });
    }
    for seg in 0..segments {
        let a = center + 1 + seg;
        indices.extend_from_slice(&[center, a + 1, a]);
    }

    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_indices_are_in_range() {
        let (vertices, indices) = generate_cylinder(12);
        assert_eq!(indices.len() % 3, 0);
        assert!(indices.iter().all(|i| (*i as usize) < vertices.len()));
        // 2 side triangles + 1 cap triangle per segment
        assert_eq!(indices.len(), 12 * 3 * 3);
    }

    #[test]
    fn test_side_faces_point_outward() {
        let (vertices, indices) = generate_cylinder(16);
        let tri = &indices[..3];
        let [a, b, c] = [0, 1, 2].map(|k| Vec3::from_array(vertices[tri[k] as usize].position));
        let face_normal = (b - a).cross(c - a);
        let outward = Vec3::from_array(vertices[tri[0] as usize].normal);
        assert!(face_normal.dot(outward) > 0.0);
    }

    #[test]
    fn test_instance_layout_matches_shader() {
        assert_eq!(std::mem::size_of::<PlayerInstance>(), 48);
    }
}
