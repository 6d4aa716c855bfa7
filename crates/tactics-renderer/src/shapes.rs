//! Ground-level triangle batches: thick lines, dashes and filled polygons

use glam::Vec3;
use tactics_core::StrokeStyle;
use tactics_core::geometry::ground_distance;
use wgpu::util::DeviceExt;

use crate::pipeline::{create_camera_bind_group, create_color_pipeline};
use crate::vertex::ColorVertex;

/// Segments used for round joints and discs
const JOINT_SEGMENTS: usize = 8;

/// Dash and gap length for a stroke pattern, scaled by line width
pub fn stroke_pattern(stroke: StrokeStyle, width: f32) -> Option<(f32, f32)> {
    match stroke {
        StrokeStyle::Solid => None,
        StrokeStyle::Dashed => Some((width * 4.0, width * 2.0)),
        StrokeStyle::Dotted => Some((width, width * 2.0)),
    }
}

/// CPU-side triangle list on the ground plane.
///
/// Every vertex is raised by the current lift so later layers draw above
/// earlier ones without z-fighting.
#[derive(Debug, Clone, Default)]
pub struct ShapeBatch {
    vertices: Vec<ColorVertex>,
    lift: f32,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_lift(&mut self, lift: f32) {
        self.lift = lift;
    }

    pub fn vertices(&self) -> &[ColorVertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    fn vertex(&mut self, p: Vec3, color: [f32; 4]) {
        self.vertices
            .push(ColorVertex::new(p + Vec3::Y * self.lift, color));
    }

    pub fn triangle(&mut self, a: Vec3, b: Vec3, c: Vec3, color: [f32; 4]) {
        self.vertex(a, color);
        self.vertex(b, color);
        self.vertex(c, color);
    }

    /// Quad from four corners in winding order
    pub fn quad(&mut self, corners: [Vec3; 4], color: [f32; 4]) {
        let [a, b, c, d] = corners;
        self.triangle(a, b, c, color);
        self.triangle(a, c, d, color);
    }

    /// Thick straight line
    pub fn segment(&mut self, a: Vec3, b: Vec3, width: f32, color: [f32; 4]) {
        let d = Vec3::new(b.x - a.x, 0.0, b.z - a.z);
        if d.length_squared() < 1e-10 {
            return;
        }
        let dir = d.normalize();
        let side = Vec3::new(-dir.z, 0.0, dir.x) * (width * 0.5);
        self.quad([a + side, b + side, b - side, a - side], color);
    }

    pub fn disc(&mut self, center: Vec3, radius: f32, segments: usize, color: [f32; 4]) {
        let segments = segments.max(3);
        for i in 0..segments {
            let a0 = i as f32 / segments as f32 * std::f32::consts::TAU;
            let a1 = (i + 1) as f32 / segments as f32 * std::f32::consts::TAU;
            self.triangle(
                center,
                center + Vec3::new(a0.cos() * radius, 0.0, a0.sin() * radius),
                center + Vec3::new(a1.cos() * radius, 0.0, a1.sin() * radius),
                color,
            );
        }
    }

    /// Filled polygon, fanned from its centroid
    pub fn fill_polygon(&mut self, points: &[Vec3], color: [f32; 4]) {
        if points.len() < 3 {
            return;
        }
        let centroid = points.iter().copied().sum::<Vec3>() / points.len() as f32;
        for (i, p) in points.iter().enumerate() {
            let next = points[(i + 1) % points.len()];
            self.triangle(centroid, *p, next, color);
        }
    }

    /// Thick polyline with an optional dash pattern
    pub fn polyline(
        &mut self,
        points: &[Vec3],
        closed: bool,
        width: f32,
        color: [f32; 4],
        stroke: StrokeStyle,
    ) {
        if points.len() < 2 {
            return;
        }

        let mut segments: Vec<(Vec3, Vec3)> = points.windows(2).map(|w| (w[0], w[1])).collect();
        if closed && points.len() > 2 {
            segments.push((points[points.len() - 1], points[0]));
        }

        let Some((dash, gap)) = stroke_pattern(stroke, width) else {
            for (a, b) in &segments {
                self.segment(*a, *b, width, color);
            }
            // Round the joints
            let joints = if closed { points } else { &points[1..points.len() - 1] };
            for joint in joints {
                self.disc(*joint, width * 0.5, JOINT_SEGMENTS, color);
            }
            return;
        };

        let period = dash + gap;
        let mut phase = 0.0f32;
        for (a, b) in segments {
            let length = ground_distance(a, b);
            if length < 1e-6 {
                continue;
            }
            let dir = (b - a) / length;
            let mut t = 0.0;
            while t < length {
                let offset = phase % period;
                let drawing = offset < dash;
                let run = if drawing { dash - offset } else { period - offset };
                let run = run.min(length - t).max(1e-4);
                if drawing {
                    self.segment(a + dir * t, a + dir * (t + run).min(length), width, color);
                }
                t += run;
                phase += run;
            }
        }
    }

    /// Arrow shaft plus a filled head at `to`
    pub fn arrow(
        &mut self,
        from: Vec3,
        to: Vec3,
        head: [Vec3; 2],
        width: f32,
        color: [f32; 4],
        stroke: StrokeStyle,
    ) {
        let base = head[0].lerp(head[1], 0.5);
        self.polyline(&[from, base], false, width, color, stroke);
        self.triangle(to, head[0], head[1], color);
    }
}

/// GPU side of a [`ShapeBatch`]; the vertex buffer grows on demand
pub struct ShapeRenderer {
    label: String,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    capacity: usize,
    vertex_count: u32,
}

impl ShapeRenderer {
    const INITIAL_CAPACITY: usize = 4096;

    pub fn new(
        device: &wgpu::Device,
        label: &str,
        format: wgpu::TextureFormat,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
        depth_write: bool,
    ) -> Self {
        let pipeline = create_color_pipeline(
            device,
            &format!("{label} Pipeline"),
            format,
            camera_bind_group_layout,
            depth_write,
        );
        let bind_group = create_camera_bind_group(
            device,
            &format!("{label} Camera Bind Group"),
            camera_bind_group_layout,
            camera_buffer,
        );
        let vertex_buffer = Self::create_vertex_buffer(device, label, Self::INITIAL_CAPACITY);

        Self {
            label: label.to_owned(),
            pipeline,
            bind_group,
            vertex_buffer,
            capacity: Self::INITIAL_CAPACITY,
            vertex_count: 0,
        }
    }

    fn create_vertex_buffer(device: &wgpu::Device, label: &str, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            size: (capacity * std::mem::size_of::<ColorVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Fixed geometry uploaded at creation
    pub fn with_vertices(mut self, device: &wgpu::Device, vertices: &[ColorVertex]) -> Self {
        if vertices.is_empty() {
            return self;
        }
        self.vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", self.label)),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        self.capacity = vertices.len();
        self.vertex_count = vertices.len() as u32;
        self
    }

    /// Replace the drawn geometry
    pub fn update(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, vertices: &[ColorVertex]) {
        if vertices.len() > self.capacity {
            self.capacity = vertices.len().next_power_of_two();
            tracing::debug!("Growing {} buffer to {} vertices", self.label, self.capacity);
            self.vertex_buffer = Self::create_vertex_buffer(device, &self.label, self.capacity);
        }

        self.vertex_count = vertices.len() as u32;
        if !vertices.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(vertices));
        }
    }

    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.vertex_count == 0 {
            return;
        }

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}
