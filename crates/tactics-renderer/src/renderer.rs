//! Main renderer

use wgpu::util::DeviceExt;

use crate::camera::Camera;
use crate::pipeline::{DEPTH_FORMAT, create_camera_bind_group_layout};
use crate::pitch::pitch_batch;
use crate::player::{PlayerInstance, PlayerRenderer};
use crate::shapes::{ShapeBatch, ShapeRenderer};

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.08,
    g: 0.1,
    b: 0.12,
    a: 1.0,
};

struct DepthTexture {
    #[allow(dead_code)]
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> DepthTexture {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    DepthTexture { texture, view }
}

/// Draws the pitch, the annotation layer and the players in that order
pub struct Renderer {
    format: wgpu::TextureFormat,
    camera: Camera,
    camera_buffer: wgpu::Buffer,
    depth: DepthTexture,
    pitch: ShapeRenderer,
    overlays: ShapeRenderer,
    players: PlayerRenderer,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, width: u32, height: u32) -> Self {
        let camera = Camera::new(width.max(1) as f32 / height.max(1) as f32);

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera.uniform()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let camera_bind_group_layout = create_camera_bind_group_layout(device);

        let pitch_geometry = pitch_batch();
        let pitch = ShapeRenderer::new(
            device,
            "Pitch",
            format,
            &camera_bind_group_layout,
            &camera_buffer,
            true,
        )
        .with_vertices(device, pitch_geometry.vertices());
        let overlays = ShapeRenderer::new(
            device,
            "Overlay",
            format,
            &camera_bind_group_layout,
            &camera_buffer,
            false,
        );
        let players = PlayerRenderer::new(device, format, &camera_bind_group_layout, &camera_buffer);

        tracing::info!(
            "Renderer initialized ({}x{}, {} pitch vertices)",
            width,
            height,
            pitch_geometry.len()
        );

        Self {
            format,
            camera,
            camera_buffer,
            depth: create_depth_texture(device, width, height),
            pitch,
            overlays,
            players,
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.camera.update_aspect(width as f32 / height as f32);
        self.depth = create_depth_texture(device, width, height);
    }

    /// Replace the annotation and derived-visualization layer
    pub fn update_overlays(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, batch: &ShapeBatch) {
        self.overlays.update(device, queue, batch.vertices());
    }

    pub fn update_players(&mut self, queue: &wgpu::Queue, instances: &[PlayerInstance]) {
        self.players.update_instances(queue, instances);
    }

    pub fn render(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        queue: &wgpu::Queue,
    ) {
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera.uniform()]),
        );

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Main Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        self.pitch.render(&mut render_pass);
        self.overlays.render(&mut render_pass);
        self.players.render(&mut render_pass);
    }
}
