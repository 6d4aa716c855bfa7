//! Edit handles shown on the selected annotation

use glam::{Vec2, Vec3};

use super::input::Modifiers;
use super::transform::TransformMode;
use crate::annotation::Shape;
use crate::geometry::ground_distance;

/// Ground-plane radius within which a click grabs a handle
pub const HANDLE_PICK_RADIUS: f32 = 1.0;

/// Distance of the rotate handle beyond the shape's +X edge
pub const ROTATE_HANDLE_OFFSET: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub position: Vec3,
    pub mode: TransformMode,
}

impl Handle {
    fn new(position: Vec3, mode: TransformMode) -> Self {
        Self { position, mode }
    }
}

/// Handles for a shape.
///
/// Rectangles and squares get four corner handles plus a rotate handle on
/// their local +X axis, so dragging it yields the rotation directly. Circles
/// get a rim handle; arrows one per endpoint.
pub fn handles(shape: &Shape) -> Vec<Handle> {
    match *shape {
        Shape::Rectangle { .. } | Shape::Square { .. } => {
            let Some(frame) = shape.rect_frame() else {
                return Vec::new();
            };
            let mut handles: Vec<Handle> = frame
                .corners()
                .into_iter()
                .map(|corner| Handle::new(corner, TransformMode::Resize))
                .collect();
            let rotate = frame.to_world(Vec2::new(frame.half.x + ROTATE_HANDLE_OFFSET, 0.0));
            handles.push(Handle::new(rotate, TransformMode::Rotate));
            handles
        }
        Shape::Circle { center, radius } => {
            vec![Handle::new(center + Vec3::new(radius, 0.0, 0.0), TransformMode::Resize)]
        }
        Shape::Arrow { from, to } => vec![
            Handle::new(from, TransformMode::ArrowFrom),
            Handle::new(to, TransformMode::ArrowTo),
        ],
    }
}

/// Closest handle within [`HANDLE_PICK_RADIUS`] of `point`
pub fn pick_handle(shape: &Shape, point: Vec3) -> Option<Handle> {
    handles(shape)
        .into_iter()
        .map(|handle| (handle, ground_distance(handle.position, point)))
        .filter(|(_, dist)| *dist <= HANDLE_PICK_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(handle, _)| handle)
}

/// Transform mode for a press at `point` on a selected shape.
///
/// Handles win over the body. A body grab moves the shape unless Alt asks
/// for a rotation or Shift for a resize and the shape supports it.
pub fn grab_mode(shape: &Shape, point: Vec3, modifiers: Modifiers) -> Option<TransformMode> {
    if let Some(handle) = pick_handle(shape, point) {
        return Some(handle.mode);
    }
    if !shape.hit_test(point) {
        return None;
    }

    let kind = shape.kind();
    let mode = if modifiers.alt && TransformMode::Rotate.supports(kind) {
        TransformMode::Rotate
    } else if modifiers.shift && TransformMode::Resize.supports(kind) {
        TransformMode::Resize
    } else {
        TransformMode::Move
    };
    Some(mode)
}
