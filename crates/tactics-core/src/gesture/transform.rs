//! Shape update rules applied while drawing or transforming

use glam::{Vec2, Vec3};

use crate::annotation::{Shape, ShapeKind};
use crate::geometry::{ground_distance, xz};

/// How a transform gesture edits the grabbed annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformMode {
    Move,
    Resize,
    Rotate,
    ArrowFrom,
    ArrowTo,
}

impl TransformMode {
    pub fn name(&self) -> &'static str {
        match self {
            TransformMode::Move => "Move",
            TransformMode::Resize => "Resize",
            TransformMode::Rotate => "Rotate",
            TransformMode::ArrowFrom => "Arrow start",
            TransformMode::ArrowTo => "Arrow end",
        }
    }

    /// Whether this mode has any effect on shapes of `kind`
    pub fn supports(&self, kind: ShapeKind) -> bool {
        match self {
            TransformMode::Move => true,
            TransformMode::Resize => kind != ShapeKind::Arrow,
            TransformMode::Rotate => kind != ShapeKind::Circle,
            TransformMode::ArrowFrom | TransformMode::ArrowTo => kind == ShapeKind::Arrow,
        }
    }
}

/// Update an annotation that is being drawn so it follows the pointer
pub fn apply_draw(shape: &mut Shape, point: Vec3) {
    match shape {
        Shape::Rectangle { start, end, .. } | Shape::Square { start, end, .. } => {
            *end = Vec3::new(point.x, start.y, point.z);
        }
        Shape::Circle { center, radius } => {
            *radius = ground_distance(*center, point);
        }
        Shape::Arrow { from, to } => {
            *to = Vec3::new(point.x, from.y, point.z);
        }
    }
}

/// Apply a transform step. `delta` is the pointer motion since the last step
/// and is only used by [`TransformMode::Move`].
pub fn apply_transform(shape: &mut Shape, mode: TransformMode, point: Vec3, delta: Vec3) {
    if !mode.supports(shape.kind()) {
        return;
    }

    match mode {
        TransformMode::Move => shape.translate(Vec3::new(delta.x, 0.0, delta.z)),
        TransformMode::Resize => resize(shape, point),
        TransformMode::Rotate => rotate(shape, point),
        TransformMode::ArrowFrom => {
            if let Shape::Arrow { from, .. } = shape {
                *from = Vec3::new(point.x, from.y, point.z);
            }
        }
        TransformMode::ArrowTo => {
            if let Shape::Arrow { to, .. } = shape {
                *to = Vec3::new(point.x, to.y, point.z);
            }
        }
    }
}

fn resize(shape: &mut Shape, point: Vec3) {
    let frame = shape.rect_frame();
    let square = shape.kind() == ShapeKind::Square;
    match shape {
        Shape::Rectangle { start, end, .. } | Shape::Square { start, end, .. } => {
            let Some(frame) = frame else {
                return;
            };
            let mut half = frame.to_local(point).abs();
            if square {
                half = Vec2::splat(half.max_element());
            }
            // Corners are stored unrotated around the fixed center
            let lo = frame.center - half;
            let hi = frame.center + half;
            *start = Vec3::new(lo.x, frame.y, lo.y);
            *end = Vec3::new(hi.x, frame.y, hi.y);
        }
        Shape::Circle { center, radius } => {
            *radius = ground_distance(*center, point);
        }
        Shape::Arrow { .. } => {}
    }
}

fn rotate(shape: &mut Shape, point: Vec3) {
    let center = xz(shape.center());
    match shape {
        Shape::Rectangle { rotation, .. } | Shape::Square { rotation, .. } => {
            let offset = xz(point) - center;
            if offset.length_squared() > 1e-8 {
                *rotation = offset.y.atan2(offset.x);
            }
        }
        Shape::Arrow { from, to } => {
            let length = ground_distance(*from, *to);
            let offset = xz(point) - xz(*from);
            if offset.length_squared() > 1e-8 {
                let angle = offset.y.atan2(offset.x);
                *to = *from + Vec3::new(angle.cos() * length, to.y - from.y, angle.sin() * length);
            }
        }
        Shape::Circle { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_draw_rectangle_follows_pointer() {
        let mut shape = Shape::degenerate(ShapeKind::Rectangle, Vec3::ZERO);
        apply_draw(&mut shape, Vec3::new(10.0, 0.0, 5.0));
        assert_eq!(
            shape,
            Shape::Rectangle {
                start: Vec3::ZERO,
                end: Vec3::new(10.0, 0.0, 5.0),
                rotation: 0.0,
            }
        );
    }

    #[test]
    fn test_draw_circle_sets_radius() {
        let mut shape = Shape::degenerate(ShapeKind::Circle, Vec3::new(1.0, 0.0, 1.0));
        apply_draw(&mut shape, Vec3::new(4.0, 0.0, 5.0));
        let Shape::Circle { radius, .. } = shape else {
            panic!("expected circle");
        };
        assert_relative_eq!(radius, 5.0);
    }

    #[test]
    fn test_move_uses_delta() {
        let mut shape = Shape::Circle {
            center: Vec3::ZERO,
            radius: 2.0,
        };
        apply_transform(
            &mut shape,
            TransformMode::Move,
            Vec3::new(100.0, 0.0, 100.0),
            Vec3::new(1.0, 0.0, -2.0),
        );
        assert_eq!(
            shape,
            Shape::Circle {
                center: Vec3::new(1.0, 0.0, -2.0),
                radius: 2.0,
            }
        );
    }

    #[test]
    fn test_resize_keeps_center() {
        let mut shape = Shape::Rectangle {
            start: Vec3::new(-2.0, 0.0, -1.0),
            end: Vec3::new(2.0, 0.0, 1.0),
            rotation: 0.0,
        };
        apply_transform(&mut shape, TransformMode::Resize, Vec3::new(5.0, 0.0, 3.0), Vec3::ZERO);

        assert_eq!(shape.center(), Vec3::ZERO);
        let extent = shape.rendered_extent().unwrap();
        assert_relative_eq!(extent.x, 10.0);
        assert_relative_eq!(extent.y, 6.0);
    }

    #[test]
    fn test_resize_in_rotated_frame() {
        let mut shape = Shape::Rectangle {
            start: Vec3::new(-2.0, 0.0, -1.0),
            end: Vec3::new(2.0, 0.0, 1.0),
            rotation: FRAC_PI_2,
        };
        // World +Z is the local +X axis after a quarter turn
        apply_transform(&mut shape, TransformMode::Resize, Vec3::new(1.0, 0.0, 6.0), Vec3::ZERO);

        let extent = shape.rendered_extent().unwrap();
        assert_relative_eq!(extent.x, 12.0, epsilon = 1e-4);
        assert_relative_eq!(extent.y, 2.0, epsilon = 1e-4);
    }

    #[test]
    fn test_rotate_sets_absolute_angle() {
        let mut shape = Shape::Rectangle {
            start: Vec3::new(-2.0, 0.0, -1.0),
            end: Vec3::new(2.0, 0.0, 1.0),
            rotation: 1.0,
        };
        apply_transform(&mut shape, TransformMode::Rotate, Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let Shape::Rectangle { rotation, .. } = shape else {
            panic!("expected rectangle");
        };
        assert_relative_eq!(rotation, FRAC_PI_2);
    }

    #[test]
    fn test_arrow_rotate_preserves_length() {
        let mut shape = Shape::Arrow {
            from: Vec3::ZERO,
            to: Vec3::new(3.0, 0.0, 4.0),
        };
        apply_transform(&mut shape, TransformMode::Rotate, Vec3::new(-10.0, 0.0, 0.0), Vec3::ZERO);
        let Shape::Arrow { from, to } = shape else {
            panic!("expected arrow");
        };
        assert_eq!(from, Vec3::ZERO);
        assert_relative_eq!(to.x, -5.0, epsilon = 1e-4);
        assert_relative_eq!(to.z, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_arrow_endpoint_keeps_elevation() {
        let mut shape = Shape::Arrow {
            from: Vec3::new(0.0, 0.2, 0.0),
            to: Vec3::new(5.0, 0.2, 0.0),
        };
        apply_transform(&mut shape, TransformMode::ArrowTo, Vec3::new(7.0, 0.0, 2.0), Vec3::ZERO);
        let Shape::Arrow { to, .. } = shape else {
            panic!("expected arrow");
        };
        assert_eq!(to, Vec3::new(7.0, 0.2, 2.0));
    }

    #[test]
    fn test_unsupported_mode_is_noop() {
        let original = Shape::Circle {
            center: Vec3::ZERO,
            radius: 3.0,
        };
        let mut shape = original;
        apply_transform(&mut shape, TransformMode::Rotate, Vec3::X, Vec3::X);
        assert_eq!(shape, original);
    }
}
