//! Annotations drawn on the pitch
//!
//! Every annotation is a [`Shape`] plus an [`AnnotationStyle`]. Geometry is
//! stored in world coordinates on the ground plane.

use std::fmt;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{distance_point_to_segment, ground_distance, rotate_xz, xz};
use crate::store::{Keyed, Patch};

/// Pick distance for thin shapes (arrows, outlines)
pub const ARROW_PICK_THRESHOLD: f32 = 0.75;

/// Extra slack around filled-shape hit tests
const EDGE_PICK_MARGIN: f32 = 0.25;

/// Linear RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);
    pub const BLACK: Color = Color([0.0, 0.0, 0.0, 1.0]);
    pub const RED: Color = Color([0.9, 0.15, 0.15, 1.0]);
    pub const BLUE: Color = Color([0.15, 0.35, 0.95, 1.0]);
    pub const YELLOW: Color = Color([1.0, 0.85, 0.1, 1.0]);

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b, 1.0])
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        let [r, g, b, _] = self.0;
        Self([r, g, b, alpha])
    }

    pub fn to_array(self) -> [f32; 4] {
        self.0
    }
}

/// Outline pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl StrokeStyle {
    pub const ALL: [StrokeStyle; 3] = [StrokeStyle::Solid, StrokeStyle::Dashed, StrokeStyle::Dotted];

    pub fn name(&self) -> &'static str {
        match self {
            StrokeStyle::Solid => "Solid",
            StrokeStyle::Dashed => "Dashed",
            StrokeStyle::Dotted => "Dotted",
        }
    }
}

/// Visual style shared by all annotation kinds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotationStyle {
    pub color: Color,
    /// Outline width in world units
    pub line_width: f32,
    pub filled: bool,
    /// None renders as solid
    pub stroke: Option<StrokeStyle>,
}

impl AnnotationStyle {
    pub fn stroke_or_default(&self) -> StrokeStyle {
        self.stroke.unwrap_or_default()
    }
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            color: Color::YELLOW,
            line_width: 0.3,
            filled: false,
            stroke: None,
        }
    }
}

/// Partial style update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnnotationStylePatch {
    pub color: Option<Color>,
    pub line_width: Option<f32>,
    pub filled: Option<bool>,
    pub stroke: Option<Option<StrokeStyle>>,
}

impl Patch<AnnotationStyle> for AnnotationStylePatch {
    fn apply(self, style: &mut AnnotationStyle) {
        if let Some(color) = self.color {
            style.color = color;
        }
        if let Some(line_width) = self.line_width {
            style.line_width = line_width.max(0.01);
        }
        if let Some(filled) = self.filled {
            style.filled = filled;
        }
        if let Some(stroke) = self.stroke {
            style.stroke = stroke;
        }
    }
}

impl Patch<Annotation> for AnnotationStylePatch {
    fn apply(self, annotation: &mut Annotation) {
        Patch::<AnnotationStyle>::apply(self, &mut annotation.style);
    }
}

/// Time-ordered annotation identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnnotationId(pub Uuid);

impl AnnotationId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for AnnotationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let simple = self.0.simple().to_string();
        f.write_str(&simple[simple.len() - 8..])
    }
}

/// Shape kind, without geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Square,
    Circle,
    Arrow,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::Arrow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Square => "Square",
            ShapeKind::Circle => "Circle",
            ShapeKind::Arrow => "Arrow",
        }
    }
}

/// Annotation geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned corners in the shape's unrotated frame; `rotation` turns
    /// the box about its center.
    Rectangle { start: Vec3, end: Vec3, rotation: f32 },
    /// Stored like a rectangle; rendered with equal sides.
    Square { start: Vec3, end: Vec3, rotation: f32 },
    Circle { center: Vec3, radius: f32 },
    Arrow { from: Vec3, to: Vec3 },
}

/// Center, half extents and rotation of a rectangle or square as rendered
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectFrame {
    pub center: Vec2,
    pub half: Vec2,
    pub rotation: f32,
    pub y: f32,
}

impl RectFrame {
    /// Convert a world point into the frame's unrotated local XZ offset
    pub fn to_local(&self, point: Vec3) -> Vec2 {
        rotate_xz(xz(point) - self.center, -self.rotation)
    }

    /// Convert a local XZ offset back into a world point
    pub fn to_world(&self, local: Vec2) -> Vec3 {
        let p = self.center + rotate_xz(local, self.rotation);
        Vec3::new(p.x, self.y, p.y)
    }

    /// Corners in order: (-,-), (+,-), (+,+), (-,+)
    pub fn corners(&self) -> [Vec3; 4] {
        let h = self.half;
        [
            self.to_world(Vec2::new(-h.x, -h.y)),
            self.to_world(Vec2::new(h.x, -h.y)),
            self.to_world(Vec2::new(h.x, h.y)),
            self.to_world(Vec2::new(-h.x, h.y)),
        ]
    }

    pub fn contains(&self, point: Vec3, margin: f32) -> bool {
        let local = self.to_local(point);
        local.x.abs() <= self.half.x + margin && local.y.abs() <= self.half.y + margin
    }

    pub fn center3(&self) -> Vec3 {
        Vec3::new(self.center.x, self.y, self.center.y)
    }
}

/// Side length a square renders with for the given stored corners
pub fn square_side(start: Vec3, end: Vec3) -> f32 {
    (end.x - start.x).abs().max((end.z - start.z).abs())
}

/// Rendered far corner of a square anchored at `start`
pub fn square_end(start: Vec3, end: Vec3) -> Vec3 {
    let side = square_side(start, end);
    Vec3::new(
        start.x + side * (end.x - start.x).signum(),
        start.y,
        start.z + side * (end.z - start.z).signum(),
    )
}

fn frame_from_corners(start: Vec3, end: Vec3, rotation: f32) -> RectFrame {
    let a = xz(start);
    let b = xz(end);
    RectFrame {
        center: (a + b) * 0.5,
        half: (b - a).abs() * 0.5,
        rotation,
        y: start.y,
    }
}

impl Shape {
    /// Zero-size geometry at `at`, used when a draw gesture begins
    pub fn degenerate(kind: ShapeKind, at: Vec3) -> Self {
        match kind {
            ShapeKind::Rectangle => Shape::Rectangle {
                start: at,
                end: at,
                rotation: 0.0,
            },
            ShapeKind::Square => Shape::Square {
                start: at,
                end: at,
                rotation: 0.0,
            },
            ShapeKind::Circle => Shape::Circle {
                center: at,
                radius: 0.0,
            },
            ShapeKind::Arrow => Shape::Arrow { from: at, to: at },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Square { .. } => ShapeKind::Square,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Arrow { .. } => ShapeKind::Arrow,
        }
    }

    /// Shift every stored coordinate by `delta`
    pub fn translate(&mut self, delta: Vec3) {
        match self {
            Shape::Rectangle { start, end, .. } | Shape::Square { start, end, .. } => {
                *start += delta;
                *end += delta;
            }
            Shape::Circle { center, .. } => *center += delta,
            Shape::Arrow { from, to } => {
                *from += delta;
                *to += delta;
            }
        }
    }

    /// Rendered frame of a rectangle or square; squares are symmetrized here
    pub fn rect_frame(&self) -> Option<RectFrame> {
        match *self {
            Shape::Rectangle {
                start,
                end,
                rotation,
            } => Some(frame_from_corners(start, end, rotation)),
            Shape::Square {
                start,
                end,
                rotation,
            } => Some(frame_from_corners(start, square_end(start, end), rotation)),
            Shape::Circle { .. } | Shape::Arrow { .. } => None,
        }
    }

    /// Rendered (width, depth) of rectangles and squares
    pub fn rendered_extent(&self) -> Option<Vec2> {
        self.rect_frame().map(|frame| frame.half * 2.0)
    }

    /// Center used for rotation and display
    pub fn center(&self) -> Vec3 {
        match *self {
            Shape::Rectangle { .. } | Shape::Square { .. } => self
                .rect_frame()
                .map(|frame| frame.center3())
                .unwrap_or_default(),
            Shape::Circle { center, .. } => center,
            Shape::Arrow { from, to } => from.lerp(to, 0.5),
        }
    }

    /// Closed outline for area shapes; None for arrows
    pub fn outline(&self, circle_segments: usize) -> Option<Vec<Vec3>> {
        match *self {
            Shape::Rectangle { .. } | Shape::Square { .. } => {
                self.rect_frame().map(|frame| frame.corners().to_vec())
            }
            Shape::Circle { center, radius } => {
                let segments = circle_segments.max(3);
                Some(
                    (0..segments)
                        .map(|i| {
                            let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
                            center + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
                        })
                        .collect(),
                )
            }
            Shape::Arrow { .. } => None,
        }
    }

    /// The two wing tips of an arrow head of the given length
    pub fn arrow_head(&self, head_length: f32) -> Option<[Vec3; 2]> {
        let Shape::Arrow { from, to } = *self else {
            return None;
        };
        let dir = xz(to - from);
        if dir.length_squared() < 1e-8 {
            return None;
        }
        let back = -dir.normalize() * head_length;
        let spread = std::f32::consts::FRAC_PI_6;
        let left = rotate_xz(back, spread);
        let right = rotate_xz(back, -spread);
        Some([
            to + Vec3::new(left.x, 0.0, left.y),
            to + Vec3::new(right.x, 0.0, right.y),
        ])
    }

    /// Shape-specific containment / proximity test on the ground plane
    pub fn hit_test(&self, point: Vec3) -> bool {
        match *self {
            Shape::Rectangle { .. } | Shape::Square { .. } => self
                .rect_frame()
                .is_some_and(|frame| frame.contains(point, EDGE_PICK_MARGIN)),
            Shape::Circle { center, radius } => {
                ground_distance(center, point) <= radius + EDGE_PICK_MARGIN
            }
            Shape::Arrow { from, to } => {
                let p = Vec3::new(point.x, from.y, point.z);
                distance_point_to_segment(from, to, p) <= ARROW_PICK_THRESHOLD
            }
        }
    }
}

/// A drawn annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: AnnotationId,
    pub style: AnnotationStyle,
    pub shape: Shape,
}

impl Annotation {
    /// New annotation with zero-size geometry at `at`
    pub fn new(kind: ShapeKind, at: Vec3, style: AnnotationStyle) -> Self {
        Self {
            id: AnnotationId::new(),
            style,
            shape: Shape::degenerate(kind, at),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }
}

impl Keyed for Annotation {
    type Id = AnnotationId;

    fn id(&self) -> AnnotationId {
        self.id
    }
}

/// Topmost annotation under `point`. Later annotations draw on top, so the
/// list is searched back to front.
pub fn hit_test_annotations(annotations: &[Annotation], point: Vec3) -> Option<AnnotationId> {
    annotations
        .iter()
        .rev()
        .find(|annotation| annotation.shape.hit_test(point))
        .map(|annotation| annotation.id)
}
