//! Ground-plane geometry helpers

use glam::{Vec2, Vec3};

/// Elevation of the ground plane all pointer input is projected onto
pub const GROUND_Y: f32 = 0.0;

/// A ray in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point along the ray at parameter `t`
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Intersect a ray with the horizontal ground plane.
///
/// Returns None if the ray is parallel to the plane or the intersection
/// lies behind the ray origin.
pub fn intersect_ground_plane(ray: &Ray) -> Option<Vec3> {
    let denom = ray.direction.y;
    if denom.abs() < 1e-6 {
        return None;
    }

    let t = (GROUND_Y - ray.origin.y) / denom;
    if t < 0.0 {
        return None;
    }

    let hit = ray.at(t);
    Some(Vec3::new(hit.x, GROUND_Y, hit.z))
}

/// Distance from `p` to the segment `a`-`b`.
pub fn distance_point_to_segment(a: Vec3, b: Vec3, p: Vec3) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();

    if len_sq < 1e-10 {
        return (p - a).length();
    }

    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length()
}

/// Project a world point onto the ground plane's XZ coordinates
pub fn xz(p: Vec3) -> Vec2 {
    Vec2::new(p.x, p.z)
}

/// Ground-plane distance between two points (elevation ignored)
pub fn ground_distance(a: Vec3, b: Vec3) -> f32 {
    xz(a).distance(xz(b))
}

/// Rotate an XZ offset by `angle` radians about the vertical axis.
///
/// Positive angles turn +X toward +Z, matching `atan2(z, x)`.
pub fn rotate_xz(offset: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(offset.x * cos - offset.y * sin, offset.x * sin + offset.y * cos)
}

/// Order points around their centroid and round the corners.
///
/// This is an approximation of a convex hull, not a real one: every input
/// point is kept (interior and collinear points included) and sorted by
/// angle around the centroid. For four or more points a midpoint is inserted
/// after each point toward its successor, wrapping at the end, which softens
/// the outline. Concave arrangements can therefore produce non-convex or
/// self-touching outlines.
///
/// Two or fewer points are returned unchanged, three are returned as-is.
pub fn convex_hull_with_smoothing(points: &[Vec3]) -> Vec<Vec3> {
    if points.len() <= 3 {
        return points.to_vec();
    }

    let centroid = points.iter().copied().sum::<Vec3>() / points.len() as f32;

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        let angle_a = (a.z - centroid.z).atan2(a.x - centroid.x);
        let angle_b = (b.z - centroid.z).atan2(b.x - centroid.x);
        angle_a.total_cmp(&angle_b)
    });

    let mut smoothed = Vec::with_capacity(sorted.len() * 2);
    for (i, point) in sorted.iter().enumerate() {
        let next = sorted[(i + 1) % sorted.len()];
        smoothed.push(*point);
        smoothed.push(point.lerp(next, 0.5));
    }
    smoothed
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_hits_ground_below_camera() {
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(1.0, -1.0, 0.0).normalize());
        let hit = intersect_ground_plane(&ray).unwrap();
        assert_relative_eq!(hit.x, 10.0, epsilon = 1e-4);
        assert_eq!(hit.y, GROUND_Y);
        assert_relative_eq!(hit.z, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::X);
        assert!(intersect_ground_plane(&ray).is_none());
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
        assert!(intersect_ground_plane(&ray).is_none());
    }

    #[test]
    fn test_segment_distance_clamps_to_endpoints() {
        let a = Vec3::ZERO;
        let b = Vec3::new(10.0, 0.0, 0.0);

        assert_relative_eq!(distance_point_to_segment(a, b, Vec3::new(5.0, 0.0, 2.0)), 2.0);
        assert_relative_eq!(distance_point_to_segment(a, b, Vec3::new(-3.0, 0.0, 4.0)), 5.0);
        assert_relative_eq!(distance_point_to_segment(a, b, Vec3::new(13.0, 0.0, 0.0)), 3.0);
    }

    #[test]
    fn test_degenerate_segment_is_point_distance() {
        let a = Vec3::new(1.0, 0.0, 1.0);
        assert_relative_eq!(distance_point_to_segment(a, a, Vec3::new(4.0, 0.0, 5.0)), 5.0);
    }

    #[test]
    fn test_hull_passes_small_inputs_through() {
        let two = [Vec3::ZERO, Vec3::X];
        assert_eq!(convex_hull_with_smoothing(&two), two.to_vec());

        let three = [Vec3::ZERO, Vec3::X, Vec3::Z];
        assert_eq!(convex_hull_with_smoothing(&three), three.to_vec());
    }

    #[test]
    fn test_hull_orders_by_angle_and_inserts_midpoints() {
        let points = [
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(-1.0, 0.0, 1.0),
        ];
        let hull = convex_hull_with_smoothing(&points);

        assert_eq!(hull.len(), 8);
        // Sorted from -pi upward: (-1,-1), (1,-1), (1,1), (-1,1)
        assert_eq!(hull[0], Vec3::new(-1.0, 0.0, -1.0));
        assert_eq!(hull[1], Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(hull[2], Vec3::new(1.0, 0.0, -1.0));
        assert_eq!(hull[4], Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(hull[6], Vec3::new(-1.0, 0.0, 1.0));
        // Wraps back toward the first point
        assert_eq!(hull[7], Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_hull_keeps_interior_points() {
        let points = [
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(-2.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -2.0),
            Vec3::new(0.1, 0.0, 0.1),
        ];
        let hull = convex_hull_with_smoothing(&points);
        assert_eq!(hull.len(), 10);
        assert!(hull.contains(&Vec3::new(0.1, 0.0, 0.1)));
    }

    #[test]
    fn test_rotate_xz_quarter_turn() {
        let rotated = rotate_xz(Vec2::X, std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-6);
    }
}
