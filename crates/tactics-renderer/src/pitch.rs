//! Static pitch geometry: grass, mowing stripes and markings

use glam::Vec3;
use tactics_core::StrokeStyle;
use tactics_core::pitch::*;

use crate::shapes::ShapeBatch;

const RUNOFF_COLOR: [f32; 4] = [0.16, 0.42, 0.18, 1.0];
const GRASS_LIGHT: [f32; 4] = [0.24, 0.58, 0.25, 1.0];
const GRASS_DARK: [f32; 4] = [0.21, 0.52, 0.22, 1.0];
const LINE_COLOR: [f32; 4] = [0.95, 0.95, 0.95, 1.0];

const LINE_WIDTH: f32 = 0.12;
const STRIPES: usize = 14;
const CIRCLE_SEGMENTS: usize = 64;

/// Lift of the markings above the grass
pub const MARKING_LIFT: f32 = 0.01;

fn p(x: f32, z: f32) -> Vec3 {
    Vec3::new(x, 0.0, z)
}

fn rect(x0: f32, z0: f32, x1: f32, z1: f32) -> [Vec3; 4] {
    [p(x0, z0), p(x1, z0), p(x1, z1), p(x0, z1)]
}

fn arc(center: Vec3, radius: f32, start: f32, end: f32, segments: usize) -> Vec<Vec3> {
    (0..=segments)
        .map(|i| {
            let angle = start + (end - start) * i as f32 / segments as f32;
            center + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
        })
        .collect()
}

/// Build the full pitch as one triangle batch
pub fn pitch_batch() -> ShapeBatch {
    let mut batch = ShapeBatch::new();

    let outer_x = HALF_LENGTH + RUNOFF;
    let outer_z = HALF_WIDTH + RUNOFF;
    batch.quad(rect(-outer_x, -outer_z, outer_x, outer_z), RUNOFF_COLOR);

    let stripe = LENGTH / STRIPES as f32;
    for i in 0..STRIPES {
        let x0 = -HALF_LENGTH + i as f32 * stripe;
        let color = if i % 2 == 0 { GRASS_LIGHT } else { GRASS_DARK };
        batch.quad(rect(x0, -HALF_WIDTH, x0 + stripe, HALF_WIDTH), color);
    }

    batch.set_lift(MARKING_LIFT);
    let line = |batch: &mut ShapeBatch, points: &[Vec3], closed: bool| {
        batch.polyline(points, closed, LINE_WIDTH, LINE_COLOR, StrokeStyle::Solid);
    };

    // Touchlines, goal lines and halfway line
    line(&mut batch, &rect(-HALF_LENGTH, -HALF_WIDTH, HALF_LENGTH, HALF_WIDTH), true);
    line(&mut batch, &[p(0.0, -HALF_WIDTH), p(0.0, HALF_WIDTH)], false);

    line(
        &mut batch,
        &arc(Vec3::ZERO, CENTER_CIRCLE_RADIUS, 0.0, std::f32::consts::TAU, CIRCLE_SEGMENTS),
        false,
    );
    batch.disc(Vec3::ZERO, 0.25, 16, LINE_COLOR);

    for side in [-1.0f32, 1.0] {
        let goal_line = side * HALF_LENGTH;

        let penalty_x = goal_line - side * PENALTY_AREA_DEPTH;
        line(
            &mut batch,
            &[
                p(goal_line, -PENALTY_AREA_WIDTH / 2.0),
                p(penalty_x, -PENALTY_AREA_WIDTH / 2.0),
                p(penalty_x, PENALTY_AREA_WIDTH / 2.0),
                p(goal_line, PENALTY_AREA_WIDTH / 2.0),
            ],
            false,
        );

        let goal_area_x = goal_line - side * GOAL_AREA_DEPTH;
        line(
            &mut batch,
            &[
                p(goal_line, -GOAL_AREA_WIDTH / 2.0),
                p(goal_area_x, -GOAL_AREA_WIDTH / 2.0),
                p(goal_area_x, GOAL_AREA_WIDTH / 2.0),
                p(goal_line, GOAL_AREA_WIDTH / 2.0),
            ],
            false,
        );

        let spot = p(goal_line - side * PENALTY_SPOT_DISTANCE, 0.0);
        batch.disc(spot, 0.2, 12, LINE_COLOR);

        // Penalty arc: the part of the spot's circle outside the area
        let reach = (PENALTY_AREA_DEPTH - PENALTY_SPOT_DISTANCE) / CENTER_CIRCLE_RADIUS;
        let half_angle = reach.clamp(-1.0, 1.0).acos();
        let facing = if side > 0.0 { std::f32::consts::PI } else { 0.0 };
        line(
            &mut batch,
            &arc(spot, CENTER_CIRCLE_RADIUS, facing - half_angle, facing + half_angle, 24),
            false,
        );

        // Goal mouth behind the line
        let depth = side * 1.5;
        line(
            &mut batch,
            &[
                p(goal_line, -GOAL_WIDTH / 2.0),
                p(goal_line + depth, -GOAL_WIDTH / 2.0),
                p(goal_line + depth, GOAL_WIDTH / 2.0),
                p(goal_line, GOAL_WIDTH / 2.0),
            ],
            false,
        );
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_covers_runoff() {
        let batch = pitch_batch();
        assert!(!batch.is_empty());

        let max_x = batch
            .vertices()
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MIN, f32::max);
        assert_eq!(max_x, HALF_LENGTH + RUNOFF);
    }

    #[test]
    fn test_markings_sit_above_grass() {
        let batch = pitch_batch();
        let white = batch
            .vertices()
            .iter()
            .filter(|v| v.color == LINE_COLOR)
            .collect::<Vec<_>>();
        assert!(!white.is_empty());
        assert!(white.iter().all(|v| v.position[1] == MARKING_LIFT));
    }
}
