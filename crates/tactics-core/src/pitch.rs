//! Pitch dimensions in world units (meters)
//!
//! The pitch lies on the ground plane, centered at the origin, with its
//! length along the X axis and its width along the Z axis.

/// Touchline length
pub const LENGTH: f32 = 105.0;
/// Goal line length
pub const WIDTH: f32 = 68.0;

pub const HALF_LENGTH: f32 = LENGTH * 0.5;
pub const HALF_WIDTH: f32 = WIDTH * 0.5;

pub const CENTER_CIRCLE_RADIUS: f32 = 9.15;
pub const PENALTY_AREA_DEPTH: f32 = 16.5;
pub const PENALTY_AREA_WIDTH: f32 = 40.32;
pub const GOAL_AREA_DEPTH: f32 = 5.5;
pub const GOAL_AREA_WIDTH: f32 = 18.32;
pub const PENALTY_SPOT_DISTANCE: f32 = 11.0;
pub const GOAL_WIDTH: f32 = 7.32;

/// Margin of grass drawn around the lines
pub const RUNOFF: f32 = 5.0;
