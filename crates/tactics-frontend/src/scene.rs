//! Board snapshot to renderer geometry

use tactics_core::gesture::GestureController;
use tactics_core::{Annotation, AnnotationId, Board, PlayerId, Shape, StrokeStyle, Team};
use tactics_renderer::{PlayerInstance, ShapeBatch};

const COVERED_AREA_LIFT: f32 = 0.02;
const PASSING_NET_LIFT: f32 = 0.03;
const ANNOTATION_LIFT: f32 = 0.04;
/// Extra lift per annotation so later ones draw on top
const ANNOTATION_STEP: f32 = 0.0005;

const COVERED_AREA_ALPHA: f32 = 0.25;
const FILL_ALPHA: f32 = 0.35;
const NET_WIDTH: f32 = 0.15;
const OUTLINE_WIDTH: f32 = 0.1;
const SELECTION_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.9];
const SELECTION_MARGIN: f32 = 0.2;
const CIRCLE_SEGMENTS: usize = 48;

/// Player cylinder dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneOptions {
    pub player_radius: f32,
    pub player_height: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            player_radius: 0.8,
            player_height: 1.8,
        }
    }
}

/// Everything the renderer draws besides the static pitch
#[derive(Debug, Default)]
pub struct Scene {
    pub overlays: ShapeBatch,
    pub players: Vec<PlayerInstance>,
}

/// What a built scene depends on besides the stores
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneKey {
    pub selected_annotation: Option<AnnotationId>,
    pub selected_player: Option<PlayerId>,
    pub options: Option<SceneOptions>,
}

impl SceneKey {
    pub fn new(gestures: &GestureController, options: SceneOptions) -> Self {
        Self {
            selected_annotation: gestures.selected_annotation(),
            selected_player: gestures.selected_player(),
            options: Some(options),
        }
    }
}

pub fn build_scene(board: &Board, key: &SceneKey) -> Scene {
    let options = key.options.unwrap_or_default();
    let mut overlays = ShapeBatch::new();
    let teams = board.teams.get();

    overlays.set_lift(COVERED_AREA_LIFT);
    for team in Team::ALL {
        let team_options = teams.get(team);
        if !team_options.show_covered_area {
            continue;
        }
        if let Some(area) = board.covered_area(team) {
            let color = team_options.color;
            overlays.fill_polygon(&area, color.with_alpha(COVERED_AREA_ALPHA).to_array());
            overlays.polyline(
                &area,
                true,
                OUTLINE_WIDTH,
                color.to_array(),
                StrokeStyle::Solid,
            );
        }
    }

    overlays.set_lift(PASSING_NET_LIFT);
    for team in Team::ALL {
        let team_options = teams.get(team);
        if !team_options.show_passing_net {
            continue;
        }
        let color = team_options.color.to_array();
        for [a, b] in board.passing_network(team) {
            overlays.segment(a, b, NET_WIDTH, color);
        }
    }

    for (index, annotation) in board.annotations.get().iter().enumerate() {
        overlays.set_lift(ANNOTATION_LIFT + index as f32 * ANNOTATION_STEP);
        let selected = key.selected_annotation == Some(annotation.id);
        push_annotation(&mut overlays, annotation, selected);
    }

    let players = board
        .players
        .get()
        .iter()
        .map(|player| {
            let color = teams.get(player.team).color.to_array();
            let highlight = if key.selected_player == Some(player.id) {
                1.0
            } else {
                0.0
            };
            PlayerInstance::new(
                player.position,
                options.player_radius,
                options.player_height,
                color,
            )
            .with_highlight(highlight)
        })
        .collect();

    Scene { overlays, players }
}

fn push_annotation(batch: &mut ShapeBatch, annotation: &Annotation, selected: bool) {
    let style = annotation.style;
    let color = style.color.to_array();
    let stroke = style.stroke_or_default();
    let width = style.line_width;

    match annotation.shape {
        Shape::Arrow { from, to } => {
            let head_length = (width * 4.0).max(0.8);
            if selected {
                batch.segment(from, to, width + SELECTION_MARGIN, SELECTION_COLOR);
            }
            match annotation.shape.arrow_head(head_length) {
                Some(head) => batch.arrow(from, to, head, width, color, stroke),
                None => batch.polyline(&[from, to], false, width, color, stroke),
            }
        }
        Shape::Rectangle { .. } | Shape::Square { .. } | Shape::Circle { .. } => {
            let Some(outline) = annotation.shape.outline(CIRCLE_SEGMENTS) else {
                return;
            };
            if selected {
                batch.polyline(
                    &outline,
                    true,
                    width + SELECTION_MARGIN,
                    SELECTION_COLOR,
                    StrokeStyle::Solid,
                );
            }
            if style.filled {
                batch.fill_polygon(&outline, style.color.with_alpha(FILL_ALPHA).to_array());
            }
            batch.polyline(&outline, true, width, color, stroke);
        }
    }
}
