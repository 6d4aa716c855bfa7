//! 3D viewport: pointer input, camera navigation and on-screen overlays

use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};
use glam::Vec3;
use tactics_core::gesture::{
    GesturePhase, Key, PointerButton, PointerDown, TransformMode, handles,
};
use tactics_core::geometry::intersect_ground_plane;
use tactics_core::{Player, TeamOptions};
use tactics_renderer::Camera;

use crate::config::{AppConfig, SharedConfig};
use crate::panels::Panel;
use crate::scene::{SceneKey, SceneOptions, build_scene};
use crate::state::{AppState, SharedAppState};
use crate::theme::color32;
use crate::viewport_state::SharedViewportState;

const HANDLE_RADIUS: f32 = 5.0;
const LABEL_CLEARANCE: f32 = 0.5;

/// Viewport panel
pub struct ViewportPanel {
    /// Alt/Shift as seen last frame
    modifiers: egui::Modifiers,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            modifiers: egui::Modifiers::NONE,
        }
    }
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for ViewportPanel {
    fn name(&self) -> &str {
        "Viewport"
    }

    fn needs_render_context(&self) -> bool {
        true
    }

    fn ui(&mut self, ui: &mut egui::Ui, _app_state: &SharedAppState) {
        ui.weak("Viewport requires a wgpu render context");
    }

    fn ui_with_render_context(
        &mut self,
        ui: &mut egui::Ui,
        app_state: &SharedAppState,
        render_state: &egui_wgpu::RenderState,
        viewport_state: &SharedViewportState,
        config: &SharedConfig,
    ) {
        let size = ui.available_size();
        if size.x < 1.0 || size.y < 1.0 {
            return;
        }
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
        let config = config.read().config().clone();

        let pixels_per_point = ui.ctx().pixels_per_point();
        let texture_id = {
            let mut egui_renderer = render_state.renderer.write();
            viewport_state.lock().ensure_texture(
                (rect.width() * pixels_per_point) as u32,
                (rect.height() * pixels_per_point) as u32,
                &mut egui_renderer,
            )
        };

        self.handle_input(ui, &response, rect, app_state, viewport_state, &config);
        sync_scene(app_state, viewport_state, &config);
        viewport_state.lock().render();

        let painter = ui.painter_at(rect);
        painter.image(
            texture_id,
            rect,
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );

        let camera = viewport_state.lock().renderer.camera().clone();
        let state = app_state.lock();
        draw_labels(&painter, rect, &camera, &state, &config);
        if config.editor.show_handles {
            draw_handles(&painter, rect, &camera, &state);
        }
        draw_status(&painter, rect, &state);
    }
}

impl ViewportPanel {
    fn handle_input(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: Rect,
        app_state: &SharedAppState,
        viewport_state: &SharedViewportState,
        config: &AppConfig,
    ) {
        let text_input_focused = ui.ctx().wants_keyboard_input();
        let (events, modifiers, scroll) =
            ui.input(|i| (i.events.clone(), i.modifiers, i.smooth_scroll_delta.y));
        let camera = viewport_state.lock().renderer.camera().clone();

        let mut guard = app_state.lock();
        let state = &mut *guard;

        for (key, was, now) in [
            (Key::Alt, self.modifiers.alt, modifiers.alt),
            (Key::Shift, self.modifiers.shift, modifiers.shift),
        ] {
            if now && !was {
                state.gestures.key_down(&mut state.board, key, text_input_focused);
            } else if was && !now {
                state.gestures.key_up(key);
            }
        }
        self.modifiers = modifiers;

        for event in &events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } if rect.contains(*pos) && response.hovered() => {
                    let Some(button) = pointer_button(*button) else {
                        continue;
                    };
                    let world = ground_point(&camera, rect, *pos);
                    state
                        .gestures
                        .pointer_down(&mut state.board, PointerDown { button, world });
                }
                egui::Event::PointerButton {
                    button,
                    pressed: false,
                    ..
                } => {
                    if let Some(button) = pointer_button(*button) {
                        state.gestures.pointer_released(&mut state.board, button);
                    }
                }
                egui::Event::PointerMoved(pos) if state.gestures.captures_pointer() => {
                    let world = ground_point(&camera, rect, *pos);
                    state.gestures.pointer_move(&mut state.board, world);
                }
                egui::Event::PointerGone => state.gestures.pointer_leave(&mut state.board),
                egui::Event::WindowFocused(false) => state.gestures.cancel(&mut state.board),
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => {
                    if let Some(key) = board_key(*key) {
                        state
                            .gestures
                            .key_down(&mut state.board, key, text_input_focused);
                    }
                }
                _ => {}
            }
        }

        if response.hovered() {
            let draw_tool = state.board.tool.get().draw_kind().is_some();
            let icon = match state.gestures.phase() {
                GesturePhase::DraggingPlayer => egui::CursorIcon::Grabbing,
                GesturePhase::DrawingAnnotation(_) => egui::CursorIcon::Crosshair,
                GesturePhase::TransformingAnnotation(_) => egui::CursorIcon::Move,
                _ if draw_tool => egui::CursorIcon::Crosshair,
                _ => egui::CursorIcon::Default,
            };
            ui.ctx().set_cursor_icon(icon);
        }

        if !state.gestures.allows_camera(&state.board) {
            return;
        }
        drop(guard);

        let camera_config = &config.camera;
        let mut vp = viewport_state.lock();
        let camera = vp.renderer.camera_mut();
        let delta = response.drag_delta();
        if response.dragged_by(egui::PointerButton::Primary) {
            camera.orbit(
                -delta.x * camera_config.orbit_sensitivity,
                delta.y * camera_config.orbit_sensitivity,
            );
        }
        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            camera.pan(delta.x, delta.y, camera_config.pan_sensitivity);
        }
        if response.hovered() && scroll != 0.0 {
            camera.zoom(scroll * camera_config.zoom_sensitivity);
        }
    }
}

/// Rebuild and upload the scene when a store or the selection changed
fn sync_scene(app_state: &SharedAppState, viewport_state: &SharedViewportState, config: &AppConfig) {
    let mut guard = app_state.lock();
    let state = &mut *guard;
    state.gestures.sync(&mut state.board);

    let options = SceneOptions {
        player_radius: config.editor.player_radius,
        player_height: config.editor.player_height,
    };
    let key = SceneKey::new(&state.gestures, options);
    let dirty = state.scene_dirty().take();

    let mut vp = viewport_state.lock();
    if dirty || vp.scene_outdated(&key) {
        let scene = build_scene(&state.board, &key);
        vp.upload_scene(&scene, key);
    }
}

fn pointer_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

fn board_key(key: egui::Key) -> Option<Key> {
    match key {
        egui::Key::Space => Some(Key::Space),
        egui::Key::Delete => Some(Key::Delete),
        egui::Key::Backspace => Some(Key::Backspace),
        egui::Key::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// Ground-plane point under a screen position, if the ray hits the ground
fn ground_point(camera: &Camera, rect: Rect, pos: Pos2) -> Option<Vec3> {
    let local = pos - rect.min;
    let ray = camera.screen_to_ray(local.x, local.y, rect.width(), rect.height());
    intersect_ground_plane(&ray)
}

fn to_screen(camera: &Camera, rect: Rect, point: Vec3) -> Option<Pos2> {
    camera
        .world_to_screen(point, rect.width(), rect.height())
        .map(|p| rect.min + Vec2::new(p.x, p.y))
}

/// Label text for a player under the team's toggles
fn player_label(player: &Player, options: &TeamOptions) -> String {
    let mut parts = Vec::new();
    if options.show_numbers {
        parts.push(player.number.to_string());
    }
    if options.show_names {
        parts.push(player.name.clone());
    }
    if options.show_roles {
        parts.push(player.role.code().to_owned());
    }
    parts.join(" ")
}

fn draw_labels(painter: &egui::Painter, rect: Rect, camera: &Camera, state: &AppState, config: &AppConfig) {
    if !config.editor.show_labels {
        return;
    }
    let font = FontId::proportional(config.editor.label_size);
    let teams = state.board.teams.get();

    for player in state.board.players.get() {
        let label = player_label(player, teams.get(player.team));
        if label.is_empty() {
            continue;
        }
        let anchor = player.position + Vec3::Y * (config.editor.player_height + LABEL_CLEARANCE);
        let Some(pos) = to_screen(camera, rect, anchor) else {
            continue;
        };
        if !rect.contains(pos) {
            continue;
        }
        painter.text(
            pos + Vec2::splat(1.0),
            Align2::CENTER_BOTTOM,
            &label,
            font.clone(),
            Color32::from_black_alpha(180),
        );
        painter.text(pos, Align2::CENTER_BOTTOM, label, font.clone(), Color32::WHITE);
    }
}

fn draw_handles(painter: &egui::Painter, rect: Rect, camera: &Camera, state: &AppState) {
    let Some(annotation) = state
        .gestures
        .selected_annotation()
        .and_then(|id| state.board.annotation(id))
    else {
        return;
    };
    let outline = Stroke::new(1.5, Color32::BLACK);

    for handle in handles(&annotation.shape) {
        let Some(pos) = to_screen(camera, rect, handle.position) else {
            continue;
        };
        match handle.mode {
            TransformMode::Rotate => {
                painter.circle(pos, HANDLE_RADIUS, Color32::from_rgb(255, 170, 40), outline);
            }
            TransformMode::Resize => {
                let square = Rect::from_center_size(pos, Vec2::splat(HANDLE_RADIUS * 2.0));
                painter.rect(square, 1.0, Color32::WHITE, outline);
            }
            TransformMode::ArrowFrom | TransformMode::ArrowTo | TransformMode::Move => {
                painter.circle(pos, HANDLE_RADIUS, color32(annotation.style.color), outline);
            }
        }
    }
}

fn draw_status(painter: &egui::Painter, rect: Rect, state: &AppState) {
    let phase = match state.gestures.phase() {
        GesturePhase::Idle => "Idle".to_owned(),
        GesturePhase::DraggingPlayer => "Dragging player".to_owned(),
        GesturePhase::DrawingAnnotation(kind) => format!("Drawing {}", kind.name()),
        GesturePhase::SelectingAnnotation => "Annotation selected".to_owned(),
        GesturePhase::TransformingAnnotation(mode) => mode.name().to_owned(),
        GesturePhase::OrbitingCamera => "Orbiting".to_owned(),
    };
    let tool = state
        .board
        .tool
        .get()
        .active
        .map(|tool| tool.name())
        .unwrap_or("None");
    let lock = if state.board.nav_locked() {
        "Camera locked"
    } else {
        "Camera free"
    };

    painter.text(
        rect.left_bottom() + Vec2::new(8.0, -8.0),
        Align2::LEFT_BOTTOM,
        format!("{phase}  |  Tool: {tool}  |  {lock}"),
        FontId::monospace(12.0),
        Color32::from_white_alpha(220),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tactics_core::{Color, PlayerId, Role, Team};

    #[test]
    fn test_center_of_viewport_hits_camera_target() {
        let camera = Camera::new(2.0);
        let rect = Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(800.0, 400.0));
        let hit = ground_point(&camera, rect, rect.center()).unwrap();
        assert_relative_eq!(hit.x, 0.0, epsilon = 1e-2);
        assert_relative_eq!(hit.z, 0.0, epsilon = 1e-2);
        assert_eq!(hit.y, 0.0);
    }

    #[test]
    fn test_ground_point_projects_back() {
        let camera = Camera::new(2.0);
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(800.0, 400.0));
        let pos = Pos2::new(300.0, 260.0);
        let hit = ground_point(&camera, rect, pos).unwrap();
        let back = to_screen(&camera, rect, hit).unwrap();
        assert_relative_eq!(back.x, pos.x, epsilon = 0.1);
        assert_relative_eq!(back.y, pos.y, epsilon = 0.1);
    }

    #[test]
    fn test_player_label_follows_toggles() {
        let player = Player::new(PlayerId(7), Team::A, "Kroos", 8, Role::Midfielder, 0.0, 0.0);
        let mut options = TeamOptions::new(Color::RED);
        options.show_numbers = true;
        options.show_names = true;
        options.show_roles = true;
        assert_eq!(player_label(&player, &options), "8 Kroos MF");

        options.show_names = false;
        options.show_numbers = false;
        assert_eq!(player_label(&player, &options), "MF");

        options.show_roles = false;
        assert!(player_label(&player, &options).is_empty());
    }

    #[test]
    fn test_only_board_keys_are_forwarded() {
        assert_eq!(board_key(egui::Key::Space), Some(Key::Space));
        assert_eq!(board_key(egui::Key::A), None);
        assert_eq!(pointer_button(egui::PointerButton::Extra1), None);
    }
}
