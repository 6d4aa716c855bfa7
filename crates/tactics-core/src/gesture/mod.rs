//! Pointer gesture state machine
//!
//! [`GestureController`] turns pointer and key events into board edits:
//! dragging players, drawing annotations, selecting and transforming them.
//! At most one gesture runs at a time. Each gesture owns a
//! [`GestureSession`] that holds the nav lock and the window-level pointer
//! listeners until the gesture ends.

pub mod handles;
pub mod input;
pub mod listeners;
pub mod session;
pub mod transform;

pub use handles::{HANDLE_PICK_RADIUS, Handle, grab_mode, handles, pick_handle};
pub use input::{Key, Modifiers, PointerButton, PointerDown};
pub use listeners::{ListenerGuard, ListenerKind, ListenerRegistry};
pub use session::GestureSession;
pub use transform::{TransformMode, apply_draw, apply_transform};

use glam::Vec3;
use tracing::{debug, info};

use crate::annotation::{Annotation, AnnotationId, ShapeKind, hit_test_annotations};
use crate::board::Board;
use crate::player::PlayerId;
use crate::tool::Tool;

/// What the controller is doing, as reported to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    DraggingPlayer,
    DrawingAnnotation(ShapeKind),
    SelectingAnnotation,
    TransformingAnnotation(TransformMode),
    /// An unclaimed press while navigation is unlocked
    OrbitingCamera,
}

#[derive(Debug)]
enum GestureKind {
    DragPlayer {
        id: PlayerId,
    },
    Draw {
        id: AnnotationId,
        kind: ShapeKind,
    },
    Transform {
        id: AnnotationId,
        mode: TransformMode,
        last: Vec3,
    },
}

#[derive(Debug)]
struct ActiveGesture {
    kind: GestureKind,
    /// Only this button's release ends the gesture
    button: PointerButton,
    session: GestureSession,
}

/// The annotation under edit. Selecting locks navigation; the value it
/// replaced comes back on deselect.
#[derive(Debug)]
struct Selection {
    id: AnnotationId,
    prior_lock: bool,
    _keys: ListenerGuard,
}

#[derive(Debug, Default)]
pub struct GestureController {
    listeners: ListenerRegistry,
    modifiers: Modifiers,
    active: Option<ActiveGesture>,
    selection: Option<Selection>,
    selected_player: Option<PlayerId>,
    orbiting: bool,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GesturePhase {
        if let Some(active) = &self.active {
            return match active.kind {
                GestureKind::DragPlayer { .. } => GesturePhase::DraggingPlayer,
                GestureKind::Draw { kind, .. } => GesturePhase::DrawingAnnotation(kind),
                GestureKind::Transform { mode, .. } => GesturePhase::TransformingAnnotation(mode),
            };
        }
        if self.selection.is_some() {
            GesturePhase::SelectingAnnotation
        } else if self.orbiting {
            GesturePhase::OrbitingCamera
        } else {
            GesturePhase::Idle
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Camera navigation is allowed when no gesture runs and nothing holds
    /// the nav lock
    pub fn allows_camera(&self, board: &Board) -> bool {
        self.active.is_none() && !board.nav_locked()
    }

    /// True while a gesture wants pointer events even outside the viewport
    pub fn captures_pointer(&self) -> bool {
        self.listeners.is_attached(ListenerKind::PointerMove)
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    pub fn selected_annotation(&self) -> Option<AnnotationId> {
        self.selection.as_ref().map(|s| s.id)
    }

    pub fn selected_player(&self) -> Option<PlayerId> {
        self.selected_player
    }

    pub fn select_player(&mut self, player: Option<PlayerId>) {
        self.selected_player = player;
    }

    /// Select an annotation, or re-target an existing selection
    pub fn select_annotation(&mut self, board: &mut Board, id: AnnotationId) {
        if board.annotation(id).is_none() {
            return;
        }
        match &mut self.selection {
            Some(selection) => selection.id = id,
            None => {
                let prior_lock = board.nav_locked();
                board.set_nav_lock(true);
                self.selection = Some(Selection {
                    id,
                    prior_lock,
                    _keys: self.listeners.attach(&[ListenerKind::Keyboard]),
                });
            }
        }
        debug!("Selected annotation {}", id);
    }

    /// Drop the annotation selection and restore the nav lock
    pub fn clear_selection(&mut self, board: &mut Board) {
        if let Some(selection) = self.selection.take() {
            board.set_nav_lock(selection.prior_lock);
            debug!("Deselected annotation {}", selection.id);
        }
    }

    /// Forget a selection whose annotation was removed elsewhere
    pub fn sync(&mut self, board: &mut Board) {
        let stale = self
            .selection
            .as_ref()
            .is_some_and(|s| board.annotation(s.id).is_none());
        if stale {
            self.clear_selection(board);
        }
        if self
            .selected_player
            .is_some_and(|id| board.player(id).is_none())
        {
            self.selected_player = None;
        }
    }

    /// Handle a pointer press. Returns true if the press was claimed and
    /// must not reach the camera.
    pub fn pointer_down(&mut self, board: &mut Board, event: PointerDown) -> bool {
        if self.active.is_some() {
            debug!("Ignoring {:?} press during an active gesture", event.button);
            return true;
        }
        let Some(point) = event.world else {
            return false;
        };

        let claimed = match event.button {
            PointerButton::Primary => self.primary_down(board, point),
            PointerButton::Secondary => self.secondary_down(board, point),
            PointerButton::Middle => false,
        };
        self.orbiting = !claimed && !board.nav_locked();
        claimed
    }

    fn primary_down(&mut self, board: &mut Board, point: Vec3) -> bool {
        let tool = board.tool.get().active;

        if tool == Some(Tool::Erase) {
            if !self.erase_at(board, point) && board.pick_player(point).is_none() {
                self.clear_selection(board);
            }
            return true;
        }

        if let Some(selected) = self.selected_annotation() {
            let grabbed = board
                .annotation(selected)
                .and_then(|a| grab_mode(&a.shape, point, self.modifiers));
            if let Some(mode) = grabbed {
                self.begin_transform(board, selected, mode, point);
                return true;
            }
        }

        let hit = hit_test_annotations(board.annotations.get(), point);
        let player = board.pick_player(point);

        if hit.is_none() && player.is_none() {
            // Empty field acts as escape for the selection
            self.clear_selection(board);
        }

        match tool {
            Some(Tool::Draw(kind)) => {
                self.begin_draw(board, kind, point);
                true
            }
            Some(Tool::Select) if hit.is_some() => {
                if let Some(id) = hit {
                    self.select_annotation(board, id);
                }
                true
            }
            _ => match player {
                Some(id) => {
                    self.begin_player_drag(board, id);
                    true
                }
                None => {
                    self.selected_player = None;
                    false
                }
            },
        }
    }

    fn secondary_down(&mut self, board: &mut Board, point: Vec3) -> bool {
        match hit_test_annotations(board.annotations.get(), point) {
            Some(id) if self.selected_annotation() == Some(id) => {
                self.clear_selection(board);
                true
            }
            Some(id) => {
                self.select_annotation(board, id);
                true
            }
            None => {
                self.clear_selection(board);
                false
            }
        }
    }

    /// Remove the topmost annotation under `point`. Returns false on a miss.
    fn erase_at(&mut self, board: &mut Board, point: Vec3) -> bool {
        let Some(id) = hit_test_annotations(board.annotations.get(), point) else {
            return false;
        };
        if self.selected_annotation() == Some(id) {
            self.clear_selection(board);
        }
        board.remove_annotation(id);
        info!("Erased annotation {}", id);
        true
    }

    fn begin_player_drag(&mut self, board: &mut Board, id: PlayerId) {
        let session = GestureSession::begin(board, &self.listeners);
        self.selected_player = Some(id);
        self.active = Some(ActiveGesture {
            kind: GestureKind::DragPlayer { id },
            button: PointerButton::Primary,
            session,
        });
        info!("Dragging player {}", id);
    }

    fn begin_draw(&mut self, board: &mut Board, kind: ShapeKind, point: Vec3) {
        let session = GestureSession::begin(board, &self.listeners);
        let style = board.tool.get().style;
        let id = board.add_annotation(Annotation::new(kind, point, style));
        self.active = Some(ActiveGesture {
            kind: GestureKind::Draw { id, kind },
            button: PointerButton::Primary,
            session,
        });
        info!("Drawing {} {}", kind.name(), id);
    }

    fn begin_transform(&mut self, board: &mut Board, id: AnnotationId, mode: TransformMode, point: Vec3) {
        let session = GestureSession::begin(board, &self.listeners);
        self.active = Some(ActiveGesture {
            kind: GestureKind::Transform {
                id,
                mode,
                last: point,
            },
            button: PointerButton::Primary,
            session,
        });
        info!("{} annotation {}", mode.name(), id);
    }

    /// Pointer motion, projected onto the ground. Misses are ignored.
    pub fn pointer_move(&mut self, board: &mut Board, world: Option<Vec3>) {
        let (Some(point), Some(active)) = (world, self.active.as_mut()) else {
            return;
        };

        match &mut active.kind {
            GestureKind::DragPlayer { id } => board.move_player(*id, point),
            GestureKind::Draw { id, .. } => {
                board
                    .annotations
                    .modify_by_id(*id, |a| apply_draw(&mut a.shape, point));
            }
            GestureKind::Transform { id, mode, last } => {
                let delta = point - *last;
                let mode = *mode;
                board
                    .annotations
                    .modify_by_id(*id, |a| apply_transform(&mut a.shape, mode, point, delta));
                *last = point;
            }
        }
    }

    pub fn pointer_up(&mut self, board: &mut Board) {
        self.orbiting = false;
        self.finish(board);
    }

    /// Release of `button`. A running gesture only ends on the release of
    /// the button that started it, while its release listener is attached.
    pub fn pointer_released(&mut self, board: &mut Board, button: PointerButton) {
        let listening = self.listeners.is_attached(ListenerKind::PointerUp);
        let foreign = self
            .active
            .as_ref()
            .is_some_and(|active| !listening || active.button != button);
        if foreign {
            debug!("Ignoring {:?} release during an active gesture", button);
            return;
        }
        self.pointer_up(board);
    }

    /// Pointer left the window; ends the gesture like a release
    pub fn pointer_leave(&mut self, board: &mut Board) {
        self.pointer_up(board);
    }

    /// Abort any running gesture, e.g. when the window loses focus
    pub fn cancel(&mut self, board: &mut Board) {
        self.orbiting = false;
        self.finish(board);
    }

    fn finish(&mut self, board: &mut Board) {
        let Some(active) = self.active.take() else {
            return;
        };
        active.session.end(board);

        match active.kind {
            GestureKind::DragPlayer { id } => info!("Finished dragging player {}", id),
            GestureKind::Draw { id, kind } => {
                // Draw tools are one-shot
                board.set_tool(None);
                info!("Finished drawing {} {}", kind.name(), id);
            }
            GestureKind::Transform { id, mode, .. } => {
                info!("Finished {} on annotation {}", mode.name(), id)
            }
        }
    }

    /// Key press. `text_input_focused` suppresses the board shortcuts.
    pub fn key_down(&mut self, board: &mut Board, key: Key, text_input_focused: bool) {
        match key {
            Key::Alt => self.modifiers.alt = true,
            Key::Shift => self.modifiers.shift = true,
            _ if text_input_focused => {}
            Key::Space => {
                let locked = board.toggle_nav_lock();
                info!("Navigation {}", if locked { "locked" } else { "unlocked" });
            }
            Key::Delete | Key::Backspace if self.listeners.is_attached(ListenerKind::Keyboard) => {
                self.delete_selected(board)
            }
            Key::Delete | Key::Backspace => {}
            Key::Escape => {
                if self.active.is_some() {
                    self.cancel(board);
                } else {
                    self.clear_selection(board);
                }
            }
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Alt => self.modifiers.alt = false,
            Key::Shift => self.modifiers.shift = false,
            _ => {}
        }
    }

    /// Remove the selected annotation and clear the selection
    pub fn delete_selected(&mut self, board: &mut Board) {
        let Some(id) = self.selected_annotation() else {
            return;
        };
        self.finish(board);
        self.clear_selection(board);
        board.remove_annotation(id);
        info!("Deleted annotation {}", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Shape;

    fn board_with_tool(tool: Option<Tool>) -> Board {
        let mut board = Board::default();
        board.set_tool(tool);
        board
    }

    fn draw(controller: &mut GestureController, board: &mut Board, kind: ShapeKind, from: Vec3, to: Vec3) -> AnnotationId {
        board.set_tool(Some(Tool::Draw(kind)));
        controller.pointer_down(board, PointerDown::primary(from));
        controller.pointer_move(board, Some(to));
        controller.pointer_up(board);
        board.annotations.get().last().map(|a| a.id).unwrap()
    }

    // An empty spot away from the default roster
    const FIELD: Vec3 = Vec3::new(0.0, 0.0, 30.0);

    #[test]
    fn test_draw_restores_lock_and_clears_tool() {
        for prior in [false, true] {
            let mut board = board_with_tool(Some(Tool::Draw(ShapeKind::Circle)));
            board.set_nav_lock(prior);
            let mut controller = GestureController::new();

            controller.pointer_down(&mut board, PointerDown::primary(FIELD));
            assert_eq!(controller.phase(), GesturePhase::DrawingAnnotation(ShapeKind::Circle));
            assert!(board.nav_locked());
            assert!(controller.captures_pointer());

            controller.pointer_move(&mut board, Some(FIELD + Vec3::new(3.0, 0.0, 0.0)));
            controller.pointer_up(&mut board);

            assert_eq!(board.nav_locked(), prior);
            assert_eq!(board.tool.get().active, None);
            assert_eq!(controller.phase(), GesturePhase::Idle);
            assert!(controller.listeners().is_empty());
        }
    }

    #[test]
    fn test_space_during_gesture_is_overwritten() {
        let mut board = board_with_tool(Some(Tool::Draw(ShapeKind::Arrow)));
        let mut controller = GestureController::new();

        controller.pointer_down(&mut board, PointerDown::primary(FIELD));
        controller.key_down(&mut board, Key::Space, false);
        controller.pointer_up(&mut board);

        assert!(!board.nav_locked());
    }

    #[test]
    fn test_player_drag() {
        let mut board = Board::default();
        let mut controller = GestureController::new();
        let player = board.players.get()[0].clone();

        assert!(controller.pointer_down(&mut board, PointerDown::primary(player.position)));
        assert_eq!(controller.phase(), GesturePhase::DraggingPlayer);
        assert_eq!(controller.selected_player(), Some(player.id));

        let target = Vec3::new(-20.0, 0.0, 10.0);
        controller.pointer_move(&mut board, Some(target));
        controller.pointer_leave(&mut board);

        assert_eq!(board.player(player.id).map(|p| p.position), Some(target));
        assert!(!board.nav_locked());
        assert_eq!(controller.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_press_during_gesture_is_ignored() {
        let mut board = board_with_tool(Some(Tool::Draw(ShapeKind::Rectangle)));
        let mut controller = GestureController::new();

        controller.pointer_down(&mut board, PointerDown::primary(FIELD));
        controller.pointer_down(&mut board, PointerDown::primary(FIELD + Vec3::X));
        controller.pointer_down(&mut board, PointerDown::secondary(FIELD));

        assert_eq!(board.annotations.get().len(), 1);
        assert_eq!(controller.listeners().len(), 2);
    }

    #[test]
    fn test_ray_miss_is_noop() {
        let mut board = board_with_tool(Some(Tool::Draw(ShapeKind::Rectangle)));
        let mut controller = GestureController::new();
        let missed = PointerDown {
            button: PointerButton::Primary,
            world: None,
        };
        assert!(!controller.pointer_down(&mut board, missed));
        assert!(board.annotations.get().is_empty());
    }

    #[test]
    fn test_right_click_toggles_and_retargets() {
        let mut board = Board::default();
        let mut controller = GestureController::new();
        let first = draw(&mut controller, &mut board, ShapeKind::Circle, FIELD, FIELD + Vec3::new(2.0, 0.0, 0.0));
        let far = FIELD + Vec3::new(20.0, 0.0, 0.0);
        let second = draw(&mut controller, &mut board, ShapeKind::Circle, far, far + Vec3::new(2.0, 0.0, 0.0));

        controller.pointer_down(&mut board, PointerDown::secondary(FIELD));
        assert_eq!(controller.selected_annotation(), Some(first));
        assert_eq!(controller.phase(), GesturePhase::SelectingAnnotation);
        assert!(board.nav_locked());

        controller.pointer_down(&mut board, PointerDown::secondary(far));
        assert_eq!(controller.selected_annotation(), Some(second));
        assert!(board.nav_locked());

        controller.pointer_down(&mut board, PointerDown::secondary(far));
        assert_eq!(controller.selected_annotation(), None);
        assert!(!board.nav_locked());
    }

    #[test]
    fn test_empty_click_clears_selection() {
        let mut board = Board::default();
        let mut controller = GestureController::new();
        let id = draw(&mut controller, &mut board, ShapeKind::Circle, FIELD, FIELD + Vec3::new(2.0, 0.0, 0.0));
        controller.select_annotation(&mut board, id);

        controller.pointer_down(&mut board, PointerDown::primary(Vec3::new(0.0, 0.0, -30.0)));
        controller.pointer_up(&mut board);

        assert_eq!(controller.selected_annotation(), None);
        assert!(!board.nav_locked());
    }

    #[test]
    fn test_transform_keeps_selection_lock() {
        let mut board = Board::default();
        let mut controller = GestureController::new();
        let id = draw(&mut controller, &mut board, ShapeKind::Circle, FIELD, FIELD + Vec3::new(3.0, 0.0, 0.0));
        controller.select_annotation(&mut board, id);

        controller.pointer_down(&mut board, PointerDown::primary(FIELD));
        assert_eq!(
            controller.phase(),
            GesturePhase::TransformingAnnotation(TransformMode::Move)
        );
        controller.pointer_move(&mut board, Some(FIELD + Vec3::new(1.0, 0.0, 1.0)));
        controller.pointer_up(&mut board);

        assert_eq!(controller.phase(), GesturePhase::SelectingAnnotation);
        assert!(board.nav_locked());
        let Some(Shape::Circle { center, .. }) = board.annotation(id).map(|a| a.shape) else {
            panic!("expected circle");
        };
        assert_eq!(center, FIELD + Vec3::new(1.0, 0.0, 1.0));

        controller.key_down(&mut board, Key::Escape, false);
        assert!(!board.nav_locked());
    }

    #[test]
    fn test_erase_removes_topmost_and_selection() {
        let mut board = Board::default();
        let mut controller = GestureController::new();
        let below = draw(&mut controller, &mut board, ShapeKind::Circle, FIELD, FIELD + Vec3::new(5.0, 0.0, 0.0));
        let above = draw(&mut controller, &mut board, ShapeKind::Circle, FIELD, FIELD + Vec3::new(1.0, 0.0, 0.0));
        controller.select_annotation(&mut board, above);

        board.set_tool(Some(Tool::Erase));
        controller.pointer_down(&mut board, PointerDown::primary(FIELD));
        controller.pointer_up(&mut board);

        assert!(board.annotation(above).is_none());
        assert!(board.annotation(below).is_some());
        assert_eq!(controller.selected_annotation(), None);
        assert!(!board.nav_locked());
        assert_eq!(board.tool.get().active, Some(Tool::Erase));
    }

    #[test]
    fn test_erase_miss_clears_selection() {
        let mut board = Board::default();
        let mut controller = GestureController::new();
        let id = draw(&mut controller, &mut board, ShapeKind::Circle, FIELD, FIELD + Vec3::new(2.0, 0.0, 0.0));
        controller.pointer_down(&mut board, PointerDown::secondary(FIELD));
        assert_eq!(controller.selected_annotation(), Some(id));
        assert!(board.nav_locked());

        board.set_tool(Some(Tool::Erase));
        controller.pointer_down(&mut board, PointerDown::primary(Vec3::new(0.0, 0.0, -30.0)));
        controller.pointer_up(&mut board);

        assert!(board.annotation(id).is_some());
        assert_eq!(controller.selected_annotation(), None);
        assert!(!board.nav_locked());
    }

    #[test]
    fn test_only_starting_button_release_ends_gesture() {
        let mut board = board_with_tool(Some(Tool::Draw(ShapeKind::Rectangle)));
        let mut controller = GestureController::new();

        controller.pointer_down(&mut board, PointerDown::primary(FIELD));
        controller.pointer_down(&mut board, PointerDown::secondary(FIELD));
        controller.pointer_released(&mut board, PointerButton::Secondary);
        controller.pointer_released(&mut board, PointerButton::Middle);

        assert_eq!(controller.phase(), GesturePhase::DrawingAnnotation(ShapeKind::Rectangle));
        assert!(board.nav_locked());
        assert_eq!(board.tool.get().active, Some(Tool::Draw(ShapeKind::Rectangle)));

        controller.pointer_move(&mut board, Some(FIELD + Vec3::new(4.0, 0.0, 2.0)));
        controller.pointer_released(&mut board, PointerButton::Primary);

        assert_eq!(controller.phase(), GesturePhase::Idle);
        assert!(!board.nav_locked());
        assert_eq!(board.tool.get().active, None);
        assert!(controller.listeners().is_empty());
    }

    #[test]
    fn test_delete_key_respects_text_focus() {
        let mut board = Board::default();
        let mut controller = GestureController::new();
        let id = draw(&mut controller, &mut board, ShapeKind::Arrow, FIELD, FIELD + Vec3::new(5.0, 0.0, 0.0));
        controller.select_annotation(&mut board, id);
        assert!(controller.listeners().is_attached(ListenerKind::Keyboard));

        controller.key_down(&mut board, Key::Delete, true);
        assert!(board.annotation(id).is_some());

        controller.key_down(&mut board, Key::Backspace, false);
        assert!(board.annotation(id).is_none());
        assert_eq!(controller.selected_annotation(), None);
        assert!(controller.listeners().is_empty());
    }

    #[test]
    fn test_space_ignored_with_text_focus() {
        let mut board = Board::default();
        let mut controller = GestureController::new();
        controller.key_down(&mut board, Key::Space, true);
        assert!(!board.nav_locked());
        controller.key_down(&mut board, Key::Space, false);
        assert!(board.nav_locked());
    }

    #[test]
    fn test_alt_held_rotates_rectangle() {
        let mut board = Board::default();
        let mut controller = GestureController::new();
        let id = draw(
            &mut controller,
            &mut board,
            ShapeKind::Rectangle,
            FIELD - Vec3::new(4.0, 0.0, 2.0),
            FIELD + Vec3::new(4.0, 0.0, 2.0),
        );
        controller.select_annotation(&mut board, id);

        controller.key_down(&mut board, Key::Alt, false);
        controller.pointer_down(&mut board, PointerDown::primary(FIELD + Vec3::new(1.0, 0.0, 0.0)));
        controller.key_up(Key::Alt);
        assert_eq!(
            controller.phase(),
            GesturePhase::TransformingAnnotation(TransformMode::Rotate)
        );
        controller.cancel(&mut board);
        assert_eq!(controller.phase(), GesturePhase::SelectingAnnotation);
    }

    #[test]
    fn test_unclaimed_press_orbits_when_unlocked() {
        let mut board = Board::default();
        let mut controller = GestureController::new();
        assert!(!controller.pointer_down(&mut board, PointerDown::primary(FIELD)));
        assert_eq!(controller.phase(), GesturePhase::OrbitingCamera);
        assert!(controller.allows_camera(&board));
        controller.pointer_up(&mut board);
        assert_eq!(controller.phase(), GesturePhase::Idle);

        board.set_nav_lock(true);
        controller.pointer_down(&mut board, PointerDown::primary(FIELD));
        assert_eq!(controller.phase(), GesturePhase::Idle);
        assert!(!controller.allows_camera(&board));
    }

    #[test]
    fn test_sync_drops_stale_selection() {
        let mut board = Board::default();
        let mut controller = GestureController::new();
        let id = draw(&mut controller, &mut board, ShapeKind::Circle, FIELD, FIELD + Vec3::X);
        controller.select_annotation(&mut board, id);

        board.clear_annotations();
        controller.sync(&mut board);
        assert_eq!(controller.selected_annotation(), None);
        assert!(!board.nav_locked());
    }
}
