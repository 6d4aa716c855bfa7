//! Application state shared between panels

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tactics_core::gesture::GestureController;
use tactics_core::team::TeamFeature;
use tactics_core::{
    AnnotationId, AnnotationStyle, AnnotationStylePatch, Board, PlayerId, PlayerPatch, Team,
    TeamOptionsPatch, Tool, ToolSettings,
};

pub type SharedAppState = Arc<Mutex<AppState>>;

/// Edits requested by the panels, applied once per frame
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    SelectPlayer(Option<PlayerId>),
    UpdatePlayer(PlayerId, PlayerPatch),
    UpdateTeamOptions(Team, TeamOptionsPatch),
    TogglePlayerSelection {
        team: Team,
        feature: TeamFeature,
        player: PlayerId,
    },
    SetTool(Option<Tool>),
    UpdateToolStyle(AnnotationStylePatch),
    SelectAnnotation(Option<AnnotationId>),
    UpdateAnnotationStyle(AnnotationId, AnnotationStylePatch),
    DeleteAnnotation(AnnotationId),
    ClearAnnotations,
    ToggleNavLock,
    ResetCamera,
    TopView,
}

/// Set by store subscribers when the scene needs rebuilding
#[derive(Debug, Clone, Default)]
pub struct SceneDirty(Arc<AtomicBool>);

impl SceneDirty {
    pub fn mark(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Read and clear the flag
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::Relaxed)
    }
}

pub struct AppState {
    pub board: Board,
    pub gestures: GestureController,
    pub show_settings: bool,
    pending_actions: Vec<AppAction>,
    scene_dirty: SceneDirty,
}

impl AppState {
    pub fn new(default_style: AnnotationStyle) -> Self {
        let mut board = Board::default();
        board.tool.set(ToolSettings::with_style(default_style));

        let scene_dirty = SceneDirty::default();
        scene_dirty.mark();
        let flag = scene_dirty.clone();
        board.players.subscribe(move |_| flag.mark());
        let flag = scene_dirty.clone();
        board.teams.subscribe(move |_| flag.mark());
        let flag = scene_dirty.clone();
        board.annotations.subscribe(move |_| flag.mark());

        Self {
            board,
            gestures: GestureController::new(),
            show_settings: false,
            pending_actions: Vec::new(),
            scene_dirty,
        }
    }

    pub fn queue_action(&mut self, action: AppAction) {
        self.pending_actions.push(action);
    }

    pub fn take_pending_actions(&mut self) -> Vec<AppAction> {
        std::mem::take(&mut self.pending_actions)
    }

    pub fn scene_dirty(&self) -> &SceneDirty {
        &self.scene_dirty
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AnnotationStyle::default())
    }
}

pub fn create_shared_state(default_style: AnnotationStyle) -> SharedAppState {
    Arc::new(Mutex::new(AppState::new(default_style)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_store_edits_mark_scene_dirty() {
        let mut state = AppState::default();
        assert!(state.scene_dirty().take());
        assert!(!state.scene_dirty().take());

        let id = state.board.players.get()[0].id;
        state.board.move_player(id, Vec3::new(1.0, 0.0, 1.0));
        assert!(state.scene_dirty().take());

        state.board.set_nav_lock(true);
        assert!(!state.scene_dirty().take());
    }

    #[test]
    fn test_actions_drain_in_order() {
        let mut state = AppState::default();
        state.queue_action(AppAction::ToggleNavLock);
        state.queue_action(AppAction::ClearAnnotations);
        assert_eq!(
            state.take_pending_actions(),
            vec![AppAction::ToggleNavLock, AppAction::ClearAnnotations]
        );
        assert!(state.take_pending_actions().is_empty());
    }
}
