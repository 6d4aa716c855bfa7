//! Applies queued [`AppAction`]s to the board and the camera

use crate::config::SharedConfig;
use crate::state::{AppAction, AppState, SharedAppState};
use crate::viewport_state::SharedViewportState;

/// Everything an action handler may touch
pub struct ActionContext<'a> {
    pub app_state: &'a SharedAppState,
    pub viewport_state: Option<&'a SharedViewportState>,
    pub config: &'a SharedConfig,
}

/// Drain the queue and apply every action in order
pub fn process_actions(ctx: &ActionContext) {
    let actions = ctx.app_state.lock().take_pending_actions();
    for action in actions {
        tracing::debug!("Applying {:?}", action);
        match action {
            AppAction::ResetCamera => reset_camera(ctx),
            AppAction::TopView => {
                if let Some(viewport_state) = ctx.viewport_state {
                    viewport_state.lock().renderer.camera_mut().set_top_view();
                }
            }
            action => apply_board_action(&mut ctx.app_state.lock(), action),
        }
    }
}

fn reset_camera(ctx: &ActionContext) {
    let Some(viewport_state) = ctx.viewport_state else {
        return;
    };
    let camera_config = ctx.config.read().config().camera.clone();
    camera_config.apply(viewport_state.lock().renderer.camera_mut());
}

/// Board edits; camera actions are ignored here
pub fn apply_board_action(state: &mut AppState, action: AppAction) {
    let AppState { board, gestures, .. } = state;

    match action {
        AppAction::SelectPlayer(player) => gestures.select_player(player),
        AppAction::UpdatePlayer(id, patch) => {
            if let Err(e) = board.update_player(id, patch) {
                tracing::warn!("Rejected player edit: {}", e);
            }
        }
        AppAction::UpdateTeamOptions(team, patch) => board.update_team_options(team, patch),
        AppAction::TogglePlayerSelection {
            team,
            feature,
            player,
        } => {
            if let Err(e) = board.toggle_player_selection(team, feature, player) {
                tracing::warn!("Rejected membership toggle: {}", e);
            }
        }
        AppAction::SetTool(tool) => board.set_tool(tool),
        AppAction::UpdateToolStyle(patch) => board.update_tool_style(patch),
        AppAction::SelectAnnotation(Some(id)) => gestures.select_annotation(board, id),
        AppAction::SelectAnnotation(None) => gestures.clear_selection(board),
        AppAction::UpdateAnnotationStyle(id, patch) => board.update_annotation_style(id, patch),
        AppAction::DeleteAnnotation(id) => {
            if gestures.selected_annotation() == Some(id) {
                gestures.delete_selected(board);
            } else if board.remove_annotation(id).is_some() {
                tracing::info!("Deleted annotation {}", id);
            }
        }
        AppAction::ClearAnnotations => {
            gestures.cancel(board);
            gestures.clear_selection(board);
            board.clear_annotations();
            tracing::info!("Cleared all annotations");
        }
        AppAction::ToggleNavLock => {
            let locked = board.toggle_nav_lock();
            tracing::info!("Navigation {}", if locked { "locked" } else { "unlocked" });
        }
        AppAction::ResetCamera | AppAction::TopView => {}
    }
}
