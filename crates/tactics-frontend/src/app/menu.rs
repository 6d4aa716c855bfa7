//! Menu bar rendering

use crate::state::{AppAction, SharedAppState};

/// Render the menu bar
pub fn render_menu_bar(ctx: &egui::Context, app_state: &SharedAppState) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("Edit", |ui| {
                let has_annotations = !app_state.lock().board.annotations.get().is_empty();
                if ui
                    .add_enabled(has_annotations, egui::Button::new("Clear annotations"))
                    .clicked()
                {
                    app_state.lock().queue_action(AppAction::ClearAnnotations);
                    ui.close_menu();
                }
                if ui.button("Deselect").clicked() {
                    let mut state = app_state.lock();
                    state.queue_action(AppAction::SelectAnnotation(None));
                    state.queue_action(AppAction::SelectPlayer(None));
                    ui.close_menu();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset camera").clicked() {
                    app_state.lock().queue_action(AppAction::ResetCamera);
                    ui.close_menu();
                }
                if ui.button("Top view").clicked() {
                    app_state.lock().queue_action(AppAction::TopView);
                    ui.close_menu();
                }
                ui.separator();
                let mut locked = app_state.lock().board.nav_locked();
                if ui.checkbox(&mut locked, "Lock camera (Space)").changed() {
                    app_state.lock().queue_action(AppAction::ToggleNavLock);
                    ui.close_menu();
                }
            });

            if ui.button("Settings").clicked() {
                app_state.lock().show_settings = true;
            }
        });
    });
}
