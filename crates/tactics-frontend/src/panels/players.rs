//! Players panel - roster list and per-player editor

use glam::Vec3;
use tactics_core::pitch::{HALF_LENGTH, HALF_WIDTH, RUNOFF};
use tactics_core::{Player, PlayerPatch, Role, Team};

use crate::panels::Panel;
use crate::state::{AppAction, SharedAppState};

/// Roster grouped by team; the selected player can be edited
pub struct PlayersPanel;

impl PlayersPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlayersPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for PlayersPanel {
    fn name(&self) -> &str {
        "Players"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let (players, selected) = {
            let state = app_state.lock();
            (
                state.board.players.get().clone(),
                state.gestures.selected_player(),
            )
        };
        let mut actions = Vec::new();

        egui::ScrollArea::vertical().show(ui, |ui| {
            for team in Team::ALL {
                egui::CollapsingHeader::new(format!("Team {}", team.name()))
                    .default_open(true)
                    .show(ui, |ui| {
                        for player in players.iter().filter(|p| p.team == team) {
                            let is_selected = selected == Some(player.id);
                            let label = format!(
                                "{:>2}  {}  ({})",
                                player.number,
                                player.name,
                                player.role.code()
                            );
                            if ui.selectable_label(is_selected, label).clicked() {
                                let next = if is_selected { None } else { Some(player.id) };
                                actions.push(AppAction::SelectPlayer(next));
                            }
                        }
                    });
            }

            ui.separator();
            match selected.and_then(|id| players.iter().find(|p| p.id == id)) {
                Some(player) => player_editor(ui, player, &mut actions),
                None => {
                    ui.weak("Select a player to edit.\nPlayers can also be dragged in the viewport.");
                }
            }
        });

        if !actions.is_empty() {
            let mut state = app_state.lock();
            for action in actions {
                state.queue_action(action);
            }
        }
    }
}

fn player_editor(ui: &mut egui::Ui, player: &Player, actions: &mut Vec<AppAction>) {
    ui.heading(format!("{} ({})", player.name, player.team.name()));

    let mut patch = PlayerPatch::default();

    egui::Grid::new("player_editor")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Name:");
            let mut name = player.name.clone();
            if ui.text_edit_singleline(&mut name).changed() {
                patch.name = Some(name);
            }
            ui.end_row();

            ui.label("Number:");
            let mut number = player.number;
            if ui
                .add(egui::DragValue::new(&mut number).range(0..=99))
                .changed()
            {
                patch.number = Some(number);
            }
            ui.end_row();

            ui.label("Role:");
            let mut role = player.role;
            egui::ComboBox::from_id_salt("player_role")
                .selected_text(role.name())
                .show_ui(ui, |ui| {
                    for r in Role::ALL {
                        ui.selectable_value(&mut role, r, r.name());
                    }
                });
            if role != player.role {
                patch.role = Some(role);
            }
            ui.end_row();

            let mut x = player.position.x;
            let mut z = player.position.z;
            let x_limit = HALF_LENGTH + RUNOFF;
            let z_limit = HALF_WIDTH + RUNOFF;

            ui.label("X:");
            let x_changed = ui
                .add(
                    egui::DragValue::new(&mut x)
                        .speed(0.1)
                        .range(-x_limit..=x_limit)
                        .suffix(" m"),
                )
                .changed();
            ui.end_row();

            ui.label("Z:");
            let z_changed = ui
                .add(
                    egui::DragValue::new(&mut z)
                        .speed(0.1)
                        .range(-z_limit..=z_limit)
                        .suffix(" m"),
                )
                .changed();
            ui.end_row();

            if x_changed || z_changed {
                patch.position = Some(Vec3::new(x, player.position.y, z));
            }
        });

    if patch != PlayerPatch::default() {
        actions.push(AppAction::UpdatePlayer(player.id, patch));
    }
}
