//! Teams panel - colors, label toggles and derived-visualization members

use tactics_core::team::TeamFeature;
use tactics_core::{Color, Player, Team, TeamOptions, TeamOptionsPatch};

use crate::panels::Panel;
use crate::state::{AppAction, SharedAppState};

pub struct TeamsPanel;

impl TeamsPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TeamsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for TeamsPanel {
    fn name(&self) -> &str {
        "Teams"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let (teams, players, segment_counts, has_area) = {
            let state = app_state.lock();
            let board = &state.board;
            (
                board.teams.get().clone(),
                board.players.get().clone(),
                Team::ALL.map(|team| board.passing_network(team).len()),
                Team::ALL.map(|team| board.covered_area(team).is_some()),
            )
        };
        let mut actions = Vec::new();

        egui::ScrollArea::vertical().show(ui, |ui| {
            for (index, team) in Team::ALL.into_iter().enumerate() {
                let options = teams.get(team);
                ui.push_id(team.name(), |ui| {
                    ui.heading(format!("Team {}", team.name()));
                    team_options_ui(ui, team, options, &mut actions);

                    let roster: Vec<&Player> = players.iter().filter(|p| p.team == team).collect();
                    for feature in TeamFeature::ALL {
                        let summary = match feature {
                            TeamFeature::PassingNet => {
                                format!("{} ({} lines)", feature.name(), segment_counts[index])
                            }
                            TeamFeature::CoveredArea if has_area[index] => feature.name().to_owned(),
                            TeamFeature::CoveredArea => {
                                format!("{} (needs 3 players)", feature.name())
                            }
                        };
                        egui::CollapsingHeader::new(summary)
                            .id_salt(feature.name())
                            .show(ui, |ui| {
                                membership_ui(ui, team, feature, options, &roster, &mut actions);
                            });
                    }
                });
                ui.separator();
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

fn team_options_ui(ui: &mut egui::Ui, team: Team, options: &TeamOptions, actions: &mut Vec<AppAction>) {
    let mut patch = TeamOptionsPatch::default();

    ui.horizontal(|ui| {
        ui.label("Color:");
        let mut rgba = options.color.to_array();
        if ui.color_edit_button_rgba_unmultiplied(&mut rgba).changed() {
            patch.color = Some(Color(rgba));
        }
    });

    let toggles: [(&str, bool, fn(&mut TeamOptionsPatch, bool)); 5] = [
        ("Passing network", options.show_passing_net, |p, v| {
            p.show_passing_net = Some(v)
        }),
        ("Covered area", options.show_covered_area, |p, v| {
            p.show_covered_area = Some(v)
        }),
        ("Names", options.show_names, |p, v| p.show_names = Some(v)),
        ("Roles", options.show_roles, |p, v| p.show_roles = Some(v)),
        ("Numbers", options.show_numbers, |p, v| p.show_numbers = Some(v)),
    ];
    ui.horizontal_wrapped(|ui| {
        for (label, current, set) in toggles {
            let mut value = current;
            if ui.checkbox(&mut value, label).changed() {
                set(&mut patch, value);
            }
        }
    });

    if patch != TeamOptionsPatch::default() {
        actions.push(AppAction::UpdateTeamOptions(team, patch));
    }
}

fn membership_ui(
    ui: &mut egui::Ui,
    team: Team,
    feature: TeamFeature,
    options: &TeamOptions,
    roster: &[&Player],
    actions: &mut Vec<AppAction>,
) {
    if !options.is_enabled(feature) {
        ui.weak("Hidden; enable it above to draw");
    }
    for player in roster {
        let mut member = options.is_member(feature, player.id);
        let label = format!("{} {}", player.number, player.name);
        if ui.checkbox(&mut member, label).changed() {
            actions.push(AppAction::TogglePlayerSelection {
                team,
                feature,
                player: player.id,
            });
        }
    }
}
