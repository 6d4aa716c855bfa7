//! Settings window

use crate::config::{AppConfig, SharedConfig, UiTheme};
use crate::state::SharedAppState;
use crate::theme::apply_ui_config;
use crate::viewport_state::SharedViewportState;

/// Render the settings window while it is open
pub fn render_settings_window(
    ctx: &egui::Context,
    app_state: &SharedAppState,
    config: &SharedConfig,
    viewport_state: Option<&SharedViewportState>,
) {
    let mut open = app_state.lock().show_settings;
    if !open {
        return;
    }

    let before = config.read().config().clone();
    let mut edited = before.clone();

    egui::Window::new("Settings")
        .open(&mut open)
        .resizable(false)
        .show(ctx, |ui| {
            camera_section(ui, &mut edited);
            editor_section(ui, &mut edited, app_state);
            ui_section(ui, &mut edited);

            ui.separator();
            ui.horizontal(|ui| {
                let dirty = config.read().is_dirty();
                if ui.add_enabled(dirty, egui::Button::new("Save")).clicked() {
                    if let Err(e) = config.write().save() {
                        tracing::warn!("Failed to save config: {}", e);
                    }
                }
                if ui.button("Reset to defaults").clicked() {
                    edited = AppConfig::new();
                }
            });
            ui.weak(format!("{}", config.read().config_file_path().display()));
        });

    if edited != before {
        if edited.ui != before.ui {
            apply_ui_config(ctx, &edited.ui);
        }
        if edited.camera != before.camera {
            if let Some(viewport_state) = viewport_state {
                let mut vp = viewport_state.lock();
                let camera = vp.renderer.camera_mut();
                camera.set_fov_degrees(edited.camera.fov_degrees);
                camera.set_distance_limits(edited.camera.min_distance, edited.camera.max_distance);
            }
        }
        *config.write().config_mut() = edited;
    }

    app_state.lock().show_settings = open;
}

fn camera_section(ui: &mut egui::Ui, config: &mut AppConfig) {
    let camera = &mut config.camera;
    ui.collapsing("Camera", |ui| {
        egui::Grid::new("camera_settings")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("Field of view:");
                ui.add(egui::Slider::new(&mut camera.fov_degrees, 20.0..=90.0).suffix("°"));
                ui.end_row();

                ui.label("Initial distance:");
                ui.add(egui::Slider::new(&mut camera.initial_distance, 20.0..=200.0));
                ui.end_row();

                ui.label("Initial pitch:");
                ui.add(egui::Slider::new(&mut camera.initial_pitch, 0.1..=1.5));
                ui.end_row();

                ui.label("Zoom limits:");
                ui.horizontal(|ui| {
                    ui.add(egui::DragValue::new(&mut camera.min_distance).range(1.0..=100.0));
                    ui.add(egui::DragValue::new(&mut camera.max_distance).range(50.0..=500.0));
                });
                ui.end_row();

                ui.label("Orbit speed:");
                ui.add(egui::Slider::new(&mut camera.orbit_sensitivity, 0.001..=0.03));
                ui.end_row();

                ui.label("Pan speed:");
                ui.add(egui::Slider::new(&mut camera.pan_sensitivity, 0.0002..=0.005));
                ui.end_row();

                ui.label("Zoom speed:");
                ui.add(egui::Slider::new(&mut camera.zoom_sensitivity, 0.002..=0.1));
                ui.end_row();
            });
    });
}

fn editor_section(ui: &mut egui::Ui, config: &mut AppConfig, app_state: &SharedAppState) {
    let editor = &mut config.editor;
    ui.collapsing("Editor", |ui| {
        ui.checkbox(&mut editor.show_labels, "Player labels");
        ui.add_enabled(
            editor.show_labels,
            egui::Slider::new(&mut editor.label_size, 8.0..=24.0).text("Label size"),
        );
        ui.checkbox(&mut editor.show_handles, "Edit handles");
        ui.add(egui::Slider::new(&mut editor.player_radius, 0.3..=2.0).text("Player radius"));
        ui.add(egui::Slider::new(&mut editor.player_height, 0.5..=3.0).text("Player height"));

        if ui
            .button("Use current tool style as default")
            .on_hover_text("New sessions start drawing with this style")
            .clicked()
        {
            editor.default_style = app_state.lock().board.tool.get().style;
        }
    });
}

fn ui_section(ui: &mut egui::Ui, config: &mut AppConfig) {
    let ui_config = &mut config.ui;
    ui.collapsing("Interface", |ui| {
        egui::ComboBox::from_id_salt("ui_theme")
            .selected_text(ui_config.theme.name())
            .show_ui(ui, |ui| {
                for theme in [UiTheme::Dark, UiTheme::Light] {
                    ui.selectable_value(&mut ui_config.theme, theme, theme.name());
                }
            });
        ui.add(egui::Slider::new(&mut ui_config.font_size, 0.5..=2.0).text("Font scale"));
    });
}
