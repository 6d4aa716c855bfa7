//! egui styling from the UI config

use tactics_core::Color;

use crate::config::{UiConfig, UiTheme};

const MIN_FONT_SCALE: f32 = 0.5;
const MAX_FONT_SCALE: f32 = 2.0;

/// Apply theme and font scale to the context
pub fn apply_ui_config(ctx: &egui::Context, ui: &UiConfig) {
    let mut style = egui::Style {
        visuals: match ui.theme {
            UiTheme::Dark => egui::Visuals::dark(),
            UiTheme::Light => egui::Visuals::light(),
        },
        ..Default::default()
    };

    let scale = ui.font_size.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE);
    for font_id in style.text_styles.values_mut() {
        font_id.size *= scale;
    }

    ctx.set_style(style);
}

/// Board color as an egui color
pub fn color32(color: Color) -> egui::Color32 {
    let [r, g, b, a] = color.to_array();
    egui::Rgba::from_rgba_unmultiplied(r, g, b, a).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color32_keeps_primaries() {
        assert_eq!(color32(Color::WHITE), egui::Color32::WHITE);
        assert_eq!(color32(Color::BLACK), egui::Color32::BLACK);
    }
}
