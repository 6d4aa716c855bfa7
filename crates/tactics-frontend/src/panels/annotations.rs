//! Annotations panel - tool selection, styles and the annotation list

use tactics_core::geometry::ground_distance;
use tactics_core::{AnnotationStyle, AnnotationStylePatch, Color, Shape, StrokeStyle, Tool};

use crate::panels::Panel;
use crate::state::{AppAction, SharedAppState};

const LINE_WIDTH_RANGE: std::ops::RangeInclusive<f32> = 0.05..=2.0;

pub struct AnnotationsPanel;

impl AnnotationsPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnnotationsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for AnnotationsPanel {
    fn name(&self) -> &str {
        "Annotations"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let (tool, annotations, selected) = {
            let state = app_state.lock();
            (
                *state.board.tool.get(),
                state.board.annotations.get().clone(),
                state.gestures.selected_annotation(),
            )
        };
        let mut actions = Vec::new();

        ui.heading("Tools");
        ui.horizontal_wrapped(|ui| {
            for candidate in Tool::ALL {
                let active = tool.active == Some(candidate);
                if ui
                    .selectable_label(active, candidate.name())
                    .on_hover_text(candidate.short_label())
                    .clicked()
                {
                    let next = if active { None } else { Some(candidate) };
                    actions.push(AppAction::SetTool(next));
                }
            }
        });
        ui.label("New annotation style");
        if let Some(patch) = style_editor(ui, "tool_style", &tool.style) {
            actions.push(AppAction::UpdateToolStyle(patch));
        }

        ui.separator();
        ui.horizontal(|ui| {
            ui.heading(format!("Annotations ({})", annotations.len()));
            if ui
                .add_enabled(!annotations.is_empty(), egui::Button::new("Clear all"))
                .clicked()
            {
                actions.push(AppAction::ClearAnnotations);
            }
        });

        if annotations.is_empty() {
            ui.weak("Pick a draw tool and drag on the pitch.\nRight-click an annotation to edit it.");
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for (index, annotation) in annotations.iter().enumerate() {
                let is_selected = selected == Some(annotation.id);
                ui.push_id(annotation.id.0, |ui| {
                    ui.horizontal(|ui| {
                        let label = format!(
                            "{}. {} ({})",
                            index + 1,
                            annotation.kind().name(),
                            size_label(&annotation.shape)
                        );
                        if ui.selectable_label(is_selected, label).clicked() {
                            let next = if is_selected { None } else { Some(annotation.id) };
                            actions.push(AppAction::SelectAnnotation(next));
                        }
                        if ui.small_button("Delete").clicked() {
                            actions.push(AppAction::DeleteAnnotation(annotation.id));
                        }
                    });
                    if is_selected {
                        if let Some(patch) = style_editor(ui, "annotation_style", &annotation.style) {
                            actions.push(AppAction::UpdateAnnotationStyle(annotation.id, patch));
                        }
                    }
                });
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

/// Style widgets; returns the edited fields, if any
fn style_editor(ui: &mut egui::Ui, id_salt: &str, style: &AnnotationStyle) -> Option<AnnotationStylePatch> {
    let mut patch = AnnotationStylePatch::default();

    egui::Grid::new(id_salt)
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Color:");
            let mut rgba = style.color.to_array();
            if ui.color_edit_button_rgba_unmultiplied(&mut rgba).changed() {
                patch.color = Some(Color(rgba));
            }
            ui.end_row();

            ui.label("Width:");
            let mut width = style.line_width;
            if ui
                .add(egui::Slider::new(&mut width, LINE_WIDTH_RANGE).suffix(" m"))
                .changed()
            {
                patch.line_width = Some(width);
            }
            ui.end_row();

            ui.label("Filled:");
            let mut filled = style.filled;
            if ui.checkbox(&mut filled, "").changed() {
                patch.filled = Some(filled);
            }
            ui.end_row();

            ui.label("Stroke:");
            let mut stroke = style.stroke;
            egui::ComboBox::from_id_salt(format!("{id_salt}_stroke"))
                .selected_text(stroke_label(stroke))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut stroke, None, stroke_label(None));
                    for candidate in StrokeStyle::ALL {
                        ui.selectable_value(&mut stroke, Some(candidate), candidate.name());
                    }
                });
            if stroke != style.stroke {
                patch.stroke = Some(stroke);
            }
            ui.end_row();
        });

    (patch != AnnotationStylePatch::default()).then_some(patch)
}

fn stroke_label(stroke: Option<StrokeStyle>) -> &'static str {
    stroke.map(|s| s.name()).unwrap_or("Default")
}

/// On-pitch size in meters
fn size_label(shape: &Shape) -> String {
    match *shape {
        Shape::Circle { radius, .. } => format!("r {:.1} m", radius),
        Shape::Arrow { from, to } => format!("{:.1} m", ground_distance(from, to)),
        Shape::Rectangle { .. } | Shape::Square { .. } => match shape.rendered_extent() {
            Some(extent) => format!("{:.1} x {:.1} m", extent.x, extent.y),
            None => String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_size_label_per_shape() {
        let square = Shape::Square {
            start: Vec3::ZERO,
            end: Vec3::new(4.0, 0.0, 2.0),
            rotation: 0.0,
        };
        assert_eq!(size_label(&square), "4.0 x 4.0 m");

        let arrow = Shape::Arrow {
            from: Vec3::ZERO,
            to: Vec3::new(3.0, 0.0, 4.0),
        };
        assert_eq!(size_label(&arrow), "5.0 m");
    }
}
