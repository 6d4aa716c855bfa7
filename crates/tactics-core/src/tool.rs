//! Active tool and drawing style

use serde::{Deserialize, Serialize};

use crate::annotation::{AnnotationStyle, AnnotationStylePatch, ShapeKind};
use crate::store::Patch;

/// Board tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    /// Left-click selects annotations
    Select,
    /// Left-click removes the topmost annotation under the pointer
    Erase,
    /// Left-drag draws a new annotation
    Draw(ShapeKind),
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Select,
        Tool::Erase,
        Tool::Draw(ShapeKind::Rectangle),
        Tool::Draw(ShapeKind::Square),
        Tool::Draw(ShapeKind::Circle),
        Tool::Draw(ShapeKind::Arrow),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Erase => "Erase",
            Tool::Draw(kind) => kind.name(),
        }
    }

    /// Short label for toolbar buttons
    pub fn short_label(&self) -> &'static str {
        match self {
            Tool::Select => "⬚",
            Tool::Erase => "⌫",
            Tool::Draw(ShapeKind::Rectangle) => "▭",
            Tool::Draw(ShapeKind::Square) => "□",
            Tool::Draw(ShapeKind::Circle) => "○",
            Tool::Draw(ShapeKind::Arrow) => "➔",
        }
    }

    pub fn draw_kind(&self) -> Option<ShapeKind> {
        match self {
            Tool::Draw(kind) => Some(*kind),
            Tool::Select | Tool::Erase => None,
        }
    }
}

/// Tool selection plus the style new annotations are created with
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ToolSettings {
    pub active: Option<Tool>,
    pub style: AnnotationStyle,
}

impl ToolSettings {
    pub fn with_style(style: AnnotationStyle) -> Self {
        Self {
            active: None,
            style,
        }
    }

    /// Shape kind of the active draw tool, if any
    pub fn draw_kind(&self) -> Option<ShapeKind> {
        self.active.and_then(|tool| tool.draw_kind())
    }
}

impl Patch<ToolSettings> for AnnotationStylePatch {
    fn apply(self, settings: &mut ToolSettings) {
        Patch::<AnnotationStyle>::apply(self, &mut settings.style);
    }
}
