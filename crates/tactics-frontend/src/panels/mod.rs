//! Dockable panels

mod annotations;
mod players;
mod teams;
mod viewport;

pub use annotations::AnnotationsPanel;
pub use players::PlayersPanel;
pub use teams::TeamsPanel;
pub use viewport::ViewportPanel;

use crate::config::SharedConfig;
use crate::state::SharedAppState;
use crate::viewport_state::SharedViewportState;

/// A tab in the dock area
pub trait Panel {
    fn name(&self) -> &str;

    /// Panels that draw into the 3D viewport need the wgpu render state
    fn needs_render_context(&self) -> bool {
        false
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState);

    fn ui_with_render_context(
        &mut self,
        ui: &mut egui::Ui,
        app_state: &SharedAppState,
        _render_state: &egui_wgpu::RenderState,
        _viewport_state: &SharedViewportState,
        _config: &SharedConfig,
    ) {
        self.ui(ui, app_state);
    }
}

/// Dock tab identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelType {
    Viewport,
    Players,
    Teams,
    Annotations,
}
