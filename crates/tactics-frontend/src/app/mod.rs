//! Main application

mod menu;
mod settings;

use std::sync::Arc;

use egui_dock::{DockArea, DockState, NodeIndex, TabViewer};
use parking_lot::Mutex;

use crate::actions::{ActionContext, process_actions};
use crate::config::{SharedConfig, create_shared_config};
use crate::panels::{AnnotationsPanel, Panel, PanelType, PlayersPanel, TeamsPanel, ViewportPanel};
use crate::state::{SharedAppState, create_shared_state};
use crate::theme::apply_ui_config;
use crate::viewport_state::{SharedViewportState, ViewportState};

/// Tactics board application
pub struct TacticsBoardApp {
    app_state: SharedAppState,
    config: SharedConfig,
    render_state: Option<egui_wgpu::RenderState>,
    viewport_state: Option<SharedViewportState>,
    dock_state: DockState<PanelType>,
    viewport_panel: ViewportPanel,
    players_panel: PlayersPanel,
    teams_panel: TeamsPanel,
    annotations_panel: AnnotationsPanel,
}

impl TacticsBoardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = create_shared_config();
        let app_config = config.read().config().clone();
        apply_ui_config(&cc.egui_ctx, &app_config.ui);

        let app_state = create_shared_state(app_config.editor.default_style);

        let render_state = cc.wgpu_render_state.clone();
        let viewport_state = render_state.as_ref().map(|rs| {
            let mut viewport = ViewportState::new(rs.device.clone(), rs.queue.clone(), rs.target_format);
            app_config.camera.apply(viewport.renderer.camera_mut());
            Arc::new(Mutex::new(viewport))
        });
        if viewport_state.is_none() {
            tracing::warn!("No wgpu render state available; the viewport is disabled");
        }

        let mut dock_state = DockState::new(vec![PanelType::Viewport]);
        let surface = dock_state.main_surface_mut();
        let [_viewport, side] = surface.split_right(
            NodeIndex::root(),
            0.72,
            vec![PanelType::Players, PanelType::Teams],
        );
        surface.split_below(side, 0.55, vec![PanelType::Annotations]);

        tracing::info!("Tactics board ready");

        Self {
            app_state,
            config,
            render_state,
            viewport_state,
            dock_state,
            viewport_panel: ViewportPanel::new(),
            players_panel: PlayersPanel::new(),
            teams_panel: TeamsPanel::new(),
            annotations_panel: AnnotationsPanel::new(),
        }
    }
}

impl eframe::App for TacticsBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        menu::render_menu_bar(ctx, &self.app_state);
        settings::render_settings_window(
            ctx,
            &self.app_state,
            &self.config,
            self.viewport_state.as_ref(),
        );

        let mut viewer = BoardTabViewer {
            app_state: &self.app_state,
            config: &self.config,
            render_state: self.render_state.as_ref(),
            viewport_state: self.viewport_state.as_ref(),
            viewport: &mut self.viewport_panel,
            players: &mut self.players_panel,
            teams: &mut self.teams_panel,
            annotations: &mut self.annotations_panel,
        };
        DockArea::new(&mut self.dock_state)
            .style(egui_dock::Style::from_egui(ctx.style().as_ref()))
            .show(ctx, &mut viewer);

        process_actions(&ActionContext {
            app_state: &self.app_state,
            viewport_state: self.viewport_state.as_ref(),
            config: &self.config,
        });

        if self.app_state.lock().gestures.is_active() {
            ctx.request_repaint();
        }
    }
}

struct BoardTabViewer<'a> {
    app_state: &'a SharedAppState,
    config: &'a SharedConfig,
    render_state: Option<&'a egui_wgpu::RenderState>,
    viewport_state: Option<&'a SharedViewportState>,
    viewport: &'a mut ViewportPanel,
    players: &'a mut PlayersPanel,
    teams: &'a mut TeamsPanel,
    annotations: &'a mut AnnotationsPanel,
}

impl BoardTabViewer<'_> {
    fn panel(&mut self, tab: PanelType) -> &mut dyn Panel {
        match tab {
            PanelType::Viewport => &mut *self.viewport,
            PanelType::Players => &mut *self.players,
            PanelType::Teams => &mut *self.teams,
            PanelType::Annotations => &mut *self.annotations,
        }
    }
}

impl TabViewer for BoardTabViewer<'_> {
    type Tab = PanelType;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        self.panel(*tab).name().to_owned().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        let (app_state, config) = (self.app_state, self.config);
        let (render_state, viewport_state) = (self.render_state, self.viewport_state);
        let panel = self.panel(*tab);

        match (panel.needs_render_context(), render_state, viewport_state) {
            (true, Some(render_state), Some(viewport_state)) => {
                panel.ui_with_render_context(ui, app_state, render_state, viewport_state, config)
            }
            _ => panel.ui(ui, app_state),
        }
    }

    fn closeable(&mut self, _tab: &mut Self::Tab) -> bool {
        false
    }

    fn scroll_bars(&self, tab: &Self::Tab) -> [bool; 2] {
        match tab {
            PanelType::Viewport => [false, false],
            _ => [true, true],
        }
    }
}
