use crate::app::PanelForgeApp;
use crate::ui;

use egui_dock::{NodeIndex, SurfaceIndex};
use egui_lens::ReactiveEventLogger;
use serde::{Deserialize, Serialize};

/// Define the tabs for the DockArea
#[derive(Clone, Serialize, Deserialize)]
pub enum TabKind {
    Controls,
    Preview,
    EventLog,
}

pub struct TabParams<'a> {
    pub app: &'a mut PanelForgeApp,
}

/// Tab container struct for DockArea
#[derive(Clone, Serialize, Deserialize)]
pub struct Tab {
    pub kind: TabKind,
    #[serde(skip)]
    #[allow(dead_code)]
    pub surface: Option<SurfaceIndex>,
    #[serde(skip)]
    #[allow(dead_code)]
    pub node: Option<NodeIndex>,
}

impl Tab {
    pub fn new(kind: TabKind, surface: SurfaceIndex, node: NodeIndex) -> Self {
        Self {
            kind,
            surface: Some(surface),
            node: Some(node),
        }
    }

    pub fn title(&self) -> String {
        match self.kind {
            TabKind::Controls => "Controls".to_string(),
            TabKind::Preview => "3D Preview".to_string(),
            TabKind::EventLog => "Event Log".to_string(),
        }
    }

    pub fn content(&self, ui: &mut egui::Ui, params: &mut TabParams<'_>) {
        match self.kind {
            TabKind::Controls => {
                let logger_state_clone = params.app.logger_state.clone();
                let log_colors_clone = params.app.log_colors.clone();
                ui::show_controls_panel(ui, params.app, &logger_state_clone, &log_colors_clone);
            }
            TabKind::Preview => {
                let rect = ui.available_rect_before_wrap();
                params.app.viewer.render(ui, rect);
            }
            TabKind::EventLog => {
                let logger =
                    ReactiveEventLogger::with_colors(&params.app.logger_state, &params.app.log_colors);
                logger.show(ui);
            }
        }
    }
}

pub struct TabViewer<'a> {
    pub app: &'a mut PanelForgeApp,
}

impl<'a> egui_dock::TabViewer for TabViewer<'a> {
    type Tab = Tab;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.title().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        let mut params = TabParams { app: self.app };
        tab.content(ui, &mut params);
    }
}
