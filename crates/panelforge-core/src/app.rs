use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use egui_dock::{DockArea, DockState, NodeIndex, Style, SurfaceIndex};

/// egui_lens imports
use egui_lens::{LogColors, ReactiveEventLogger, ReactiveEventLoggerState};
use egui_mobius_reactive::Dynamic;

use crate::constants::LOG_TYPE_EXPORT;
use crate::export::ExportManager;
use crate::layout::HolePattern;
use crate::platform::parameters::gui::{APPLICATION_NAME, VERSION};
use crate::preview::PanelViewer;
use crate::session::{self, SessionConfig};
use crate::store::ParameterStore;
use crate::ui::{initialize_and_show_banner, Tab, TabKind, TabViewer};

/// The main application struct
pub struct PanelForgeApp {
    // Parameter state and the pattern derived from it
    pub store: ParameterStore,
    pub pattern: Rc<RefCell<HolePattern>>,

    // 3D preview
    pub viewer: PanelViewer,

    // CSV export
    pub export_manager: ExportManager,

    // Logger state and colors
    pub logger_state: Dynamic<ReactiveEventLoggerState>,
    pub log_colors: Dynamic<LogColors>,

    // User preferences
    pub show_log_timestamps: bool,

    // Dock state
    dock_state: DockState<Tab>,
    config_path: PathBuf,
}

impl Drop for PanelForgeApp {
    fn drop(&mut self) {
        // Save dock state and session config when the application closes
        self.save_dock_state();
        self.save_settings();
    }
}

impl PanelForgeApp {
    pub fn new() -> Self {
        let config_path = session::config_dir();
        let config = SessionConfig::load_from_file(&config_path).unwrap_or_default();

        let mut initial_logger_state = ReactiveEventLoggerState::new();
        initial_logger_state.show_timestamps = config.show_log_timestamps;
        let logger_state = Dynamic::new(initial_logger_state);
        let log_colors = Dynamic::new(LogColors::default());

        let mut store = ParameterStore::new(config.params.clone());

        // The hole pattern is a pure derivation of the parameter record;
        // recompute it synchronously on every committed change.
        let pattern = Rc::new(RefCell::new(HolePattern::generate(&config.params)));
        let pattern_sink = Rc::clone(&pattern);
        store.subscribe(move |params| {
            *pattern_sink.borrow_mut() = HolePattern::generate(params);
        });

        let dock_state = Self::create_default_dock_state();

        let app = Self {
            store,
            pattern,
            viewer: PanelViewer::new(),
            export_manager: ExportManager::new(),
            logger_state,
            log_colors,
            show_log_timestamps: config.show_log_timestamps,
            dock_state,
            config_path,
        };

        let logger = ReactiveEventLogger::with_colors(&app.logger_state, &app.log_colors);
        initialize_and_show_banner(&logger);

        app
    }

    fn save_settings(&self) {
        let config = SessionConfig {
            params: self.store.get(),
            show_log_timestamps: self.show_log_timestamps,
        };
        if let Err(e) = config.save_to_file(&self.config_path) {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    fn save_dock_state(&self) {
        let dir = session::config_dir();
        if let Err(e) = fs::create_dir_all(&dir) {
            eprintln!("Failed to create config directory: {}", e);
            return;
        }
        let config_path = dir.join("dock_state.json");
        match serde_json::to_string_pretty(&self.dock_state) {
            Ok(json) => {
                if let Err(e) = fs::write(&config_path, json) {
                    eprintln!("Failed to write dock state: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Failed to serialize dock state: {}", e);
            }
        }
    }

    fn load_dock_state() -> Option<DockState<Tab>> {
        let config_path = session::config_dir().join("dock_state.json");
        if let Ok(json) = fs::read_to_string(&config_path) {
            match serde_json::from_str::<DockState<Tab>>(&json) {
                Ok(dock_state) => {
                    return Some(dock_state);
                }
                Err(e) => {
                    eprintln!("Failed to deserialize dock state: {}", e);
                    // Delete corrupted file
                    fs::remove_file(config_path).ok();
                }
            }
        }
        None
    }

    fn create_default_dock_state() -> DockState<Tab> {
        if let Some(saved_dock_state) = Self::load_dock_state() {
            return saved_dock_state;
        }

        let controls_tab = Tab::new(TabKind::Controls, SurfaceIndex::main(), NodeIndex(0));
        let preview_tab = Tab::new(TabKind::Preview, SurfaceIndex::main(), NodeIndex(1));
        let log_tab = Tab::new(TabKind::EventLog, SurfaceIndex::main(), NodeIndex(2));

        let mut dock_state = DockState::new(vec![preview_tab]);
        let surface = dock_state.main_surface_mut();

        let [left, _right] = surface.split_left(NodeIndex::root(), 0.3, vec![controls_tab]);
        surface.split_below(left, 0.7, vec![log_tab]);
        dock_state
    }
}

impl Default for PanelForgeApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Implement the eframe::App trait for PanelForgeApp
///
/// The `update` method is called every frame; it refreshes the preview from
/// the latest committed parameters, lays out the dock, and drives the export
/// save dialog.
impl eframe::App for PanelForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keep the preview in sync with the parameter store before any tab
        // draws it.
        {
            let params = self.store.get();
            let pattern = self.pattern.borrow();
            self.viewer.sync(self.store.revision(), &params, &pattern);
        }

        // Ribbon at the top
        egui::TopBottomPanel::top("title_ribbon").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(APPLICATION_NAME).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("v{}", VERSION))
                            .color(egui::Color32::from_rgb(180, 200, 255)),
                    );
                });
            });
        });

        // Main dock area below the ribbon
        let mut dock_state = self.dock_state.clone();
        let mut tab_viewer = TabViewer { app: self };
        let mut style = Style::from_egui(ctx.style().as_ref());
        style.dock_area_padding = None;
        style.tab_bar.fill_tab_bar = true;

        DockArea::new(&mut dock_state)
            .style(style)
            .show_add_buttons(false)
            .show_close_buttons(true)
            .show(ctx, &mut tab_viewer);

        self.dock_state = dock_state;

        // Drive the export save dialog; a cancelled dialog is a silent no-op.
        let params = self.store.get();
        if let Some(outcome) = self.export_manager.update(ctx, &params) {
            let logger = ReactiveEventLogger::with_colors(&self.logger_state, &self.log_colors);
            match outcome {
                Ok(path) => {
                    logger.log_custom(
                        LOG_TYPE_EXPORT,
                        &format!("Exported parameters to {}", path.display()),
                    );
                }
                Err(e) => {
                    logger.log_warning(&format!("Export failed: {}", e));
                }
            }
        }
    }
}
