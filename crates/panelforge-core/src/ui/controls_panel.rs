use std::ops::RangeInclusive;

use egui_lens::{LogColors, ReactiveEventLogger, ReactiveEventLoggerState};
use egui_mobius_reactive::Dynamic;

use crate::app::PanelForgeApp;
use crate::constants::{LOG_TYPE_EXPORT, LOG_TYPE_FINISH, LOG_TYPE_PARAM, LOG_TYPE_POLICY};
use crate::params::{ranges, Finish, SpacingPolicy};

/// One labeled millimeter slider. Returns true when the value changed this
/// frame.
fn param_slider(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f64,
    range: RangeInclusive<f64>,
    step: f64,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(format!("{label}:"));
        let slider_response = ui.add(
            egui::Slider::new(value, range.clone())
                .step_by(step)
                .suffix(" mm"),
        );
        let text_response = ui.add(
            egui::DragValue::new(value)
                .speed(step)
                .range(range)
                .suffix(" mm"),
        );
        changed = slider_response.changed() || text_response.changed();
    });
    changed
}

pub fn show_controls_panel<'a>(
    ui: &mut egui::Ui,
    app: &'a mut PanelForgeApp,
    logger_state: &'a Dynamic<ReactiveEventLoggerState>,
    log_colors: &'a Dynamic<LogColors>,
) {
    let logger = ReactiveEventLogger::with_colors(logger_state, log_colors);

    // Sliders drive a local copy; a single commit at the end notifies the
    // store's observers once per frame at most.
    let mut params = app.store.get();

    ui.add_space(4.0);
    ui.heading("Panel Dimensions");
    ui.separator();

    if param_slider(
        ui,
        "Width",
        &mut params.screen_width,
        ranges::SCREEN_WIDTH,
        ranges::SCREEN_WIDTH_STEP,
    ) {
        logger.log_custom(LOG_TYPE_PARAM, &format!("Width set to {} mm", params.screen_width));
    }

    if param_slider(
        ui,
        "Height",
        &mut params.screen_height,
        ranges::SCREEN_HEIGHT,
        ranges::SCREEN_HEIGHT_STEP,
    ) {
        logger.log_custom(LOG_TYPE_PARAM, &format!("Height set to {} mm", params.screen_height));
    }

    if param_slider(
        ui,
        "Thickness",
        &mut params.screen_thickness,
        ranges::SCREEN_THICKNESS,
        ranges::SCREEN_THICKNESS_STEP,
    ) {
        logger.log_custom(
            LOG_TYPE_PARAM,
            &format!("Thickness set to {} mm", params.screen_thickness),
        );
    }

    if param_slider(
        ui,
        "Border Margin",
        &mut params.border_margin,
        ranges::BORDER_MARGIN,
        ranges::BORDER_MARGIN_STEP,
    ) {
        logger.log_custom(
            LOG_TYPE_PARAM,
            &format!("Border margin set to {} mm", params.border_margin),
        );
    }

    ui.add_space(8.0);
    ui.heading("Hole Pattern");
    ui.separator();

    egui::ComboBox::from_label("Spacing Policy")
        .selected_text(params.spacing_policy.display_name())
        .show_ui(ui, |ui| {
            for policy in [SpacingPolicy::Fixed, SpacingPolicy::Derived] {
                if ui
                    .selectable_value(&mut params.spacing_policy, policy, policy.display_name())
                    .clicked()
                {
                    logger.log_custom(
                        LOG_TYPE_POLICY,
                        &format!("Spacing policy set to {}", policy.display_name()),
                    );
                }
            }
        });

    if params.spacing_policy == SpacingPolicy::Fixed {
        if param_slider(
            ui,
            "Pattern Spacing",
            &mut params.pattern_spacing,
            ranges::PATTERN_SPACING,
            ranges::PATTERN_SPACING_STEP,
        ) {
            logger.log_custom(
                LOG_TYPE_PARAM,
                &format!("Pattern spacing set to {} mm", params.pattern_spacing),
            );
        }
    }

    if param_slider(
        ui,
        "Hole Diameter",
        &mut params.hole_diameter,
        ranges::HOLE_DIAMETER,
        ranges::HOLE_DIAMETER_STEP,
    ) {
        logger.log_custom(
            LOG_TYPE_PARAM,
            &format!("Hole diameter set to {} mm", params.hole_diameter),
        );
    }

    // Show the derived grid so a degenerate layout is visible rather than
    // silently empty.
    {
        let pattern = app.pattern.borrow();
        match pattern.grid {
            Some(grid) => {
                ui.colored_label(
                    egui::Color32::from_rgb(0, 255, 0),
                    egui::RichText::new(format!(
                        "✓ {} × {} = {} holes",
                        grid.cols,
                        grid.rows,
                        grid.hole_count()
                    ))
                    .small(),
                );
            }
            None => {
                ui.colored_label(
                    egui::Color32::from_rgb(255, 165, 0),
                    egui::RichText::new("⚠ No holes fit the current parameters").small(),
                );
            }
        }
    }

    ui.add_space(8.0);
    ui.heading("Finish");
    ui.separator();

    ui.horizontal(|ui| {
        for finish in Finish::all() {
            let selected = params.finish == finish;
            let stroke = if selected {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(100, 150, 255))
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(90))
            };
            let swatch = egui::Button::new("")
                .fill(finish.color32())
                .stroke(stroke)
                .min_size(egui::vec2(32.0, 32.0));
            if ui.add(swatch).on_hover_text(finish.display_name()).clicked() {
                params.finish = finish;
                logger.log_custom(
                    LOG_TYPE_FINISH,
                    &format!("Finish set to {}", finish.display_name()),
                );
            }
        }
    });

    ui.add_space(12.0);
    ui.separator();

    if ui.button("⬇ Download Configuration").clicked() {
        app.export_manager.open_save_dialog();
        logger.log_custom(LOG_TYPE_EXPORT, "Choosing export destination");
    }
    if let Some(path) = &app.export_manager.last_export {
        ui.label(
            egui::RichText::new(format!("Last export: {}", path.display()))
                .small()
                .color(egui::Color32::from_gray(160)),
        );
    }

    app.store.set(params);
}
