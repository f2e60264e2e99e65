//! Hole-grid layout engine.
//!
//! Computes a centered rectangular grid of hole positions inside the panel
//! interior (panel dimensions minus the border margin on every side). Two
//! spacing policies exist: a fixed explicit spacing, and a spacing derived
//! from the hole diameter so the grid fills the available area. The layout
//! is a closed-form computation; degenerate inputs degrade to an empty grid
//! rather than an error.

use crate::params::{PanelParams, SpacingPolicy};

/// Millimeters per scene unit. Scene coordinates are meters so a 3 m panel
/// still sits comfortably inside the preview camera's working range.
pub const MM_PER_SCENE_UNIT: f64 = 1000.0;

/// A single hole center in scene units, relative to the panel center.
/// `z` is the panel mid-plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HolePosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Closed-form grid layout in panel-local millimeters.
///
/// `start_x`/`start_y` locate the first hole (column 0, row 0); columns grow
/// rightward, rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleGrid {
    pub cols: usize,
    pub rows: usize,
    pub spacing_x: f64,
    pub spacing_y: f64,
    pub start_x: f64,
    pub start_y: f64,
}

impl HoleGrid {
    pub fn hole_count(&self) -> usize {
        self.cols * self.rows
    }
}

/// Compute the grid layout for the given parameters, or `None` when the
/// inputs are degenerate (non-positive spacing, reference unit, available
/// area, or computed counts).
pub fn hole_grid(params: &PanelParams) -> Option<HoleGrid> {
    let avail_w = params.available_width();
    let avail_h = params.available_height();
    if avail_w <= 0.0 || avail_h <= 0.0 {
        return None;
    }

    let (cols, rows, spacing_x, spacing_y) = match params.spacing_policy {
        SpacingPolicy::Fixed => {
            let spacing = params.pattern_spacing;
            if spacing <= 0.0 {
                return None;
            }
            let cols = (avail_w / spacing).floor();
            let rows = (avail_h / spacing).floor();
            if cols < 1.0 || rows < 1.0 {
                return None;
            }
            (cols as usize, rows as usize, spacing, spacing)
        }
        SpacingPolicy::Derived => {
            let reference_unit = 2.0 * params.hole_diameter;
            if reference_unit <= 0.0 {
                return None;
            }
            let cols = ((avail_w / reference_unit).round() as i64).max(1) as usize;
            let rows = ((avail_h / reference_unit).round() as i64).max(1) as usize;
            // A single column/row is centered outright; the spacing value is
            // never multiplied in that case but keep it meaningful.
            let spacing_x = if cols > 1 { avail_w / cols as f64 } else { avail_w };
            let spacing_y = if rows > 1 { avail_h / rows as f64 } else { avail_h };
            (cols, rows, spacing_x, spacing_y)
        }
    };

    // Center the hole block within the margins: the span of (n-1) gaps
    // leaves some slack, half of which pads each side.
    let start_x = if cols == 1 {
        0.0
    } else {
        let leftover = avail_w - (cols - 1) as f64 * spacing_x;
        -params.screen_width / 2.0 + params.border_margin + leftover / 2.0
    };
    let start_y = if rows == 1 {
        0.0
    } else {
        let leftover = avail_h - (rows - 1) as f64 * spacing_y;
        params.screen_height / 2.0 - params.border_margin - leftover / 2.0
    };

    Some(HoleGrid {
        cols,
        rows,
        spacing_x,
        spacing_y,
        start_x,
        start_y,
    })
}

/// Hole positions in scene units, column-major (outer loop over columns).
/// Order has no semantic significance; hole meshes render independently.
pub fn hole_positions(params: &PanelParams) -> Vec<HolePosition> {
    let Some(grid) = hole_grid(params) else {
        return Vec::new();
    };

    let z = params.screen_thickness / (2.0 * MM_PER_SCENE_UNIT);
    let mut positions = Vec::with_capacity(grid.hole_count());
    for i in 0..grid.cols {
        for j in 0..grid.rows {
            let x_mm = grid.start_x + i as f64 * grid.spacing_x;
            let y_mm = grid.start_y - j as f64 * grid.spacing_y;
            positions.push(HolePosition {
                x: x_mm / MM_PER_SCENE_UNIT,
                y: y_mm / MM_PER_SCENE_UNIT,
                z,
            });
        }
    }
    positions
}

/// The derived hole pattern for one parameter set: the grid layout plus the
/// scene-space hole centers. Recomputed whenever a dependent parameter
/// changes; holds no state of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct HolePattern {
    pub grid: Option<HoleGrid>,
    pub positions: Vec<HolePosition>,
}

impl HolePattern {
    pub fn generate(params: &PanelParams) -> Self {
        Self {
            grid: hole_grid(params),
            positions: hole_positions(params),
        }
    }

    pub fn hole_count(&self) -> usize {
        self.positions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Finish, PanelParams, SpacingPolicy};

    const EPS: f64 = 1e-9;

    fn derived_params() -> PanelParams {
        PanelParams {
            spacing_policy: SpacingPolicy::Derived,
            ..PanelParams::default()
        }
    }

    fn fixed_params() -> PanelParams {
        PanelParams {
            spacing_policy: SpacingPolicy::Fixed,
            ..PanelParams::default()
        }
    }

    #[test]
    fn test_derived_scenario_1200x1800() {
        // width=1200, height=1800, margin=30, hole=20:
        // reference unit 40, available 1140x1740, 1140/40=28.5 -> 29 cols,
        // 1740/40=43.5 -> 44 rows.
        let params = derived_params();
        let grid = hole_grid(&params).unwrap();
        assert_eq!(grid.cols, 29);
        assert_eq!(grid.rows, 44);
        assert_eq!(hole_positions(&params).len(), 29 * 44);
    }

    #[test]
    fn test_fixed_scenario_floor_counts() {
        let params = fixed_params();
        // available 1140x1740 at spacing 100 -> floor gives 11 x 17
        let grid = hole_grid(&params).unwrap();
        assert_eq!(grid.cols, 11);
        assert_eq!(grid.rows, 17);
        assert_eq!(hole_positions(&params).len(), 11 * 17);
    }

    #[test]
    fn test_grid_symmetric_about_center() {
        for params in [derived_params(), fixed_params()] {
            let positions = hole_positions(&params);
            assert!(!positions.is_empty());
            let sum_x: f64 = positions.iter().map(|p| p.x).sum();
            let sum_y: f64 = positions.iter().map(|p| p.y).sum();
            assert!(sum_x.abs() < 1e-6, "sum_x = {sum_x}");
            assert!(sum_y.abs() < 1e-6, "sum_y = {sum_y}");
        }
    }

    #[test]
    fn test_single_column_sits_on_center_line() {
        // A panel barely wider than two margins forces a single derived
        // column, which must land exactly on the vertical center line.
        let params = PanelParams {
            screen_width: 500.0,
            border_margin: 200.0,
            hole_diameter: 100.0,
            ..derived_params()
        };
        let grid = hole_grid(&params).unwrap();
        assert_eq!(grid.cols, 1);
        for p in hole_positions(&params) {
            assert_eq!(p.x, 0.0);
        }
    }

    #[test]
    fn test_single_row_sits_on_center_line() {
        let params = PanelParams {
            screen_height: 500.0,
            border_margin: 200.0,
            hole_diameter: 100.0,
            ..derived_params()
        };
        let grid = hole_grid(&params).unwrap();
        assert_eq!(grid.rows, 1);
        for p in hole_positions(&params) {
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_degenerate_fixed_spacing_yields_empty() {
        let mut params = fixed_params();
        params.pattern_spacing = 0.0;
        assert!(hole_grid(&params).is_none());
        assert!(hole_positions(&params).is_empty());

        params.pattern_spacing = -5.0;
        assert!(hole_positions(&params).is_empty());

        // Spacing wider than the available area floors to zero columns.
        params.pattern_spacing = 5000.0;
        assert!(hole_positions(&params).is_empty());
    }

    #[test]
    fn test_degenerate_reference_unit_yields_empty() {
        let mut params = derived_params();
        params.hole_diameter = 0.0;
        assert!(hole_grid(&params).is_none());
        assert!(hole_positions(&params).is_empty());

        params.hole_diameter = -1.0;
        assert!(hole_positions(&params).is_empty());
    }

    #[test]
    fn test_degenerate_available_area_yields_empty() {
        let params = PanelParams {
            screen_width: 100.0,
            border_margin: 60.0,
            ..derived_params()
        };
        assert!(hole_positions(&params).is_empty());
    }

    #[test]
    fn test_holes_at_panel_mid_plane() {
        let params = derived_params();
        let expected_z = params.screen_thickness / 2000.0;
        for p in hole_positions(&params) {
            assert!((p.z - expected_z).abs() < EPS);
        }
    }

    #[test]
    fn test_holes_stay_inside_margin() {
        for params in [derived_params(), fixed_params()] {
            let half_w = params.screen_width / 2.0 - params.border_margin;
            let half_h = params.screen_height / 2.0 - params.border_margin;
            for p in hole_positions(&params) {
                assert!(p.x.abs() * MM_PER_SCENE_UNIT <= half_w + EPS);
                assert!(p.y.abs() * MM_PER_SCENE_UNIT <= half_h + EPS);
            }
        }
    }

    #[test]
    fn test_column_major_order() {
        let params = fixed_params();
        let grid = hole_grid(&params).unwrap();
        let positions = hole_positions(&params);
        // First `rows` entries share the first column's x; y decreases.
        for j in 0..grid.rows {
            assert!((positions[j].x - positions[0].x).abs() < EPS);
            if j > 0 {
                assert!(positions[j].y < positions[j - 1].y);
            }
        }
        // The next column is one spacing to the right.
        let step = positions[grid.rows].x - positions[0].x;
        assert!((step * MM_PER_SCENE_UNIT - grid.spacing_x).abs() < 1e-6);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let params = PanelParams {
            finish: Finish::Bronze,
            ..derived_params()
        };
        let first = hole_positions(&params);
        let second = hole_positions(&params);
        assert_eq!(first, second);
        assert_eq!(HolePattern::generate(&params), HolePattern::generate(&params));
    }

    #[test]
    fn test_derived_spacing_fills_available_area() {
        let params = derived_params();
        let grid = hole_grid(&params).unwrap();
        assert!((grid.spacing_x * grid.cols as f64 - params.available_width()).abs() < EPS);
        assert!((grid.spacing_y * grid.rows as f64 - params.available_height()).abs() < EPS);
    }
}
