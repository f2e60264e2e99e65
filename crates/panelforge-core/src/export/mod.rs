//! Fusion 360 parameter CSV export.
//!
//! Serializes the current parameter record into a flat
//! `Name,Unit,Expression,Value,Comments,Favorite` table, one row per
//! parameter. Expression and Value both hold the stringified live value;
//! there is no distinct formula support. Values are numeric or a fixed hex
//! color string, so no field quoting is performed.

use std::io::Write;
use std::path::{Path, PathBuf};

use egui_file_dialog::FileDialog;

use crate::params::{PanelParams, SpacingPolicy};

pub const CSV_HEADER: &str = "Name,Unit,Expression,Value,Comments,Favorite";
pub const DEFAULT_EXPORT_FILENAME: &str = "fusion_parameters.csv";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write parameter CSV: {0}")]
    Io(#[from] std::io::Error),
}

/// Format a numeric parameter the way the CSV expects: no trailing `.0` on
/// whole values (1200, not 1200.0).
fn format_value(value: f64) -> String {
    format!("{}", value)
}

/// One `Name,Unit,Expression,Value,,FALSE` data row per parameter, in
/// declaration order. The spacing row only exists under the Fixed policy;
/// derived spacing is not an independent parameter.
pub fn csv_rows(params: &PanelParams) -> Vec<String> {
    let mut fields: Vec<(&str, &str, String)> = vec![
        ("screen_width", "mm", format_value(params.screen_width)),
        ("screen_height", "mm", format_value(params.screen_height)),
        ("screen_thickness", "mm", format_value(params.screen_thickness)),
        ("border_margin", "mm", format_value(params.border_margin)),
    ];
    if params.spacing_policy == SpacingPolicy::Fixed {
        fields.push(("pattern_spacing", "mm", format_value(params.pattern_spacing)));
    }
    fields.push(("hole_diameter", "mm", format_value(params.hole_diameter)));
    fields.push(("finish_color", "", params.finish.hex().to_string()));

    fields
        .into_iter()
        .map(|(name, unit, value)| format!("{},{},{},{},,FALSE", name, unit, value, value))
        .collect()
}

/// The full CSV document: header, data rows, trailing newline.
pub fn csv_document(params: &PanelParams) -> String {
    let mut doc = String::from(CSV_HEADER);
    for row in csv_rows(params) {
        doc.push('\n');
        doc.push_str(&row);
    }
    doc.push('\n');
    doc
}

pub fn write_csv<W: Write>(writer: &mut W, params: &PanelParams) -> Result<(), ExportError> {
    writer.write_all(csv_document(params).as_bytes())?;
    Ok(())
}

pub fn export_to_file(path: &Path, params: &PanelParams) -> Result<(), ExportError> {
    let mut file = std::fs::File::create(path)?;
    write_csv(&mut file, params)?;
    log::info!("wrote parameter CSV to {}", path.display());
    Ok(())
}

/// Manager for the export save dialog and the last completed export.
pub struct ExportManager {
    file_dialog: FileDialog,
    pub last_export: Option<PathBuf>,
}

impl ExportManager {
    pub fn new() -> Self {
        Self {
            file_dialog: FileDialog::new().default_file_name(DEFAULT_EXPORT_FILENAME),
            last_export: None,
        }
    }

    /// Open the save dialog, preloaded with the default filename.
    pub fn open_save_dialog(&mut self) {
        // Forget the previous destination so exporting to the same path
        // twice is not mistaken for a stale dialog result.
        self.last_export = None;
        self.file_dialog.save_file();
    }

    /// Drive the dialog each frame. When a destination has been picked,
    /// write the CSV there and report the outcome. A cancelled dialog is a
    /// silent no-op.
    pub fn update(
        &mut self,
        ctx: &egui::Context,
        params: &PanelParams,
    ) -> Option<Result<PathBuf, ExportError>> {
        if let Some(path) = self.file_dialog.update(ctx).picked() {
            let path_buf = path.to_path_buf();
            if self.last_export.as_ref() == Some(&path_buf) {
                return None;
            }
            return match export_to_file(&path_buf, params) {
                Ok(()) => {
                    self.last_export = Some(path_buf.clone());
                    Some(Ok(path_buf))
                }
                Err(e) => Some(Err(e)),
            };
        }
        None
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Finish;

    #[test]
    fn test_row_count_matches_parameter_count() {
        let derived = PanelParams::default();
        assert_eq!(csv_rows(&derived).len(), 6);

        let fixed = PanelParams {
            spacing_policy: SpacingPolicy::Fixed,
            ..PanelParams::default()
        };
        assert_eq!(csv_rows(&fixed).len(), 7);
    }

    #[test]
    fn test_value_fields_stringify_live_values() {
        let params = PanelParams::default();
        let rows = csv_rows(&params);
        assert_eq!(rows[0], "screen_width,mm,1200,1200,,FALSE");
        assert_eq!(rows[1], "screen_height,mm,1800,1800,,FALSE");
        assert_eq!(rows[2], "screen_thickness,mm,8,8,,FALSE");
        assert_eq!(rows[3], "border_margin,mm,30,30,,FALSE");
        assert_eq!(rows[4], "hole_diameter,mm,20,20,,FALSE");
        assert_eq!(rows[5], "finish_color,,#80428f,#80428f,,FALSE");
    }

    #[test]
    fn test_fractional_values_keep_their_fraction() {
        let params = PanelParams {
            screen_thickness: 8.5,
            ..PanelParams::default()
        };
        let rows = csv_rows(&params);
        assert_eq!(rows[2], "screen_thickness,mm,8.5,8.5,,FALSE");
    }

    #[test]
    fn test_document_shape() {
        let params = PanelParams {
            finish: Finish::Bronze,
            ..PanelParams::default()
        };
        let doc = csv_document(&params);
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines.len(), 1 + csv_rows(&params).len());
        assert!(doc.ends_with('\n'));
        assert!(lines.last().unwrap().starts_with("finish_color,,#CD7F32"));
    }

    #[test]
    fn test_write_csv_to_buffer() {
        let params = PanelParams::default();
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &params).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), csv_document(&params));
    }

    #[test]
    fn test_export_reflects_parameters_at_export_time() {
        let mut params = PanelParams::default();
        let before = csv_document(&params);
        params.screen_width = 900.0;
        let after = csv_document(&params);
        assert_ne!(before, after);
        assert!(after.contains("screen_width,mm,900,900,,FALSE"));
    }
}
