// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ExportRow;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// High-level export entry point shared by every analysis command.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `rows` to `file` in `format`.
    ///
    /// - `file`: output path, `~/` is expanded
    /// - `sheet`: worksheet name for XLSX (ignored otherwise)
    /// - `force`: overwrite without asking
    ///
    /// Empty tables are still written, with the header row only.
    pub fn export<T: ExportRow>(
        rows: &[T],
        format: ExportFormat,
        file: &str,
        sheet: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = expand_tilde(file);

        ensure_writable(&path, force)?;
        ensure_parent_dir(&path)?;

        if rows.is_empty() {
            warning("No rows to export, writing header only.");
        }

        match format {
            ExportFormat::Csv => export_csv(rows, &path)?,
            ExportFormat::Json => export_json(rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(rows, &path, sheet)?,
        }

        log::debug!("exported {} rows as {}", rows.len(), format.as_str());
        Ok(path)
    }
}
