pub mod config;
pub mod delta;
pub mod gaps;
pub mod ideal;
pub mod init;
pub mod speed;
pub mod stints;

use crate::cli::parser::{ExportArgs, InputArgs};
use crate::config::Config;
use crate::data::{LapDataset, load_laps};
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRow};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;

/// Load the `--input` dataset, telling the user when it has no rows.
pub(crate) fn load_input(input: &InputArgs) -> AppResult<LapDataset> {
    let path = expand_tilde(&input.input);
    let dataset = load_laps(&path)?;

    if dataset.is_empty() {
        warning(format!("No laps found in {}", path.display()));
    } else {
        info(format!(
            "Loaded {} laps from {}",
            dataset.laps.len(),
            path.display()
        ));
    }

    Ok(dataset)
}

/// Export `rows` when `--export` was given; format falls back to the config default.
pub(crate) fn export_if_requested<T: ExportRow>(
    rows: &[T],
    args: &ExportArgs,
    cfg: &Config,
    sheet: &str,
) -> AppResult<()> {
    if let Some(file) = &args.export {
        let format = args.format.unwrap_or(cfg.default_format);
        ExportLogic::export(rows, format, file, sheet, args.force)?;
    }
    Ok(())
}
