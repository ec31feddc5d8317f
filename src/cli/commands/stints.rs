use crate::cli::commands::{export_if_requested, load_input};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::pace::{FuelCorrectedLap, StintSummary};
use crate::ui::messages::{header, info};
use crate::utils::colors::paint_compound;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_lap_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stints {
        input,
        driver,
        fuel_coeff,
        green_only,
        export,
    } = cmd
    {
        let coeff = fuel_coeff.unwrap_or(cfg.fuel_coeff);
        let dataset = load_input(input)?;
        let (laps, stints) = Core::stints(&dataset, driver, coeff, *green_only)?;

        info(format!("Fuel correction: {coeff:.3} s/lap"));

        header(format!("{driver}: fuel-corrected laps"));
        print!("{}", render_laps(&laps, cfg));

        header(format!("{driver}: stints"));
        print!("{}", render_stints(&stints, cfg));

        export_if_requested(&laps, export, cfg, "FuelCorrected")?;
    }
    Ok(())
}

fn compound_cell(compound: Option<&str>, cfg: &Config) -> String {
    compound
        .map(|c| paint_compound(c, cfg.color))
        .unwrap_or_else(|| "--".into())
}

fn render_laps(laps: &[FuelCorrectedLap], cfg: &Config) -> String {
    let mut table = Table::new(vec![
        Column::right("Lap"),
        Column::right("Stint"),
        Column::left("Compound"),
        Column::right("Lap time"),
        Column::right("Corrected"),
    ]);

    for lap in laps {
        table.add_row(vec![
            lap.lap_number.to_string(),
            lap.stint.map(|s| s.to_string()).unwrap_or_else(|| "--".into()),
            compound_cell(lap.compound.as_deref(), cfg),
            format_lap_time(lap.lap_time_in_seconds),
            format_lap_time(lap.fuel_corrected_lap_time),
        ]);
    }

    table.render()
}

fn render_stints(stints: &[StintSummary], cfg: &Config) -> String {
    let mut table = Table::new(vec![
        Column::right("Stint"),
        Column::left("Compound"),
        Column::right("Laps"),
        Column::right("Mean"),
        Column::right("Best"),
    ]);

    for s in stints {
        table.add_row(vec![
            s.stint.map(|n| n.to_string()).unwrap_or_else(|| "--".into()),
            compound_cell(s.compound.as_deref(), cfg),
            s.laps.to_string(),
            format_lap_time(s.mean_corrected),
            format_lap_time(s.best_corrected),
        ]);
    }

    table.render()
}
