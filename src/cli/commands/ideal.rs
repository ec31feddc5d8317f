use crate::cli::commands::{export_if_requested, load_input};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::ideal_lap::IdealLap;
use crate::ui::messages::header;
use crate::utils::colors::{colorize_delta, paint_driver, paint_hex};
use crate::utils::formatting::or_dash;
use crate::utils::palette::driver_color_alt;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_gap, format_lap_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ideal {
        input,
        driver,
        top,
        export,
    } = cmd
    {
        let dataset = load_input(input)?;
        let mut summary = Core::ideal_laps(&dataset, driver.as_deref())?;

        if let Some(n) = top {
            summary.sort_by(|a, b| a.best_lap.total_cmp(&b.best_lap));
            summary.truncate(*n);
        }

        header("Ideal lap vs best lap");
        print!("{}", render(&summary, cfg));

        export_if_requested(&summary, export, cfg, "IdealLap")?;
    }
    Ok(())
}

fn render(summary: &[IdealLap], cfg: &Config) -> String {
    let mut table = Table::new(vec![
        Column::left("Driver"),
        Column::right("No."),
        Column::left("Team"),
        Column::right("S1"),
        Column::right("S2"),
        Column::right("S3"),
        Column::right("Best lap"),
        Column::right("Ideal lap"),
        Column::right("Margin"),
    ]);

    for row in summary {
        let ideal = format_lap_time(row.ideal_lap);
        table.add_row(vec![
            paint_driver(&row.driver, row.team.as_deref(), cfg.color),
            or_dash(row.driver_number.as_deref()),
            or_dash(row.team.as_deref()),
            format!("{:.*}", cfg.decimals, row.best_s1),
            format!("{:.*}", cfg.decimals, row.best_s2),
            format!("{:.*}", cfg.decimals, row.best_s3),
            format_lap_time(row.best_lap),
            paint_hex(&ideal, driver_color_alt(&row.driver), cfg.color),
            colorize_delta(
                Some(row.improvement_margin),
                &format_gap(row.improvement_margin, cfg.decimals),
                cfg.color,
            ),
        ]);
    }

    table.render()
}
