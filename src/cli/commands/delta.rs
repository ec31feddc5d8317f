use crate::cli::commands::{export_if_requested, load_input};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::paint_driver;
use crate::utils::formatting::or_dash;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_gap, format_lap_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Delta { input, top, export } = cmd {
        let dataset = load_input(input)?;
        let mut deltas = Core::pole_deltas(&dataset)?;
        deltas.truncate(top.unwrap_or(cfg.top_n));

        header("Delta from the fastest lap");

        let mut table = Table::new(vec![
            Column::right("#"),
            Column::left("Driver"),
            Column::left("Team"),
            Column::right("Lap"),
            Column::right("Time"),
            Column::right("Delta"),
        ]);

        for (i, d) in deltas.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                paint_driver(&d.driver, d.team.as_deref(), cfg.color),
                or_dash(d.team.as_deref()),
                d.lap_number.to_string(),
                format_lap_time(d.lap_time_in_seconds),
                format_gap(d.lap_time_delta_in_seconds, cfg.decimals),
            ]);
        }
        print!("{}", table.render());

        export_if_requested(&deltas, export, cfg, "DeltaFromPole")?;
    }
    Ok(())
}
