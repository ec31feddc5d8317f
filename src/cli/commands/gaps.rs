use crate::cli::commands::{export_if_requested, load_input};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::GapExport;
use crate::models::gap::LapGap;
use crate::ui::messages::header;
use crate::utils::colors::{grey_if_missing, paint_driver};
use crate::utils::formatting::or_dash;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_gap, format_session_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Gaps { input, lap, export } = cmd {
        let dataset = load_input(input)?;
        let gaps = Core::gaps(&dataset)?;

        let shown: Vec<&LapGap> = gaps
            .iter()
            .filter(|g| lap.is_none_or(|n| g.lap.lap_number == n))
            .collect();

        match lap {
            Some(n) => header(format!("Gaps to the car ahead, lap {n}")),
            None => header("Gaps to the car ahead"),
        }
        print!("{}", render(&shown, cfg));

        let rows: Vec<GapExport> = shown.into_iter().map(GapExport::from).collect();
        export_if_requested(&rows, export, cfg, "Gaps")?;
    }
    Ok(())
}

fn render(gaps: &[&LapGap], cfg: &Config) -> String {
    let mut table = Table::new(vec![
        Column::right("Lap"),
        Column::right("Pos"),
        Column::left("Driver"),
        Column::left("Team"),
        Column::right("Lap start"),
        Column::right("Gap"),
    ]);

    for g in gaps {
        let gap_text = g
            .gap_in_seconds
            .map(|s| format_gap(s, cfg.decimals))
            .unwrap_or_else(|| "--".to_string());

        table.add_row(vec![
            g.lap.lap_number.to_string(),
            g.lap.position.map(|p| p.to_string()).unwrap_or_else(|| "--".into()),
            paint_driver(&g.lap.driver, g.lap.team.as_deref(), cfg.color),
            or_dash(g.lap.team.as_deref()),
            g.lap
                .lap_start_time
                .map(format_session_time)
                .unwrap_or_else(|| "--".into()),
            grey_if_missing(&gap_text, g.gap_in_seconds.is_none(), cfg.color),
        ]);
    }

    table.render()
}
