use crate::cli::commands::{export_if_requested, load_input};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::paint_driver;
use crate::utils::formatting::or_dash;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Speed { input, export } = cmd {
        let dataset = load_input(input)?;
        let speeds = Core::top_speeds(&dataset)?;

        header("Top speed at the speed trap");

        let mut table = Table::new(vec![
            Column::left("Driver"),
            Column::left("Team"),
            Column::right("km/h"),
        ]);
        for s in &speeds {
            table.add_row(vec![
                paint_driver(&s.driver, s.team.as_deref(), cfg.color),
                or_dash(s.team.as_deref()),
                format!("{:.1}", s.speed_st),
            ]);
        }
        print!("{}", table.render());

        export_if_requested(&speeds, export, cfg, "TopSpeed")?;
    }
    Ok(())
}
