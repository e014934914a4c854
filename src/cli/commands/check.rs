use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::table::Table;

/// Longest raw line shown in the skipped-lines table.
const MAX_SHOWN: usize = 80;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { input } = cmd {
        let report = Core::parse_input(input)?;

        info(format!("Lines       : {}", report.total_lines()));
        info(format!("Clock events: {}", report.events.len()));
        info(format!("Blank lines : {}", report.blank));

        if !report.has_skipped() {
            success("No malformed lines.");
            return Ok(());
        }

        warning(format!("Malformed   : {}", report.skipped.len()));
        println!();
        header("Skipped lines");

        let mut table = Table::new(&["Line", "Content"]);
        for s in &report.skipped {
            table.add_row(vec![s.line_no.to_string(), shorten(&s.content)]);
        }
        print!("{}", table.render(cfg.separator()));
    }
    Ok(())
}

fn shorten(s: &str) -> String {
    if s.chars().count() <= MAX_SHOWN {
        return s.to_string();
    }
    let cut: String = s.chars().take(MAX_SHOWN - 1).collect();
    format!("{cut}…")
}
