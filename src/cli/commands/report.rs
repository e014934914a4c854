use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::DailyAggregator;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::range::parse_range;
use crate::models::DailyAttendance;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{
    EMPTY_TEXT, EMPTY_TIME, colorize_in_out, colorize_optional, colorize_weekday,
};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        input,
        file,
        format,
        range,
        cutoff,
        force,
        strict,
    } = cmd
    {
        let aggregator = DailyAggregator::new(cutoff.unwrap_or(cfg.in_cutoff_hour))?;

        let bounds = match range {
            Some(r) => parse_range(r)?,
            None => None,
        };

        if let Some(f) = file {
            ExportLogic::check_target(input, f, *force)?;
        }

        let events = Core::load_events(input, *strict)?;
        let rows = Core::build_daily_report(&events, &aggregator, bounds);

        info(format!(
            "{} employee-day rows (clock-in cutoff {:02}:59)",
            rows.len(),
            aggregator.cutoff_hour()
        ));

        match file {
            Some(f) => {
                let format = format.unwrap_or(cfg.default_format);
                ExportLogic::export_attendance(&rows, format, f, *force)?;
            }
            None => print_rows(&rows, cfg),
        }
    }
    Ok(())
}

fn print_rows(rows: &[DailyAttendance], cfg: &Config) {
    if rows.is_empty() {
        warning("No attendance rows to show.");
        return;
    }

    let mut headers = vec![
        "Employee ID",
        "Name",
        "Date",
        "In",
        "Terminal In",
        "Out",
        "Terminal Out",
    ];
    if cfg.show_weekday {
        headers.push("Weekday");
    }

    let mut table = Table::new(&headers);
    for r in rows {
        let mut row = vec![
            r.employee_id.clone(),
            r.name.clone(),
            r.date_str(),
            r.clock_in_time().unwrap_or_else(|| EMPTY_TIME.to_string()),
            r.terminal_in().unwrap_or(EMPTY_TEXT).to_string(),
            r.clock_out_time().unwrap_or_else(|| EMPTY_TIME.to_string()),
            r.terminal_out().unwrap_or(EMPTY_TEXT).to_string(),
        ];
        if cfg.show_weekday {
            row.push(r.weekday().to_string());
        }
        table.add_row(row);
    }

    println!();
    header("Daily attendance");

    let colour = std::env::var_os("NO_COLOR").is_none();
    let rendered = table.render_with(cfg.separator(), |col, cell| {
        if !colour {
            return cell.to_string();
        }
        match col {
            3 => colorize_in_out(cell, true),
            5 => colorize_in_out(cell, false),
            4 | 6 => colorize_optional(cell),
            7 => colorize_weekday(cell),
            _ => cell.to_string(),
        }
    });
    print!("{rendered}");
}
