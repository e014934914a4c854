use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        input,
        file,
        format,
        force,
        strict,
    } = cmd
    {
        ExportLogic::check_target(input, file, *force)?;

        let events = Core::load_events(input, *strict)?;
        let format = format.unwrap_or(cfg.default_format);
        ExportLogic::export_events(&events, format, file, *force)?;
    }
    Ok(())
}
