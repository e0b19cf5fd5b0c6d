use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::range::parse_optional_range;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        what,
        format,
        file,
        employee,
        range,
        force,
    } = cmd
    {
        let bounds = parse_optional_range(range.as_ref())?;
        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&mut pool, *what, *format, file, *employee, bounds, *force)?;
    }
    Ok(())
}
