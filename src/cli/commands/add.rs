use crate::cli::parser::{AddCommand, Commands};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Store a time entry, leave request or record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Add { what } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match what {
        AddCommand::Time {
            employee,
            start,
            end,
            break_minutes,
            project,
        } => {
            let id = AddLogic::time(
                &mut pool,
                *employee,
                start,
                end.as_ref(),
                *break_minutes,
                project.as_ref(),
            )?;
            let state = if end.is_some() { "" } else { " (open)" };
            success(format!("Time entry #{id} added for employee {employee}{state}"));
        }

        AddCommand::Leave {
            employee,
            start,
            end,
            leave_type,
            half_day,
            status,
        } => {
            let id = AddLogic::leave(
                &mut pool,
                *employee,
                start,
                end.as_ref(),
                leave_type,
                *half_day,
                status,
            )?;
            success(format!("Leave request #{id} added for employee {employee}"));
        }

        AddCommand::Record {
            employee,
            kind,
            title,
            category,
            issued_on,
            expires_on,
        } => {
            let id = AddLogic::record(
                &mut pool,
                *employee,
                kind,
                title,
                category.as_ref(),
                issued_on.as_ref(),
                expires_on.as_ref(),
            )?;
            success(format!("Record #{id} added for employee {employee}"));
        }
    }

    Ok(())
}
