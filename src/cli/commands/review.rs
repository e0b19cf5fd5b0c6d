use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::set_leave_status;
use crate::errors::{AppError, AppResult};
use crate::models::leave_request::LeaveStatus;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Review { id, status } = cmd {
        let new_status = LeaveStatus::from_db_str(status)
            .ok_or_else(|| AppError::InvalidLeaveStatus(status.clone()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        set_leave_status(&mut pool, *id, new_status)?;

        success(format!("Leave request #{id} is now {}", new_status.to_db_str()));
    }

    Ok(())
}
