use crate::cli::parser::{Commands, DelCommand};
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries::Table;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Del { yes, what } = cmd else {
        return Ok(());
    };

    let (table, id) = match what {
        DelCommand::Time { id } => (Table::TimeEntries, *id),
        DelCommand::Leave { id } => (Table::LeaveRequests, *id),
        DelCommand::Record { id } => (Table::Records, *id),
    };

    if !*yes
        && !ask_confirmation(&format!(
            "Delete {} #{}? This action is irreversible.",
            table.label(),
            id
        ))
    {
        info("Operation cancelled.");
        return Ok(());
    }

    let mut pool = DbPool::new(&cfg.database)?;
    DeleteLogic::apply(&mut pool, table, id)
}
