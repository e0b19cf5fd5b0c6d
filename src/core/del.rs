use crate::db::pool::DbPool;
use crate::db::queries::{Table, delete_by_id};
use crate::errors::AppResult;
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(pool: &mut DbPool, table: Table, id: i64) -> AppResult<()> {
        delete_by_id(pool, table, id)?;
        info(format!("Deleted {} #{}", table.label(), id));
        Ok(())
    }
}
