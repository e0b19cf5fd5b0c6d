pub mod leave_request;
pub mod record;
pub mod summary;
pub mod time_interval;
pub mod violation;
