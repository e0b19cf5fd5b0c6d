//! Pure derivations over fetched snapshots. No I/O, no clock, no errors.

pub mod category;
pub mod compliance;
pub mod daily;
pub mod duration;
pub mod expiry;
pub mod leave;
pub mod pattern;
pub mod period;
