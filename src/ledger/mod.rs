//! Records and the ledger that aggregates them.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod record;

pub use ledger::{DailySummary, Ledger, WEEK_SPAN_DAYS};
pub use record::{format_date, parse_date, Record, DATE_FORMAT};
