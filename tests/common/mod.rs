use std::sync::Arc;

use chrono::NaiveDate;
use daily_budget::{clock::FixedClock, ledger::Ledger};

pub fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Fixed clock shared by a ledger and the records built for it.
pub fn pinned(today: NaiveDate) -> Arc<FixedClock> {
    Arc::new(FixedClock(today))
}

pub fn ledger_on(today: NaiveDate, limit: f64) -> (Ledger, Arc<FixedClock>) {
    let clock = pinned(today);
    (Ledger::with_clock(limit, clock.clone()), clock)
}
