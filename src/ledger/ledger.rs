use std::{fmt, sync::Arc};

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::record::Record;
use crate::clock::{Clock, SystemClock};

/// Length of the trailing window used by `get_week_stats`, in days.
pub const WEEK_SPAN_DAYS: i64 = 7;

/// Append-only collection of records measured against a daily limit.
#[derive(Clone)]
pub struct Ledger {
    records: Vec<Record>,
    limit: f64,
    clock: Arc<dyn Clock>,
}

/// Point-in-time view of the ledger's statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub limit: f64,
    pub today: i128,
    pub week: i128,
    pub remaining: f64,
}

impl Ledger {
    pub fn new(limit: f64) -> Self {
        Self::with_clock(limit, Arc::new(SystemClock))
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Vec::new(),
            limit,
            clock,
        }
    }

    pub fn add_record(&mut self, record: Record) {
        tracing::debug!(
            amount = record.amount(),
            date = %record.date(),
            "record added"
        );
        self.records.push(record);
    }

    pub fn get_today_stats(&self) -> i128 {
        self.sum_on(self.clock.today())
    }

    pub fn get_week_stats(&self) -> i128 {
        self.sum_week_ending(self.clock.today())
    }

    /// Daily limit minus today's total. Negative once the budget is exceeded.
    pub fn get_limit_today(&self) -> f64 {
        self.remaining_after(self.get_today_stats())
    }

    pub fn summary(&self) -> DailySummary {
        let date = self.clock.today();
        let today = self.sum_on(date);
        DailySummary {
            date,
            limit: self.limit,
            today,
            week: self.sum_week_ending(date),
            remaining: self.remaining_after(today),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Totals above 2^53 round to the nearest `f64`.
    fn remaining_after(&self, spent: i128) -> f64 {
        self.limit - spent as f64
    }

    fn sum_on(&self, date: NaiveDate) -> i128 {
        self.sum_between(date, date)
    }

    fn sum_week_ending(&self, end: NaiveDate) -> i128 {
        self.sum_between(end - Duration::days(WEEK_SPAN_DAYS), end)
    }

    /// Sums in `i128` so any number of `i64` amounts adds up exactly.
    fn sum_between(&self, start: NaiveDate, end: NaiveDate) -> i128 {
        self.records
            .iter()
            .filter(|record| (start..=end).contains(&record.date()))
            .map(|record| i128::from(record.amount()))
            .sum()
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("records", &self.records)
            .field("limit", &self.limit)
            .field("today", &self.clock.today())
            .finish()
    }
}
