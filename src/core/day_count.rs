//! Day-count conventions
//!
//! Only Actual/365 Fixed is supported. Callers always pass the valuation
//! date explicitly; there is no process-wide evaluation date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayCount {
    #[default]
    Actual365Fixed,
}

impl DayCount {
    /// Days in the fixed year basis
    pub fn basis(&self) -> f64 {
        match self {
            DayCount::Actual365Fixed => 365.0,
        }
    }

    /// Year fraction between two dates. Negative when `end` precedes `start`.
    pub fn year_fraction(&self, start: NaiveDate, end: NaiveDate) -> f64 {
        (end - start).num_days() as f64 / self.basis()
    }

    /// Year fraction of a whole number of calendar days
    pub fn from_days(&self, days: u32) -> f64 {
        f64::from(days) / self.basis()
    }
}
