use chrono::{DateTime, Utc};
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amounts::parse_timestamp_field;
use crate::errors::Result;

/// The [start, end] interval over which a locked quantity becomes
/// progressively unlockable. `end > start` is expected; an inverted
/// window is upstream bad data and is clamped by the evaluator rather
/// than rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VestingWindow {
    pub start: i64,
    pub end: i64,
}

impl VestingWindow {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Parses the indexer's `vestingStart`/`vestingEnd` unix-second
    /// string fields.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let window = Self {
            start: parse_timestamp_field(start, "vestingStart")?,
            end: parse_timestamp_field(end, "vestingEnd")?,
        };
        if window.end <= window.start {
            warn!(
                "Vesting window end ({}) is not after start ({}); fractions will clamp.",
                window.end, window.start
            );
        }
        Ok(window)
    }

    pub fn duration_seconds(&self) -> i64 {
        self.end - self.start
    }

    pub fn start_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.start, 0)
    }

    pub fn end_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.end, 0)
    }
}

/// One sample of a vesting schedule chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePoint {
    pub timestamp: i64,
    pub vested_amount: Decimal,
}

impl SchedulePoint {
    pub fn time_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}
