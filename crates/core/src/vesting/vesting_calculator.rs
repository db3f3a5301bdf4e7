//! Evaluates the time-based unlock curve.
//!
//! All fractions are expressed as the *locked* share of a quantity:
//! 1 means fully locked, 0 fully unlocked. Callers capture `now` once
//! per evaluation pass and thread it through every derived quantity so
//! global and per-position fractions stay mutually consistent.

use rust_decimal::Decimal;

use crate::constants::{DEFAULT_SCHEDULE_STEPS, SCHEDULE_PADDING_SECONDS};
use crate::vesting::{SchedulePoint, VestingWindow};

fn clamp_unit(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, Decimal::ONE)
}

/// Fraction of a quantity still subject to the vesting lock at `now`.
///
/// Before the window it is 1, after the window 0, and linearly
/// interpolated in between. Clamped to [0, 1] even for inverted
/// windows from bad upstream data.
pub fn locked_fraction(window: &VestingWindow, now: i64) -> Decimal {
    if now <= window.start {
        return Decimal::ONE;
    }
    if now >= window.end {
        return Decimal::ZERO;
    }
    clamp_unit(Decimal::from(window.end - now) / Decimal::from(window.end - window.start))
}

/// Complement of [`locked_fraction`]: the share already vested.
pub fn vested_fraction(window: &VestingWindow, now: i64) -> Decimal {
    Decimal::ONE - locked_fraction(window, now)
}

/// Locked fraction for a single position.
///
/// A position opened after the window start vests from its own
/// `created_at` rather than the window's start, so it is not credited
/// with vesting progress that happened before it existed. A position
/// opened at (or after) the window end has nothing left to vest.
pub fn position_locked_fraction(window: &VestingWindow, created_at: i64, now: i64) -> Decimal {
    if now < window.start {
        return Decimal::ONE;
    }
    if now > window.end {
        return Decimal::ZERO;
    }
    let effective_start = created_at.max(window.start);
    let duration = window.end - effective_start;
    if duration <= 0 {
        return Decimal::ZERO;
    }
    let elapsed = now - effective_start;
    clamp_unit(Decimal::from(duration - elapsed) / Decimal::from(duration))
}

/// Portion of `total` already vested at `now`.
pub fn vested_amount(total: Decimal, window: &VestingWindow, now: i64) -> Decimal {
    total * vested_fraction(window, now)
}

/// Generates the vesting schedule chart series: `steps + 1` evenly
/// spaced samples from 30 days before the window start to 30 days after
/// its end, each carrying the globally vested portion of `total_locked`.
/// A zero step count falls back to the default 50.
///
/// The series is deterministic and sorted ascending by timestamp.
pub fn vesting_schedule(
    window: &VestingWindow,
    total_locked: Decimal,
    steps: usize,
) -> Vec<SchedulePoint> {
    let chart_start = window.start - SCHEDULE_PADDING_SECONDS;
    let chart_end = window.end + SCHEDULE_PADDING_SECONDS;
    let total_duration = chart_end - chart_start;
    let steps = if steps == 0 { DEFAULT_SCHEDULE_STEPS } else { steps };

    (0..=steps)
        .map(|i| {
            let timestamp = chart_start + total_duration * (i as i64) / (steps as i64);
            SchedulePoint {
                timestamp,
                vested_amount: vested_amount(total_locked, window, timestamp),
            }
        })
        .collect()
}
