//! Vesting module - time-based unlock curves and chart schedules.

mod vesting_calculator;
mod vesting_model;

pub use vesting_calculator::*;
pub use vesting_model::*;
