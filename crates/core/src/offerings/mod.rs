//! Flying-ICO offerings - snapshot models and economics aggregation.

mod offerings_calculator;
mod offerings_model;

pub use offerings_calculator::*;
pub use offerings_model::*;
