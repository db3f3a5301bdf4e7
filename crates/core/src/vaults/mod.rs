//! Stak vaults - snapshot models and economics aggregation.

mod vaults_calculator;
mod vaults_model;

pub use vaults_calculator::*;
pub use vaults_model::*;

#[cfg(test)]
mod vaults_calculator_tests;
