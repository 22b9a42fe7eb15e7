//! Core domain types and logic.

pub mod savings;
pub mod calculator_form;
pub mod amount;
pub mod session;
pub mod config_validation;
pub mod error;
