//! seqgen library — application logic for the sequence driver.

pub mod app;
pub mod config;
pub mod errors;
pub mod output;
pub mod rules;
