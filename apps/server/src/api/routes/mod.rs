//! Route tables

pub mod hospitals;
pub mod metrics;
pub mod reports;
