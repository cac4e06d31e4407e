//! Business logic services

pub mod reports;

pub use reports::{local_today, ReportService};
