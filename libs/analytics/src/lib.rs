//! Aggregation engine for the hospital network datasets.
//!
//! Data flows in one direction:
//! - [`store`] loads a dataset from the data directory into typed records
//! - [`index`] builds lookup maps used to join records by hospital id
//! - [`baseline`] computes the network averages once, at startup
//! - the derivation modules turn loaded records into response payloads
//!
//! Derivations are plain synchronous functions over slices. None of them
//! calls another, and none of them touches the filesystem.

pub mod baseline;
pub mod compliance;
pub mod dates;
pub mod directory;
pub mod equipment;
pub mod error;
pub mod geography;
pub mod icu;
pub mod index;
pub mod maintenance;
pub mod positioning;
pub mod quality;
pub mod risk;
pub mod staffing;
pub mod store;
pub mod surgical;

mod ser;

#[cfg(test)]
pub(crate) mod fixtures;

use rust_decimal::{Decimal, RoundingStrategy};

pub use baseline::{MetricField, MetricValues, NetworkBaseline, Reading};
pub use error::{DataFault, Error, Result};
pub use store::{DataStore, LoadObserver, LoadOutcome};

/// Round to two decimal places, ties to even.
///
/// Rounds the decimal value the double actually holds, so `7.015` (stored
/// as 7.01499...) rounds down. Values outside `Decimal`'s range are
/// returned unchanged.
pub fn round2(value: f64) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };
    exact
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
        .to_string()
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn round2_matches_decimal_rounding() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.235_1), 1.24);
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(-2.5), -2.5);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn round2_uses_the_stored_value_not_the_scaled_one() {
        // Each is stored just off the halfway point.
        assert_eq!(round2(7.015), 7.01);
        assert_eq!(round2(49.365), 49.37);
        assert_eq!(round2(29.585), 29.59);
        assert_eq!(round2(-7.015), -7.01);
        assert_eq!(round2(200.0 / 3.0), 66.67);
    }

    #[test]
    fn round2_passes_non_finite_values_through() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }
}
