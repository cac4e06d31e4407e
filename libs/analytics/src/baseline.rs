//! Network baseline: the average of each staffing metric across hospitals.
//!
//! Computed once when the service starts and handed to the derivations that
//! compare a hospital against the network. It is never recomputed while the
//! process runs.

use medscope_models::{Hospital, Metric};
use serde::Serialize;

use crate::round2;

/// The metrics a hospital is positioned against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricField {
    TotalDoctors,
    QualifiedNurses,
    DoctorBedRatio,
    NurseBedRatio,
    IcuDoctorBedRatio,
    IcuNurseBedRatio,
    BedsOperational,
}

impl MetricField {
    pub const ALL: [MetricField; 7] = [
        MetricField::TotalDoctors,
        MetricField::QualifiedNurses,
        MetricField::DoctorBedRatio,
        MetricField::NurseBedRatio,
        MetricField::IcuDoctorBedRatio,
        MetricField::IcuNurseBedRatio,
        MetricField::BedsOperational,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MetricField::TotalDoctors => "total_doctors",
            MetricField::QualifiedNurses => "qualified_nurses",
            MetricField::DoctorBedRatio => "doctor_bed_ratio",
            MetricField::NurseBedRatio => "nurse_bed_ratio",
            MetricField::IcuDoctorBedRatio => "icu_doctor_bed_ratio",
            MetricField::IcuNurseBedRatio => "icu_nurse_bed_ratio",
            MetricField::BedsOperational => "beds_operational",
        }
    }

    /// Reading from a metric record. `BedsOperational` lives on the
    /// hospital, so a metric record never carries it.
    pub fn from_metric(self, metric: &Metric) -> Option<Reading> {
        match self {
            MetricField::TotalDoctors => metric.total_doctors.map(Reading::Count),
            MetricField::QualifiedNurses => metric.qualified_nurses.map(Reading::Count),
            MetricField::DoctorBedRatio => metric.doctor_bed_ratio.map(Reading::Ratio),
            MetricField::NurseBedRatio => metric.nurse_bed_ratio.map(Reading::Ratio),
            MetricField::IcuDoctorBedRatio => metric.icu_doctor_bed_ratio.map(Reading::Ratio),
            MetricField::IcuNurseBedRatio => metric.icu_nurse_bed_ratio.map(Reading::Ratio),
            MetricField::BedsOperational => None,
        }
    }

    /// Reading for a hospital, taking beds from the hospital record and
    /// everything else from its metric record, if any.
    pub fn reading(self, hospital: &Hospital, metric: Option<&Metric>) -> Option<Reading> {
        match self {
            MetricField::BedsOperational => hospital.beds_operational.map(Reading::Count),
            field => metric.and_then(|m| field.from_metric(m)),
        }
    }
}

/// A metric value as reported: head counts stay integers, ratios stay floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reading {
    Count(i64),
    Ratio(f64),
}

impl Reading {
    pub fn as_f64(self) -> f64 {
        match self {
            Reading::Count(n) => n as f64,
            Reading::Ratio(r) => r,
        }
    }
}

/// One value per [`MetricField`], serialized in field order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricValues<T> {
    pub total_doctors: T,
    pub qualified_nurses: T,
    pub doctor_bed_ratio: T,
    pub nurse_bed_ratio: T,
    pub icu_doctor_bed_ratio: T,
    pub icu_nurse_bed_ratio: T,
    pub beds_operational: T,
}

impl<T> MetricValues<T> {
    pub fn from_fn(mut f: impl FnMut(MetricField) -> T) -> Self {
        Self {
            total_doctors: f(MetricField::TotalDoctors),
            qualified_nurses: f(MetricField::QualifiedNurses),
            doctor_bed_ratio: f(MetricField::DoctorBedRatio),
            nurse_bed_ratio: f(MetricField::NurseBedRatio),
            icu_doctor_bed_ratio: f(MetricField::IcuDoctorBedRatio),
            icu_nurse_bed_ratio: f(MetricField::IcuNurseBedRatio),
            beds_operational: f(MetricField::BedsOperational),
        }
    }

    pub fn get(&self, field: MetricField) -> &T {
        match field {
            MetricField::TotalDoctors => &self.total_doctors,
            MetricField::QualifiedNurses => &self.qualified_nurses,
            MetricField::DoctorBedRatio => &self.doctor_bed_ratio,
            MetricField::NurseBedRatio => &self.nurse_bed_ratio,
            MetricField::IcuDoctorBedRatio => &self.icu_doctor_bed_ratio,
            MetricField::IcuNurseBedRatio => &self.icu_nurse_bed_ratio,
            MetricField::BedsOperational => &self.beds_operational,
        }
    }
}

/// Network averages, rounded to two decimals. A metric nobody reports
/// averages to 0.
pub type NetworkBaseline = MetricValues<f64>;

/// Compute the network baseline.
///
/// Staffing metrics average over the metric records that carry a value;
/// operational beds average over hospitals that report them.
pub fn network_baseline(metrics: &[Metric], hospitals: &[Hospital]) -> NetworkBaseline {
    let baseline = MetricValues::from_fn(|field| match field {
        MetricField::BedsOperational => {
            mean(hospitals.iter().filter_map(|h| h.beds_operational.map(|b| b as f64)))
        }
        field => mean(
            metrics
                .iter()
                .filter_map(|m| field.from_metric(m))
                .map(Reading::as_f64),
        ),
    });

    tracing::info!(
        metrics = metrics.len(),
        hospitals = hospitals.len(),
        doctor_bed_ratio = baseline.doctor_bed_ratio,
        beds_operational = baseline.beds_operational,
        "Network baseline computed"
    );

    baseline
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        round2(sum / count as f64)
    }
}
