//! Composite quality score.
//!
//! Certification count, doctor/bed ratio and nurse/bed ratio are each
//! normalised against the best value in the network, then weighted
//! 40/30/30 into a score out of 100.

use medscope_models::{Address, Certification, Hospital, Metric};
use serde::Serialize;

use crate::index::{addresses_by_hospital, count_by, index_by, AddressSelection};

pub const CERTIFICATION_WEIGHT: f64 = 40.0;
pub const DOCTOR_RATIO_WEIGHT: f64 = 30.0;
pub const NURSE_RATIO_WEIGHT: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityScore {
    pub hospital_id: i64,
    pub name: Option<String>,
    pub city: Option<String>,
    pub certifications: usize,
    #[serde(rename = "doctorRatio")]
    pub doctor_ratio: f64,
    #[serde(rename = "nurseRatio")]
    pub nurse_ratio: f64,
    #[serde(rename = "qualityScore")]
    pub quality_score: i64,
}

/// `value / max`, or 0 when the network maximum is not positive.
pub fn normalize(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        value / max
    } else {
        0.0
    }
}

/// Score every hospital that has a metric record, best first.
pub fn quality_scores(
    hospitals: &[Hospital],
    metrics: &[Metric],
    certifications: &[Certification],
    addresses: &[Address],
) -> Vec<QualityScore> {
    let metrics = index_by(metrics, |m| m.hospital_id);
    let cert_counts = count_by(certifications, |c| c.hospital_id);
    let addresses = addresses_by_hospital(addresses, AddressSelection::Latest);

    let mut scored: Vec<QualityScore> = hospitals
        .iter()
        .filter_map(|h| {
            let metric = metrics.get(&h.id)?;
            Some(QualityScore {
                hospital_id: h.id,
                name: h.name.clone(),
                city: addresses.get(&h.id).and_then(|a| a.city_town.clone()),
                certifications: cert_counts.get(&h.id).copied().unwrap_or(0),
                doctor_ratio: metric.doctor_bed_ratio.unwrap_or(0.0),
                nurse_ratio: metric.nurse_bed_ratio.unwrap_or(0.0),
                quality_score: 0,
            })
        })
        .collect();

    let max_certs = scored.iter().map(|s| s.certifications as f64).fold(0.0, f64::max);
    let max_doctor = scored.iter().map(|s| s.doctor_ratio).fold(0.0, f64::max);
    let max_nurse = scored.iter().map(|s| s.nurse_ratio).fold(0.0, f64::max);

    for s in &mut scored {
        let score = normalize(s.certifications as f64, max_certs) * CERTIFICATION_WEIGHT
            + normalize(s.doctor_ratio, max_doctor) * DOCTOR_RATIO_WEIGHT
            + normalize(s.nurse_ratio, max_nurse) * NURSE_RATIO_WEIGHT;
        s.quality_score = score.round_ties_even() as i64;
    }

    // Stable: equal scores keep hospital order.
    scored.sort_by(|a, b| b.quality_score.cmp(&a.quality_score));
    scored
}
