//! Composite risk scoring.
//!
//! The total is the sum of three penalties:
//! - staffing: `(1 - ratio) * 5` for each of the four bed ratios, a missing
//!   ratio counting as 1. Ratios above 1 make the term negative and nothing
//!   floors it.
//! - certifications: +10 per certificate whose expiry date is in the past,
//!   +5 per certificate whose expiry date does not parse, nothing when no
//!   expiry date is recorded.
//! - documents: +5 per unverified hospital document.
//!
//! A total of 20 or more is High, 10 or more is Medium, anything else Low.

use chrono::NaiveDate;
use medscope_models::{Address, Certification, DocumentUpload, Hospital, Metric};
use serde::Serialize;
use std::collections::HashMap;

use crate::dates::parse_calendar_date;
use crate::index::{addresses_by_hospital, group_by, index_first_by, AddressSelection};
use crate::{round2, Error, Result};

pub const RATIO_PENALTY_FACTOR: f64 = 5.0;
pub const EXPIRED_CERTIFICATE_PENALTY: f64 = 10.0;
pub const MALFORMED_EXPIRY_PENALTY: f64 = 5.0;
pub const UNVERIFIED_DOCUMENT_PENALTY: i64 = 5;

const HIGH_RISK_THRESHOLD: f64 = 20.0;
const MEDIUM_RISK_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    /// Category for an unrounded total.
    pub fn from_score(total: f64) -> Self {
        if total >= HIGH_RISK_THRESHOLD {
            RiskCategory::High
        } else if total >= MEDIUM_RISK_THRESHOLD {
            RiskCategory::Medium
        } else {
            RiskCategory::Low
        }
    }
}

/// How a certificate's expiry date reads against today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryCheck {
    Undated,
    Current,
    Expired,
    Malformed,
}

impl ExpiryCheck {
    pub fn of(expiry_date: Option<&str>, today: NaiveDate) -> Self {
        match expiry_date.filter(|s| !s.is_empty()) {
            None => ExpiryCheck::Undated,
            Some(raw) => match parse_calendar_date(raw) {
                Some(date) if date < today => ExpiryCheck::Expired,
                Some(_) => ExpiryCheck::Current,
                None => ExpiryCheck::Malformed,
            },
        }
    }

    pub fn penalty(self) -> f64 {
        match self {
            ExpiryCheck::Expired => EXPIRED_CERTIFICATE_PENALTY,
            ExpiryCheck::Malformed => MALFORMED_EXPIRY_PENALTY,
            ExpiryCheck::Undated | ExpiryCheck::Current => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CertificateStatus {
    Valid,
    Expired,
}

/// Penalty contributed by one staffing ratio.
pub fn ratio_penalty(ratio: Option<f64>) -> f64 {
    (1.0 - ratio.unwrap_or(1.0)) * RATIO_PENALTY_FACTOR
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskMetrics {
    pub doctor_bed_ratio: Option<f64>,
    pub nurse_bed_ratio: Option<f64>,
    pub icu_doctor_bed_ratio: Option<f64>,
    pub icu_nurse_bed_ratio: Option<f64>,
    pub doctor_bed_ratio_score: f64,
    pub nurse_bed_ratio_score: f64,
    pub icu_doctor_bed_ratio_score: f64,
    pub icu_nurse_bed_ratio_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificateRisk {
    pub id: Option<i64>,
    pub certification_type: Option<String>,
    pub status: CertificateStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskProfile {
    pub hospital_id: i64,
    pub name: Option<String>,
    pub address: String,
    pub total_risk_score: f64,
    pub risk_category: RiskCategory,
    pub metrics_risk_score: f64,
    pub metrics_sub_score: f64,
    pub certification_risk_score: f64,
    pub document_risk_score: i64,
    pub metrics: RiskMetrics,
    pub certifications: Vec<CertificateRisk>,
    pub unverified_documents: Vec<DocumentUpload>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSummary {
    pub id: i64,
    pub name: Option<String>,
    pub address: String,
    pub total_risk_score: f64,
    pub risk_category: RiskCategory,
}

/// Unrounded risk components for one hospital.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskBreakdown {
    pub doctor: f64,
    pub nurse: f64,
    pub icu_doctor: f64,
    pub icu_nurse: f64,
    pub certifications: f64,
    pub documents: i64,
}

impl RiskBreakdown {
    pub fn compute(
        metric: Option<&Metric>,
        certifications: &[&Certification],
        documents: &[&DocumentUpload],
        today: NaiveDate,
    ) -> Self {
        let unverified = documents.iter().filter(|d| is_unverified(d)).count() as i64;
        Self {
            doctor: ratio_penalty(metric.and_then(|m| m.doctor_bed_ratio)),
            nurse: ratio_penalty(metric.and_then(|m| m.nurse_bed_ratio)),
            icu_doctor: ratio_penalty(metric.and_then(|m| m.icu_doctor_bed_ratio)),
            icu_nurse: ratio_penalty(metric.and_then(|m| m.icu_nurse_bed_ratio)),
            certifications: certifications
                .iter()
                .map(|c| ExpiryCheck::of(c.expiry_date.as_deref(), today).penalty())
                .sum(),
            documents: unverified * UNVERIFIED_DOCUMENT_PENALTY,
        }
    }

    pub fn metrics(&self) -> f64 {
        self.doctor + self.nurse + self.icu_doctor + self.icu_nurse
    }

    pub fn total(&self) -> f64 {
        self.metrics() + self.certifications + self.documents as f64
    }

    pub fn category(&self) -> RiskCategory {
        RiskCategory::from_score(self.total())
    }
}

// A document without a verification flag is taken as verified here.
fn is_unverified(doc: &DocumentUpload) -> bool {
    !doc.is_verified.unwrap_or(true)
}

fn field<'a>(value: Option<&'a str>) -> &'a str {
    value.unwrap_or("N/A")
}

struct Joins<'a> {
    addresses: HashMap<i64, &'a Address>,
    metrics: HashMap<i64, &'a Metric>,
    certifications: HashMap<i64, Vec<&'a Certification>>,
    documents: HashMap<i64, Vec<&'a DocumentUpload>>,
}

impl<'a> Joins<'a> {
    fn new(
        certifications: &'a [Certification],
        metrics: &'a [Metric],
        documents: &'a [DocumentUpload],
        addresses: &'a [Address],
    ) -> Self {
        Self {
            addresses: addresses_by_hospital(addresses, AddressSelection::FirstPrimary),
            metrics: index_first_by(metrics, |m| m.hospital_id),
            certifications: group_by(certifications, |c| c.hospital_id),
            documents: group_by(documents, |d| {
                d.entity_id.filter(|id| d.belongs_to_hospital(*id))
            }),
        }
    }

    fn breakdown(&self, hospital_id: i64, today: NaiveDate) -> RiskBreakdown {
        RiskBreakdown::compute(
            self.metrics.get(&hospital_id).copied(),
            self.certifications.get(&hospital_id).map(Vec::as_slice).unwrap_or_default(),
            self.documents.get(&hospital_id).map(Vec::as_slice).unwrap_or_default(),
            today,
        )
    }
}

/// Full risk profile for one hospital.
pub fn risk_profile(
    hospital_id: i64,
    hospitals: &[Hospital],
    certifications: &[Certification],
    metrics: &[Metric],
    documents: &[DocumentUpload],
    addresses: &[Address],
    today: NaiveDate,
) -> Result<RiskProfile> {
    let hospital = hospitals
        .iter()
        .find(|h| h.id == hospital_id)
        .ok_or_else(|| Error::hospital_not_found(hospital_id))?;

    let joins = Joins::new(certifications, metrics, documents, addresses);
    let breakdown = joins.breakdown(hospital_id, today);
    let metric = joins.metrics.get(&hospital_id).copied();
    let address = joins.addresses.get(&hospital_id).copied();

    let certificate_risks = joins
        .certifications
        .get(&hospital_id)
        .into_iter()
        .flatten()
        .map(|c| CertificateRisk {
            id: c.id,
            certification_type: c.certification_type.clone(),
            status: match ExpiryCheck::of(c.expiry_date.as_deref(), today) {
                ExpiryCheck::Expired => CertificateStatus::Expired,
                _ => CertificateStatus::Valid,
            },
        })
        .collect();

    let unverified_documents = joins
        .documents
        .get(&hospital_id)
        .into_iter()
        .flatten()
        .filter(|d| is_unverified(d))
        .map(|d| (*d).clone())
        .collect();

    let address = format!(
        "{}, {}, {}, {} - {}",
        field(address.and_then(|a| a.street.as_deref())),
        field(address.and_then(|a| a.area_locality.as_deref())),
        field(address.and_then(|a| a.city_town.as_deref())),
        field(address.and_then(|a| a.state.as_deref())),
        field(address.and_then(|a| a.pin_code.as_deref())),
    );

    Ok(RiskProfile {
        hospital_id,
        name: hospital.name.clone(),
        address,
        total_risk_score: round2(breakdown.total()),
        risk_category: breakdown.category(),
        metrics_risk_score: round2(breakdown.metrics()),
        metrics_sub_score: round2(breakdown.metrics()),
        certification_risk_score: round2(breakdown.certifications),
        document_risk_score: breakdown.documents,
        metrics: RiskMetrics {
            doctor_bed_ratio: metric.and_then(|m| m.doctor_bed_ratio),
            nurse_bed_ratio: metric.and_then(|m| m.nurse_bed_ratio),
            icu_doctor_bed_ratio: metric.and_then(|m| m.icu_doctor_bed_ratio),
            icu_nurse_bed_ratio: metric.and_then(|m| m.icu_nurse_bed_ratio),
            doctor_bed_ratio_score: round2(breakdown.doctor),
            nurse_bed_ratio_score: round2(breakdown.nurse),
            icu_doctor_bed_ratio_score: round2(breakdown.icu_doctor),
            icu_nurse_bed_ratio_score: round2(breakdown.icu_nurse),
        },
        certifications: certificate_risks,
        unverified_documents,
    })
}

/// Risk total and category for every hospital.
pub fn risk_list(
    hospitals: &[Hospital],
    certifications: &[Certification],
    metrics: &[Metric],
    documents: &[DocumentUpload],
    addresses: &[Address],
    today: NaiveDate,
) -> Vec<RiskSummary> {
    let joins = Joins::new(certifications, metrics, documents, addresses);

    hospitals
        .iter()
        .map(|h| {
            let breakdown = joins.breakdown(h.id, today);
            let address = joins.addresses.get(&h.id).copied();
            RiskSummary {
                id: h.id,
                name: h.name.clone(),
                address: format!(
                    "{}, {}, {}",
                    field(address.and_then(|a| a.street.as_deref())),
                    field(address.and_then(|a| a.area_locality.as_deref())),
                    field(address.and_then(|a| a.city_town.as_deref())),
                ),
                total_risk_score: round2(breakdown.total()),
                risk_category: breakdown.category(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn category_boundaries() {
        assert_eq!(RiskCategory::from_score(20.0), RiskCategory::High);
        assert_eq!(RiskCategory::from_score(10.0), RiskCategory::Medium);
        assert_eq!(RiskCategory::from_score(19.99), RiskCategory::Medium);
        assert_eq!(RiskCategory::from_score(9.99), RiskCategory::Low);
        assert_eq!(RiskCategory::from_score(-4.0), RiskCategory::Low);
    }

    #[test]
    fn expiry_penalties() {
        let today = today();
        assert_eq!(ExpiryCheck::of(Some("2025-06-14"), today).penalty(), 10.0);
        assert_eq!(ExpiryCheck::of(Some("2025-06-15"), today), ExpiryCheck::Current);
        assert_eq!(ExpiryCheck::of(Some("not a date"), today).penalty(), 5.0);
        assert_eq!(ExpiryCheck::of(None, today).penalty(), 0.0);
        assert_eq!(ExpiryCheck::of(Some(""), today), ExpiryCheck::Undated);
    }

    // Documented quirk: a malformed expiry date costs less than an expired
    // one but more than a missing one.
    #[test]
    fn malformed_expiry_sits_between_missing_and_expired() {
        let today = today();
        let missing = ExpiryCheck::of(None, today).penalty();
        let malformed = ExpiryCheck::of(Some("15/06/2020"), today).penalty();
        let expired = ExpiryCheck::of(Some("2020-06-15"), today).penalty();
        assert!(missing < malformed && malformed < expired);
    }

    // Documented quirk: ratios above 1 reduce the staffing penalty below zero.
    #[test]
    fn high_ratios_make_metric_risk_negative() {
        assert_eq!(ratio_penalty(None), 0.0);
        assert_eq!(ratio_penalty(Some(0.5)), 2.5);
        assert_eq!(ratio_penalty(Some(3.0)), -10.0);
    }

    #[test]
    fn profile_sums_all_components() {
        let hospitals = vec![hospital(1, "North")];
        let mut m = metric(1, 0.5, 0.5);
        m.icu_doctor_bed_ratio = Some(1.0);
        let certs = vec![
            certification(1, "NABH", Some("2020-01-01")),
            certification(1, "ISO 9001", Some("bad")),
            certification(1, "JCI", None),
        ];
        let docs = vec![
            hospital_document(1, Some(false)),
            hospital_document(1, Some(true)),
            hospital_document(1, None),
        ];
        let addresses = vec![primary(1, "Pune", "MH")];

        let profile =
            risk_profile(1, &hospitals, &certs, &[m], &docs, &addresses, today()).unwrap();

        assert_eq!(profile.metrics_risk_score, 5.0);
        assert_eq!(profile.certification_risk_score, 15.0);
        assert_eq!(profile.document_risk_score, 5);
        assert_eq!(profile.total_risk_score, 25.0);
        assert_eq!(profile.risk_category, RiskCategory::High);
        assert_eq!(profile.unverified_documents.len(), 1);
        assert_eq!(profile.address, "N/A, N/A, Pune, MH - N/A");

        let statuses: Vec<_> = profile.certifications.iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![
                CertificateStatus::Expired,
                CertificateStatus::Valid,
                CertificateStatus::Valid
            ]
        );
    }

    #[test]
    fn documents_of_other_entities_are_ignored() {
        let hospitals = vec![hospital(1, "North")];
        let mut foreign = hospital_document(1, Some(false));
        foreign.entity_type = Some("doctor".into());

        let profile =
            risk_profile(1, &hospitals, &[], &[], &[foreign], &[], today()).unwrap();
        assert_eq!(profile.document_risk_score, 0);
        assert_eq!(profile.risk_category, RiskCategory::Low);
        assert_eq!(profile.address, "N/A, N/A, N/A, N/A - N/A");
    }

    #[test]
    fn unknown_hospital_is_not_found() {
        let err = risk_profile(7, &[], &[], &[], &[], &[], today()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn list_covers_every_hospital_with_defaults() {
        let hospitals = vec![hospital(1, "North"), hospital(2, "South")];
        let metrics = vec![metric(2, 0.0, 0.0)];

        let list = risk_list(&hospitals, &[], &metrics, &[], &[], today());

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].total_risk_score, 0.0);
        assert_eq!(list[0].risk_category, RiskCategory::Low);
        assert_eq!(list[1].total_risk_score, 10.0);
        assert_eq!(list[1].risk_category, RiskCategory::Medium);
        assert_eq!(list[0].address, "N/A, N/A, N/A");
    }

    #[test]
    fn category_uses_unrounded_total() {
        let hospitals = vec![hospital(1, "North")];
        // 5 + 4.996 = 9.996: reported as 10.0 but still Low.
        let mut m = metric(1, 0.0, 0.0008);
        m.icu_doctor_bed_ratio = Some(1.0);
        m.icu_nurse_bed_ratio = Some(1.0);
        let list = risk_list(&hospitals, &[], &[m], &[], &[], today());
        assert_eq!(list[0].total_risk_score, 10.0);
        assert_eq!(list[0].risk_category, RiskCategory::Low);
    }
}
