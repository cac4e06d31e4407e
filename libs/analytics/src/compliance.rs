//! Certification validity and document verification status.

use chrono::NaiveDate;
use medscope_models::{Certification, DocumentUpload, Hospital};
use serde::Serialize;

use crate::dates::parse_calendar_date;
use crate::index::{group_ordered_by, index_by};

pub const ISO_9001: &str = "ISO 9001";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CertificationStatus {
    Valid,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsoCertification {
    pub hospital_id: Option<i64>,
    pub hospital_name: Option<String>,
    pub certificate_number: Option<String>,
    pub issued_date: Option<String>,
    pub expiry_date: Option<String>,
    pub status: CertificationStatus,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerificationStatus {
    Verified,
    #[serde(rename = "Partially Verified")]
    PartiallyVerified,
    Unverified,
}

impl VerificationStatus {
    /// Verified needs at least one verified document and no unverified
    /// ones; no verified documents at all is Unverified.
    pub fn from_counts(verified: usize, unverified: usize) -> Self {
        match (verified, unverified) {
            (0, _) => VerificationStatus::Unverified,
            (_, 0) => VerificationStatus::Verified,
            _ => VerificationStatus::PartiallyVerified,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentStatus {
    pub hospital_id: i64,
    pub hospital_name: Option<String>,
    pub total_documents: usize,
    pub verified_documents: usize,
    pub unverified_documents: usize,
    pub verification_status: VerificationStatus,
}

/// A certificate is valid through its expiry date. Missing or malformed
/// dates are never valid.
pub fn is_valid_on(expiry_date: Option<&str>, today: NaiveDate) -> bool {
    expiry_date
        .and_then(parse_calendar_date)
        .is_some_and(|expiry| expiry >= today)
}

/// Status of every ISO 9001 certificate.
pub fn iso_certification_status(
    hospitals: &[Hospital],
    certifications: &[Certification],
    today: NaiveDate,
) -> Vec<IsoCertification> {
    let hospitals = index_by(hospitals, |h| Some(h.id));

    certifications
        .iter()
        .filter(|c| c.certification_type.as_deref() == Some(ISO_9001))
        .map(|cert| {
            let valid = is_valid_on(cert.expiry_date.as_deref(), today);
            let hospital_name = match cert.hospital_id.and_then(|id| hospitals.get(&id)) {
                Some(h) => h.name.clone(),
                None => Some("Unknown Hospital".into()),
            };
            IsoCertification {
                hospital_id: cert.hospital_id,
                hospital_name,
                certificate_number: cert.certificate_number.clone(),
                issued_date: cert.issued_date.clone(),
                expiry_date: cert.expiry_date.clone(),
                status: if valid {
                    CertificationStatus::Valid
                } else {
                    CertificationStatus::Expired
                },
                is_active: valid,
            }
        })
        .collect()
}

/// Verification counts per document owner, in order of first upload.
///
/// Documents are grouped by `entity_id` alone. Owners that are not known
/// hospitals are left out, and a document without a verification flag
/// counts as unverified.
pub fn document_status(hospitals: &[Hospital], documents: &[DocumentUpload]) -> Vec<DocumentStatus> {
    let hospitals = index_by(hospitals, |h| Some(h.id));

    group_ordered_by(documents, |d| d.entity_id.filter(|id| *id != 0))
        .into_iter()
        .filter_map(|(id, docs)| {
            let hospital = hospitals.get(&id)?;
            let verified = docs.iter().filter(|d| d.is_verified == Some(true)).count();
            let unverified = docs.len() - verified;
            Some(DocumentStatus {
                hospital_id: id,
                hospital_name: hospital.name.clone(),
                total_documents: docs.len(),
                verified_documents: verified,
                unverified_documents: unverified,
                verification_status: VerificationStatus::from_counts(verified, unverified),
            })
        })
        .collect()
}
