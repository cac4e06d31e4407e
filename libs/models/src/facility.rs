use serde::{Deserialize, Serialize};

use crate::{Dataset, Extra, Record, HOSPITAL_ENTITY};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Record for Certification {
    const DATASET: Dataset = Dataset::Certifications;
}

/// A ward or room block with its bed occupancy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WardRoom {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ward_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_beds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_beds: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Record for WardRoom {
    const DATASET: Dataset = Dataset::WardsRooms;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IcuFacility {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ventilators: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitors: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Record for IcuFacility {
    const DATASET: Dataset = Dataset::IcuFacilities;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_year: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Record for Equipment {
    const DATASET: Dataset = Dataset::Equipment;
}

impl Equipment {
    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }
}

/// An uploaded document; `entity_id` points at a hospital when
/// `entity_type` is `"hospital"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentUpload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Record for DocumentUpload {
    const DATASET: Dataset = Dataset::DocumentUploads;
}

impl DocumentUpload {
    pub fn belongs_to_hospital(&self, hospital_id: i64) -> bool {
        self.entity_type.as_deref() == Some(HOSPITAL_ENTITY) && self.entity_id == Some(hospital_id)
    }
}
