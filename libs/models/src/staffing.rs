use serde::{Deserialize, Serialize};

use crate::{Dataset, Extra, Record};

/// Staffing figures reported for a hospital.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_doctors: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_nurses: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_bed_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nurse_bed_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icu_doctor_bed_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icu_nurse_bed_ratio: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Record for Metric {
    const DATASET: Dataset = Dataset::Metrics;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultation_type: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Record for Doctor {
    const DATASET: Dataset = Dataset::Doctors;
}

/// A medical specialty offered (or once offered) by a hospital.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specialty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established_year: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Record for Specialty {
    const DATASET: Dataset = Dataset::Specialties;
}

impl Specialty {
    pub fn is_available(&self) -> bool {
        self.is_available == Some(true)
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.specialty_category.as_deref() == Some(category)
    }
}
