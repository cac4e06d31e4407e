use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// The fixed catalogue of JSON files the engine consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Hospitals,
    Addresses,
    Metrics,
    Certifications,
    Contacts,
    Doctors,
    Specialties,
    WardsRooms,
    IcuFacilities,
    Equipment,
    DocumentUploads,
}

impl Dataset {
    pub const ALL: [Dataset; 11] = [
        Dataset::Hospitals,
        Dataset::Addresses,
        Dataset::Metrics,
        Dataset::Certifications,
        Dataset::Contacts,
        Dataset::Doctors,
        Dataset::Specialties,
        Dataset::WardsRooms,
        Dataset::IcuFacilities,
        Dataset::Equipment,
        Dataset::DocumentUploads,
    ];

    /// File name inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Dataset::Hospitals => "hospitals.json",
            Dataset::Addresses => "hospital_addresses.json",
            Dataset::Metrics => "hospital_metrics.json",
            Dataset::Certifications => "hospital_certifications.json",
            Dataset::Contacts => "hospital_contacts.json",
            Dataset::Doctors => "doctors.json",
            Dataset::Specialties => "medical_specialties.json",
            Dataset::WardsRooms => "wards_rooms.json",
            Dataset::IcuFacilities => "icu_facilities.json",
            Dataset::Equipment => "hospital_equipment.json",
            Dataset::DocumentUploads => "document_uploads.json",
        }
    }

    /// Short label used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Dataset::Hospitals => "hospitals",
            Dataset::Addresses => "addresses",
            Dataset::Metrics => "metrics",
            Dataset::Certifications => "certifications",
            Dataset::Contacts => "contacts",
            Dataset::Doctors => "doctors",
            Dataset::Specialties => "specialties",
            Dataset::WardsRooms => "wards_rooms",
            Dataset::IcuFacilities => "icu_facilities",
            Dataset::Equipment => "equipment",
            Dataset::DocumentUploads => "document_uploads",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// A record type stored in exactly one dataset.
pub trait Record: DeserializeOwned + Serialize + Send + 'static {
    const DATASET: Dataset;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn file_names_are_unique() {
        let names: HashSet<_> = Dataset::ALL.iter().map(|d| d.file_name()).collect();
        assert_eq!(names.len(), Dataset::ALL.len());
    }

    #[test]
    fn display_uses_file_name() {
        assert_eq!(Dataset::Metrics.to_string(), "hospital_metrics.json");
    }
}
