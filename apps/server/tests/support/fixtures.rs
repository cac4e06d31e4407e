use medscope_models::Dataset;
use serde_json::{json, Value};

/// A small three-hospital network covering every dataset.
///
/// - 1 City General (Pune): metrics, valid ISO 9001, one unverified document
/// - 2 Riverside Clinic (Nagpur): no metrics, no certifications
/// - 3 Hilltop Medical (Pune, inactive address): expired and malformed certificates
pub fn network() -> Vec<(Dataset, Value)> {
    vec![
        (Dataset::Hospitals, hospitals()),
        (Dataset::Addresses, addresses()),
        (Dataset::Metrics, metrics()),
        (Dataset::Certifications, certifications()),
        (Dataset::Contacts, contacts()),
        (Dataset::Doctors, doctors()),
        (Dataset::Specialties, specialties()),
        (Dataset::WardsRooms, wards()),
        (Dataset::IcuFacilities, icu_facilities()),
        (Dataset::Equipment, equipment()),
        (Dataset::DocumentUploads, documents()),
    ]
}

pub fn hospitals() -> Value {
    json!([
        {
            "id": 1,
            "name": "City General",
            "hospital_type": "Multi-specialty",
            "beds_operational": 200,
            "beds_registered": 220,
            "latitude": 18.52,
            "longitude": 73.85,
            "ownership": "Trust"
        },
        {
            "id": 2,
            "name": "Riverside Clinic",
            "hospital_type": "Clinic",
            "beds_operational": 0,
            "beds_registered": 60
        },
        {
            "id": 3,
            "name": "Hilltop Medical",
            "hospital_type": "General",
            "beds_operational": 400,
            "beds_registered": 420
        }
    ])
}

pub fn addresses() -> Value {
    json!([
        {
            "id": 11,
            "hospital_id": 1,
            "address_type": "Primary",
            "street": "1 MG Road",
            "area_locality": "Camp",
            "city_town": "Pune",
            "district": "Pune",
            "state": "Maharashtra",
            "pin_code": "411001",
            "is_active": true
        },
        {
            "id": 12,
            "hospital_id": 2,
            "address_type": "Primary",
            "street": "5 River Road",
            "city_town": "Nagpur",
            "district": "Nagpur",
            "state": "Maharashtra",
            "pin_code": "440001",
            "is_active": true
        },
        {
            "id": 13,
            "hospital_id": 3,
            "address_type": "Primary",
            "street": "9 Hill Street",
            "city_town": "Pune",
            "state": "Maharashtra",
            "pin_code": "411002",
            "is_active": false
        }
    ])
}

pub fn metrics() -> Value {
    json!([
        {
            "hospital_id": 1,
            "total_doctors": 40,
            "qualified_nurses": 100,
            "doctor_bed_ratio": 0.2,
            "nurse_bed_ratio": 0.5,
            "icu_doctor_bed_ratio": 0.5,
            "icu_nurse_bed_ratio": 1.0
        },
        {
            "hospital_id": 3,
            "total_doctors": 60,
            "qualified_nurses": 200,
            "doctor_bed_ratio": 0.4,
            "nurse_bed_ratio": 0.5,
            "icu_doctor_bed_ratio": 1.0,
            "icu_nurse_bed_ratio": 1.0
        }
    ])
}

pub fn certifications() -> Value {
    json!([
        {
            "id": 1,
            "hospital_id": 1,
            "certification_type": "ISO 9001",
            "certificate_number": "ISO-001",
            "issued_date": "2020-01-01",
            "expiry_date": "2099-12-31"
        },
        {
            "id": 2,
            "hospital_id": 3,
            "certification_type": "ISO 9001",
            "certificate_number": "ISO-003",
            "issued_date": "2013-01-01",
            "expiry_date": "2016-01-01"
        },
        {
            "id": 3,
            "hospital_id": 3,
            "certification_type": "NABH",
            "expiry_date": "not-a-date"
        }
    ])
}

pub fn contacts() -> Value {
    json!([
        {
            "id": 1,
            "hospital_id": 1,
            "contact_type": "Emergency",
            "person_name": "Dr. Rao",
            "phone": "020-1111",
            "is_primary": true
        }
    ])
}

pub fn doctors() -> Value {
    json!([
        {"id": 1, "hospital_id": 1, "specialty_id": 10, "name": "Dr. Iyer", "designation": "Consultant"},
        {"id": 2, "hospital_id": 1, "specialty_id": 11, "name": "Dr. Shah"},
        {"id": 3, "hospital_id": 3, "specialty_id": 12, "name": "Dr. Khan"},
        {"id": 4, "hospital_id": 3, "specialty_id": 99, "name": "Dr. Ghost"}
    ])
}

pub fn specialties() -> Value {
    json!([
        {
            "id": 10,
            "hospital_id": 1,
            "specialty_name": "General Surgery",
            "specialty_category": "Surgery",
            "is_available": true,
            "established_year": 2001
        },
        {
            "id": 11,
            "hospital_id": 1,
            "specialty_name": "Cardiology",
            "specialty_category": "Medicine",
            "is_available": true
        },
        {
            "id": 12,
            "hospital_id": 3,
            "specialty_name": "Orthopaedics",
            "specialty_category": "Surgery",
            "is_available": false
        }
    ])
}

pub fn wards() -> Value {
    json!([
        {"id": 1, "hospital_id": 1, "ward_type": "ICU", "total_beds": 20, "available_beds": 5},
        {"id": 2, "hospital_id": 1, "ward_type": "General", "total_beds": 100, "available_beds": 30},
        {"id": 3, "hospital_id": 3, "ward_type": "ICU", "total_beds": 30, "available_beds": 15}
    ])
}

pub fn icu_facilities() -> Value {
    json!([
        {"id": 1, "hospital_id": 1, "ventilators": 4, "monitors": 10},
        {"id": 2, "hospital_id": 3, "ventilators": 6, "monitors": 12}
    ])
}

pub fn equipment() -> Value {
    json!([
        {
            "id": 1,
            "hospital_id": 1,
            "equipment_name": "Ventilator",
            "category": "Critical Care",
            "quantity": 4,
            "maintenance_schedule": "Monthly",
            "created_at": "2024-01-01"
        },
        {
            "id": 2,
            "hospital_id": 1,
            "equipment_name": "Operating Table",
            "category": "Surgery",
            "quantity": 2,
            "maintenance_schedule": "Annual",
            "created_at": "2024-03-01T10:30:00Z"
        },
        {
            "id": 3,
            "hospital_id": 3,
            "equipment_name": "Defibrillator",
            "category": "Critical Care",
            "quantity": 3,
            "maintenance_schedule": "Weekly",
            "created_at": "2024-01-01"
        },
        {
            "id": 4,
            "hospital_id": 3,
            "equipment_name": "MRI Scanner",
            "category": "Imaging",
            "quantity": 1
        }
    ])
}

pub fn documents() -> Value {
    json!([
        {"id": 1, "entity_type": "hospital", "entity_id": 1, "is_verified": true},
        {"id": 2, "entity_type": "hospital", "entity_id": 1, "is_verified": false},
        {"id": 3, "entity_type": "hospital", "entity_id": 3, "is_verified": true}
    ])
}
