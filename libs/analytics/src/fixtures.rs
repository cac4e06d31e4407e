//! Record builders shared by the unit tests.

use medscope_models::*;

pub fn hospital(id: i64, name: &str) -> Hospital {
    Hospital {
        id,
        name: Some(name.to_string()),
        ..Default::default()
    }
}

pub fn hospital_with_beds(id: i64, name: &str, operational: i64, registered: i64) -> Hospital {
    Hospital {
        beds_operational: Some(operational),
        beds_registered: Some(registered),
        ..hospital(id, name)
    }
}

pub fn address(hospital_id: i64, address_type: &str, city: Option<&str>) -> Address {
    Address {
        hospital_id: Some(hospital_id),
        address_type: Some(address_type.to_string()),
        city_town: city.map(str::to_string),
        ..Default::default()
    }
}

pub fn primary(hospital_id: i64, city: &str, state: &str) -> Address {
    Address {
        state: Some(state.to_string()),
        is_active: Some(true),
        ..address(hospital_id, "Primary", Some(city))
    }
}

pub fn metric(hospital_id: i64, doctor_ratio: f64, nurse_ratio: f64) -> Metric {
    Metric {
        hospital_id: Some(hospital_id),
        doctor_bed_ratio: Some(doctor_ratio),
        nurse_bed_ratio: Some(nurse_ratio),
        ..Default::default()
    }
}

pub fn certification(hospital_id: i64, kind: &str, expiry: Option<&str>) -> Certification {
    Certification {
        hospital_id: Some(hospital_id),
        certification_type: Some(kind.to_string()),
        expiry_date: expiry.map(str::to_string),
        ..Default::default()
    }
}

pub fn hospital_document(hospital_id: i64, verified: Option<bool>) -> DocumentUpload {
    DocumentUpload {
        entity_type: Some("hospital".to_string()),
        entity_id: Some(hospital_id),
        is_verified: verified,
        ..Default::default()
    }
}

pub fn equipment(hospital_id: i64, name: &str, category: &str, quantity: i64) -> Equipment {
    Equipment {
        hospital_id: Some(hospital_id),
        equipment_name: Some(name.to_string()),
        category: Some(category.to_string()),
        quantity: Some(quantity),
        ..Default::default()
    }
}

pub fn specialty(id: i64, hospital_id: i64, name: &str, category: &str, available: bool) -> Specialty {
    Specialty {
        id: Some(id),
        hospital_id: Some(hospital_id),
        specialty_name: Some(name.to_string()),
        specialty_category: Some(category.to_string()),
        is_available: Some(available),
        ..Default::default()
    }
}

pub fn doctor(hospital_id: i64, specialty_id: Option<i64>) -> Doctor {
    Doctor {
        hospital_id: Some(hospital_id),
        specialty_id,
        ..Default::default()
    }
}

pub fn ward(hospital_id: i64, ward_type: &str, total: i64, available: i64) -> WardRoom {
    WardRoom {
        hospital_id: Some(hospital_id),
        ward_type: Some(ward_type.to_string()),
        total_beds: Some(total),
        available_beds: Some(available),
        ..Default::default()
    }
}

pub fn icu_facility(hospital_id: i64, ventilators: i64, monitors: i64) -> IcuFacility {
    IcuFacility {
        hospital_id: Some(hospital_id),
        ventilators: Some(ventilators),
        monitors: Some(monitors),
        ..Default::default()
    }
}
