//! Hospital directory views: profiles, contacts, specialties, doctors, wards.

use medscope_models::{Address, Contact, Doctor, Hospital, Specialty, WardRoom};
use serde::Serialize;

use crate::index::{
    addresses_by_hospital, count_by, group_by, group_ordered_by, index_by, AddressSelection,
};
use crate::ser::none_as_empty_object;
use crate::{Error, Result};

const UNKNOWN: &str = "Unknown";

fn or_unknown(value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| UNKNOWN.into())
}

fn or_blank(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

/// A hospital record with its address, contacts and specialties attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullProfile {
    #[serde(flatten)]
    pub hospital: Hospital,
    #[serde(serialize_with = "none_as_empty_object")]
    pub address: Option<Address>,
    pub contacts: Vec<Contact>,
    pub specialties: Vec<Specialty>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HospitalProfile {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub hospital_type: String,
    pub beds_operational: i64,
    pub beds_registered: i64,
    pub address: Option<Address>,
    pub contacts: Vec<Contact>,
    pub specialties: Vec<Specialty>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicHospital {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub hospital_type: String,
    pub beds: i64,
    pub beds_registered: i64,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactEntry {
    pub hospital_id: Option<i64>,
    pub hospital_name: String,
    pub city: String,
    pub state: String,
    pub contact_type: String,
    pub person_name: String,
    pub designation: String,
    pub phone: String,
    pub mobile: String,
    pub email: String,
    pub department: String,
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HospitalSpecialties {
    pub hospital_id: i64,
    pub hospital_name: String,
    pub city: String,
    pub state: String,
    pub specialties: Vec<SpecialtyEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialtyEntry {
    pub specialty_name: String,
    pub specialty_category: String,
    pub is_available: bool,
    pub established_year: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorSummary {
    pub id: i64,
    pub name: Option<String>,
    #[serde(serialize_with = "none_as_empty_object")]
    pub address: Option<Address>,
    pub total_doctors: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorEntry {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub designation: Option<String>,
    pub specialty_name: String,
    pub qualification: Option<String>,
    pub experience_years: Option<i64>,
    pub consultation_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedWard {
    #[serde(flatten)]
    pub ward: WardRoom,
    pub hospital_name: String,
    pub hospital_address: WardAddress,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WardAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
}

fn nonzero(id: Option<i64>) -> Option<i64> {
    id.filter(|id| *id != 0)
}

/// Every hospital with its latest address, contacts and specialties.
pub fn full_profiles(
    hospitals: &[Hospital],
    addresses: &[Address],
    contacts: &[Contact],
    specialties: &[Specialty],
) -> Vec<FullProfile> {
    let addresses = addresses_by_hospital(addresses, AddressSelection::Latest);
    let contacts = group_by(contacts, |c| nonzero(c.hospital_id));
    let specialties = group_by(specialties, |s| nonzero(s.hospital_id));

    hospitals
        .iter()
        .filter(|h| h.id != 0)
        .map(|h| FullProfile {
            hospital: h.clone(),
            address: addresses.get(&h.id).map(|a| (*a).clone()),
            contacts: contacts
                .get(&h.id)
                .into_iter()
                .flatten()
                .map(|c| (*c).clone())
                .collect(),
            specialties: specialties
                .get(&h.id)
                .into_iter()
                .flatten()
                .map(|s| (*s).clone())
                .collect(),
        })
        .collect()
}

/// One hospital's profile: its first address of any type, every contact
/// and every specialty.
pub fn hospital_profile(
    hospital_id: i64,
    hospitals: &[Hospital],
    addresses: &[Address],
    contacts: &[Contact],
    specialties: &[Specialty],
) -> Result<HospitalProfile> {
    let hospital = hospitals
        .iter()
        .find(|h| h.id == hospital_id)
        .ok_or_else(|| Error::hospital_not_found(hospital_id))?;

    Ok(HospitalProfile {
        id: hospital.id,
        name: or_unknown(hospital.name.as_ref()),
        hospital_type: or_unknown(hospital.hospital_type.as_ref()),
        beds_operational: hospital.beds_operational.unwrap_or(0),
        beds_registered: hospital.beds_registered.unwrap_or(0),
        address: addresses
            .iter()
            .find(|a| a.hospital_id == Some(hospital_id))
            .cloned(),
        contacts: contacts
            .iter()
            .filter(|c| c.hospital_id == Some(hospital_id))
            .cloned()
            .collect(),
        specialties: specialties
            .iter()
            .filter(|s| s.hospital_id == Some(hospital_id))
            .cloned()
            .collect(),
    })
}

pub fn basic_listing(hospitals: &[Hospital], addresses: &[Address]) -> Vec<BasicHospital> {
    let addresses = addresses_by_hospital(addresses, AddressSelection::Latest);
    hospitals
        .iter()
        .map(|h| {
            let address = addresses.get(&h.id).copied();
            BasicHospital {
                id: h.id,
                name: or_unknown(h.name.as_ref()),
                hospital_type: or_unknown(h.hospital_type.as_ref()),
                beds: h.beds_operational.unwrap_or(0),
                beds_registered: h.beds_registered.unwrap_or(0),
                city: or_unknown(address.and_then(|a| a.city_town.as_ref())),
                state: or_unknown(address.and_then(|a| a.state.as_ref())),
            }
        })
        .collect()
}

/// Every contact, tagged with its hospital's name and location.
pub fn contact_directory(
    contacts: &[Contact],
    hospitals: &[Hospital],
    addresses: &[Address],
) -> Vec<ContactEntry> {
    let hospitals = index_by(hospitals, |h| Some(h.id));
    let addresses = addresses_by_hospital(addresses, AddressSelection::Latest);

    contacts
        .iter()
        .map(|c| {
            let hospital = c.hospital_id.and_then(|id| hospitals.get(&id).copied());
            let address = c.hospital_id.and_then(|id| addresses.get(&id).copied());
            ContactEntry {
                hospital_id: c.hospital_id,
                hospital_name: or_unknown(hospital.and_then(|h| h.name.as_ref())),
                city: or_unknown(address.and_then(|a| a.city_town.as_ref())),
                state: or_unknown(address.and_then(|a| a.state.as_ref())),
                contact_type: or_blank(c.contact_type.as_ref()),
                person_name: or_blank(c.person_name.as_ref()),
                designation: or_blank(c.designation.as_ref()),
                phone: or_blank(c.phone.as_ref()),
                mobile: or_blank(c.mobile.as_ref()),
                email: or_blank(c.email.as_ref()),
                department: or_blank(c.department.as_ref()),
                is_primary: c.is_primary.unwrap_or(false),
            }
        })
        .collect()
}

/// Specialties grouped per hospital, hospitals in order of first mention.
pub fn specialty_directory(
    specialties: &[Specialty],
    hospitals: &[Hospital],
    addresses: &[Address],
) -> Vec<HospitalSpecialties> {
    let hospitals = index_by(hospitals, |h| Some(h.id));
    let addresses = addresses_by_hospital(addresses, AddressSelection::Latest);

    group_ordered_by(specialties, |s| s.hospital_id)
        .into_iter()
        .map(|(id, group)| {
            let hospital = hospitals.get(&id).copied();
            let address = addresses.get(&id).copied();
            HospitalSpecialties {
                hospital_id: id,
                hospital_name: or_unknown(hospital.and_then(|h| h.name.as_ref())),
                city: or_unknown(address.and_then(|a| a.city_town.as_ref())),
                state: or_unknown(address.and_then(|a| a.state.as_ref())),
                specialties: group
                    .into_iter()
                    .map(|s| SpecialtyEntry {
                        specialty_name: or_blank(s.specialty_name.as_ref()),
                        specialty_category: or_blank(s.specialty_category.as_ref()),
                        is_available: s.is_available(),
                        established_year: s.established_year,
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Doctor head count per hospital.
pub fn doctors_summary(
    hospitals: &[Hospital],
    addresses: &[Address],
    doctors: &[Doctor],
) -> Vec<DoctorSummary> {
    let addresses = addresses_by_hospital(addresses, AddressSelection::Latest);
    let counts = count_by(doctors, |d| d.hospital_id);

    hospitals
        .iter()
        .map(|h| DoctorSummary {
            id: h.id,
            name: h.name.clone(),
            address: addresses.get(&h.id).map(|a| (*a).clone()),
            total_doctors: counts.get(&h.id).copied().unwrap_or(0),
        })
        .collect()
}

/// A hospital's doctors with their specialty names. Doctors whose specialty
/// is unknown are left out; an unknown hospital simply has no doctors.
pub fn hospital_doctors(hospital_id: i64, doctors: &[Doctor], specialties: &[Specialty]) -> Vec<DoctorEntry> {
    let names = index_by(specialties, |s| s.id);

    doctors
        .iter()
        .filter(|d| d.hospital_id == Some(hospital_id))
        .filter_map(|d| {
            let specialty_name = d
                .specialty_id
                .and_then(|id| names.get(&id))
                .and_then(|s| s.specialty_name.clone())
                .filter(|name| !name.is_empty())?;
            Some(DoctorEntry {
                id: d.id,
                name: d.name.clone(),
                designation: d.designation.clone(),
                specialty_name,
                qualification: d.qualification.clone(),
                experience_years: d.experience_years,
                consultation_type: d.consultation_type.clone(),
            })
        })
        .collect()
}

/// Wards of hospitals that have a Primary address, tagged with the
/// hospital's name and address.
pub fn enriched_wards(wards: &[WardRoom], hospitals: &[Hospital], addresses: &[Address]) -> Vec<EnrichedWard> {
    let hospitals = index_by(hospitals, |h| Some(h.id));
    let primaries = addresses_by_hospital(addresses, AddressSelection::LatestPrimary);

    wards
        .iter()
        .filter_map(|ward| {
            let id = ward.hospital_id?;
            let hospital = hospitals.get(&id)?;
            let address = primaries.get(&id)?;
            let or_na = |value: Option<&String>| value.cloned().unwrap_or_else(|| "N/A".into());
            Some(EnrichedWard {
                ward: ward.clone(),
                hospital_name: or_na(hospital.name.as_ref()),
                hospital_address: WardAddress {
                    street: or_na(address.street.as_ref()),
                    city: or_na(address.city_town.as_ref()),
                    state: or_na(address.state.as_ref()),
                    pin_code: or_na(address.pin_code.as_ref()),
                },
            })
        })
        .collect()
}
