//! Surgical capacity score: surgical equipment + surgical specialties + surgeons.

use medscope_models::{Address, Doctor, Equipment, Hospital, Specialty};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::index::{addresses_by_hospital, index_by, AddressSelection};

pub const SURGERY: &str = "Surgery";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SurgicalCapacity {
    pub hospital_id: i64,
    pub surgical_equipment_count: i64,
    pub surgical_specialties_count: i64,
    pub surgeon_count: i64,
    pub hospital_name: Option<String>,
    pub city_town: Option<String>,
    pub state: Option<String>,
    pub surgical_capacity_score: i64,
}

/// Score every hospital that has a Primary address.
///
/// Equipment without a quantity counts as one unit. Every specialty in the
/// Surgery category counts towards the specialty tally, but only doctors
/// attached to an *available* surgical specialty count as surgeons.
pub fn surgical_capacity(
    hospitals: &[Hospital],
    addresses: &[Address],
    equipment: &[Equipment],
    specialties: &[Specialty],
    doctors: &[Doctor],
) -> Vec<SurgicalCapacity> {
    let by_id = index_by(hospitals, |h| Some(h.id));
    let addresses = addresses_by_hospital(addresses, AddressSelection::LatestPrimary);

    let mut order = Vec::with_capacity(by_id.len());
    let mut tallies: HashMap<i64, SurgicalCapacity> = HashMap::with_capacity(by_id.len());
    for hospital in hospitals {
        tallies.entry(hospital.id).or_insert_with(|| {
            order.push(hospital.id);
            SurgicalCapacity {
                hospital_id: hospital.id,
                ..Default::default()
            }
        });
    }

    for item in equipment.iter().filter(|e| e.in_category(SURGERY)) {
        if let Some(tally) = item.hospital_id.and_then(|id| tallies.get_mut(&id)) {
            tally.surgical_equipment_count += item.quantity.unwrap_or(1);
        }
    }

    for specialty in specialties.iter().filter(|s| s.in_category(SURGERY)) {
        if let Some(tally) = specialty.hospital_id.and_then(|id| tallies.get_mut(&id)) {
            tally.surgical_specialties_count += 1;
        }
    }

    let surgical_ids: HashSet<i64> = specialties
        .iter()
        .filter(|s| s.is_available() && s.in_category(SURGERY))
        .filter_map(|s| s.id)
        .collect();

    for doctor in doctors {
        let is_surgeon = doctor.specialty_id.is_some_and(|id| surgical_ids.contains(&id));
        if !is_surgeon {
            continue;
        }
        if let Some(tally) = doctor.hospital_id.and_then(|id| tallies.get_mut(&id)) {
            tally.surgeon_count += 1;
        }
    }

    order
        .into_iter()
        .filter_map(|id| {
            let address = addresses.get(&id)?;
            let mut tally = tallies.remove(&id)?;
            tally.hospital_name = by_id.get(&id).and_then(|h| h.name.clone());
            tally.city_town = address.city_town.clone();
            tally.state = address.state.clone();
            tally.surgical_capacity_score =
                tally.surgical_equipment_count + tally.surgical_specialties_count + tally.surgeon_count;
            Some(tally)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;

    #[test]
    fn score_is_sum_of_three_counts() {
        let hospitals = vec![hospital(1, "North")];
        let addresses = vec![primary(1, "Pune", "MH")];
        let mut unquantified = equipment(1, "Scalpel set", SURGERY, 0);
        unquantified.quantity = None;
        let equipment = vec![
            equipment(1, "Operating table", SURGERY, 2),
            unquantified,
            equipment(1, "MRI", "Imaging", 5),
        ];
        let specialties = vec![
            specialty(10, 1, "General Surgery", SURGERY, true),
            specialty(11, 1, "Neurosurgery", SURGERY, false),
            specialty(12, 1, "Cardiology", "Medicine", true),
        ];
        let doctors = vec![doctor(1, Some(10)), doctor(1, Some(11)), doctor(1, Some(12)), doctor(1, None)];

        let rows = surgical_capacity(&hospitals, &addresses, &equipment, &specialties, &doctors);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.surgical_equipment_count, 3);
        assert_eq!(row.surgical_specialties_count, 2);
        assert_eq!(row.surgeon_count, 1);
        assert_eq!(row.surgical_capacity_score, 6);
        assert_eq!(row.city_town.as_deref(), Some("Pune"));
    }

    #[test]
    fn hospitals_without_primary_address_are_dropped() {
        let hospitals = vec![hospital(1, "North"), hospital(2, "South")];
        let addresses = vec![address(1, "Branch", Some("Pune")), primary(2, "Nagpur", "MH")];

        let rows = surgical_capacity(&hospitals, &addresses, &[], &[], &[]);

        let ids: Vec<_> = rows.iter().map(|r| r.hospital_id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(rows[0].surgical_capacity_score, 0);
    }

    #[test]
    fn records_for_unknown_hospitals_are_ignored() {
        let hospitals = vec![hospital(1, "North")];
        let addresses = vec![primary(1, "Pune", "MH"), primary(9, "Goa", "GA")];
        let equipment = vec![equipment(9, "Operating table", SURGERY, 4)];

        let rows = surgical_capacity(&hospitals, &addresses, &equipment, &[], &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].surgical_equipment_count, 0);
    }

    #[test]
    fn field_order_matches_dashboard_contract() {
        let rows = surgical_capacity(&[hospital(1, "North")], &[primary(1, "Pune", "MH")], &[], &[], &[]);
        let json = serde_json::to_string(&rows[0]).unwrap();
        assert!(json.starts_with(r#"{"hospital_id":1,"surgical_equipment_count":0"#));
        assert!(json.ends_with(r#""surgical_capacity_score":0}"#));
    }
}
