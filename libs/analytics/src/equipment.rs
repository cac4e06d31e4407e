//! Equipment inventory rollups.
//!
//! Each rollup is a wide table: one row per hospital and one column per
//! equipment type seen anywhere in the rolled-up records. A hospital that
//! owns none of a type still reports 0 for it.

use medscope_models::{Address, Equipment, Hospital};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::index::{addresses_by_hospital, group_by, group_ordered_by, index_by, AddressSelection};

pub const CRITICAL_CARE: &str = "Critical Care";

/// Equipment type → quantity, in type-name order.
pub type EquipmentCounts = BTreeMap<String, i64>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentInventory {
    pub data: Vec<HospitalEquipment>,
    #[serde(rename = "equipmentTypes")]
    pub equipment_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HospitalEquipment {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub equipment: EquipmentCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalCareInventory {
    pub data: Vec<CriticalCareRow>,
    #[serde(rename = "equipmentTypes")]
    pub equipment_types: Vec<String>,
}

/// A hospital row with its equipment counts as sibling keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalCareRow {
    pub name: String,
    pub id: i64,
    #[serde(flatten)]
    pub counts: EquipmentCounts,
}

fn named(item: &Equipment) -> Option<&str> {
    item.equipment_name.as_deref().filter(|name| !name.is_empty())
}

/// Sorted, de-duplicated equipment names.
fn equipment_types<'a>(items: impl IntoIterator<Item = &'a Equipment>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(named)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Quantities per type, zero-filled over `types`.
fn tally<'a>(items: impl IntoIterator<Item = &'a Equipment>, types: &[String]) -> EquipmentCounts {
    let mut counts: EquipmentCounts = types.iter().map(|t| (t.clone(), 0)).collect();
    for item in items {
        if let Some(count) = named(item).and_then(|name| counts.get_mut(name)) {
            *count += item.quantity.unwrap_or(0);
        }
    }
    counts
}

/// Every hospital's holdings across every equipment type.
pub fn equipment_inventory(
    hospitals: &[Hospital],
    addresses: &[Address],
    equipment: &[Equipment],
) -> EquipmentInventory {
    let types = equipment_types(equipment);
    let addresses = addresses_by_hospital(addresses, AddressSelection::Latest);
    let by_hospital = group_by(equipment, |e| e.hospital_id);

    let data = hospitals
        .iter()
        .map(|h| {
            let address = addresses.get(&h.id).copied();
            let unknown = |value: Option<&String>| value.cloned().unwrap_or_else(|| "Unknown".into());
            HospitalEquipment {
                id: h.id,
                name: unknown(h.name.as_ref()),
                city: unknown(address.and_then(|a| a.city_town.as_ref())),
                state: unknown(address.and_then(|a| a.state.as_ref())),
                equipment: tally(by_hospital.get(&h.id).into_iter().flatten().copied(), &types),
            }
        })
        .collect();

    EquipmentInventory {
        data,
        equipment_types: types,
    }
}

/// Critical-care holdings, one row per hospital that owns any, in the order
/// hospitals first appear in the equipment records.
pub fn critical_care_inventory(hospitals: &[Hospital], equipment: &[Equipment]) -> CriticalCareInventory {
    let critical: Vec<Equipment> = equipment
        .iter()
        .filter(|e| e.in_category(CRITICAL_CARE) && named(e).is_some())
        .cloned()
        .collect();
    let types = equipment_types(&critical);
    let names = index_by(hospitals, |h| Some(h.id));

    let data = group_ordered_by(&critical, |e| e.hospital_id)
        .into_iter()
        .map(|(id, items)| CriticalCareRow {
            name: names
                .get(&id)
                .and_then(|h| h.name.clone())
                .unwrap_or_else(|| "Unknown Hospital".into()),
            id,
            counts: tally(items, &types),
        })
        .collect();

    CriticalCareInventory {
        data,
        equipment_types: types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;
    use serde_json::json;

    #[test]
    fn inventory_zero_fills_missing_types() {
        let hospitals = vec![hospital(1, "North"), hospital(2, "South")];
        let equipment = vec![
            equipment(1, "Ventilator", CRITICAL_CARE, 4),
            equipment(1, "MRI", "Imaging", 1),
            equipment(1, "Ventilator", CRITICAL_CARE, 2),
        ];

        let inventory = equipment_inventory(&hospitals, &[], &equipment);

        assert_eq!(inventory.equipment_types, vec!["MRI", "Ventilator"]);
        assert_eq!(inventory.data[0].equipment["Ventilator"], 6);
        assert_eq!(inventory.data[1].equipment.len(), 2);
        assert_eq!(inventory.data[1].equipment["MRI"], 0);
        assert_eq!(inventory.data[1].equipment["Ventilator"], 0);
        assert_eq!(inventory.data[1].city, "Unknown");
    }

    #[test]
    fn inventory_serializes_with_camel_case_side_channel() {
        let inventory = equipment_inventory(&[hospital(1, "North")], &[primary(1, "Pune", "MH")], &[]);
        let json = serde_json::to_value(&inventory).unwrap();
        assert_eq!(json["equipmentTypes"], json!([]));
        assert_eq!(json["data"][0]["equipment"], json!({}));
        assert_eq!(json["data"][0]["state"], json!("MH"));
    }

    #[test]
    fn critical_care_rows_are_flat_and_ordered_by_first_appearance() {
        let hospitals = vec![hospital(1, "North"), hospital(2, "South")];
        let equipment = vec![
            equipment(2, "Defibrillator", CRITICAL_CARE, 1),
            equipment(1, "Ventilator", CRITICAL_CARE, 3),
            equipment(1, "MRI", "Imaging", 1),
            equipment(7, "Ventilator", CRITICAL_CARE, 2),
        ];

        let inventory = critical_care_inventory(&hospitals, &equipment);

        assert_eq!(inventory.equipment_types, vec!["Defibrillator", "Ventilator"]);
        let json = serde_json::to_value(&inventory.data).unwrap();
        assert_eq!(
            json,
            json!([
                {"name": "South", "id": 2, "Defibrillator": 1, "Ventilator": 0},
                {"name": "North", "id": 1, "Defibrillator": 0, "Ventilator": 3},
                {"name": "Unknown Hospital", "id": 7, "Defibrillator": 0, "Ventilator": 2}
            ])
        );
    }

    #[test]
    fn hospitals_without_critical_care_are_omitted() {
        let hospitals = vec![hospital(1, "North")];
        let equipment = vec![equipment(1, "MRI", "Imaging", 1)];
        let inventory = critical_care_inventory(&hospitals, &equipment);
        assert!(inventory.data.is_empty());
        assert!(inventory.equipment_types.is_empty());
    }
}
