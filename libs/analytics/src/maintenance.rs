//! Equipment maintenance due dates.

use medscope_models::{Equipment, Hospital};
use serde::Serialize;
use serde_json::Value;

use crate::dates::Timestamp;
use crate::index::{index_by, raw_id, text_or_na};

/// Recognised maintenance schedules and their interval in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceSchedule {
    Monthly,
    Quarterly,
    BiAnnual,
    Annual,
}

impl MaintenanceSchedule {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Monthly" => Some(Self::Monthly),
            "Quarterly" => Some(Self::Quarterly),
            "Bi-annual" => Some(Self::BiAnnual),
            "Annual" => Some(Self::Annual),
            _ => None,
        }
    }

    pub fn interval_days(self) -> i64 {
        match self {
            Self::Monthly => 30,
            Self::Quarterly => 91,
            Self::BiAnnual => 182,
            Self::Annual => 365,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceItem {
    pub id: Option<i64>,
    pub equipment_name: Option<String>,
    pub hospital_id: Option<i64>,
    pub hospital_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub category: Option<String>,
    pub equipment_details: Option<String>,
    pub brand_model: Option<String>,
    pub specification: Option<String>,
    pub quantity: Option<i64>,
    pub installation_year: Option<i64>,
    pub is_available: Option<bool>,
    pub is_active: Option<bool>,
    pub maintenance_schedule: String,
    pub next_due_date: String,
    pub created_at: Option<String>,
}

/// Project the next maintenance date for every equipment item on a known
/// schedule. Items with no schedule, an unknown schedule, or no readable
/// `created_at` are skipped.
///
/// Addresses are raw records, latest per hospital, so a city or state stored
/// as null is reported as null rather than "N/A".
pub fn maintenance_schedule(
    equipment: &[Equipment],
    hospitals: &[Hospital],
    addresses: &[Value],
) -> Vec<MaintenanceItem> {
    let hospitals = index_by(hospitals, |h| Some(h.id));
    let addresses = index_by(addresses, |a| raw_id(a, "hospital_id"));

    equipment
        .iter()
        .filter_map(|item| {
            let raw_schedule = item.maintenance_schedule.as_deref()?;
            let schedule = MaintenanceSchedule::parse(raw_schedule)?;
            let created_at = item.created_at.as_deref().filter(|s| !s.is_empty())?;
            let Some(start) = Timestamp::parse(created_at) else {
                tracing::debug!(
                    equipment_id = ?item.id,
                    created_at,
                    "Skipping equipment with unreadable created_at"
                );
                return None;
            };

            let hospital = item.hospital_id.and_then(|id| hospitals.get(&id).copied());
            let address = item.hospital_id.and_then(|id| addresses.get(&id).copied());

            Some(MaintenanceItem {
                id: item.id,
                equipment_name: item.equipment_name.clone(),
                hospital_id: item.hospital_id,
                hospital_name: match hospital {
                    Some(h) => h.name.clone(),
                    None => Some("Unknown Hospital".into()),
                },
                city: text_or_na(address, "city_town"),
                state: text_or_na(address, "state"),
                category: item.category.clone(),
                equipment_details: item.equipment_details.clone(),
                brand_model: item.brand_model.clone(),
                specification: item.specification.clone(),
                quantity: item.quantity,
                installation_year: item.installation_year,
                is_available: item.is_available,
                is_active: item.is_active,
                maintenance_schedule: raw_schedule.to_string(),
                next_due_date: start.plus_days(schedule.interval_days()).to_iso_string(),
                created_at: item.created_at.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;
    use serde_json::json;

    fn scheduled(hospital_id: i64, schedule: Option<&str>, created_at: Option<&str>) -> Equipment {
        Equipment {
            maintenance_schedule: schedule.map(str::to_string),
            created_at: created_at.map(str::to_string),
            ..equipment(hospital_id, "Ventilator", "Critical Care", 1)
        }
    }

    #[test]
    fn monthly_from_new_year_is_due_end_of_january() {
        let items = maintenance_schedule(
            &[scheduled(1, Some("Monthly"), Some("2024-01-01"))],
            &[hospital(1, "North")],
            &[json!({"hospital_id": 1, "city_town": "Pune", "state": "MH"})],
        );

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].next_due_date, "2024-01-31T00:00:00");
        assert_eq!(items[0].hospital_name.as_deref(), Some("North"));
        assert_eq!(items[0].city.as_deref(), Some("Pune"));
    }

    #[test]
    fn intervals_follow_schedule_table() {
        let days: Vec<_> = ["Monthly", "Quarterly", "Bi-annual", "Annual"]
            .into_iter()
            .filter_map(MaintenanceSchedule::parse)
            .map(MaintenanceSchedule::interval_days)
            .collect();
        assert_eq!(days, vec![30, 91, 182, 365]);
        assert_eq!(MaintenanceSchedule::parse("Weekly"), None);
    }

    #[test]
    fn unschedulable_items_are_skipped() {
        let equipment = vec![
            scheduled(1, None, Some("2024-01-01")),
            scheduled(1, Some("Weekly"), Some("2024-01-01")),
            scheduled(1, Some("Annual"), None),
            scheduled(1, Some("Annual"), Some("last spring")),
            scheduled(1, Some("Annual"), Some("2024-02-29T09:30:00Z")),
        ];

        let items = maintenance_schedule(&equipment, &[], &[]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].next_due_date, "2025-02-28T09:30:00+00:00");
        assert_eq!(items[0].hospital_name.as_deref(), Some("Unknown Hospital"));
        assert_eq!(items[0].state.as_deref(), Some("N/A"));
    }

    #[test]
    fn null_city_stays_null() {
        let addresses = vec![
            json!({"hospital_id": 1, "city_town": "Nashik", "state": "MH"}),
            json!({"hospital_id": 1, "city_town": null}),
        ];

        let items = maintenance_schedule(
            &[scheduled(1, Some("Annual"), Some("2024-01-01"))],
            &[hospital(1, "North")],
            &addresses,
        );

        assert_eq!(items[0].city, None);
        assert_eq!(items[0].state.as_deref(), Some("N/A"));
        let value = serde_json::to_value(&items[0]).unwrap();
        assert!(value["city"].is_null());
    }
}
