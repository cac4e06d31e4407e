//! ICU capacity: bed utilisation from ICU wards, equipment from ICU facilities.

use medscope_models::{Hospital, IcuFacility, Metric, WardRoom};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::index::{group_by, index_by, index_first_by, raw_id, text_or_na};
use crate::round2;
use crate::ser::none_as_empty_object;

pub const ICU_WARD: &str = "ICU";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IcuSummary {
    pub total_icu_beds: i64,
    pub total_available_icu_beds: i64,
    pub utilization_rate: f64,
    pub total_ventilators: i64,
    pub total_monitors: i64,
    pub avg_icu_doctor_bed_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HospitalIcuCapacity {
    pub hospital_id: i64,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub total_icu_beds: i64,
    pub available_icu_beds: i64,
    pub icu_utilization: f64,
    pub icu_facilities: Vec<IcuFacility>,
    #[serde(serialize_with = "none_as_empty_object")]
    pub metrics: Option<Metric>,
}

/// Occupied share of `total` beds, rounded; 0 when there are no beds.
pub fn utilization(total: i64, available: i64) -> f64 {
    if total > 0 {
        round2((total - available) as f64 / total as f64)
    } else {
        0.0
    }
}

/// (total, available) ICU beds across a hospital's wards.
fn icu_beds(wards: Option<&Vec<&WardRoom>>) -> (i64, i64) {
    wards
        .into_iter()
        .flatten()
        .filter(|w| w.ward_type.as_deref() == Some(ICU_WARD))
        .fold((0, 0), |(total, available), w| {
            (
                total + w.total_beds.unwrap_or(0),
                available + w.available_beds.unwrap_or(0),
            )
        })
}

struct Joins<'a> {
    wards: HashMap<i64, Vec<&'a WardRoom>>,
    facilities: HashMap<i64, Vec<&'a IcuFacility>>,
    metrics: HashMap<i64, &'a Metric>,
}

impl<'a> Joins<'a> {
    fn new(wards: &'a [WardRoom], facilities: &'a [IcuFacility], metrics: &'a [Metric]) -> Self {
        Self {
            wards: group_by(wards, |w| w.hospital_id),
            facilities: group_by(facilities, |f| f.hospital_id),
            metrics: index_first_by(metrics, |m| m.hospital_id),
        }
    }
}

/// Network-wide ICU totals.
///
/// Only wards and facilities of hospitals in the hospital collection count.
/// The ICU doctor ratio averages over hospitals whose metric record carries it.
pub fn icu_summary(
    hospitals: &[Hospital],
    wards: &[WardRoom],
    facilities: &[IcuFacility],
    metrics: &[Metric],
) -> IcuSummary {
    let joins = Joins::new(wards, facilities, metrics);

    let mut total_beds = 0;
    let mut available_beds = 0;
    let mut ventilators = 0;
    let mut monitors = 0;
    let mut ratio_sum = 0.0;
    let mut ratio_count = 0usize;

    for hospital in hospitals {
        let (total, available) = icu_beds(joins.wards.get(&hospital.id));
        total_beds += total;
        available_beds += available;

        for facility in joins.facilities.get(&hospital.id).into_iter().flatten() {
            ventilators += facility.ventilators.unwrap_or(0);
            monitors += facility.monitors.unwrap_or(0);
        }

        if let Some(ratio) = joins
            .metrics
            .get(&hospital.id)
            .and_then(|m| m.icu_doctor_bed_ratio)
        {
            ratio_sum += ratio;
            ratio_count += 1;
        }
    }

    let avg_ratio = if ratio_count > 0 {
        round2(ratio_sum / ratio_count as f64)
    } else {
        0.0
    };

    IcuSummary {
        total_icu_beds: total_beds,
        total_available_icu_beds: available_beds,
        utilization_rate: utilization(total_beds, available_beds),
        total_ventilators: ventilators,
        total_monitors: monitors,
        avg_icu_doctor_bed_ratio: avg_ratio,
    }
}

/// ICU capacity for every hospital.
///
/// Hospitals and addresses are raw records so that a name, street or city
/// stored as null is reported as null; only a missing one reads as "N/A".
/// The latest address of each hospital is used.
pub fn icu_by_hospital(
    hospitals: &[Value],
    wards: &[WardRoom],
    facilities: &[IcuFacility],
    metrics: &[Metric],
    addresses: &[Value],
) -> Vec<HospitalIcuCapacity> {
    let joins = Joins::new(wards, facilities, metrics);
    let addresses = index_by(addresses, |a| raw_id(a, "hospital_id"));

    hospitals
        .iter()
        .filter_map(|hospital| {
            let hospital_id = raw_id(hospital, "id")?;
            let (total, available) = icu_beds(joins.wards.get(&hospital_id));
            let address = addresses.get(&hospital_id).copied();

            Some(HospitalIcuCapacity {
                hospital_id,
                name: text_or_na(Some(hospital), "name"),
                address: text_or_na(address, "street"),
                city: text_or_na(address, "city_town"),
                total_icu_beds: total,
                available_icu_beds: available,
                icu_utilization: utilization(total, available),
                icu_facilities: joins
                    .facilities
                    .get(&hospital_id)
                    .into_iter()
                    .flatten()
                    .map(|f| (*f).clone())
                    .collect(),
                metrics: joins.metrics.get(&hospital_id).map(|m| (*m).clone()),
            })
        })
        .collect()
}
