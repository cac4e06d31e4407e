//! Staffing ratios, size classes and the network headline figures.

use medscope_models::{Address, Doctor, Hospital, Metric};
use serde::Serialize;

use crate::index::{addresses_by_hospital, count_by, index_by, AddressSelection};
use crate::round2;

/// `{"data": [...]}` wrapper used by the ratio tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataEnvelope<T> {
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for DataEnvelope<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRatio {
    pub hospital_id: i64,
    pub hospital_name: String,
    pub total_doctors: Option<i64>,
    pub total_beds: i64,
    pub doctor_bed_ratio: Option<f64>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedRatio {
    pub hospital_id: i64,
    pub hospital_name: String,
    pub total_doctors: usize,
    pub total_beds: i64,
    pub doctor_bed_ratio: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    pub fn of(beds: i64) -> Self {
        match beds {
            b if b < 100 => SizeClass::Small,
            100..=300 => SizeClass::Medium,
            _ => SizeClass::Large,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeClass::Small => "Small (<100 beds)",
            SizeClass::Medium => "Medium (100-300 beds)",
            SizeClass::Large => "Large (>300 beds)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeBucket {
    pub name: &'static str,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeDistribution {
    pub distribution: Vec<SizeBucket>,
    pub total_hospitals: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSummary {
    pub total_hospitals: usize,
    pub total_beds_operational: i64,
    pub total_doctors: usize,
    pub average_doctor_to_bed_ratio: f64,
}

/// Reported doctor/bed ratios, best first. A metric without a ratio ranks
/// below every metric with one; ties keep dataset order.
pub fn ranked_doctor_bed_ratios(
    metrics: &[Metric],
    hospitals: &[Hospital],
    addresses: &[Address],
) -> Vec<RankedRatio> {
    let hospitals = index_by(hospitals, |h| Some(h.id).filter(|id| *id != 0));
    let addresses = addresses_by_hospital(addresses, AddressSelection::Latest);

    let mut rows: Vec<RankedRatio> = metrics
        .iter()
        .filter_map(|m| {
            let id = m.hospital_id?;
            let hospital = hospitals.get(&id).copied();
            let address = addresses.get(&id).copied();
            Some(RankedRatio {
                hospital_id: id,
                hospital_name: hospital
                    .and_then(|h| h.name.clone())
                    .unwrap_or_else(|| "Unknown".into()),
                total_doctors: m.total_doctors,
                total_beds: hospital.and_then(|h| h.beds_operational).unwrap_or(0),
                doctor_bed_ratio: m.doctor_bed_ratio,
                city: address.and_then(|a| a.city_town.clone()),
                district: address.and_then(|a| a.district.clone()),
                state: address.and_then(|a| a.state.clone()),
                rank: 0,
            })
        })
        .collect();

    let key = |r: &RankedRatio| r.doctor_bed_ratio.unwrap_or(-1.0);
    rows.sort_by(|a, b| key(b).total_cmp(&key(a)));
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}

/// Doctor/bed ratio derived from the doctor roster rather than the metric
/// dataset. Null when the hospital reports no beds.
pub fn computed_doctor_bed_ratios(hospitals: &[Hospital], doctors: &[Doctor]) -> Vec<ComputedRatio> {
    let counts = count_by(doctors, |d| d.hospital_id);

    hospitals
        .iter()
        .map(|h| {
            let beds = h.bed_count().unwrap_or(0);
            let total_doctors = counts.get(&h.id).copied().unwrap_or(0);
            ComputedRatio {
                hospital_id: h.id,
                hospital_name: h.name.clone().unwrap_or_else(|| "Unknown".into()),
                total_doctors,
                total_beds: beds,
                doctor_bed_ratio: (beds > 0).then(|| round2(total_doctors as f64 / beds as f64)),
            }
        })
        .collect()
}

/// Hospitals per size class. Hospitals with no bed count are not classed
/// but still count towards the total.
pub fn size_distribution(hospitals: &[Hospital]) -> SizeDistribution {
    if hospitals.is_empty() {
        return SizeDistribution {
            distribution: Vec::new(),
            total_hospitals: 0,
        };
    }

    let classes = count_by(hospitals, |h| h.bed_count().map(SizeClass::of));
    SizeDistribution {
        distribution: SizeClass::ALL
            .into_iter()
            .map(|class| SizeBucket {
                name: class.label(),
                value: classes.get(&class).copied().unwrap_or(0),
            })
            .collect(),
        total_hospitals: hospitals.len(),
    }
}

pub fn network_summary(hospitals: &[Hospital], metrics: &[Metric], doctors: &[Doctor]) -> NetworkSummary {
    let ratios: Vec<f64> = metrics.iter().filter_map(|m| m.doctor_bed_ratio).collect();
    let average = if ratios.is_empty() {
        0.0
    } else {
        round2(ratios.iter().sum::<f64>() / ratios.len() as f64)
    };

    NetworkSummary {
        total_hospitals: hospitals.len(),
        total_beds_operational: hospitals.iter().filter_map(|h| h.beds_operational).sum(),
        total_doctors: doctors.len(),
        average_doctor_to_bed_ratio: average,
    }
}
