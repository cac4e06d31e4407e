//! Hospital positioning against the network baseline.

use medscope_models::{Address, Certification, Hospital, Metric};
use serde::Serialize;
use std::collections::HashMap;

use crate::baseline::{MetricField, MetricValues, NetworkBaseline, Reading};
use crate::index::{addresses_by_hospital, group_by, index_first_by, AddressSelection};
use crate::{round2, Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositioningReport {
    pub hospital_name: Option<String>,
    pub hospital_id: i64,
    pub city: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub metrics: PositioningMetrics,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositioningMetrics {
    pub network_averages: NetworkBaseline,
    pub selected_hospital_values: MetricValues<Option<Reading>>,
    pub relative_positioning_percent: MetricValues<Option<f64>>,
}

/// A hospital's value as a percentage of the baseline; `None` when the
/// hospital has no value or the baseline is zero.
pub fn relative_percent(value: Option<Reading>, baseline: f64) -> Option<f64> {
    let value = value?;
    if baseline == 0.0 {
        return None;
    }
    Some(round2(value.as_f64() / baseline * 100.0))
}

struct Joins<'a> {
    metrics: HashMap<i64, &'a Metric>,
    certifications: HashMap<i64, Vec<&'a Certification>>,
    addresses: HashMap<i64, &'a Address>,
}

impl<'a> Joins<'a> {
    fn new(metrics: &'a [Metric], certifications: &'a [Certification], addresses: &'a [Address]) -> Self {
        Self {
            metrics: index_first_by(metrics, |m| m.hospital_id),
            certifications: group_by(certifications, |c| c.hospital_id),
            addresses: addresses_by_hospital(addresses, AddressSelection::Latest),
        }
    }

    fn report(&self, hospital: &Hospital, baseline: &NetworkBaseline) -> PositioningReport {
        let metric = self.metrics.get(&hospital.id).copied();
        let address = self.addresses.get(&hospital.id).copied();

        let selected = MetricValues::from_fn(|field| field.reading(hospital, metric));
        let relative =
            MetricValues::from_fn(|field: MetricField| relative_percent(*selected.get(field), *baseline.get(field)));

        PositioningReport {
            hospital_name: hospital.name.clone(),
            hospital_id: hospital.id,
            city: address.and_then(|a| a.city_town.clone()),
            state: address.and_then(|a| a.state.clone()),
            district: address.and_then(|a| a.district.clone()),
            metrics: PositioningMetrics {
                network_averages: baseline.clone(),
                selected_hospital_values: selected,
                relative_positioning_percent: relative,
            },
            certifications: self
                .certifications
                .get(&hospital.id)
                .map(|certs| certs.iter().map(|c| (*c).clone()).collect())
                .unwrap_or_default(),
        }
    }
}

/// Positioning report for one hospital.
pub fn positioning(
    hospital_id: i64,
    hospitals: &[Hospital],
    metrics: &[Metric],
    certifications: &[Certification],
    addresses: &[Address],
    baseline: &NetworkBaseline,
) -> Result<PositioningReport> {
    let hospital = hospitals
        .iter()
        .find(|h| h.id == hospital_id)
        .ok_or_else(|| Error::hospital_not_found(hospital_id))?;

    Ok(Joins::new(metrics, certifications, addresses).report(hospital, baseline))
}

/// Positioning reports for every hospital. Hospitals without a metric
/// record still appear, with only the values they do have.
pub fn positioning_all(
    hospitals: &[Hospital],
    metrics: &[Metric],
    certifications: &[Certification],
    addresses: &[Address],
    baseline: &NetworkBaseline,
) -> Vec<PositioningReport> {
    let joins = Joins::new(metrics, certifications, addresses);
    hospitals.iter().map(|h| joins.report(h, baseline)).collect()
}
