//! City and location groupings.
//!
//! Two address policies coexist here. City coverage and hospitals-by-city
//! place a hospital in the city of its first address that names one. The
//! specialty matrix and the dashboard cards use the Primary address only,
//! and the location list further requires it to be active.

use medscope_models::{Address, Hospital, Specialty};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::index::{addresses_by_hospital, AddressSelection};
use crate::ser::none_as_empty_object;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityCoverage {
    pub city: String,
    pub hospital_count: i64,
    pub total_beds: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityHospital {
    pub id: i64,
    pub name: String,
    pub beds_registered: i64,
    pub address: Address,
}

/// Hospitals keyed by city, cities in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HospitalsByCity(pub Vec<(String, Vec<CityHospital>)>);

impl Serialize for HospitalsByCity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (city, hospitals) in &self.0 {
            map.serialize_entry(city, hospitals)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialtyCoverageMatrix {
    pub cities: Vec<String>,
    pub specialties: Vec<String>,
    pub matrix_data: Vec<CityCoverageRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityCoverageRow {
    pub city: String,
    pub coverage: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeographicEntry {
    pub id: i64,
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(serialize_with = "none_as_empty_object")]
    pub address: Option<Address>,
    pub service_radius_km: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HospitalLocation {
    pub hospital_id: Option<i64>,
    pub full_address: String,
    pub address_details: AddressDetails,
}

/// Address fields flattened to strings, blank when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressDetails {
    pub street: String,
    pub area_locality: String,
    pub city_town: String,
    pub district: String,
    pub state: String,
    pub pin_code: String,
    pub nearest_landmark: String,
}

impl From<&Address> for AddressDetails {
    fn from(a: &Address) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            street: text(&a.street),
            area_locality: text(&a.area_locality),
            city_town: text(&a.city_town),
            district: text(&a.district),
            state: text(&a.state),
            pin_code: text(&a.pin_code),
            nearest_landmark: text(&a.nearest_landmark),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCard {
    pub hospital_id: i64,
    pub name: String,
    pub full_address: String,
    pub address_details: Address,
}

/// Join address parts as `a, b, c - pin`, with embedded newlines turned
/// into separators.
fn single_line(parts: &[Option<&str>], pin_code: Option<&str>) -> String {
    let head: Vec<&str> = parts.iter().map(|p| p.unwrap_or("")).collect();
    format!("{} - {}", head.join(", "), pin_code.unwrap_or(""))
        .replace('\n', ", ")
        .trim()
        .to_string()
}

/// Hospital count and registered-bed total per city.
pub fn city_coverage(hospitals: &[Hospital], addresses: &[Address]) -> Vec<CityCoverage> {
    let cities = addresses_by_hospital(addresses, AddressSelection::FirstWithCity);
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut coverage: Vec<CityCoverage> = Vec::new();

    for hospital in hospitals {
        let Some(city) = cities.get(&hospital.id).and_then(|a| a.city_town.as_deref()) else {
            continue;
        };
        let pos = *positions.entry(city).or_insert_with(|| {
            coverage.push(CityCoverage {
                city: city.to_string(),
                hospital_count: 0,
                total_beds: 0,
            });
            coverage.len() - 1
        });
        coverage[pos].hospital_count += 1;
        coverage[pos].total_beds += hospital.beds_registered.unwrap_or(0);
    }

    coverage
}

/// Hospitals grouped under the city of their first address. A hospital whose
/// first address has no city is left out, even if a later one has.
pub fn hospitals_by_city(hospitals: &[Hospital], addresses: &[Address]) -> HospitalsByCity {
    let cities = addresses_by_hospital(addresses, AddressSelection::FirstSeen);
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<CityHospital>)> = Vec::new();

    for hospital in hospitals {
        let Some(address) = cities.get(&hospital.id).copied() else {
            continue;
        };
        let Some(city) = address.city_town.as_deref().filter(|city| !city.is_empty()) else {
            continue;
        };
        let pos = *positions.entry(city).or_insert_with(|| {
            groups.push((city.to_string(), Vec::new()));
            groups.len() - 1
        });
        groups[pos].1.push(CityHospital {
            id: hospital.id,
            name: hospital.name.clone().unwrap_or_else(|| "Unknown".into()),
            beds_registered: hospital.beds_registered.unwrap_or(0),
            address: address.clone(),
        });
    }

    HospitalsByCity(groups)
}

/// City × specialty availability, both axes sorted.
///
/// A city is on the matrix if some hospital's Primary address names it;
/// every specialty name in the dataset is a column. A cell is true when an
/// available specialty of that name exists at a hospital in that city.
pub fn specialty_coverage_matrix(
    specialties: &[Specialty],
    addresses: &[Address],
) -> SpecialtyCoverageMatrix {
    let city_of: HashMap<i64, &str> = addresses_by_hospital(addresses, AddressSelection::LatestPrimary)
        .into_iter()
        .filter_map(|(id, a)| a.city_town.as_deref().map(|city| (id, city)))
        .collect();

    let cities: BTreeSet<&str> = city_of.values().copied().collect();
    let names: BTreeSet<&str> = specialties
        .iter()
        .filter_map(|s| s.specialty_name.as_deref())
        .collect();

    let mut covered: HashMap<&str, BTreeSet<&str>> = HashMap::new();
    for specialty in specialties.iter().filter(|s| s.is_available()) {
        let city = specialty.hospital_id.and_then(|id| city_of.get(&id).copied());
        if let (Some(city), Some(name)) = (city, specialty.specialty_name.as_deref()) {
            covered.entry(city).or_default().insert(name);
        }
    }

    let matrix_data = cities
        .iter()
        .map(|city| CityCoverageRow {
            city: city.to_string(),
            coverage: names
                .iter()
                .map(|name| {
                    let present = covered.get(city).is_some_and(|set| set.contains(name));
                    (name.to_string(), present)
                })
                .collect(),
        })
        .collect();

    SpecialtyCoverageMatrix {
        cities: cities.into_iter().map(str::to_string).collect(),
        specialties: names.into_iter().map(str::to_string).collect(),
        matrix_data,
    }
}

/// Coordinates and address for every hospital, with a fixed service radius.
pub fn geographic_coverage(
    hospitals: &[Hospital],
    addresses: &[Address],
    service_radius_km: u32,
) -> Vec<GeographicEntry> {
    let addresses = addresses_by_hospital(addresses, AddressSelection::Latest);
    hospitals
        .iter()
        .map(|h| GeographicEntry {
            id: h.id,
            name: h.name.clone(),
            latitude: h.latitude,
            longitude: h.longitude,
            address: addresses.get(&h.id).map(|a| (*a).clone()),
            service_radius_km,
        })
        .collect()
}

/// Every active Primary address, formatted for display.
pub fn hospital_locations(addresses: &[Address]) -> Vec<HospitalLocation> {
    addresses
        .iter()
        .filter(|a| a.is_primary() && a.is_active())
        .map(|a| HospitalLocation {
            hospital_id: a.hospital_id,
            full_address: single_line(
                &[
                    a.street.as_deref(),
                    a.area_locality.as_deref(),
                    a.city_town.as_deref(),
                    a.district.as_deref(),
                    a.state.as_deref(),
                ],
                a.pin_code.as_deref(),
            ),
            address_details: AddressDetails::from(a),
        })
        .collect()
}

/// Name and Primary address for each hospital that has one.
pub fn dashboard_cards(hospitals: &[Hospital], addresses: &[Address]) -> Vec<DashboardCard> {
    let primaries = addresses_by_hospital(addresses, AddressSelection::LatestPrimary);
    hospitals
        .iter()
        .filter_map(|h| {
            let a = primaries.get(&h.id)?;
            Some(DashboardCard {
                hospital_id: h.id,
                name: h.name.clone().unwrap_or_else(|| "Unknown Hospital".into()),
                full_address: single_line(
                    &[
                        a.street.as_deref(),
                        a.area_locality.as_deref(),
                        a.city_town.as_deref(),
                        a.state.as_deref(),
                    ],
                    a.pin_code.as_deref(),
                ),
                address_details: (*a).clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;
    use serde_json::json;

    #[test]
    fn coverage_uses_first_address_with_a_city() {
        let hospitals = vec![
            hospital_with_beds(1, "North", 100, 120),
            hospital_with_beds(2, "South", 50, 80),
            hospital_with_beds(3, "East", 10, 10),
            hospital(4, "Nowhere"),
        ];
        let addresses = vec![
            address(1, "Billing", None),
            address(1, "Branch", Some("Pune")),
            primary(1, "Mumbai", "MH"),
            primary(2, "Pune", "MH"),
            primary(3, "Nagpur", "MH"),
        ];

        let coverage = city_coverage(&hospitals, &addresses);

        assert_eq!(
            coverage,
            vec![
                CityCoverage { city: "Pune".into(), hospital_count: 2, total_beds: 200 },
                CityCoverage { city: "Nagpur".into(), hospital_count: 1, total_beds: 10 },
            ]
        );
    }

    #[test]
    fn by_city_serializes_as_ordered_object() {
        let hospitals = vec![hospital(1, "North"), hospital(2, "South"), hospital(3, "East")];
        let addresses = vec![
            primary(2, "Pune", "MH"),
            primary(1, "Nagpur", "MH"),
            primary(3, "Pune", "MH"),
        ];

        let grouped = hospitals_by_city(&hospitals, &addresses);
        let json = serde_json::to_string(&grouped).unwrap();

        assert!(json.starts_with(r#"{"Nagpur":[{"id":1,"name":"North","beds_registered":0"#));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Pune"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn by_city_only_looks_at_the_first_address() {
        let hospitals = vec![hospital(1, "North"), hospital(2, "South")];
        let addresses = vec![
            address(1, "Billing", None),
            primary(1, "Pune", "MH"),
            address(2, "Branch", Some("Goa")),
            primary(2, "Pune", "MH"),
        ];

        let grouped = hospitals_by_city(&hospitals, &addresses);
        let value = serde_json::to_value(&grouped).unwrap();

        assert_eq!(value.as_object().map(|cities| cities.len()), Some(1));
        assert_eq!(value["Goa"][0]["id"], json!(2));
        assert!(value.get("Pune").is_none());
    }

    #[test]
    fn matrix_marks_only_available_specialties() {
        let addresses = vec![
            primary(1, "Pune", "MH"),
            primary(2, "Nagpur", "MH"),
            address(3, "Branch", Some("Goa")),
        ];
        let specialties = vec![
            specialty(1, 1, "Cardiology", "Medicine", true),
            specialty(2, 2, "Cardiology", "Medicine", false),
            specialty(3, 2, "Oncology", "Medicine", true),
            specialty(4, 3, "Dermatology", "Medicine", true),
        ];

        let matrix = specialty_coverage_matrix(&specialties, &addresses);

        assert_eq!(matrix.cities, vec!["Nagpur", "Pune"]);
        assert_eq!(matrix.specialties, vec!["Cardiology", "Dermatology", "Oncology"]);
        let nagpur = &matrix.matrix_data[0];
        assert_eq!(nagpur.city, "Nagpur");
        assert!(!nagpur.coverage["Cardiology"]);
        assert!(nagpur.coverage["Oncology"]);
        assert!(matrix.matrix_data[1].coverage["Cardiology"]);
        assert!(!matrix.matrix_data[1].coverage["Dermatology"]);
    }

    #[test]
    fn locations_require_active_primary() {
        let mut inactive = primary(2, "Pune", "MH");
        inactive.is_active = Some(false);
        let mut full = primary(1, "Pune", "MH");
        full.street = Some("12 Station Rd\nBlock B".into());
        full.area_locality = Some("Camp".into());
        full.district = Some("Pune".into());
        full.pin_code = Some("411001".into());

        let locations = hospital_locations(&[full, inactive, address(3, "Branch", Some("Goa"))]);

        assert_eq!(locations.len(), 1);
        assert_eq!(
            locations[0].full_address,
            "12 Station Rd, Block B, Camp, Pune, Pune, MH - 411001"
        );
        assert_eq!(locations[0].address_details.nearest_landmark, "");
    }

    #[test]
    fn dashboard_skips_hospitals_without_primary_and_omits_district() {
        let hospitals = vec![hospital(1, "North"), hospital(2, "South")];
        let mut addr = primary(1, "Pune", "MH");
        addr.district = Some("Haveli".into());
        let addresses = vec![addr, address(2, "Branch", Some("Goa"))];

        let cards = dashboard_cards(&hospitals, &addresses);

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].full_address, ", , Pune, MH -");
        assert_eq!(cards[0].address_details.district.as_deref(), Some("Haveli"));
    }

    #[test]
    fn geographic_entries_carry_radius_and_empty_address() {
        let entries = geographic_coverage(&[hospital(1, "North")], &[], 25);
        let json = serde_json::to_value(&entries).unwrap();
        assert_eq!(json[0]["address"], json!({}));
        assert_eq!(json[0]["service_radius_km"], json!(25));
    }
}
