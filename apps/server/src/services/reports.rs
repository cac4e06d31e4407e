//! Report service: loads the datasets a report needs and runs its derivation.
//!
//! Every method reads its datasets from disk again, so responses always
//! reflect the current files. The network baseline is the exception: it is
//! computed once in [`ReportService::new`] and reused.

use chrono::NaiveDate;
use medscope_analytics::{
    baseline::network_baseline,
    compliance::{self, DocumentStatus, IsoCertification},
    directory::{
        self, BasicHospital, ContactEntry, DoctorEntry, DoctorSummary, EnrichedWard, FullProfile,
        HospitalProfile, HospitalSpecialties,
    },
    equipment::{self, CriticalCareInventory, EquipmentInventory},
    geography::{
        self, CityCoverage, DashboardCard, GeographicEntry, HospitalLocation, HospitalsByCity,
        SpecialtyCoverageMatrix,
    },
    icu::{self, HospitalIcuCapacity, IcuSummary},
    maintenance::{self, MaintenanceItem},
    positioning::{self, PositioningReport},
    quality::{self, QualityScore},
    risk::{self, RiskProfile, RiskSummary},
    staffing::{
        self, ComputedRatio, DataEnvelope, NetworkSummary, RankedRatio, SizeDistribution,
    },
    surgical::{self, SurgicalCapacity},
    DataStore, NetworkBaseline, Result,
};
use medscope_models::{
    Address, Certification, Contact, Dataset, Doctor, DocumentUpload, Equipment, Hospital,
    IcuFacility, Metric, Specialty, WardRoom,
};
use serde_json::Value;

/// Today's date in the server's local time zone.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[derive(Debug)]
pub struct ReportService {
    store: DataStore,
    baseline: NetworkBaseline,
    service_radius_km: u32,
}

impl ReportService {
    /// Build the service, computing the network baseline from the metric
    /// and hospital datasets. Fails if either cannot be loaded.
    pub fn new(store: DataStore, service_radius_km: u32) -> Result<Self> {
        let metrics: Vec<Metric> = store.load()?;
        let hospitals: Vec<Hospital> = store.load()?;
        let baseline = network_baseline(&metrics, &hospitals);

        Ok(Self {
            store,
            baseline,
            service_radius_km,
        })
    }

    pub fn baseline(&self) -> &NetworkBaseline {
        &self.baseline
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    // Raw datasets, passed through untouched

    pub fn hospitals(&self) -> Result<Vec<Value>> {
        self.store.load_raw(Dataset::Hospitals)
    }

    pub fn addresses(&self) -> Result<Vec<Value>> {
        self.store.load_raw(Dataset::Addresses)
    }

    // Directory

    pub fn full_profiles(&self) -> Result<Vec<FullProfile>> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        let contacts: Vec<Contact> = self.store.load()?;
        let specialties: Vec<Specialty> = self.store.load()?;
        Ok(directory::full_profiles(&hospitals, &addresses, &contacts, &specialties))
    }

    pub fn hospital_profile(&self, hospital_id: i64) -> Result<HospitalProfile> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        let contacts: Vec<Contact> = self.store.load()?;
        let specialties: Vec<Specialty> = self.store.load()?;
        directory::hospital_profile(hospital_id, &hospitals, &addresses, &contacts, &specialties)
    }

    pub fn basic_listing(&self) -> Result<Vec<BasicHospital>> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        Ok(directory::basic_listing(&hospitals, &addresses))
    }

    pub fn contact_directory(&self) -> Result<Vec<ContactEntry>> {
        let contacts: Vec<Contact> = self.store.load()?;
        let hospitals: Vec<Hospital> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        Ok(directory::contact_directory(&contacts, &hospitals, &addresses))
    }

    pub fn specialty_directory(&self) -> Result<Vec<HospitalSpecialties>> {
        let specialties: Vec<Specialty> = self.store.load()?;
        let hospitals: Vec<Hospital> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        Ok(directory::specialty_directory(&specialties, &hospitals, &addresses))
    }

    pub fn doctors_summary(&self) -> Result<Vec<DoctorSummary>> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        let doctors: Vec<Doctor> = self.store.load()?;
        Ok(directory::doctors_summary(&hospitals, &addresses, &doctors))
    }

    pub fn hospital_doctors(&self, hospital_id: i64) -> Result<Vec<DoctorEntry>> {
        let doctors: Vec<Doctor> = self.store.load()?;
        let specialties: Vec<Specialty> = self.store.load()?;
        Ok(directory::hospital_doctors(hospital_id, &doctors, &specialties))
    }

    pub fn enriched_wards(&self) -> Result<Vec<EnrichedWard>> {
        let wards: Vec<WardRoom> = self.store.load()?;
        let hospitals: Vec<Hospital> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        Ok(directory::enriched_wards(&wards, &hospitals, &addresses))
    }

    // Benchmarking

    pub fn positioning(&self, hospital_id: i64) -> Result<PositioningReport> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let metrics: Vec<Metric> = self.store.load()?;
        let certifications: Vec<Certification> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        positioning::positioning(
            hospital_id,
            &hospitals,
            &metrics,
            &certifications,
            &addresses,
            &self.baseline,
        )
    }

    pub fn positioning_all(&self) -> Result<Vec<PositioningReport>> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let metrics: Vec<Metric> = self.store.load()?;
        let certifications: Vec<Certification> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        Ok(positioning::positioning_all(
            &hospitals,
            &metrics,
            &certifications,
            &addresses,
            &self.baseline,
        ))
    }

    pub fn quality_scores(&self) -> Result<Vec<QualityScore>> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let metrics: Vec<Metric> = self.store.load()?;
        let certifications: Vec<Certification> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        Ok(quality::quality_scores(&hospitals, &metrics, &certifications, &addresses))
    }

    pub fn ranked_doctor_bed_ratios(&self) -> Result<DataEnvelope<RankedRatio>> {
        let metrics: Vec<Metric> = self.store.load()?;
        let hospitals: Vec<Hospital> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        Ok(staffing::ranked_doctor_bed_ratios(&metrics, &hospitals, &addresses).into())
    }

    pub fn computed_doctor_bed_ratios(&self) -> Result<DataEnvelope<ComputedRatio>> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let doctors: Vec<Doctor> = self.store.load()?;
        Ok(staffing::computed_doctor_bed_ratios(&hospitals, &doctors).into())
    }

    pub fn size_distribution(&self) -> Result<SizeDistribution> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        Ok(staffing::size_distribution(&hospitals))
    }

    pub fn network_summary(&self) -> Result<NetworkSummary> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let metrics: Vec<Metric> = self.store.load()?;
        let doctors: Vec<Doctor> = self.store.load()?;
        Ok(staffing::network_summary(&hospitals, &metrics, &doctors))
    }

    // Risk and compliance

    pub fn risk_profile(&self, hospital_id: i64, today: NaiveDate) -> Result<RiskProfile> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let certifications: Vec<Certification> = self.store.load()?;
        let metrics: Vec<Metric> = self.store.load()?;
        let documents: Vec<DocumentUpload> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        risk::risk_profile(
            hospital_id,
            &hospitals,
            &certifications,
            &metrics,
            &documents,
            &addresses,
            today,
        )
    }

    pub fn risk_list(&self, today: NaiveDate) -> Result<Vec<RiskSummary>> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let certifications: Vec<Certification> = self.store.load()?;
        let metrics: Vec<Metric> = self.store.load()?;
        let documents: Vec<DocumentUpload> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        Ok(risk::risk_list(
            &hospitals,
            &certifications,
            &metrics,
            &documents,
            &addresses,
            today,
        ))
    }

    pub fn iso_certification_status(&self, today: NaiveDate) -> Result<Vec<IsoCertification>> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let certifications: Vec<Certification> = self.store.load()?;
        Ok(compliance::iso_certification_status(&hospitals, &certifications, today))
    }

    pub fn document_status(&self) -> Result<Vec<DocumentStatus>> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let documents: Vec<DocumentUpload> = self.store.load()?;
        Ok(compliance::document_status(&hospitals, &documents))
    }

    // Capacity

    pub fn icu_summary(&self) -> Result<IcuSummary> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let wards: Vec<WardRoom> = self.store.load()?;
        let facilities: Vec<IcuFacility> = self.store.load()?;
        let metrics: Vec<Metric> = self.store.load()?;
        Ok(icu::icu_summary(&hospitals, &wards, &facilities, &metrics))
    }

    pub fn icu_by_hospital(&self) -> Result<Vec<HospitalIcuCapacity>> {
        let hospitals = self.store.load_raw(Dataset::Hospitals)?;
        let wards: Vec<WardRoom> = self.store.load()?;
        let facilities: Vec<IcuFacility> = self.store.load()?;
        let metrics: Vec<Metric> = self.store.load()?;
        let addresses = self.store.load_raw(Dataset::Addresses)?;
        Ok(icu::icu_by_hospital(
            &hospitals,
            &wards,
            &facilities,
            &metrics,
            &addresses,
        ))
    }

    pub fn equipment_inventory(&self) -> Result<EquipmentInventory> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        let items: Vec<Equipment> = self.store.load()?;
        Ok(equipment::equipment_inventory(&hospitals, &addresses, &items))
    }

    pub fn critical_care_inventory(&self) -> Result<CriticalCareInventory> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let items: Vec<Equipment> = self.store.load()?;
        Ok(equipment::critical_care_inventory(&hospitals, &items))
    }

    pub fn maintenance_schedule(&self) -> Result<Vec<MaintenanceItem>> {
        let items: Vec<Equipment> = self.store.load()?;
        let hospitals: Vec<Hospital> = self.store.load()?;
        let addresses = self.store.load_raw(Dataset::Addresses)?;
        Ok(maintenance::maintenance_schedule(&items, &hospitals, &addresses))
    }

    pub fn surgical_capacity(&self) -> Result<Vec<SurgicalCapacity>> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        let items: Vec<Equipment> = self.store.load()?;
        let specialties: Vec<Specialty> = self.store.load()?;
        let doctors: Vec<Doctor> = self.store.load()?;
        Ok(surgical::surgical_capacity(
            &hospitals,
            &addresses,
            &items,
            &specialties,
            &doctors,
        ))
    }

    // Geography

    pub fn city_coverage(&self) -> Result<Vec<CityCoverage>> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        Ok(geography::city_coverage(&hospitals, &addresses))
    }

    pub fn hospitals_by_city(&self) -> Result<HospitalsByCity> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        Ok(geography::hospitals_by_city(&hospitals, &addresses))
    }

    pub fn specialty_coverage_matrix(&self) -> Result<SpecialtyCoverageMatrix> {
        let specialties: Vec<Specialty> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        Ok(geography::specialty_coverage_matrix(&specialties, &addresses))
    }

    pub fn geographic_coverage(&self) -> Result<Vec<GeographicEntry>> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        Ok(geography::geographic_coverage(
            &hospitals,
            &addresses,
            self.service_radius_km,
        ))
    }

    pub fn hospital_locations(&self) -> Result<Vec<HospitalLocation>> {
        let addresses: Vec<Address> = self.store.load()?;
        Ok(geography::hospital_locations(&addresses))
    }

    pub fn dashboard_cards(&self) -> Result<Vec<DashboardCard>> {
        let hospitals: Vec<Hospital> = self.store.load()?;
        let addresses: Vec<Address> = self.store.load()?;
        Ok(geography::dashboard_cards(&hospitals, &addresses))
    }
}
