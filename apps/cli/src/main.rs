//! Command-line access to the analytics reports
//!
//! Runs one report against a data directory and prints it as JSON, without
//! starting the HTTP server.
//!
//! Usage:
//!   medscope-cli --data-dir ./data quality-scores --pretty
//!   medscope-cli risk-profile --hospital-id 12

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use medscope::services::{local_today, ReportService};
use medscope::Config;
use medscope_analytics::DataStore;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "medscope-cli")]
#[command(about = "Run hospital network analytics reports over a directory of JSON datasets")]
struct Cli {
    /// Report to run
    #[arg(value_enum)]
    report: Report,

    /// Directory holding the datasets (defaults to the configured data directory)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Hospital for per-hospital reports
    #[arg(long)]
    hospital_id: Option<i64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Report {
    Baseline,
    Hospitals,
    Profile,
    Basic,
    Contacts,
    Specialties,
    DoctorsSummary,
    Doctors,
    Wards,
    Positioning,
    PositioningAll,
    QualityScores,
    RankedRatios,
    ComputedRatios,
    SizeDistribution,
    Summary,
    RiskProfile,
    RiskList,
    IsoCertification,
    DocumentStatus,
    IcuSummary,
    IcuHospitals,
    Equipment,
    CriticalCare,
    MaintenanceSchedule,
    SurgicalCapacity,
    CityCoverage,
    ByCity,
    SpecialtyMatrix,
    GeographicCoverage,
    Locations,
    Dashboard,
}

impl Report {
    fn needs_hospital(self) -> bool {
        matches!(
            self,
            Report::Profile | Report::Doctors | Report::Positioning | Report::RiskProfile
        )
    }
}

fn to_json<T: Serialize>(report: medscope_analytics::Result<T>) -> Result<Value> {
    Ok(serde_json::to_value(report?)?)
}

fn run(reports: &ReportService, report: Report, hospital_id: Option<i64>) -> Result<Value> {
    let id = match (report.needs_hospital(), hospital_id) {
        (true, None) => bail!("--hospital-id is required for this report"),
        (_, id) => id.unwrap_or_default(),
    };
    let today = local_today();

    match report {
        Report::Baseline => Ok(serde_json::to_value(reports.baseline())?),
        Report::Hospitals => to_json(reports.hospitals()),
        Report::Profile => to_json(reports.hospital_profile(id)),
        Report::Basic => to_json(reports.basic_listing()),
        Report::Contacts => to_json(reports.contact_directory()),
        Report::Specialties => to_json(reports.specialty_directory()),
        Report::DoctorsSummary => to_json(reports.doctors_summary()),
        Report::Doctors => to_json(reports.hospital_doctors(id)),
        Report::Wards => to_json(reports.enriched_wards()),
        Report::Positioning => to_json(reports.positioning(id)),
        Report::PositioningAll => to_json(reports.positioning_all()),
        Report::QualityScores => to_json(reports.quality_scores()),
        Report::RankedRatios => to_json(reports.ranked_doctor_bed_ratios()),
        Report::ComputedRatios => to_json(reports.computed_doctor_bed_ratios()),
        Report::SizeDistribution => to_json(reports.size_distribution()),
        Report::Summary => to_json(reports.network_summary()),
        Report::RiskProfile => to_json(reports.risk_profile(id, today)),
        Report::RiskList => to_json(reports.risk_list(today)),
        Report::IsoCertification => to_json(reports.iso_certification_status(today)),
        Report::DocumentStatus => to_json(reports.document_status()),
        Report::IcuSummary => to_json(reports.icu_summary()),
        Report::IcuHospitals => to_json(reports.icu_by_hospital()),
        Report::Equipment => to_json(reports.equipment_inventory()),
        Report::CriticalCare => to_json(reports.critical_care_inventory()),
        Report::MaintenanceSchedule => to_json(reports.maintenance_schedule()),
        Report::SurgicalCapacity => to_json(reports.surgical_capacity()),
        Report::CityCoverage => to_json(reports.city_coverage()),
        Report::ByCity => to_json(reports.hospitals_by_city()),
        Report::SpecialtyMatrix => to_json(reports.specialty_coverage_matrix()),
        Report::GeographicCoverage => to_json(reports.geographic_coverage()),
        Report::Locations => to_json(reports.hospital_locations()),
        Report::Dashboard => to_json(reports.dashboard_cards()),
    }
}

fn main() -> Result<()> {
    medscope::logging::init_simple_logging();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;
    let data_dir = cli.data_dir.unwrap_or(config.data.directory);

    tracing::debug!(data_dir = %data_dir.display(), report = ?cli.report, "Running report");

    let reports = ReportService::new(DataStore::new(&data_dir), config.analytics.service_radius_km)
        .with_context(|| format!("Failed to compute network baseline from {}", data_dir.display()))?;

    let value = run(&reports, cli.report, cli.hospital_id)?;
    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{output}");

    Ok(())
}
