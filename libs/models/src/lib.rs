//! Record types for the hospital network datasets.
//!
//! Every dataset is a flat JSON array of records keyed by integer ids. The
//! structs here name the attributes the analytics engine reads; any other
//! attribute present in the source file is kept in `extra` so that raw and
//! enriched payloads pass records through without losing fields. Named
//! attributes the source record lacks are left out when serializing, so a
//! record written back out has the keys it was read with.

mod dataset;
mod facility;
mod hospital;
mod staffing;

pub use dataset::{Dataset, Record};
pub use facility::{Certification, DocumentUpload, Equipment, IcuFacility, WardRoom};
pub use hospital::{Address, Contact, Hospital};
pub use staffing::{Doctor, Metric, Specialty};

/// Attributes of a record that have no dedicated field.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Address type marking a hospital's main location.
pub const PRIMARY_ADDRESS: &str = "Primary";

/// `entity_type` of document uploads that belong to a hospital.
pub const HOSPITAL_ENTITY: &str = "hospital";
