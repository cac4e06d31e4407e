//! Error types for the analytics engine

use medscope_models::Dataset;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A request referenced an id absent from the primary collection.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// A backing file is missing, unreadable, or does not parse.
    #[error("{}: {}{}", .fault, .dataset, .fault.hint())]
    DataUnavailable {
        dataset: Dataset,
        #[source]
        fault: DataFault,
    },
}

#[derive(Debug, Error)]
pub enum DataFault {
    #[error("Required data file not found")]
    Missing(#[source] std::io::Error),

    #[error("Could not parse data from file")]
    Corrupt(#[source] serde_json::Error),
}

impl DataFault {
    /// Trailing sentence appended after the file name.
    pub fn hint(&self) -> &'static str {
        match self {
            DataFault::Missing(_) => "",
            DataFault::Corrupt(_) => ". The file might be corrupted.",
        }
    }
}

impl Error {
    pub fn hospital_not_found(id: i64) -> Self {
        Error::NotFound {
            entity: "Hospital",
            id,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_data_file() {
        let missing = Error::DataUnavailable {
            dataset: Dataset::Hospitals,
            fault: DataFault::Missing(std::io::Error::from(std::io::ErrorKind::NotFound)),
        };
        assert_eq!(
            missing.to_string(),
            "Required data file not found: hospitals.json"
        );

        let corrupt = Error::DataUnavailable {
            dataset: Dataset::Equipment,
            fault: DataFault::Corrupt(serde_json::from_str::<u8>("x").unwrap_err()),
        };
        assert_eq!(
            corrupt.to_string(),
            "Could not parse data from file: hospital_equipment.json. The file might be corrupted."
        );
    }

    #[test]
    fn not_found_names_entity_and_id() {
        let err = Error::hospital_not_found(42);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Hospital not found: 42");
    }
}
