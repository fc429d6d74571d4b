use chrono::NaiveDate;
use std::fmt::Display;

/// Error kinds raised by the FWI and FBP engines.
///
/// Scalar entry points fail immediately with the specific kind; the batch
/// layer either records failures per row/cell or aborts, depending on the
/// configured failure policy.
#[derive(Debug, Clone, PartialEq)]
pub enum FireDangerError {
    /// A weather input (or a moisture code fed back into the recursion)
    /// is outside its physical domain.
    InvalidObservation { field: &'static str, value: f32 },
    /// The fuel-type code is not present in the catalogue.
    UnknownFuelType { code: String },
    /// A fuel-type-specific auxiliary input was not supplied.
    MissingRequiredInput { fuel: String, field: &'static str },
    /// An FBP auxiliary input is outside its physical range.
    InvalidInput { field: &'static str, value: f32 },
    /// Dates within a station sequence are not consecutive.
    SequenceGap {
        group: i64,
        expected: NaiveDate,
        found: NaiveDate,
    },
    /// A required column is absent from the table frame.
    MissingColumn { name: String },
}

impl Display for FireDangerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FireDangerError::InvalidObservation { field, value } => {
                write!(f, "invalid observation: {} = {}", field, value)
            }
            FireDangerError::UnknownFuelType { code } => {
                write!(f, "unknown fuel type: {}", code)
            }
            FireDangerError::MissingRequiredInput { fuel, field } => {
                write!(f, "fuel type {} requires {}", fuel, field)
            }
            FireDangerError::InvalidInput { field, value } => {
                write!(f, "invalid input: {} = {}", field, value)
            }
            FireDangerError::SequenceGap {
                group,
                expected,
                found,
            } => {
                write!(
                    f,
                    "non-consecutive dates for station {}: expected {}, found {}",
                    group, expected, found
                )
            }
            FireDangerError::MissingColumn { name } => {
                write!(f, "missing column: {}", name)
            }
        }
    }
}

impl std::error::Error for FireDangerError {}
