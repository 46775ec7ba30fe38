//! VIN decoding types

use super::tables::{UNKNOWN_MANUFACTURER, UNKNOWN_MODEL_YEAR};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Vehicle information decoded from a valid VIN
///
/// Unknown values are `None` here and only become the sentinel strings
/// `"Unknown Manufacturer"` / `"Unknown"` when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedVehicle {
    /// The trimmed VIN
    pub vin: String,
    /// Manufacturer resolved from the WMI
    #[serde(serialize_with = "serialize_manufacturer")]
    pub manufacturer: Option<&'static str>,
    /// Model year resolved from the tenth character
    #[serde(serialize_with = "serialize_model_year")]
    pub model_year: Option<u16>,
}

impl DecodedVehicle {
    /// Manufacturer as presented to clients
    pub fn manufacturer_name(&self) -> &'static str {
        self.manufacturer.unwrap_or(UNKNOWN_MANUFACTURER)
    }

    /// First word of the manufacturer name, e.g. `Honda` for `Honda (USA)`
    ///
    /// This is the key recall records are filed under.
    pub fn manufacturer_token(&self) -> &'static str {
        self.manufacturer_name()
            .split_whitespace()
            .next()
            .unwrap_or_default()
    }
}

fn serialize_manufacturer<S>(value: &Option<&'static str>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.unwrap_or(UNKNOWN_MANUFACTURER))
}

fn serialize_model_year<S>(value: &Option<u16>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(year) => serializer.serialize_u16(*year),
        None => serializer.serialize_str(UNKNOWN_MODEL_YEAR),
    }
}

/// Decode failure returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input failed structural validation
    #[error("Invalid VIN")]
    InvalidVin { vin: String },
}

impl DecodeError {
    /// The input that failed to decode
    pub fn vin(&self) -> &str {
        match self {
            DecodeError::InvalidVin { vin } => vin,
        }
    }
}

/// Which structural check a VIN failed; logged, never returned to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum VinValidationError {
    #[error("empty VIN")]
    Empty,
    #[error("invalid length ({0})")]
    InvalidLength(usize),
    #[error("non-alphanumeric characters found")]
    NonAlphanumeric,
    #[error("contains invalid character {0:?}")]
    ForbiddenCharacter(char),
    #[error("VIN must be uppercase")]
    NotUppercase,
}
