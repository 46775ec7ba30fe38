//! VIN validation and decoding
//!
//! Structural validation of Vehicle Identification Numbers and decoding of the
//! manufacturer (from the WMI, the first three characters) and the model year
//! (from the tenth character). Decode results are memoized per VIN.

mod decoder;
pub mod tables;
mod types;
mod validation;


pub use decoder::VinDecoder;
pub use types::{DecodeError, DecodedVehicle};
pub use validation::{FORBIDDEN_CHARACTERS, VIN_LENGTH};
