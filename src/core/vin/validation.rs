//! Structural VIN checks

use super::types::VinValidationError;

/// Number of characters in a VIN
pub const VIN_LENGTH: usize = 17;

/// Letters never used in a VIN
pub const FORBIDDEN_CHARACTERS: [char; 3] = ['I', 'O', 'Q'];

/// Run every structural check, returning the trimmed VIN when it passes
pub(super) fn check_vin(vin: &str) -> Result<&str, VinValidationError> {
    if vin.is_empty() {
        return Err(VinValidationError::Empty);
    }

    let vin = vin.trim();

    let length = vin.chars().count();
    if length != VIN_LENGTH {
        return Err(VinValidationError::InvalidLength(length));
    }

    if !vin.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(VinValidationError::NonAlphanumeric);
    }

    if let Some(c) = vin.chars().find(|c| FORBIDDEN_CHARACTERS.contains(c)) {
        return Err(VinValidationError::ForbiddenCharacter(c));
    }

    if vin.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(VinValidationError::NotUppercase);
    }

    Ok(vin)
}
