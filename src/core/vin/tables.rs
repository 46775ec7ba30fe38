//! Static lookup tables for VIN decoding

/// Rendered in place of a manufacturer the WMI table does not know
pub const UNKNOWN_MANUFACTURER: &str = "Unknown Manufacturer";

/// Rendered in place of an unmapped model year code
pub const UNKNOWN_MODEL_YEAR: &str = "Unknown";

/// World Manufacturer Identifier → manufacturer name
const WMI_TABLE: &[(&str, &str)] = &[
    ("1HG", "Honda (USA)"),
    ("1FA", "Ford (USA)"),
    ("1G1", "Chevrolet (USA)"),
    ("JHM", "Honda (Japan)"),
    ("WDB", "Mercedes-Benz (Germany)"),
];

/// Look up the manufacturer for a three character WMI
pub fn manufacturer_for(wmi: &str) -> Option<&'static str> {
    WMI_TABLE
        .iter()
        .find(|(code, _)| *code == wmi)
        .map(|(_, name)| *name)
}

/// Look up the model year for the tenth VIN character
///
/// Only the 2001-2025 cycle is mapped. `0`, `U`, `Z` and every other code
/// are unknown; codes are not reused for earlier or later cycles.
pub fn model_year_for(code: char) -> Option<u16> {
    let year = match code {
        '1'..='9' => 2000 + code.to_digit(10)? as u16,
        'A' => 2010,
        'B' => 2011,
        'C' => 2012,
        'D' => 2013,
        'E' => 2014,
        'F' => 2015,
        'G' => 2016,
        'H' => 2017,
        'J' => 2018,
        'K' => 2019,
        'L' => 2020,
        'M' => 2021,
        'N' => 2022,
        'P' => 2023,
        'R' => 2024,
        'S' => 2025,
        _ => return None,
    };
    Some(year)
}
