//! EU and EEA membership tables.
//!
//! Static sorted lists of ISO 3166-1 alpha-2 codes; `GR` is listed as
//! Greece's VAT prefix `EL` as well.

/// Check whether `code` is an EU member state (ISO code or VAT prefix).
pub fn is_eu_member(code: &str) -> bool {
    EU_COUNTRY_CODES.binary_search(&code).is_ok()
}

/// Check whether `code` belongs to the European Economic Area
/// (EU plus Iceland, Liechtenstein and Norway).
pub fn is_eea_member(code: &str) -> bool {
    is_eu_member(code) || EEA_COUNTRY_CODES.binary_search(&code).is_ok()
}

/// EU member states, sorted for binary search.
pub static EU_COUNTRY_CODES: &[&str] = &[
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "EL", "ES", "FI", "FR", "GR", "HR", "HU", "IE",
    "IT", "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK",
];

/// EEA members outside the EU, sorted for binary search.
pub static EEA_COUNTRY_CODES: &[&str] = &["IS", "LI", "NO"];
