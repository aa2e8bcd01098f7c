#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = sekit::checksum::validate_finnish_personal_number(s);
        let _ = sekit::checksum::validate_finnish_organisation_number(s);
        let _ = sekit::checksum::validate_finnish_vat(s);
    }
});
