#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic: every input maps to an outcome.
        let _ = sekit::checksum::validate_swedish_personal_number(s);
        let _ = sekit::checksum::validate_swedish_vat(s);
    }
});
