#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Unsupported countries are errors, never panics.
        let _ = sekit::checksum::validate_vat_number(s);
    }
});
