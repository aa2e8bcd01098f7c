#![no_main]

use libfuzzer_sys::fuzz_target;
use sekit::checksum::{luhn_append, luhn_is_valid};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(full) = luhn_append(s) {
            assert!(luhn_is_valid(&full), "appended number {full} must validate");
        }
    }
});
