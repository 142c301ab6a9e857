#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let d = mobilityid::din_check_digit(s);
        assert!(d.is_ascii_digit() || d == 'X');

        // Errors are fine, panics are bugs.
        let _ = mobilityid::iso_check_digit(s);
    }
});
