#![no_main]

use libfuzzer_sys::fuzz_target;
use mobilityid::evse::{EvseId, EvseScheme};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for scheme in EvseScheme::ALL {
            if let Ok(id) = EvseId::parse(scheme, s) {
                let again = EvseId::parse(scheme, &id.to_string()).unwrap();
                assert_eq!(again, id);
            }
        }
    }
});
