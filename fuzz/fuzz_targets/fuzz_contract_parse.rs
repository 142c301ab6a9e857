#![no_main]

use libfuzzer_sys::fuzz_target;
use mobilityid::contract::{ContractId, ContractScheme};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for scheme in ContractScheme::ALL {
            // Must not panic; anything accepted must round-trip.
            if let Ok(id) = ContractId::parse(scheme, s) {
                let again = ContractId::parse(scheme, &id.to_string()).unwrap();
                assert_eq!(again, id);
            }
        }
    }
});
