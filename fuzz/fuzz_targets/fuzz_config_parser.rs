//! Fuzz target for `postcode.toml` parsing and resolution.
//!
//! Goal: parsing and resolving **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use postcode_domain::Validator;
use postcode_settings::Overrides;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(resolved) = postcode_settings::load_config(text, Overrides::default()) {
            let _ = Validator::new(resolved.table);
        }
    }
});
