//! Fuzz target for format compilation and matching.
//!
//! Goal: short formats always compile, and matching **never panics**.
//! A matched candidate has exactly as many characters as the format, minus any
//! separator spaces it was allowed to omit.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_pattern_match
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use postcode_domain::{MatchOptions, pattern};
use postcode_types::FormatSpec;

#[derive(Arbitrary, Debug)]
struct Input {
    format: String,
    candidate: String,
    ignore_spaces: bool,
}

fuzz_target!(|input: Input| {
    let format = FormatSpec::new(input.format);
    let options = MatchOptions {
        ignore_spaces: input.ignore_spaces,
    };

    let Ok(compiled) = pattern::compile(&format, options) else {
        // Only the regex size limit can reject a format.
        assert!(format.len() > 64, "short format failed to compile: {format:?}");
        return;
    };

    if compiled.is_match(&input.candidate) {
        let len = input.candidate.chars().count();
        let spaces = format.as_str().chars().filter(|c| *c == ' ').count();
        if options.ignore_spaces {
            assert!(len <= format.len() && len + spaces >= format.len());
        } else {
            assert_eq!(len, format.len());
        }
    }
});
