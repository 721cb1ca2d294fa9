//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - countries without formats accepting every string
//! - unknown countries failing lookups without panicking
//! - agreement between `is_valid` and the stored format list
//! - separator handling in space-tolerant mode

use crate::pattern::{self, MatchOptions};
use crate::table::FormatTable;
use crate::validator::Validator;
use crate::ValidationError;
use postcode_types::{FormatSpec, Placeholder};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn validator() -> Validator {
    Validator::builtin().expect("built-in table compiles")
}

/// Country codes that have formats in the built-in table.
fn arb_country_with_formats() -> impl Strategy<Value = String> {
    let countries: Vec<String> = FormatTable::builtin()
        .iter()
        .filter(|(_, formats)| !formats.is_empty())
        .map(|(c, _)| c.to_string())
        .collect();
    prop::sample::select(countries)
}

/// Country codes without an enforced format.
fn arb_country_without_formats() -> impl Strategy<Value = String> {
    let countries: Vec<String> = FormatTable::builtin()
        .iter()
        .filter(|(_, formats)| formats.is_empty())
        .map(|(c, _)| c.to_string())
        .collect();
    prop::sample::select(countries)
}

/// Any built-in format paired with its country.
fn arb_builtin_format() -> impl Strategy<Value = (String, FormatSpec)> {
    let pairs: Vec<(String, FormatSpec)> = FormatTable::builtin()
        .iter()
        .flat_map(|(c, formats)| formats.iter().map(move |f| (c.to_string(), f.clone())))
        .collect();
    prop::sample::select(pairs)
}

/// Strategy for short format strings built from placeholders and separators.
fn arb_format() -> impl Strategy<Value = FormatSpec> {
    prop::collection::vec(
        prop_oneof![
            Just('#'),
            Just('@'),
            Just('*'),
            Just(' '),
            Just('-'),
            Just('.'),
            prop::char::range('A', 'Z'),
        ],
        0..10,
    )
    .prop_map(|chars| FormatSpec::new(chars.into_iter().collect::<String>()))
}

fn arb_char_for(placeholder: Placeholder) -> BoxedStrategy<char> {
    match placeholder {
        Placeholder::Digit => prop::char::range('0', '9').boxed(),
        Placeholder::Alpha => prop_oneof![
            prop::char::range('a', 'z'),
            prop::char::range('A', 'Z')
        ]
        .boxed(),
        Placeholder::Alnum => prop_oneof![
            prop::char::range('a', 'z'),
            prop::char::range('A', 'Z'),
            prop::char::range('0', '9')
        ]
        .boxed(),
    }
}

/// A format together with one code that satisfies it.
fn arb_format_with_code() -> impl Strategy<Value = (FormatSpec, String)> {
    arb_format().prop_flat_map(|format| {
        let parts: Vec<BoxedStrategy<char>> = format
            .as_str()
            .chars()
            .map(|c| match Placeholder::from_symbol(c) {
                Some(p) => arb_char_for(p),
                None => Just(c).boxed(),
            })
            .collect();
        (Just(format), parts).prop_map(|(format, chars)| (format, chars.into_iter().collect()))
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn countries_without_formats_accept_any_string(
        country in arb_country_without_formats(),
        code in ".*",
        ignore_spaces in any::<bool>(),
    ) {
        let v = validator();
        let options = MatchOptions { ignore_spaces };
        prop_assert_eq!(v.is_valid_with(&country, &code, options), Ok(true));
    }

    #[test]
    fn unknown_countries_fail_lookups(country in "\\PC{0,6}", code in ".*") {
        let v = validator();
        prop_assume!(!v.table().contains(&country));

        prop_assert!(!v.has_country(&country));
        prop_assert_eq!(
            v.is_valid(&country, &code),
            Err(ValidationError::UnknownCountry(country.clone()))
        );
        prop_assert!(v.formats(&country).is_err());
    }

    #[test]
    fn is_valid_agrees_with_stored_formats(
        country in arb_country_with_formats(),
        code in "[A-Za-z0-9 -]{0,10}",
        ignore_spaces in any::<bool>(),
    ) {
        let v = validator();
        let options = MatchOptions { ignore_spaces };
        let expected = v
            .formats(&country)
            .unwrap()
            .iter()
            .any(|f| pattern::compile(f, options).unwrap().is_match(&code));
        prop_assert_eq!(v.is_valid_with(&country, &code, options), Ok(expected));
    }

    #[test]
    fn generated_codes_match_their_format((format, code) in arb_format_with_code()) {
        let strict = pattern::compile(&format, MatchOptions::strict()).unwrap();
        prop_assert!(strict.is_match(&code), "{} should match {:?}", format, code);

        // Dropping every separator space is accepted only in space-tolerant mode.
        let squeezed: String = code.chars().filter(|c| *c != ' ').collect();
        let lenient = pattern::compile(&format, MatchOptions::ignoring_spaces()).unwrap();
        prop_assert!(lenient.is_match(&squeezed));
        if format.as_str().contains(' ') {
            prop_assert!(!strict.is_match(&squeezed));
        }
    }

    #[test]
    fn wrong_length_never_matches(
        (country, format) in arb_builtin_format(),
        extra in "[0-9]{1,3}",
    ) {
        let v = validator();
        let too_long: String = format
            .as_str()
            .chars()
            .map(|c| if Placeholder::from_symbol(c).is_some() { '0' } else { c })
            .chain(extra.chars())
            .collect();
        let matched = v.matching_format(&country, &too_long, MatchOptions::strict()).unwrap();
        // A longer sibling format may still accept it; this one must not.
        prop_assert_ne!(matched, Some(&format));
    }

    #[test]
    fn has_country_never_panics(country in "\\PC*") {
        let v = validator();
        let _ = v.has_country(&country);
    }
}
