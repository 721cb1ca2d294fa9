use crate::error::{TableError, ValidationError};
use crate::pattern::{self, MatchOptions, Pattern};
use crate::table::FormatTable;
use postcode_types::FormatSpec;
use std::collections::BTreeMap;

/// Matchers for one format, in both spacing modes.
#[derive(Clone, Debug)]
struct CompiledFormat {
    strict: Pattern,
    lenient: Pattern,
}

impl CompiledFormat {
    fn pattern(&self, options: MatchOptions) -> &Pattern {
        if options.ignore_spaces {
            &self.lenient
        } else {
            &self.strict
        }
    }
}

/// Postal code validator over an immutable format table.
///
/// Every format is compiled once when the validator is built; lookups only read
/// shared state, so a `Validator` can be used from many threads at once.
#[derive(Clone, Debug)]
pub struct Validator {
    table: FormatTable,
    compiled: BTreeMap<String, Vec<CompiledFormat>>,
}

impl Validator {
    pub fn new(table: FormatTable) -> Result<Self, TableError> {
        let mut compiled = BTreeMap::new();
        for (country, formats) in table.iter() {
            let patterns = formats
                .iter()
                .map(|format| compile_both(country, format))
                .collect::<Result<Vec<_>, _>>()?;
            compiled.insert(country.to_string(), patterns);
        }
        tracing::debug!(countries = table.len(), "format table compiled");
        Ok(Self { table, compiled })
    }

    /// Validator over the shipped table.
    pub fn builtin() -> Result<Self, TableError> {
        Self::new(FormatTable::builtin())
    }

    /// Strict check: separator spaces in the format are required.
    pub fn is_valid(&self, country: &str, postal_code: &str) -> Result<bool, ValidationError> {
        self.is_valid_with(country, postal_code, MatchOptions::strict())
    }

    /// Whether `postal_code` matches any accepted format for `country`.
    ///
    /// Countries without an enforced format accept every string.
    pub fn is_valid_with(
        &self,
        country: &str,
        postal_code: &str,
        options: MatchOptions,
    ) -> Result<bool, ValidationError> {
        let patterns = self.patterns(country)?;
        if patterns.is_empty() {
            return Ok(true);
        }
        Ok(first_match(patterns, postal_code, options).is_some())
    }

    /// The format that accepted `postal_code`, if any.
    ///
    /// `None` both for a code that matches nothing and for a country without
    /// formats; use [`Validator::is_valid_with`] to tell the two apart.
    pub fn matching_format(
        &self,
        country: &str,
        postal_code: &str,
        options: MatchOptions,
    ) -> Result<Option<&FormatSpec>, ValidationError> {
        let patterns = self.patterns(country)?;
        Ok(first_match(patterns, postal_code, options).map(|c| c.strict.format()))
    }

    /// Stored formats for `country`, in table order.
    pub fn formats(&self, country: &str) -> Result<&[FormatSpec], ValidationError> {
        self.table.get(country).ok_or_else(|| unknown(country))
    }

    pub fn has_country(&self, country: &str) -> bool {
        self.table.contains(country)
    }

    /// Known country codes in sorted order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.table.iter().map(|(country, _)| country)
    }

    pub fn table(&self) -> &FormatTable {
        &self.table
    }

    fn patterns(&self, country: &str) -> Result<&[CompiledFormat], ValidationError> {
        self.compiled
            .get(country)
            .map(Vec::as_slice)
            .ok_or_else(|| unknown(country))
    }
}

fn compile_both(country: &str, format: &FormatSpec) -> Result<CompiledFormat, TableError> {
    let wrap = |source| TableError::InvalidFormat {
        country: country.to_string(),
        format: format.to_string(),
        source,
    };
    Ok(CompiledFormat {
        strict: pattern::compile(format, MatchOptions::strict()).map_err(wrap)?,
        lenient: pattern::compile(format, MatchOptions::ignoring_spaces()).map_err(wrap)?,
    })
}

fn first_match<'a>(
    patterns: &'a [CompiledFormat],
    postal_code: &str,
    options: MatchOptions,
) -> Option<&'a CompiledFormat> {
    let found = patterns.iter().find(|c| {
        let p = c.pattern(options);
        let hit = p.is_match(postal_code);
        tracing::trace!(format = %p.format(), hit, "format tried");
        hit
    });
    if found.is_none() && !patterns.is_empty() {
        tracing::debug!(postal_code, "no format matched");
    }
    found
}

fn unknown(country: &str) -> ValidationError {
    tracing::debug!(country, "unknown country code");
    ValidationError::UnknownCountry(country.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> Validator {
        Validator::builtin().expect("built-in table compiles")
    }

    fn assert_codes(v: &Validator, country: &str, valid: &[&str], invalid: &[&str]) {
        for code in valid {
            assert!(
                v.is_valid(country, code).unwrap(),
                "{country} {code:?} should be valid"
            );
        }
        for code in invalid {
            assert!(
                !v.is_valid(country, code).unwrap(),
                "{country} {code:?} should be invalid"
            );
        }
    }

    #[test]
    fn known_postal_codes() {
        let v = builtin();
        assert_codes(&v, "BE", &["3007"], &[]);
        assert_codes(&v, "CH", &["3007"], &[]);
        assert_codes(&v, "CZ", &["602 00"], &["60200"]);
        assert_codes(&v, "DE", &["50672"], &[]);
        assert_codes(&v, "EE", &["10123"], &[]);
        assert_codes(&v, "FI", &["00160"], &[]);
        assert_codes(&v, "GB", &["TN1 2GE", "BD16 3QA"], &[]);
        assert_codes(&v, "IE", &["T12 Y03W", "D6W XK06"], &["BT7 90HR"]);
        assert_codes(&v, "IT", &["00146"], &[]);
        assert_codes(&v, "JP", &["155-0031"], &["1550031"]);
        assert_codes(&v, "NL", &["1234AB", "1234 AB"], &["1234", "1234  AB"]);
        assert_codes(&v, "PT", &["2765-073"], &[]);
        assert_codes(&v, "RU", &["624800"], &[]);
        assert_codes(&v, "SE", &["113 37"], &[]);
        assert_codes(&v, "US", &["81301", "81301-1234"], &["8130"]);
    }

    #[test]
    fn ignore_spaces_relaxes_separators_only() {
        let v = builtin();
        let lenient = MatchOptions::ignoring_spaces();
        assert!(v.is_valid("CZ", "602 00").unwrap());
        assert!(!v.is_valid("CZ", "60200").unwrap());
        assert!(v.is_valid_with("CZ", "60200", lenient).unwrap());
        assert!(!v.is_valid_with("CZ", "6020 0", lenient).unwrap());
        assert!(v.is_valid_with("GB", "TN12GE", lenient).unwrap());
        assert!(!v.is_valid_with("JP", "1550031", lenient).unwrap());
    }

    #[test]
    fn literal_letters_in_formats_are_case_sensitive() {
        let v = builtin();
        assert!(v.is_valid("KY", "KY3-1234").unwrap());
        assert!(!v.is_valid("KY", "ky3-1234").unwrap());
        assert!(v.is_valid("BN", "AB1234").unwrap());
        assert!(v.is_valid("BN", "ab1234").unwrap());
    }

    #[test]
    fn countries_without_formats_accept_anything() {
        let v = builtin();
        assert_eq!(v.formats("AE").unwrap(), &[] as &[FormatSpec]);
        for code in ["", " ", "anything at all", "12345"] {
            assert!(v.is_valid("AE", code).unwrap());
            assert!(v.is_valid_with("AE", code, MatchOptions::ignoring_spaces()).unwrap());
        }
        assert_eq!(v.matching_format("AE", "x", MatchOptions::strict()), Ok(None));
    }

    #[test]
    fn unknown_country_is_an_error() {
        let v = builtin();
        let err = ValidationError::UnknownCountry("XX".to_string());
        assert_eq!(v.is_valid("XX", "anything"), Err(err.clone()));
        assert_eq!(v.formats("XX"), Err(err));
        assert!(!v.has_country("XX"));

        // Codes are case-sensitive keys.
        assert!(v.is_valid("ch", "3007").is_err());
        assert!(!v.has_country("ch"));
        assert!(!v.has_country(""));
        assert!(!v.has_country("invalid_postal_code"));
    }

    #[test]
    fn has_country_ignores_empty_format_lists() {
        let v = builtin();
        assert!(v.has_country("TW"));
        assert!(v.has_country("AC"));
        assert!(v.has_country("XK"));
        assert!(v.has_country("KO"));
    }

    #[test]
    fn formats_are_returned_verbatim() {
        let v = builtin();
        let tw: Vec<&str> = v.formats("TW").unwrap().iter().map(|f| f.as_str()).collect();
        assert_eq!(tw, vec!["###", "###-##"]);
    }

    #[test]
    fn matching_format_reports_the_first_hit() {
        let v = builtin();
        let hit = v
            .matching_format("GB", "BD16 3QA", MatchOptions::strict())
            .unwrap();
        assert_eq!(hit.map(FormatSpec::as_str), Some("@@## #@@"));

        let hit = v
            .matching_format("NL", "1234AB", MatchOptions::ignoring_spaces())
            .unwrap();
        assert_eq!(hit.map(FormatSpec::as_str), Some("####@@"));

        assert_eq!(
            v.matching_format("CH", "30071", MatchOptions::strict()),
            Ok(None)
        );
    }

    #[test]
    fn custom_tables_are_injectable() {
        let mut table = FormatTable::empty();
        table.insert("ZZ", ["ZZ-###"]);
        table.insert("YY", Vec::<FormatSpec>::new());
        let v = Validator::new(table).unwrap();

        assert!(v.is_valid("ZZ", "ZZ-123").unwrap());
        assert!(!v.is_valid("ZZ", "zz-123").unwrap());
        assert!(v.is_valid("YY", "").unwrap());
        assert!(!v.has_country("CH"));
        assert_eq!(v.countries().collect::<Vec<_>>(), vec!["YY", "ZZ"]);
    }

    #[test]
    fn every_builtin_format_accepts_its_own_example() {
        // Build the simplest code for each format and make sure the country accepts it.
        let v = builtin();
        for (country, formats) in v.table().iter() {
            for format in formats {
                let example: String = format
                    .as_str()
                    .chars()
                    .map(|c| match c {
                        '#' => '0',
                        '@' | '*' => 'A',
                        other => other,
                    })
                    .collect();
                assert!(
                    v.is_valid(country, &example).unwrap(),
                    "{country}: {format} rejects {example:?}"
                );
            }
        }
    }

    #[test]
    fn validator_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();

        let v = std::sync::Arc::new(builtin());
        let handles: Vec<_> = ["CH", "JP", "NL", "GB"]
            .into_iter()
            .map(|country| {
                let v = std::sync::Arc::clone(&v);
                std::thread::spawn(move || v.formats(country).map(|f| f.len()))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().unwrap() > 0);
        }
    }
}
