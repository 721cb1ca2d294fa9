use thiserror::Error;

/// Failure of a lookup against the format table.
///
/// Always recoverable: the caller decides whether an unknown country is a hard
/// input error or a reason to skip validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid country code: \"{0}\"")]
    UnknownCountry(String),
}

/// A format in the table could not be turned into a matcher.
///
/// This is a data defect and is reported when a `Validator` is built, never
/// while matching.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("format {format:?} for country {country} does not compile")]
    InvalidFormat {
        country: String,
        format: String,
        #[source]
        source: regex::Error,
    },
}
