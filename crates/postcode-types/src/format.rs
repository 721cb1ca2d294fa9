use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One accepted shape of a country's postal code.
///
/// A format is a sequence of literal characters and placeholders:
/// - `#` matches exactly one digit (`0-9`)
/// - `@` matches exactly one letter (`a-z`, `A-Z`)
/// - `*` matches exactly one letter or digit
///
/// Every other character (spaces and hyphens included) is a literal that must
/// appear verbatim at that position. A format always describes the whole code.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct FormatSpec(String);

impl FormatSpec {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters a strictly matching code has.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Placeholders in the order they appear, literals skipped.
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.0.chars().filter_map(Placeholder::from_symbol)
    }

    /// True when the format has no placeholder, i.e. accepts exactly one code.
    pub fn is_fixed(&self) -> bool {
        self.placeholders().next().is_none()
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FormatSpec {
    fn from(value: &str) -> Self {
        FormatSpec::new(value)
    }
}

impl From<String> for FormatSpec {
    fn from(value: String) -> Self {
        FormatSpec(value)
    }
}

impl PartialEq<&str> for FormatSpec {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Placeholder symbols understood inside a [`FormatSpec`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Placeholder {
    /// `#`
    Digit,
    /// `@`
    Alpha,
    /// `*`
    Alnum,
}

impl Placeholder {
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '#' => Some(Placeholder::Digit),
            '@' => Some(Placeholder::Alpha),
            '*' => Some(Placeholder::Alnum),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Placeholder::Digit => '#',
            Placeholder::Alpha => '@',
            Placeholder::Alnum => '*',
        }
    }

    /// Whether `c` satisfies this placeholder. ASCII only.
    pub fn accepts(self, c: char) -> bool {
        match self {
            Placeholder::Digit => c.is_ascii_digit(),
            Placeholder::Alpha => c.is_ascii_alphabetic(),
            Placeholder::Alnum => c.is_ascii_alphanumeric(),
        }
    }
}
