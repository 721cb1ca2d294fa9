use crate::data::BUILTIN_FORMATS;
use postcode_types::FormatSpec;
use std::collections::BTreeMap;

/// Country code -> accepted formats.
///
/// A country mapped to an empty list has no enforced format. A country that is
/// not a key at all is unknown, which is a different answer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatTable {
    countries: BTreeMap<String, Vec<FormatSpec>>,
}

impl FormatTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The table shipped with this crate.
    pub fn builtin() -> Self {
        BUILTIN_FORMATS
            .iter()
            .map(|(country, formats)| {
                (
                    country.to_string(),
                    formats.iter().map(|f| FormatSpec::new(*f)).collect(),
                )
            })
            .collect()
    }

    /// Add a country or replace its formats. Returns the previous formats.
    pub fn insert<S, I, F>(&mut self, country: S, formats: I) -> Option<Vec<FormatSpec>>
    where
        S: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<FormatSpec>,
    {
        self.countries.insert(
            country.into(),
            formats.into_iter().map(Into::into).collect(),
        )
    }

    pub fn remove(&mut self, country: &str) -> Option<Vec<FormatSpec>> {
        self.countries.remove(country)
    }

    pub fn get(&self, country: &str) -> Option<&[FormatSpec]> {
        self.countries.get(country).map(Vec::as_slice)
    }

    pub fn contains(&self, country: &str) -> bool {
        self.countries.contains_key(country)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Countries in sorted order with their formats.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FormatSpec])> {
        self.countries
            .iter()
            .map(|(country, formats)| (country.as_str(), formats.as_slice()))
    }
}

impl FromIterator<(String, Vec<FormatSpec>)> for FormatTable {
    fn from_iter<T: IntoIterator<Item = (String, Vec<FormatSpec>)>>(iter: T) -> Self {
        Self {
            countries: iter.into_iter().collect(),
        }
    }
}
