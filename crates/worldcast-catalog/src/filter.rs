//! Region, country, and free-text filtering.
//!
//! Celebrity filters compose in a fixed order: region, then country, then the
//! search text. Region and country are decided by the country a
//! celebrity's birthplace matches; a celebrity without a match only
//! survives when both selections are `All`.

use std::collections::BTreeSet;
use std::fmt;

use anyhow::{Result, bail};

use crate::celebrity::Celebrity;
use crate::country::{Country, CountrySummary};
use crate::matcher::find_country_for_birthplace;

/// Label of the "no restriction" dropdown entry.
pub const ALL: &str = "All";

/// A dropdown selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// No restriction.
    #[default]
    All,
    /// Restrict to one region or country.
    Only(String),
}

impl Selection {
    /// Parses a dropdown label; `"All"` means no restriction.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        if label == ALL {
            Self::All
        } else {
            Self::Only(String::from(label))
        }
    }

    /// Returns the selected value, `None` for `All`.
    #[must_use]
    pub fn as_only(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_only().unwrap_or(ALL))
    }
}

impl From<Option<String>> for Selection {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::All, |v| Self::parse(&v))
    }
}

/// Region dropdown options: `"All"` followed by the distinct regions, sorted.
#[must_use]
pub fn region_options(countries: &[Country]) -> Vec<String> {
    let regions: BTreeSet<&str> = countries.iter().map(|c| c.region.as_str()).collect();
    std::iter::once(ALL)
        .chain(regions)
        .map(String::from)
        .collect()
}

/// Country dropdown options for a region, sorted by common name.
///
/// The `"All"` entry is not included.
#[must_use]
pub fn country_options(countries: &[Country], region: &Selection) -> Vec<String> {
    let mut names: Vec<String> = countries
        .iter()
        .filter(|c| region.as_only().is_none_or(|r| c.region == r))
        .map(|c| c.name.clone())
        .collect();
    names.sort();
    names
}

/// Current filter selections plus the derived country dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    region: Selection,
    country: Selection,
    search: String,
    country_options: Vec<String>,
}

impl FilterState {
    /// Creates an unfiltered state for the given country set.
    #[must_use]
    pub fn new(countries: &[Country]) -> Self {
        Self {
            country_options: country_options(countries, &Selection::All),
            ..Self::default()
        }
    }

    /// Returns the selected region.
    #[must_use]
    pub const fn region(&self) -> &Selection {
        &self.region
    }

    /// Returns the selected country.
    #[must_use]
    pub const fn country(&self) -> &Selection {
        &self.country
    }

    /// Returns the search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the country dropdown options for the selected region.
    #[must_use]
    pub fn country_options(&self) -> &[String] {
        &self.country_options
    }

    /// Re-derives the country options after the country set changed.
    ///
    /// The country selection is reset to `All`.
    pub fn refresh(&mut self, countries: &[Country]) {
        self.country_options = country_options(countries, &self.region);
        self.country = Selection::All;
    }

    /// Selects a region, re-deriving the country options and resetting
    /// the country selection to `All`.
    ///
    /// # Errors
    ///
    /// Returns an error if no loaded country is in the region.
    pub fn select_region(&mut self, region: Selection, countries: &[Country]) -> Result<()> {
        if let Some(name) = region.as_only()
            && !countries.iter().any(|c| c.region == name)
        {
            bail!("unknown region: {name}");
        }
        self.region = region;
        self.refresh(countries);
        Ok(())
    }

    /// Selects a country.
    ///
    /// # Errors
    ///
    /// Returns an error if the country is not among the current options.
    pub fn select_country(&mut self, country: Selection) -> Result<()> {
        if let Some(name) = country.as_only()
            && !self.country_options.iter().any(|c| c == name)
        {
            bail!("country {name} is not available for region {}", self.region);
        }
        self.country = country;
        Ok(())
    }

    /// Sets the free-text search.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Returns the list heading for the current selections.
    #[must_use]
    pub fn headline(&self) -> String {
        match (&self.region, &self.country) {
            (Selection::All, Selection::All) => String::from("All Celebrities"),
            (_, Selection::Only(country)) => format!("Celebrities from {country}"),
            (Selection::Only(region), Selection::All) => format!("Celebrities in {region}"),
        }
    }

    /// Returns true if the celebrity passes every active filter.
    #[must_use]
    pub fn matches(&self, celebrity: &Celebrity, countries: &[Country]) -> bool {
        if self.region != Selection::All || self.country != Selection::All {
            let found = find_country_for_birthplace(&celebrity.birthplace, countries);

            if let Some(region) = self.region.as_only()
                && found.is_none_or(|c| c.region != region)
            {
                return false;
            }
            if let Some(country) = self.country.as_only()
                && found.is_none_or(|c| c.name != country)
            {
                return false;
            }
        }

        celebrity
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }
}

/// Applies the filter pipeline, keeping the accumulated order.
#[must_use]
pub fn filter_celebrities<'a>(
    celebrities: &'a [Celebrity],
    countries: &[Country],
    state: &FilterState,
) -> Vec<&'a Celebrity> {
    celebrities
        .iter()
        .filter(|celeb| state.matches(celeb, countries))
        .collect()
}

/// Filters the country list view by region, then by a case-insensitive
/// name substring. API order is kept.
///
/// # Errors
///
/// Returns an error if no country is in the selected region.
pub fn filter_countries<'a>(
    countries: &'a [CountrySummary],
    region: &Selection,
    search: &str,
) -> Result<Vec<&'a CountrySummary>> {
    if let Some(name) = region.as_only()
        && !countries.iter().any(|c| c.region == name)
    {
        bail!("unknown region: {name}");
    }
    let search = search.to_lowercase();
    Ok(countries
        .iter()
        .filter(|c| region.as_only().is_none_or(|r| c.region == r))
        .filter(|c| c.name.to_lowercase().contains(&search))
        .collect())
}
