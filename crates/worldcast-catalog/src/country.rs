//! Country records and country views.

use anyhow::{Context, Result};
use tracing::instrument;
use worldcast_api::countries::{LocalCountriesApi, RestCountry};

use crate::matcher::match_key;

/// Region label used when the API reports none.
pub const UNKNOWN_REGION: &str = "Unknown";

/// Label shown for countries without a capital.
pub const NO_CAPITAL: &str = "N/A";

/// Fields requested for birthplace matching and filter dropdowns.
pub const MATCH_FIELDS: &[&str] = &["name", "region", "altSpellings"];

/// Fields requested for the country list view.
pub const SUMMARY_FIELDS: &[&str] = &["flags", "flag", "name", "capital", "cca3", "region"];

/// A country as used by the birthplace matcher and the filters.
///
/// The `*_lower` fields and `alt_spellings` hold normalized match keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    /// Common name (e.g., "United Kingdom").
    pub name: String,
    /// Official name.
    pub official_name: String,
    /// Normalized common name.
    pub name_lower: String,
    /// Normalized official name.
    pub official_name_lower: String,
    /// Normalized alternate spellings.
    pub alt_spellings: Vec<String>,
    /// Region label, [`UNKNOWN_REGION`] when missing.
    pub region: String,
}

impl Country {
    /// Creates a country record, deriving the match keys.
    pub fn new<S: AsRef<str>>(
        name: impl Into<String>,
        official_name: impl Into<String>,
        alt_spellings: impl IntoIterator<Item = S>,
        region: Option<&str>,
    ) -> Self {
        let name = name.into();
        let official_name = official_name.into();
        Self {
            name_lower: match_key(&name),
            official_name_lower: match_key(&official_name),
            alt_spellings: alt_spellings
                .into_iter()
                .map(|s| match_key(s.as_ref()))
                .collect(),
            region: region_label(region),
            name,
            official_name,
        }
    }

    /// Returns true if a normalized place fragment names this country.
    pub(crate) fn is_named(&self, part: &str) -> bool {
        part == self.name_lower
            || part == self.official_name_lower
            || self.alt_spellings.iter().any(|spelling| spelling == part)
    }
}

/// Trims a region name, falling back to [`UNKNOWN_REGION`].
fn region_label(region: Option<&str>) -> String {
    String::from(
        region
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(UNKNOWN_REGION),
    )
}

impl From<RestCountry> for Country {
    fn from(country: RestCountry) -> Self {
        Self::new(
            country.name.common,
            country.name.official,
            country.alt_spellings,
            country.region.as_deref(),
        )
    }
}

/// A country card in the country list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySummary {
    /// Common name.
    pub name: String,
    /// Capital cities, `["N/A"]` when there are none.
    pub capitals: Vec<String>,
    /// PNG flag URL.
    pub flag_png: Option<String>,
    /// Flag emoji.
    pub flag_emoji: Option<String>,
    /// ISO 3166-1 alpha-3 code.
    pub cca3: Option<String>,
    /// Region label, [`UNKNOWN_REGION`] when missing.
    pub region: String,
}

impl CountrySummary {
    /// Returns the capitals joined for display.
    #[must_use]
    pub fn capitals_label(&self) -> String {
        self.capitals.join(", ")
    }
}

impl From<RestCountry> for CountrySummary {
    fn from(country: RestCountry) -> Self {
        Self {
            name: country.name.common,
            capitals: capitals_or_placeholder(country.capital),
            flag_png: country.flags.and_then(|f| f.png),
            flag_emoji: country.flag,
            cca3: country.cca3,
            region: region_label(country.region.as_deref()),
        }
    }
}

/// A currency used by a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyInfo {
    /// ISO 4217 code.
    pub code: String,
    /// Currency name.
    pub name: String,
    /// Currency symbol.
    pub symbol: String,
}

/// The single-country detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryDetails {
    /// Common name.
    pub name: String,
    /// Official name.
    pub official_name: String,
    /// Capital cities, `["N/A"]` when there are none.
    pub capitals: Vec<String>,
    /// PNG flag URL.
    pub flag_png: Option<String>,
    /// Currencies sorted by code.
    pub currencies: Vec<CurrencyInfo>,
    /// PNG coat of arms URL.
    pub coat_of_arms_png: Option<String>,
}

impl CountryDetails {
    /// Returns the capitals joined for display.
    #[must_use]
    pub fn capitals_label(&self) -> String {
        self.capitals.join(", ")
    }
}

impl From<RestCountry> for CountryDetails {
    fn from(country: RestCountry) -> Self {
        // BTreeMap iteration keeps currencies sorted by code.
        let currencies = country
            .currencies
            .unwrap_or_default()
            .into_iter()
            .map(|(code, currency)| CurrencyInfo {
                code,
                name: currency.name.unwrap_or_default(),
                symbol: currency.symbol.unwrap_or_default(),
            })
            .collect();

        Self {
            name: country.name.common,
            official_name: country.name.official,
            capitals: capitals_or_placeholder(country.capital),
            flag_png: country.flags.and_then(|f| f.png),
            currencies,
            coat_of_arms_png: country
                .coat_of_arms
                .and_then(|c| c.png)
                .filter(|png| !png.is_empty()),
        }
    }
}

fn capitals_or_placeholder(capitals: Option<Vec<String>>) -> Vec<String> {
    match capitals {
        Some(list) if !list.is_empty() => list,
        _ => vec![String::from(NO_CAPITAL)],
    }
}

/// Loads every country as a matcher/filter record, in API order.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
pub async fn load_countries(api: &(impl LocalCountriesApi + Sync)) -> Result<Vec<Country>> {
    let countries = api
        .all_countries(MATCH_FIELDS)
        .await
        .context("failed to load countries")?;
    tracing::debug!(count = countries.len(), "countries loaded");
    Ok(countries.into_iter().map(Country::from).collect())
}

/// Loads the country list view.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
pub async fn load_country_summaries(
    api: &(impl LocalCountriesApi + Sync),
) -> Result<Vec<CountrySummary>> {
    let countries = api
        .all_countries(SUMMARY_FIELDS)
        .await
        .context("failed to load country list")?;
    Ok(countries.into_iter().map(CountrySummary::from).collect())
}

/// Loads the detail view for a country by exact name.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all, fields(name = name))]
pub async fn load_country_details(
    api: &(impl LocalCountriesApi + Sync),
    name: &str,
) -> Result<Option<CountryDetails>> {
    let country = api
        .country_by_name(name)
        .await
        .with_context(|| format!("failed to load country: {name}"))?;
    Ok(country.map(CountryDetails::from))
}
