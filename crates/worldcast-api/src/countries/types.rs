//! REST Countries API response types.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A country entry from the REST Countries v3.1 API.
///
/// Every field except `name` depends on the `fields` filter used in the
/// request, so they are all optional here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestCountry {
    /// Common and official names.
    pub name: RestCountryName,
    /// ISO 3166-1 alpha-3 code.
    #[serde(default)]
    pub cca3: Option<String>,
    /// Region label (e.g., "Europe", "Americas").
    #[serde(default)]
    pub region: Option<String>,
    /// Alternate spellings, abbreviations and native names.
    #[serde(default)]
    pub alt_spellings: Vec<String>,
    /// Capital cities (absent for some territories).
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    /// Flag images.
    #[serde(default)]
    pub flags: Option<RestFlags>,
    /// Flag emoji.
    #[serde(default)]
    pub flag: Option<String>,
    /// Currencies keyed by ISO 4217 code.
    #[serde(default)]
    pub currencies: Option<BTreeMap<String, RestCurrency>>,
    /// Coat of arms images.
    #[serde(default)]
    pub coat_of_arms: Option<RestCoatOfArms>,
}

/// Name block of a country.
#[derive(Debug, Clone, Deserialize)]
pub struct RestCountryName {
    /// Common name (e.g., "France").
    pub common: String,
    /// Official name (e.g., "French Republic").
    pub official: String,
}

/// Flag image URLs.
#[derive(Debug, Clone, Deserialize)]
pub struct RestFlags {
    /// PNG flag URL.
    #[serde(default)]
    pub png: Option<String>,
    /// SVG flag URL.
    #[serde(default)]
    pub svg: Option<String>,
    /// Textual description of the flag.
    #[serde(default)]
    pub alt: Option<String>,
}

/// A currency entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RestCurrency {
    /// Currency name (e.g., "Euro").
    #[serde(default)]
    pub name: Option<String>,
    /// Currency symbol (e.g., "€").
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Coat of arms image URLs (both empty for some countries).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestCoatOfArms {
    /// PNG image URL.
    #[serde(default)]
    pub png: Option<String>,
    /// SVG image URL.
    #[serde(default)]
    pub svg: Option<String>,
}

/// REST Countries error body (e.g., `{"status":404,"message":"Not Found"}`).
#[derive(Debug, Clone, Deserialize)]
pub struct RestErrorResponse {
    /// HTTP status echoed in the body.
    pub status: u16,
    /// Error message.
    pub message: String,
}
