//! `CountriesApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::types::RestCountry;

/// REST Countries API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(CountriesApi: Send)]
pub trait LocalCountriesApi {
    /// Fetches every country, restricted to the given response fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn all_countries(&self, fields: &[&str]) -> Result<Vec<RestCountry>>;

    /// Looks up a country by its exact common or official name.
    ///
    /// Returns `None` when no country has that name.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn country_by_name(&self, name: &str) -> Result<Option<RestCountry>>;
}
