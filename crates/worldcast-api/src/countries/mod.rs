//! REST Countries API client module.
//!
//! Handles HTTP requests to the REST Countries v3.1 endpoints
//! and retrieves country names, regions, capitals, and currencies.

mod api;
mod client;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{CountriesApi, LocalCountriesApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{CountriesClient, CountriesClientBuilder};
pub use types::{RestCoatOfArms, RestCountry, RestCountryName, RestCurrency, RestFlags};
