//! Catalog logic for worldcast.
//!
//! Turns REST Countries and TMDB responses into in-memory country and
//! celebrity records, maps free-text birthplaces onto countries, and
//! applies the region → country → search filter pipeline.

/// Celebrity records assembled from TMDB listings.
pub mod celebrity;
/// Country records and country views.
pub mod country;
/// Paged "load more" accumulation of celebrities.
pub mod feed;
/// Region, country, and free-text filtering.
pub mod filter;
/// Birthplace to country matching.
pub mod matcher;
/// Single-celebrity profile view.
pub mod profile;

#[cfg(test)]
mod test_support;

pub use celebrity::Celebrity;
pub use country::{Country, CountryDetails, CountrySummary, CurrencyInfo};
pub use feed::CelebrityFeed;
pub use filter::{FilterState, Selection, filter_celebrities, filter_countries};
pub use matcher::find_country_for_birthplace;
pub use profile::{CelebrityProfile, Gender, TitleCredit};
