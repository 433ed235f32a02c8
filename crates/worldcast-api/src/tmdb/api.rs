//! `TmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::types::{
    SearchPersonParams, TmdbCombinedCredits, TmdbPersonDetails, TmdbPopularPeopleResponse,
    TmdbSearchPersonResponse,
};

/// TMDB API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbApi: Send)]
pub trait LocalTmdbApi {
    /// Fetches one page of the popular people listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn popular_people(&self, page: u32, language: &str)
    -> Result<TmdbPopularPeopleResponse>;

    /// Fetches full details for a person, including place of birth.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn person_details(&self, person_id: u64, language: &str) -> Result<TmdbPersonDetails>;

    /// Fetches a person's movie and TV credits.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn person_combined_credits(
        &self,
        person_id: u64,
        language: &str,
    ) -> Result<TmdbCombinedCredits>;

    /// Searches for people by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_person(&self, params: &SearchPersonParams) -> Result<TmdbSearchPersonResponse>;
}
