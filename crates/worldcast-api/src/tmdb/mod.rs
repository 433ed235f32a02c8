//! TMDB API client module.
//!
//! Handles HTTP requests to the TMDB API v3 person endpoints
//! and retrieves popular people, person details, and credits.

mod api;
mod client;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTmdbApi, TmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use types::{
    SearchPersonParams, TmdbCastCredit, TmdbCombinedCredits, TmdbCredential, TmdbPersonDetails,
    TmdbPersonListItem, TmdbPopularPeopleResponse, TmdbSearchPersonResponse,
};
