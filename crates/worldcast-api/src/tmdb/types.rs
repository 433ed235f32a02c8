//! TMDB API response types and request parameters.

use serde::Deserialize;

// --- Popular People / Search Person ---

/// Response from `person/popular` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPopularPeopleResponse {
    /// Current page number.
    pub page: u32,
    /// People on this page.
    pub results: Vec<TmdbPersonListItem>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
}

/// Response from `search/person` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSearchPersonResponse {
    /// Current page number.
    pub page: u32,
    /// Search results, most relevant first.
    pub results: Vec<TmdbPersonListItem>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
}

/// A person entry in a paged listing.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPersonListItem {
    /// TMDB person ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Department the person is best known for (e.g., "Acting").
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Gender code (0 = unset, 1 = female, 2 = male, 3 = non-binary).
    #[serde(default)]
    pub gender: u8,
}

// --- Person Details ---

/// Response from `person/{person_id}` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPersonDetails {
    /// TMDB person ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Other names the person is known under.
    #[serde(default)]
    pub also_known_as: Vec<String>,
    /// Biography text (may be empty).
    #[serde(default)]
    pub biography: Option<String>,
    /// Birthday (YYYY-MM-DD or null).
    #[serde(default)]
    pub birthday: Option<String>,
    /// Deathday (YYYY-MM-DD or null).
    #[serde(default)]
    pub deathday: Option<String>,
    /// Gender code (0 = unset, 1 = female, 2 = male, 3 = non-binary).
    #[serde(default)]
    pub gender: u8,
    /// Homepage URL.
    #[serde(default)]
    pub homepage: Option<String>,
    /// IMDb ID.
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Department the person is best known for.
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// Free-text place of birth (e.g., "Paris, France").
    #[serde(default)]
    pub place_of_birth: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
}

// --- Combined Credits ---

/// Response from `person/{person_id}/combined_credits` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCombinedCredits {
    /// TMDB person ID.
    pub id: u64,
    /// Acting credits across movies and TV.
    #[serde(default)]
    pub cast: Vec<TmdbCastCredit>,
}

/// A single movie or TV acting credit.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCastCredit {
    /// TMDB movie or series ID.
    pub id: u64,
    /// Media type ("movie" or "tv").
    #[serde(default)]
    pub media_type: Option<String>,
    /// Movie title (movies only).
    #[serde(default)]
    pub title: Option<String>,
    /// Series name (TV only).
    #[serde(default)]
    pub name: Option<String>,
    /// Character played.
    #[serde(default)]
    pub character: Option<String>,
    /// Release date (movies only).
    #[serde(default)]
    pub release_date: Option<String>,
    /// First air date (TV only).
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
}

// --- Error Response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
}

// --- Parameters ---

/// Parameters for `search/person` endpoint.
#[derive(Debug, Clone)]
pub struct SearchPersonParams {
    /// Search query (required).
    pub query: String,
    /// Response language (default: "en-US").
    pub language: String,
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Include adult content.
    pub include_adult: bool,
}

impl SearchPersonParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: String::from("en-US"),
            page: 1,
            include_adult: false,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// How requests are authenticated against TMDB.
#[derive(Clone, PartialEq, Eq)]
pub enum TmdbCredential {
    /// v4 read access token, sent as `Authorization: Bearer`.
    BearerToken(String),
    /// v3 API key, sent as the `api_key` query parameter.
    ApiKey(String),
}

impl std::fmt::Debug for TmdbCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BearerToken(_) => f.write_str("BearerToken(***)"),
            Self::ApiKey(_) => f.write_str("ApiKey(***)"),
        }
    }
}
