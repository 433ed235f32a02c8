//! Single-celebrity profile view.

use std::cmp::Ordering;
use std::fmt;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::instrument;
use url::Url;
use worldcast_api::tmdb::{
    LocalTmdbApi, SearchPersonParams, TmdbCastCredit, TmdbCombinedCredits, TmdbPersonDetails,
};

/// Image base for the large profile picture.
pub const PROFILE_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Image base for title posters.
pub const POSTER_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w300";

/// Placeholder shown when TMDB has no profile picture.
pub const NO_IMAGE_PLACEHOLDER: &str = "https://via.placeholder.com/500x700?text=No+Image";

/// Number of titles shown on a profile.
pub const TOP_TITLE_LIMIT: usize = 12;

const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search";

/// Gender as shown on the profile badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    /// TMDB code 1.
    Female,
    /// TMDB code 2.
    Male,
    /// Any other code.
    Unknown,
}

impl Gender {
    /// Maps a TMDB gender code.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Female,
            2 => Self::Male,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Unknown => "Unknown",
        })
    }
}

/// A movie or show on a profile.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleCredit {
    /// TMDB movie or series ID.
    pub id: u64,
    /// Movie title or series name.
    pub title: String,
    /// Release or first-air year.
    pub year: Option<String>,
    /// Poster URL.
    pub poster_url: String,
    /// Vote average.
    pub vote_average: f64,
}

impl TitleCredit {
    /// Builds a title from a cast credit; credits without a poster are skipped.
    #[must_use]
    pub fn from_cast(credit: &TmdbCastCredit) -> Option<Self> {
        let poster = credit.poster_path.as_deref().filter(|p| !p.is_empty())?;
        let title = non_empty(credit.title.as_deref())
            .or_else(|| non_empty(credit.name.as_deref()))
            .map(String::from)
            .unwrap_or_default();
        let year = non_empty(credit.release_date.as_deref())
            .or_else(|| non_empty(credit.first_air_date.as_deref()))
            .map(|date| date.chars().take(4).collect::<String>());

        Some(Self {
            id: credit.id,
            title,
            year,
            poster_url: format!("{POSTER_IMAGE_BASE}{poster}"),
            vote_average: credit.vote_average,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Picks the best-rated titles that have a poster.
///
/// Sorting is stable, so equally rated titles keep their credit order.
#[must_use]
pub fn top_titles(cast: &[TmdbCastCredit], limit: usize) -> Vec<TitleCredit> {
    let mut titles: Vec<TitleCredit> = cast.iter().filter_map(TitleCredit::from_cast).collect();
    titles.sort_by(|a, b| {
        b.vote_average
            .partial_cmp(&a.vote_average)
            .unwrap_or(Ordering::Equal)
    });
    titles.truncate(limit);
    titles
}

/// Builds a Google search URL for a name.
///
/// # Errors
///
/// Returns an error if the URL cannot be built.
pub fn google_search_url(name: &str) -> Result<Url> {
    Url::parse_with_params(GOOGLE_SEARCH_URL, &[("q", name)])
        .with_context(|| format!("failed to build search URL for {name}"))
}

/// Everything shown on a celebrity's page.
#[derive(Debug, Clone, PartialEq)]
pub struct CelebrityProfile {
    /// TMDB person ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Gender badge.
    pub gender: Gender,
    /// "Known for" department.
    pub known_for: Option<String>,
    /// Birthday (YYYY-MM-DD).
    pub birthday: Option<String>,
    /// Deathday (YYYY-MM-DD).
    pub deathday: Option<String>,
    /// Place of birth.
    pub birthplace: Option<String>,
    /// Biography.
    pub biography: Option<String>,
    /// Profile picture URL, or the placeholder.
    pub image_url: String,
    /// Best-rated titles with a poster.
    pub top_titles: Vec<TitleCredit>,
}

impl CelebrityProfile {
    /// Assembles a profile from details and credits.
    #[must_use]
    pub fn from_parts(details: TmdbPersonDetails, credits: &TmdbCombinedCredits) -> Self {
        let image_url = details
            .profile_path
            .as_deref()
            .map_or_else(
                || String::from(NO_IMAGE_PLACEHOLDER),
                |path| format!("{PROFILE_IMAGE_BASE}{path}"),
            );
        Self {
            id: details.id,
            gender: Gender::from_code(details.gender),
            known_for: details.known_for_department,
            birthday: details.birthday.filter(|s| !s.is_empty()),
            deathday: details.deathday.filter(|s| !s.is_empty()),
            birthplace: details.place_of_birth.filter(|s| !s.is_empty()),
            biography: details.biography.filter(|s| !s.is_empty()),
            image_url,
            top_titles: top_titles(&credits.cast, TOP_TITLE_LIMIT),
            name: details.name,
        }
    }

    /// Returns the biography, or a placeholder when there is none.
    #[must_use]
    pub fn biography_text(&self) -> &str {
        self.biography.as_deref().unwrap_or("No biography available.")
    }

    /// Returns the age in completed years on `today`, or at death.
    ///
    /// `None` when the birthday is missing or malformed.
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let born = parse_date(self.birthday.as_deref()?)?;
        let end = self
            .deathday
            .as_deref()
            .and_then(parse_date)
            .unwrap_or(today);
        end.years_since(born)
    }

    /// Returns the Google search URL for this person.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built.
    pub fn google_search_url(&self) -> Result<Url> {
        google_search_url(&self.name)
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Looks a celebrity up by name and loads their profile.
///
/// The first search hit is used. Returns `None` when the search is empty.
///
/// # Errors
///
/// Returns an error if any TMDB request fails.
#[instrument(skip_all, fields(name = name))]
pub async fn load_profile(
    api: &(impl LocalTmdbApi + Sync),
    name: &str,
    language: &str,
) -> Result<Option<CelebrityProfile>> {
    let params = SearchPersonParams::new(name).language(language);
    let search = api
        .search_person(&params)
        .await
        .with_context(|| format!("failed to search for {name}"))?;

    let Some(person_id) = search.results.first().map(|hit| hit.id) else {
        tracing::debug!("no search results");
        return Ok(None);
    };

    let (details, credits) = futures::try_join!(
        api.person_details(person_id, language),
        api.person_combined_credits(person_id, language),
    )
    .with_context(|| format!("failed to load profile for person {person_id}"))?;

    Ok(Some(CelebrityProfile::from_parts(details, &credits)))
}
