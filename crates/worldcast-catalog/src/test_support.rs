//! Shared fixtures and API mocks for unit tests.
#![allow(clippy::unwrap_used)]
#![allow(clippy::missing_panics_doc)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use anyhow::{Result, bail};
use worldcast_api::countries::{LocalCountriesApi, RestCountry, RestCountryName};
use worldcast_api::tmdb::{
    LocalTmdbApi, SearchPersonParams, TmdbCastCredit, TmdbCombinedCredits, TmdbPersonDetails,
    TmdbPersonListItem, TmdbPopularPeopleResponse, TmdbSearchPersonResponse,
};

use crate::celebrity::Celebrity;
use crate::country::{Country, CountrySummary};

/// The eight countries of `fixtures/restcountries/all_region_fields.json`,
/// in file order.
pub fn sample_countries() -> Vec<Country> {
    let json = include_str!("../../../fixtures/restcountries/all_region_fields.json");
    let countries: Vec<RestCountry> = serde_json::from_str(json).unwrap();
    countries.into_iter().map(Country::from).collect()
}

/// France, South Africa, and Antarctica from
/// `fixtures/restcountries/all_summary_fields.json`.
pub fn sample_summaries() -> Vec<CountrySummary> {
    let json = include_str!("../../../fixtures/restcountries/all_summary_fields.json");
    let countries: Vec<RestCountry> = serde_json::from_str(json).unwrap();
    countries.into_iter().map(CountrySummary::from).collect()
}

pub fn celebrity(id: u64, name: &str, birthplace: &str) -> Celebrity {
    Celebrity {
        id,
        name: String::from(name),
        image: None,
        known_for: String::from("Acting"),
        birthplace: String::from(birthplace),
    }
}

pub fn person_item(id: u64, name: &str, profile_path: Option<&str>) -> TmdbPersonListItem {
    TmdbPersonListItem {
        id,
        name: String::from(name),
        known_for_department: Some(String::from("Acting")),
        profile_path: profile_path.map(String::from),
        popularity: 10.0,
        adult: false,
        gender: 0,
    }
}

pub fn person_details(id: u64, name: &str, place_of_birth: Option<&str>) -> TmdbPersonDetails {
    TmdbPersonDetails {
        id,
        name: String::from(name),
        also_known_as: vec![],
        biography: None,
        birthday: None,
        deathday: None,
        gender: 0,
        homepage: None,
        imdb_id: None,
        known_for_department: Some(String::from("Acting")),
        place_of_birth: place_of_birth.map(String::from),
        popularity: 10.0,
        profile_path: None,
    }
}

pub fn cast_credit(id: u64, poster_path: Option<&str>, vote_average: f64) -> TmdbCastCredit {
    TmdbCastCredit {
        id,
        media_type: Some(String::from("movie")),
        title: Some(format!("Title {id}")),
        name: None,
        character: None,
        release_date: Some(String::from("2000-01-01")),
        first_air_date: None,
        poster_path: poster_path.map(String::from),
        vote_average,
        vote_count: 100,
    }
}

pub fn rest_country(
    common: &str,
    official: &str,
    region: Option<&str>,
    alt_spellings: &[&str],
) -> RestCountry {
    RestCountry {
        name: RestCountryName {
            common: String::from(common),
            official: String::from(official),
        },
        cca3: None,
        region: region.map(String::from),
        alt_spellings: alt_spellings.iter().copied().map(String::from).collect(),
        capital: None,
        flags: None,
        flag: None,
        currencies: None,
        coat_of_arms: None,
    }
}

/// In-memory REST Countries API.
#[derive(Debug)]
pub struct MockCountriesApi {
    countries: Vec<RestCountry>,
    last_fields: Mutex<String>,
}

impl MockCountriesApi {
    pub const fn new(countries: Vec<RestCountry>) -> Self {
        Self {
            countries,
            last_fields: Mutex::new(String::new()),
        }
    }

    /// Returns the comma-joined fields of the last `all_countries` call.
    pub fn last_fields(&self) -> String {
        self.last_fields.lock().unwrap().clone()
    }
}

impl LocalCountriesApi for MockCountriesApi {
    async fn all_countries(&self, fields: &[&str]) -> Result<Vec<RestCountry>> {
        *self.last_fields.lock().unwrap() = fields.join(",");
        Ok(self.countries.clone())
    }

    async fn country_by_name(&self, name: &str) -> Result<Option<RestCountry>> {
        Ok(self
            .countries
            .iter()
            .find(|c| c.name.common == name || c.name.official == name)
            .cloned())
    }
}

/// In-memory TMDB API.
///
/// `pages[n]` is served as popular page `n + 1`; later pages are empty.
#[derive(Debug)]
pub struct MockTmdbApi {
    pages: Vec<Vec<TmdbPersonListItem>>,
    total_pages: u32,
    birthplaces: HashMap<u64, String>,
    credits: HashMap<u64, Vec<TmdbCastCredit>>,
    search_results: Vec<TmdbPersonListItem>,
    failing_details: HashSet<u64>,
    pub popular_calls: AtomicU32,
    pub detail_calls: AtomicU32,
}

impl MockTmdbApi {
    pub fn new(pages: Vec<Vec<TmdbPersonListItem>>) -> Self {
        let total_pages = u32::try_from(pages.len()).unwrap();
        Self {
            pages,
            total_pages,
            birthplaces: HashMap::new(),
            credits: HashMap::new(),
            search_results: vec![],
            failing_details: HashSet::new(),
            popular_calls: AtomicU32::new(0),
            detail_calls: AtomicU32::new(0),
        }
    }

    pub fn with_birthplace(mut self, id: u64, place: &str) -> Self {
        self.birthplaces.insert(id, String::from(place));
        self
    }

    pub const fn with_total_pages(mut self, total_pages: u32) -> Self {
        self.total_pages = total_pages;
        self
    }

    pub fn with_credits(mut self, id: u64, cast: Vec<TmdbCastCredit>) -> Self {
        self.credits.insert(id, cast);
        self
    }

    pub fn with_search(mut self, results: Vec<TmdbPersonListItem>) -> Self {
        self.search_results = results;
        self
    }

    pub fn failing_details_for(mut self, id: u64) -> Self {
        self.failing_details.insert(id);
        self
    }
}

impl LocalTmdbApi for MockTmdbApi {
    async fn popular_people(
        &self,
        page: u32,
        _language: &str,
    ) -> Result<TmdbPopularPeopleResponse> {
        self.popular_calls.fetch_add(1, Ordering::SeqCst);
        let results = usize::try_from(page)
            .ok()
            .and_then(|p| p.checked_sub(1))
            .and_then(|idx| self.pages.get(idx))
            .cloned()
            .unwrap_or_default();
        Ok(TmdbPopularPeopleResponse {
            page,
            total_results: u32::try_from(results.len()).unwrap(),
            results,
            total_pages: self.total_pages,
        })
    }

    async fn person_details(&self, person_id: u64, _language: &str) -> Result<TmdbPersonDetails> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_details.contains(&person_id) {
            bail!("TMDB API error (HTTP 500): code=11, message=Internal error");
        }
        Ok(person_details(
            person_id,
            &format!("Person {person_id}"),
            self.birthplaces.get(&person_id).map(String::as_str),
        ))
    }

    async fn person_combined_credits(
        &self,
        person_id: u64,
        _language: &str,
    ) -> Result<TmdbCombinedCredits> {
        Ok(TmdbCombinedCredits {
            id: person_id,
            cast: self.credits.get(&person_id).cloned().unwrap_or_default(),
        })
    }

    async fn search_person(&self, params: &SearchPersonParams) -> Result<TmdbSearchPersonResponse> {
        Ok(TmdbSearchPersonResponse {
            page: params.page,
            results: self.search_results.clone(),
            total_pages: 1,
            total_results: u32::try_from(self.search_results.len()).unwrap(),
        })
    }
}
