//! `TmdbClient` - TMDB API client implementation.

use anyhow::{Context, Result, bail};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::LocalTmdbApi;
use super::types::{
    SearchPersonParams, TmdbCombinedCredits, TmdbCredential, TmdbErrorResponse,
    TmdbPersonDetails, TmdbPopularPeopleResponse, TmdbSearchPersonResponse,
};

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// TMDB API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Bearer token or v3 API key.
    credential: TmdbCredential,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    credential: Option<TmdbCredential>,
    user_agent: Option<String>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            credential: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Authenticates with a v4 bearer token.
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.credential = Some(TmdbCredential::BearerToken(token.into()));
        self
    }

    /// Authenticates with a v3 API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.credential = Some(TmdbCredential::ApiKey(key.into()));
        self
    }

    /// Sets the credential directly.
    #[must_use]
    pub fn credential(mut self, credential: TmdbCredential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - No credential is set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let credential = self
            .credential
            .context("api_token or api_key is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(TmdbClient {
            http_client,
            base_url,
            credential,
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Sends an authenticated GET request and decodes the JSON body.
    #[instrument(skip_all)]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("failed to join URL path: {path}"))?;

        let mut builder = self.http_client.get(url).query(query);
        builder = match &self.credential {
            TmdbCredential::BearerToken(token) => builder.bearer_auth(token),
            TmdbCredential::ApiKey(key) => builder.query(&[("api_key", key.as_str())]),
        };
        let request = builder
            .build()
            .with_context(|| format!("failed to build request: {path}"))?;

        // The full URL may carry the API key, so only the path is logged.
        tracing::debug!(path, "TMDB API request");

        let result = self.http_client.execute(request).await;
        let response = result.with_context(|| format!("request failed: {path}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            if let Ok(error_response) = serde_json::from_str::<TmdbErrorResponse>(&body) {
                bail!(
                    "TMDB API error (HTTP {}): code={}, message={}",
                    status,
                    error_response.status_code,
                    error_response.status_message,
                );
            }
            bail!("TMDB API error (HTTP {status}): {body}");
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response body: {path}"))?;
        let raw_result: std::result::Result<T, _> = serde_json::from_str(&body);
        let parsed =
            raw_result.with_context(|| format!("failed to decode JSON response: {path}"))?;
        Ok(parsed)
    }
}

impl LocalTmdbApi for TmdbClient {
    #[instrument(skip_all, fields(page = page))]
    async fn popular_people(
        &self,
        page: u32,
        language: &str,
    ) -> Result<TmdbPopularPeopleResponse> {
        let query = [
            ("page", page.to_string()),
            ("language", String::from(language)),
        ];
        self.get_json("person/popular", &query).await
    }

    #[instrument(skip_all, fields(person_id = person_id))]
    async fn person_details(&self, person_id: u64, language: &str) -> Result<TmdbPersonDetails> {
        let path = format!("person/{person_id}");
        let query = [("language", String::from(language))];
        self.get_json(&path, &query).await
    }

    #[instrument(skip_all, fields(person_id = person_id))]
    async fn person_combined_credits(
        &self,
        person_id: u64,
        language: &str,
    ) -> Result<TmdbCombinedCredits> {
        let path = format!("person/{person_id}/combined_credits");
        let query = [("language", String::from(language))];
        self.get_json(&path, &query).await
    }

    #[instrument(skip_all)]
    async fn search_person(&self, params: &SearchPersonParams) -> Result<TmdbSearchPersonResponse> {
        let query: Vec<(&str, String)> = vec![
            ("query", params.query.clone()),
            ("language", params.language.clone()),
            ("page", params.page.to_string()),
            ("include_adult", params.include_adult.to_string()),
        ];
        self.get_json("search/person", &query).await
    }
}
