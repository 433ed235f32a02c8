//! `CountriesClient` - REST Countries API client implementation.

use anyhow::{Context, Result, anyhow, bail};
use reqwest::{Client, StatusCode};
use tracing::instrument;
use url::Url;

use super::api::LocalCountriesApi;
use super::types::{RestCountry, RestErrorResponse};

/// Default base URL for REST Countries v3.1.
const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1/";

/// REST Countries API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct CountriesClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
}

/// Builder for `CountriesClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct CountriesClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
}

impl CountriesClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
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
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<CountriesClient> {
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

        Ok(CountriesClient {
            http_client,
            base_url,
        })
    }
}

impl CountriesClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> CountriesClientBuilder {
        CountriesClientBuilder::new()
    }

    /// Sends a GET request and decodes the JSON body.
    ///
    /// Returns `Ok(None)` on HTTP 404, which the API uses for unknown names.
    #[instrument(skip_all)]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<Option<T>> {
        let request = self
            .http_client
            .get(url)
            .query(query)
            .build()
            .context("failed to build request")?;

        tracing::debug!(url = %request.url(), "REST Countries API request");

        let path = String::from(request.url().path());
        let result = self.http_client.execute(request).await;
        let response = result.with_context(|| format!("request failed: {path}"))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            if let Ok(error_response) = serde_json::from_str::<RestErrorResponse>(&body) {
                bail!(
                    "REST Countries API error (HTTP {}): status={}, message={}",
                    status,
                    error_response.status,
                    error_response.message,
                );
            }
            bail!("REST Countries API error (HTTP {status}): {body}");
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response body: {path}"))?;
        let raw_result: std::result::Result<T, _> = serde_json::from_str(&body);
        let parsed =
            raw_result.with_context(|| format!("failed to decode JSON response: {path}"))?;
        Ok(Some(parsed))
    }
}

impl LocalCountriesApi for CountriesClient {
    #[instrument(skip_all)]
    async fn all_countries(&self, fields: &[&str]) -> Result<Vec<RestCountry>> {
        let url = self
            .base_url
            .join("all")
            .context("failed to join URL path: all")?;
        let query = [("fields", fields.join(","))];

        let countries: Option<Vec<RestCountry>> = self.get_json(url, &query).await?;
        countries.context("REST Countries API returned 404 for the country list")
    }

    #[instrument(skip_all, fields(name = name))]
    async fn country_by_name(&self, name: &str) -> Result<Option<RestCountry>> {
        let mut url = self
            .base_url
            .join("name/")
            .context("failed to join URL path: name/")?;
        url.path_segments_mut()
            .map_err(|()| anyhow!("base URL cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .push(name);
        let query = [("fullText", String::from("true"))];

        let matches: Option<Vec<RestCountry>> = self.get_json(url, &query).await?;
        Ok(matches.and_then(|list| list.into_iter().next()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    fn mock_client(server: &wiremock::MockServer) -> CountriesClient {
        let base_url = format!("{}/v3.1/", server.uri());
        CountriesClient::builder()
            .base_url(base_url.parse().unwrap())
            .user_agent("test/0.0.0")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_user_agent() {
        // Arrange & Act
        let result = CountriesClient::builder().build();

        // Assert
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("user_agent is required")
        );
    }

    #[test]
    fn test_builder_default_base_url() {
        // Arrange & Act
        let client = CountriesClient::builder()
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Assert
        assert_eq!(client.base_url.as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_parse_region_fields_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/restcountries/all_region_fields.json");

        // Act
        let countries: Vec<RestCountry> = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(countries.len(), 8);
        let uk = countries
            .iter()
            .find(|c| c.name.common == "United Kingdom")
            .unwrap();
        assert_eq!(uk.region.as_deref(), Some("Europe"));
        assert!(uk.alt_spellings.contains(&String::from("UK")));
        assert!(uk.capital.is_none());
    }

    #[test]
    fn test_parse_country_detail_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/restcountries/name_france.json");

        // Act
        let countries: Vec<RestCountry> = serde_json::from_str(json).unwrap();

        // Assert
        let france = &countries[0];
        assert_eq!(france.name.official, "French Republic");
        assert_eq!(france.capital.as_deref(), Some(&[String::from("Paris")][..]));
        let currencies = france.currencies.as_ref().unwrap();
        assert_eq!(currencies["EUR"].symbol.as_deref(), Some("€"));
        assert!(france.coat_of_arms.as_ref().unwrap().png.is_some());
    }

    #[tokio::test]
    async fn test_all_countries_sends_fields() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/restcountries/all_region_fields.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/v3.1/all"))
            .and(wiremock::matchers::query_param(
                "fields",
                "name,region,altSpellings",
            ))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server);

        // Act
        let countries = client
            .all_countries(&["name", "region", "altSpellings"])
            .await
            .unwrap();

        // Assert
        assert_eq!(countries.len(), 8);
    }

    #[tokio::test]
    async fn test_country_by_name_returns_first_match() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/restcountries/name_france.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/v3.1/name/France"))
            .and(wiremock::matchers::query_param("fullText", "true"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server);

        // Act
        let country = client.country_by_name("France").await.unwrap();

        // Assert
        assert_eq!(country.unwrap().name.common, "France");
    }

    #[tokio::test]
    async fn test_country_by_name_not_found() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(
                wiremock::ResponseTemplate::new(404)
                    .set_body_string(r#"{"status":404,"message":"Not Found"}"#),
            )
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server);

        // Act
        let country = client.country_by_name("Atlantis").await.unwrap();

        // Assert
        assert!(country.is_none());
    }

    #[tokio::test]
    async fn test_server_error_is_reported() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(
                wiremock::ResponseTemplate::new(500)
                    .set_body_string(r#"{"status":500,"message":"Internal Server Error"}"#),
            )
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server);

        // Act
        let result = client.all_countries(&["name"]).await;

        // Assert
        let err = result.unwrap_err().to_string();
        assert!(err.contains("REST Countries API error"));
        assert!(err.contains("Internal Server Error"));
    }
}
