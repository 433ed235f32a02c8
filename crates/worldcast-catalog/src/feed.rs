//! Paged "load more" accumulation of celebrities.

use std::collections::HashSet;

use anyhow::{Context, Result};
use futures::future::try_join_all;
use tracing::instrument;
use worldcast_api::tmdb::LocalTmdbApi;

use crate::celebrity::Celebrity;

/// Celebrities accumulated from the TMDB popular-people listing.
///
/// Each [`load_more`](Self::load_more) fetches the next page, resolves
/// every person's birthplace, and merges the result. Person IDs stay
/// unique; when a person reappears on a later page the first copy is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CelebrityFeed {
    celebrities: Vec<Celebrity>,
    next_page: u32,
    has_more: bool,
}

impl Default for CelebrityFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl CelebrityFeed {
    /// Creates an empty feed positioned at page 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            celebrities: Vec::new(),
            next_page: 1,
            has_more: true,
        }
    }

    /// Returns the accumulated celebrities in load order.
    #[must_use]
    pub fn celebrities(&self) -> &[Celebrity] {
        &self.celebrities
    }

    /// Returns the page the next `load_more` will fetch.
    #[must_use]
    pub const fn next_page(&self) -> u32 {
        self.next_page
    }

    /// Returns false once the listing is exhausted.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Fetches and merges the next page.
    ///
    /// Returns the number of celebrities added. On error the feed is left
    /// untouched, so the same page is requested again on the next call.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing or any person details request fails.
    #[instrument(skip_all, fields(page = self.next_page))]
    pub async fn load_more(
        &mut self,
        api: &(impl LocalTmdbApi + Sync),
        language: &str,
    ) -> Result<usize> {
        if !self.has_more {
            return Ok(0);
        }

        let fetched = self.fetch_page(api, language).await;
        let (celebrities, total_pages) = match fetched {
            Ok(Some(page)) => page,
            Ok(None) => {
                tracing::debug!(page = self.next_page, "listing exhausted");
                self.has_more = false;
                return Ok(0);
            }
            Err(err) => {
                tracing::warn!(page = self.next_page, error = %format!("{err:#}"), "TMDB fetch error");
                return Err(err);
            }
        };

        let before = self.celebrities.len();
        self.celebrities.extend(celebrities);
        let mut seen = HashSet::new();
        self.celebrities.retain(|c| seen.insert(c.id));
        let added = self.celebrities.len().saturating_sub(before);

        self.next_page = self.next_page.saturating_add(1);
        if self.next_page > total_pages {
            self.has_more = false;
        }

        tracing::info!(
            page = self.next_page.saturating_sub(1),
            added,
            total = self.celebrities.len(),
            "celebrity page loaded"
        );
        Ok(added)
    }

    /// Calls [`load_more`](Self::load_more) up to `pages` times, stopping
    /// early once the listing is exhausted.
    ///
    /// Returns the number of celebrities added.
    ///
    /// # Errors
    ///
    /// Returns the first page error; pages loaded before it are kept.
    pub async fn load_pages(
        &mut self,
        api: &(impl LocalTmdbApi + Sync),
        language: &str,
        pages: u32,
    ) -> Result<usize> {
        let mut added = 0usize;
        for _ in 0..pages {
            if !self.has_more {
                break;
            }
            let count = self.load_more(api, language).await?;
            added = added.saturating_add(count);
        }
        Ok(added)
    }

    /// Fetches one listing page plus details for every person on it.
    ///
    /// Returns `None` for an empty page.
    async fn fetch_page(
        &self,
        api: &(impl LocalTmdbApi + Sync),
        language: &str,
    ) -> Result<Option<(Vec<Celebrity>, u32)>> {
        let page = self.next_page;
        let listing = api
            .popular_people(page, language)
            .await
            .with_context(|| format!("failed to fetch popular people page {page}"))?;

        if listing.results.is_empty() {
            return Ok(None);
        }

        let celebrities = try_join_all(listing.results.iter().map(|person| async move {
            let details = api
                .person_details(person.id, language)
                .await
                .with_context(|| format!("failed to fetch details for person {}", person.id))?;
            Ok::<_, anyhow::Error>(Celebrity::from_listing(person, &details))
        }))
        .await?;

        Ok(Some((celebrities, listing.total_pages)))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::atomic::Ordering;

    use super::*;
    use crate::test_support::{MockTmdbApi, person_item};

    fn ids(feed: &CelebrityFeed) -> Vec<u64> {
        feed.celebrities().iter().map(|c| c.id).collect()
    }

    #[tokio::test]
    async fn test_load_more_merges_details() {
        // Arrange
        let api = MockTmdbApi::new(vec![vec![
            person_item(976, "Jason Statham", Some("/statham.jpg")),
            person_item(234_352, "Margot Robbie", None),
        ]])
        .with_birthplace(976, "Shirebrook, Derbyshire, England, UK")
        .with_total_pages(2);
        let mut feed = CelebrityFeed::new();

        // Act
        let added = feed.load_more(&api, "en-US").await.unwrap();

        // Assert
        assert_eq!(added, 2);
        assert_eq!(feed.next_page(), 2);
        assert!(feed.has_more());
        let statham = feed.celebrities().first().unwrap();
        assert_eq!(statham.birthplace, "Shirebrook, Derbyshire, England, UK");
        assert_eq!(api.detail_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_duplicates_across_pages_keep_first() {
        // Arrange: person 2 appears on both pages
        let api = MockTmdbApi::new(vec![
            vec![person_item(1, "One", None), person_item(2, "Two", None)],
            vec![person_item(2, "Two again", None), person_item(3, "Three", None)],
        ]);
        let mut feed = CelebrityFeed::new();

        // Act
        feed.load_more(&api, "en-US").await.unwrap();
        let added = feed.load_more(&api, "en-US").await.unwrap();

        // Assert
        assert_eq!(added, 1);
        assert_eq!(ids(&feed), vec![1, 2, 3]);
        assert_eq!(feed.celebrities().get(1).unwrap().name, "Two");
    }

    #[tokio::test]
    async fn test_duplicates_within_a_page_are_dropped() {
        // Arrange
        let api = MockTmdbApi::new(vec![vec![
            person_item(7, "Seven", None),
            person_item(7, "Seven", None),
        ]]);
        let mut feed = CelebrityFeed::new();

        // Act
        let added = feed.load_more(&api, "en-US").await.unwrap();

        // Assert
        assert_eq!(added, 1);
        assert_eq!(ids(&feed), vec![7]);
    }

    #[tokio::test]
    async fn test_empty_page_stops_feed() {
        // Arrange
        let api = MockTmdbApi::new(vec![vec![person_item(1, "One", None)]]).with_total_pages(10);
        let mut feed = CelebrityFeed::new();
        feed.load_more(&api, "en-US").await.unwrap();

        // Act
        let added = feed.load_more(&api, "en-US").await.unwrap();

        // Assert
        assert_eq!(added, 0);
        assert!(!feed.has_more());
        assert_eq!(feed.next_page(), 2);
    }

    #[tokio::test]
    async fn test_exhausted_feed_skips_api() {
        // Arrange
        let api = MockTmdbApi::new(vec![vec![person_item(1, "One", None)]]);
        let mut feed = CelebrityFeed::new();
        feed.load_more(&api, "en-US").await.unwrap();
        assert!(!feed.has_more());

        // Act
        let added = feed.load_more(&api, "en-US").await.unwrap();

        // Assert
        assert_eq!(added, 0);
        assert_eq!(api.popular_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_details_leave_feed_unchanged() {
        // Arrange
        let api = MockTmdbApi::new(vec![vec![
            person_item(1, "One", None),
            person_item(2, "Two", None),
        ]])
        .failing_details_for(2);
        let mut feed = CelebrityFeed::new();

        // Act
        let result = feed.load_more(&api, "en-US").await;

        // Assert
        assert!(format!("{:#}", result.unwrap_err()).contains("person 2"));
        assert!(feed.celebrities().is_empty());
        assert_eq!(feed.next_page(), 1);
        assert!(feed.has_more());
    }

    #[tokio::test]
    async fn test_load_pages_stops_when_exhausted() {
        // Arrange
        let api = MockTmdbApi::new(vec![
            vec![person_item(1, "One", None)],
            vec![person_item(2, "Two", None)],
        ])
        .with_total_pages(5);
        let mut feed = CelebrityFeed::new();

        // Act
        let added = feed.load_pages(&api, "en-US", 5).await.unwrap();

        // Assert
        assert_eq!(added, 2);
        assert!(!feed.has_more());
        assert_eq!(api.popular_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_load_pages_zero_does_nothing() {
        // Arrange
        let api = MockTmdbApi::new(vec![vec![person_item(1, "One", None)]]);
        let mut feed = CelebrityFeed::new();

        // Act
        let added = feed.load_pages(&api, "en-US", 0).await.unwrap();

        // Assert
        assert_eq!(added, 0);
        assert_eq!(api.popular_calls.load(Ordering::SeqCst), 0);
    }
}
