//! API client library for worldcast.
//!
//! Provides clients for the REST Countries API and the TMDB API.

/// REST Countries API client.
pub mod countries;

/// TMDB API client.
pub mod tmdb;
