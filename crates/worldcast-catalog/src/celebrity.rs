//! Celebrity records assembled from TMDB listings.

use worldcast_api::tmdb::{TmdbPersonDetails, TmdbPersonListItem};

/// Image base for list thumbnails.
pub const THUMBNAIL_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w300";

/// Label shown when a celebrity has no known birthplace.
pub const UNKNOWN_BIRTHPLACE: &str = "Unknown birthplace";

/// A celebrity in the browsable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Celebrity {
    /// TMDB person ID. Unique within a feed.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Thumbnail URL, if TMDB has a profile image.
    pub image: Option<String>,
    /// "Known for" department (e.g., "Acting", "Directing").
    pub known_for: String,
    /// Free-text place of birth, empty when unknown.
    pub birthplace: String,
}

impl Celebrity {
    /// Merges a popular-listing entry with the person's details.
    #[must_use]
    pub fn from_listing(item: &TmdbPersonListItem, details: &TmdbPersonDetails) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            image: item
                .profile_path
                .as_deref()
                .map(|path| format!("{THUMBNAIL_IMAGE_BASE}{path}")),
            known_for: item.known_for_department.clone().unwrap_or_default(),
            birthplace: details.place_of_birth.clone().unwrap_or_default(),
        }
    }

    /// Returns the birthplace, or a placeholder when it is unknown.
    #[must_use]
    pub fn birthplace_label(&self) -> &str {
        if self.birthplace.is_empty() {
            UNKNOWN_BIRTHPLACE
        } else {
            &self.birthplace
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{person_details, person_item};

    #[test]
    fn test_from_listing_merges_birthplace() {
        // Arrange
        let item = person_item(976, "Jason Statham", Some("/statham.jpg"));
        let details = person_details(976, "Jason Statham", Some("Shirebrook, England, UK"));

        // Act
        let celeb = Celebrity::from_listing(&item, &details);

        // Assert
        assert_eq!(celeb.id, 976);
        assert_eq!(
            celeb.image.as_deref(),
            Some("https://image.tmdb.org/t/p/w300/statham.jpg")
        );
        assert_eq!(celeb.known_for, "Acting");
        assert_eq!(celeb.birthplace, "Shirebrook, England, UK");
    }

    #[test]
    fn test_missing_profile_and_birthplace() {
        // Arrange
        let item = person_item(1, "Nobody", None);
        let details = person_details(1, "Nobody", None);

        // Act
        let celeb = Celebrity::from_listing(&item, &details);

        // Assert
        assert!(celeb.image.is_none());
        assert!(celeb.birthplace.is_empty());
        assert_eq!(celeb.birthplace_label(), UNKNOWN_BIRTHPLACE);
    }
}
