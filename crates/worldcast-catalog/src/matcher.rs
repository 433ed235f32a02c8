//! Birthplace to country matching.

use unicode_normalization::UnicodeNormalization;

use crate::country::Country;

/// Normalizes a string for name comparison (NFC, lower-case).
///
/// TMDB and REST Countries do not agree on composed vs decomposed
/// accents ("São Tomé"), so both sides go through NFC first.
pub(crate) fn match_key(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Finds the country a free-text birthplace refers to.
///
/// The birthplace is split on commas and each trimmed part is compared
/// against every country's common name, official name, and alternate
/// spellings. Countries are scanned in load order; the first hit wins.
/// Parts are compared whole, so "Indiana, USA" matches the United States
/// through "usa" and never India.
#[must_use]
pub fn find_country_for_birthplace<'a>(place: &str, countries: &'a [Country]) -> Option<&'a Country> {
    if place.trim().is_empty() {
        return None;
    }

    let text = match_key(place);
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();

    countries
        .iter()
        .find(|country| parts.iter().any(|part| country.is_named(part)))
}
