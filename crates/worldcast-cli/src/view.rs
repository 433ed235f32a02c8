//! Text rendering of catalog views.
//!
//! Everything goes through `tracing::info!` so output follows the
//! subscriber configured in `main`.

use chrono::NaiveDate;
use worldcast_catalog::filter::Selection;
use worldcast_catalog::{Celebrity, CelebrityProfile, CountryDetails, CountrySummary};

/// Renders the country list.
pub fn render_country_list(countries: &[&CountrySummary]) {
    tracing::info!("Name\t\t\tCapital\t\t\tCode");
    for country in countries {
        tracing::info!(
            "{} {}\t{}\t{}",
            country.flag_emoji.as_deref().unwrap_or(" "),
            country.name,
            country.capitals_label(),
            country.cca3.as_deref().unwrap_or("-"),
        );
    }
    tracing::info!("Total: {} countries", countries.len());
}

/// Renders the single-country detail view.
pub fn render_country_details(country: &CountryDetails) {
    tracing::info!("Name: {}", country.name);
    tracing::info!("Official Name: {}", country.official_name);
    tracing::info!("Capital: {}", country.capitals_label());
    if country.currencies.is_empty() {
        tracing::info!("Currencies: -");
    } else {
        tracing::info!("Currencies:");
        for currency in &country.currencies {
            tracing::info!("  {} {} ({})", currency.code, currency.name, currency.symbol);
        }
    }
    tracing::info!("Flag: {}", country.flag_png.as_deref().unwrap_or("-"));
    tracing::info!(
        "Coat of Arms: {}",
        country.coat_of_arms_png.as_deref().unwrap_or("-")
    );
}

/// Renders the filtered celebrity list.
pub fn render_celebrity_list(
    headline: &str,
    shown: &[&Celebrity],
    loaded: usize,
    has_more: bool,
) {
    tracing::info!("{headline}");
    if shown.is_empty() {
        tracing::info!("No celebrities match the current filters.");
    }
    for celeb in shown {
        tracing::info!(
            "{}\t{}\t{}",
            celeb.name,
            if celeb.known_for.is_empty() {
                "-"
            } else {
                celeb.known_for.as_str()
            },
            celeb.birthplace_label(),
        );
    }
    tracing::info!("Showing {} of {} loaded", shown.len(), loaded);
    if has_more {
        tracing::info!("More celebrities available (use --pages to load more)");
    }
}

/// Renders the region and country dropdown options.
pub fn render_filter_options(regions: &[String], region: &Selection, countries: &[String]) {
    tracing::info!("Regions: {}", regions.join(", "));
    tracing::info!("Countries in {}: {}", region, countries.join(", "));
}

/// Renders a celebrity profile.
pub fn render_profile(profile: &CelebrityProfile, today: NaiveDate) {
    tracing::info!("Name: {}", profile.name);
    tracing::info!("Gender: {}", profile.gender);
    tracing::info!(
        "Known For: {}",
        profile.known_for.as_deref().unwrap_or("-")
    );
    match (profile.birthday.as_deref(), profile.age_on(today)) {
        (Some(birthday), Some(age)) => tracing::info!("Born: {birthday} (age {age})"),
        (Some(birthday), None) => tracing::info!("Born: {birthday}"),
        (None, _) => tracing::info!("Born: -"),
    }
    if let Some(deathday) = profile.deathday.as_deref() {
        tracing::info!("Died: {deathday}");
    }
    tracing::info!(
        "Birthplace: {}",
        profile.birthplace.as_deref().unwrap_or("-")
    );
    tracing::info!("Image: {}", profile.image_url);
    tracing::info!("Biography: {}", profile.biography_text());
    tracing::info!("Top titles:");
    for title in &profile.top_titles {
        tracing::info!(
            "  {:.1}  {} ({})",
            title.vote_average,
            title.title,
            title.year.as_deref().unwrap_or("-"),
        );
    }
}
