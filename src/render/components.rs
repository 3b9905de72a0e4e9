//! Presentational components. Each is a pure function of the data passed in.

use chrono::{Datelike, Utc};

use super::format::{
    destination_count_label, escape, format_long_date, format_rating, or_default, stars,
    DEFAULT_COST, DEFAULT_DESCRIPTION, DEFAULT_DESTINATION_IMAGE, DEFAULT_LOCATION, DEFAULT_STATE_IMAGE,
};
use crate::models::{Attraction, Destination, Review, State};

pub const SITE_NAME: &str = "NaijaGuide";

const REGIONS: [&str; 6] = [
    "South West",
    "South East",
    "South South",
    "North Central",
    "North East",
    "North West",
];

/// Full HTML document: header and footer chrome around `main`.
pub fn layout(title: &str, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {site}</title>
</head>
<body>
<div class="app">
{header}
<main class="main">
{main}
</main>
{footer}
</div>
</body>
</html>
"#,
        title = escape(title),
        site = SITE_NAME,
        header = header(),
        main = main,
        footer = footer(Utc::now().year()),
    )
}

fn header() -> String {
    format!(
        r#"<header class="header"><div class="container"><div class="header-content">
<a href="/" class="logo"><span class="logo-icon">🇳🇬</span><span class="logo-text">{site}</span></a>
<nav class="nav"><a href="/" class="nav-link">Home</a><a href="/destinations" class="nav-link">Destinations</a><a href="/states" class="nav-link">States</a></nav>
</div></div></header>"#,
        site = SITE_NAME
    )
}

fn footer(year: i32) -> String {
    let regions: String = REGIONS
        .iter()
        .map(|region| format!("<li>{}</li>", region))
        .collect();

    format!(
        r#"<footer class="footer"><div class="container">
<div class="footer-content">
<div class="footer-section"><h3 class="footer-title">{site}</h3><p class="footer-text">Your comprehensive guide to exploring the beauty and diversity of Nigeria.</p></div>
<div class="footer-section"><h4 class="footer-subtitle">Quick Links</h4><ul class="footer-links"><li><a href="/destinations">Destinations</a></li><li><a href="/states">States</a></li></ul></div>
<div class="footer-section"><h4 class="footer-subtitle">Regions</h4><ul class="footer-links">{regions}</ul></div>
</div>
<div class="footer-bottom"><p>&copy; {year} {site}. Discover Nigeria.</p></div>
</div></footer>"#,
        site = SITE_NAME,
        regions = regions,
        year = year,
    )
}

pub fn loading_spinner() -> String {
    r#"<div class="loading"><div class="spinner"></div></div>"#.to_string()
}

pub fn hero() -> String {
    r#"<section class="hero"><div class="hero-overlay"></div><div class="container"><div class="hero-content">
<h1 class="hero-title">Discover the Beauty of Nigeria</h1>
<p class="hero-subtitle">Explore breathtaking destinations, rich culture, and unforgettable experiences across all 36 states</p>
<div class="hero-actions"><a href="/destinations" class="btn btn-primary">Explore Destinations</a><a href="/states" class="btn btn-secondary">Browse States</a></div>
</div></div></section>"#
        .to_string()
}

pub fn destination_card(destination: &Destination) -> String {
    let summary = destination
        .short_description
        .as_deref()
        .or(destination.description.as_deref());

    format!(
        r#"<a href="/destinations/{slug}" class="destination-card">
<div class="destination-card-image"><img src="{image}" alt="{name}"><div class="destination-card-category">{category}</div></div>
<div class="destination-card-content">
<h3 class="destination-card-title">{name}</h3>
<p class="destination-card-location">{location}</p>
<p class="destination-card-description">{summary}</p>
<div class="destination-card-footer"><div class="destination-card-rating"><span class="star">★</span><span>{rating}</span></div><div class="destination-card-cost">{cost}</div></div>
</div></a>"#,
        slug = escape(&destination.slug),
        image = or_default(destination.image_url.as_deref(), DEFAULT_DESTINATION_IMAGE),
        name = escape(&destination.name),
        category = escape(&destination.category),
        location = or_default(destination.location.as_deref(), DEFAULT_LOCATION),
        summary = or_default(summary, DEFAULT_DESCRIPTION),
        rating = format_rating(destination.rating),
        cost = or_default(destination.average_cost.as_deref(), DEFAULT_COST),
    )
}

pub fn state_card(state: &State, destination_count: usize) -> String {
    format!(
        r#"<a href="/states/{slug}" class="state-card">
<div class="state-card-image"><img src="{image}" alt="{name}"></div>
<div class="state-card-content">
<h3 class="state-card-title">{name}</h3>
<p class="state-card-region">{region}</p>
<p class="state-card-description">{description}</p>
<div class="state-card-footer"><span class="state-card-destinations">{count}</span></div>
</div></a>"#,
        slug = escape(&state.slug),
        image = or_default(state.image_url.as_deref(), DEFAULT_STATE_IMAGE),
        name = escape(&state.name),
        region = escape(&state.region),
        description = or_default(state.description.as_deref(), DEFAULT_DESCRIPTION),
        count = destination_count_label(destination_count),
    )
}

pub fn review_card(review: &Review) -> String {
    let initial: String = review
        .author_name
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();

    let title = review
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(|t| format!(r#"<h3 class="review-card-title">{}</h3>"#, escape(t)))
        .unwrap_or_default();

    let visited = review
        .visit_date
        .as_deref()
        .map(|d| {
            format!(
                r#"<p class="review-card-visit">Visited: {}</p>"#,
                escape(&format_long_date(d))
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="review-card">
<div class="review-card-header"><div class="review-card-author"><div class="review-card-avatar">{initial}</div><div><h4 class="review-card-name">{author}</h4><p class="review-card-date">{date}</p></div></div><div class="review-card-rating">{stars}</div></div>
{title}<p class="review-card-content">{content}</p>{visited}
</div>"#,
        initial = escape(&initial),
        author = escape(&review.author_name),
        date = escape(&format_long_date(&review.created_at)),
        stars = stars(review.rating),
        title = title,
        content = escape(&review.content),
        visited = visited,
    )
}

pub fn attraction_item(attraction: &Attraction) -> String {
    let fee = attraction
        .entry_fee
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .map(|f| format!(r#"<p class="attraction-fee">Entry: {}</p>"#, escape(f)))
        .unwrap_or_default();

    format!(
        r#"<div class="attraction-item"><h3 class="attraction-name">{name}</h3><p class="attraction-type">{kind}</p><p class="attraction-description">{description}</p>{fee}</div>"#,
        name = escape(&attraction.name),
        kind = escape(&attraction.kind),
        description = or_default(attraction.description.as_deref(), DEFAULT_DESCRIPTION),
        fee = fee,
    )
}
