//! Whole-page renderers, one per route.

use super::components::{
    attraction_item, destination_card, hero, layout, loading_spinner, review_card, state_card,
};
use super::format::{
    escape, format_rating, or_default, DEFAULT_BEST_TIME, DEFAULT_COST, DEFAULT_DESCRIPTION,
    DEFAULT_DESTINATION_IMAGE, DEFAULT_LOCATION,
};
use crate::models::CategoryFilter;
use crate::pages::{DestinationDetail, DestinationsView, DetailView, HomeView, Loadable, StatesView};

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "🏖️",
        "Beautiful Beaches",
        "Discover pristine coastlines and tropical paradises",
    ),
    (
        "🏛️",
        "Rich History",
        "Explore ancient kingdoms and cultural heritage sites",
    ),
    (
        "🌄",
        "Natural Wonders",
        "Experience breathtaking landscapes and wildlife",
    ),
    (
        "🎭",
        "Vibrant Culture",
        "Immerse yourself in diverse traditions and festivals",
    ),
];

fn page_header(title: &str, subtitle: &str) -> String {
    format!(
        r#"<section class="page-header"><div class="container"><h1 class="page-title">{}</h1><p class="page-subtitle">{}</p></div></section>"#,
        title, subtitle
    )
}

pub fn home_page(view: &Loadable<HomeView>) -> String {
    let featured = match view {
        Loadable::Loading => loading_spinner(),
        Loadable::Ready(view) => {
            let cards: String = view.featured.iter().map(destination_card).collect();
            format!(
                r#"<div class="destinations-grid">{}</div>
<div class="section-cta"><a href="/destinations" class="btn btn-primary">View All Destinations</a></div>"#,
                cards
            )
        }
    };

    let features: String = FEATURES
        .iter()
        .map(|(icon, title, description)| {
            format!(
                r#"<div class="feature-card"><div class="feature-icon">{}</div><h3 class="feature-title">{}</h3><p class="feature-description">{}</p></div>"#,
                icon, title, description
            )
        })
        .collect();

    let main = format!(
        r#"{hero}
<section class="section"><div class="container">
<div class="section-header"><h2 class="section-title">Featured Destinations</h2><p class="section-subtitle">Explore some of Nigeria's most captivating places</p></div>
{featured}
</div></section>
<section class="section section-alt"><div class="container"><div class="features-grid">{features}</div></div></section>"#,
        hero = hero(),
        featured = featured,
        features = features,
    );

    layout("Home", &main)
}

fn filter_bar(selected: CategoryFilter) -> String {
    let buttons: String = CategoryFilter::options()
        .map(|filter| {
            let class = if filter == selected {
                "filter-button active"
            } else {
                "filter-button"
            };
            format!(
                r#"<a href="/destinations?category={param}" class="{class}">{label}</a>"#,
                param = escape(&filter.as_param().replace(' ', "+")),
                class = class,
                label = filter.label(),
            )
        })
        .collect();

    format!(
        r#"<div class="filter-bar"><div class="filter-label">Filter by Category:</div><div class="filter-buttons">{}</div></div>"#,
        buttons
    )
}

pub fn destinations_page(selected: CategoryFilter, view: &Loadable<DestinationsView>) -> String {
    let results = match view {
        Loadable::Loading => loading_spinner(),
        Loadable::Ready(view) if view.destinations.is_empty() => {
            r#"<div class="empty-state"><p>No destinations found in this category.</p></div>"#
                .to_string()
        }
        Loadable::Ready(view) => {
            let cards: String = view.destinations.iter().map(destination_card).collect();
            format!(r#"<div class="destinations-grid">{}</div>"#, cards)
        }
    };

    let main = format!(
        r#"<div class="page">
{header}
<section class="section"><div class="container">
{filters}
{results}
</div></section>
</div>"#,
        header = page_header("Explore Destinations", "Discover amazing places across Nigeria"),
        filters = filter_bar(selected),
        results = results,
    );

    layout("Destinations", &main)
}

fn not_found() -> String {
    r#"<div class="page"><div class="container"><div class="empty-state">
<h2>Destination not found</h2>
<a href="/destinations" class="btn btn-primary">Back to Destinations</a>
</div></div></div>"#
        .to_string()
}

fn info_card(title: &str, body: &str) -> String {
    format!(
        r#"<div class="destination-info-card"><h3>{}</h3><p>{}</p></div>"#,
        title, body
    )
}

fn detail(detail: &DestinationDetail) -> String {
    let destination = &detail.destination;
    let name = escape(&destination.name);

    let state_crumb = detail
        .state
        .as_ref()
        .map(|state| {
            format!(
                r#"<a href="/states/{}">{}</a><span>/</span>"#,
                escape(&state.slug),
                escape(&state.name)
            )
        })
        .unwrap_or_default();

    let mut info = vec![
        info_card(
            "Location",
            &or_default(destination.location.as_deref(), DEFAULT_LOCATION),
        ),
        info_card(
            "Best Time to Visit",
            &or_default(destination.best_time_to_visit.as_deref(), DEFAULT_BEST_TIME),
        ),
        info_card(
            "Average Cost",
            &or_default(destination.average_cost.as_deref(), DEFAULT_COST),
        ),
    ];
    if let Some(state) = &detail.state {
        info.push(info_card("State", &escape(&state.name)));
    }

    let attractions = if detail.attractions.is_empty() {
        String::new()
    } else {
        let items: String = detail.attractions.iter().map(attraction_item).collect();
        format!(
            r#"<div class="destination-section"><h2 class="destination-section-title">Nearby Attractions</h2><div class="attractions-list">{}</div></div>"#,
            items
        )
    };

    let reviews = if detail.reviews.is_empty() {
        String::new()
    } else {
        let cards: String = detail.reviews.iter().map(review_card).collect();
        format!(
            r#"<div class="destination-section"><h2 class="destination-section-title">Reviews ({})</h2><div class="reviews-list">{}</div></div>"#,
            detail.reviews.len(),
            cards
        )
    };

    format!(
        r#"<div class="page">
<section class="destination-hero">
<img src="{image}" alt="{name}" class="destination-hero-image">
<div class="destination-hero-overlay"><div class="container">
<div class="breadcrumb"><a href="/">Home</a><span>/</span><a href="/destinations">Destinations</a><span>/</span>{state_crumb}<span>{name}</span></div>
<h1 class="destination-hero-title">{name}</h1>
<div class="destination-hero-meta"><span class="destination-hero-category">{category}</span><span class="destination-hero-rating">★ {rating}</span></div>
</div></div>
</section>
<section class="section"><div class="container"><div class="destination-content"><div class="destination-main">
<div class="destination-section"><h2 class="destination-section-title">About</h2><p class="destination-description">{description}</p></div>
<div class="destination-info-grid">{info}</div>
{attractions}
{reviews}
</div></div></div></section>
</div>"#,
        image = or_default(destination.image_url.as_deref(), DEFAULT_DESTINATION_IMAGE),
        name = name,
        state_crumb = state_crumb,
        category = escape(&destination.category),
        rating = format_rating(destination.rating),
        description = or_default(destination.description.as_deref(), DEFAULT_DESCRIPTION),
        info = info.concat(),
        attractions = attractions,
        reviews = reviews,
    )
}

pub fn destination_detail_page(view: &Loadable<DetailView>) -> String {
    match view {
        Loadable::Loading => layout("Destination", &loading_spinner()),
        Loadable::Ready(DetailView::NotFound) => layout("Destination not found", &not_found()),
        Loadable::Ready(DetailView::Found(found)) => {
            layout(&found.destination.name, &detail(found))
        }
    }
}

pub fn states_page(view: &Loadable<StatesView>) -> String {
    let grid = match view {
        Loadable::Loading => loading_spinner(),
        Loadable::Ready(view) => {
            let cards: String = view
                .entries
                .iter()
                .map(|entry| state_card(&entry.state, entry.destination_count))
                .collect();
            format!(r#"<div class="states-grid">{}</div>"#, cards)
        }
    };

    let main = format!(
        r#"<div class="page">
{header}
<section class="section"><div class="container">{grid}</div></section>
</div>"#,
        header = page_header(
            "Nigerian States",
            "Explore all 36 states and discover their unique attractions"
        ),
        grid = grid,
    );

    layout("States", &main)
}
