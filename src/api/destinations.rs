//! Destination routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;

use crate::db::DataSource;
use crate::models::CategoryFilter;
use crate::pages::{DestinationDetailPage, DestinationsPage, DetailView};
use crate::render;
use crate::AppState;

/// Query parameters for the destinations list.
#[derive(Debug, Default, Deserialize)]
pub struct DestinationsParams {
    #[serde(default)]
    pub category: Option<String>,
}

/// GET /destinations - Destinations, optionally narrowed to one category.
pub async fn list_destinations<D: DataSource>(
    State(state): State<AppState<D>>,
    Query(params): Query<DestinationsParams>,
) -> Html<String> {
    let page = DestinationsPage::new(state.catalog.clone());
    match CategoryFilter::parse(params.category.as_deref()) {
        CategoryFilter::All => page.mount().await,
        filter => page.select_category(filter).await,
    }
    Html(render::destinations_page(
        page.selected().await,
        &page.view().await,
    ))
}

/// GET /destinations/{slug} - One destination with its state, attractions and reviews.
pub async fn get_destination<D: DataSource>(
    State(state): State<AppState<D>>,
    Path(slug): Path<String>,
) -> (StatusCode, Html<String>) {
    let page = DestinationDetailPage::new(state.catalog.clone());
    page.open(&slug).await;

    let view = page.view().await;
    let status = match view.ready() {
        Some(DetailView::NotFound) => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };
    (status, Html(render::destination_detail_page(&view)))
}
