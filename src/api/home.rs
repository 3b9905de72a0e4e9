//! Home route.

use axum::{extract::State, response::Html};

use crate::db::DataSource;
use crate::pages::HomePage;
use crate::render;
use crate::AppState;

/// GET / - Featured destinations.
pub async fn home<D: DataSource>(State(state): State<AppState<D>>) -> Html<String> {
    let page = HomePage::new(state.catalog.clone());
    page.mount().await;
    Html(render::home_page(&page.view().await))
}
