//! States route.

use axum::{extract::State, response::Html};

use crate::db::DataSource;
use crate::pages::StatesPage;
use crate::render;
use crate::AppState;

/// GET /states - Every state with its destination count.
pub async fn list_states<D: DataSource>(State(state): State<AppState<D>>) -> Html<String> {
    let page = StatesPage::new(state.catalog.clone());
    page.mount().await;
    Html(render::states_page(&page.view().await))
}
