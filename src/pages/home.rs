//! Home page: the top-rated destinations.

use crate::db::{Catalog, DataSource, FEATURED_LIMIT};
use crate::models::Destination;

use super::{Loadable, PageSlot};

#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    /// Best rated first, at most [`FEATURED_LIMIT`]
    pub featured: Vec<Destination>,
}

pub struct HomePage<D> {
    catalog: Catalog<D>,
    slot: PageSlot<(), HomeView>,
}

impl<D: DataSource> HomePage<D> {
    pub fn new(catalog: Catalog<D>) -> Self {
        Self {
            catalog,
            slot: PageSlot::new(),
        }
    }

    pub async fn mount(&self) {
        let ticket = self.slot.begin(()).await;
        let featured = self
            .catalog
            .featured_destinations(FEATURED_LIMIT)
            .await
            .unwrap_or_default();
        self.slot.commit(ticket, HomeView { featured }).await;
    }

    pub async fn view(&self) -> Loadable<HomeView> {
        self.slot.view().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemorySource, Table};
    use crate::pages::tests::destination_row;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_requests_six_best_rated() {
        let rows = (0..9)
            .map(|i| destination_row(&format!("d{}", i), "City", i as f64 / 2.0, None))
            .collect();
        let source = Arc::new(MemorySource::new().with_rows(Table::Destinations, rows));
        let page = HomePage::new(Catalog::new(source.clone()));

        assert_eq!(page.view().await, Loadable::Loading);
        page.mount().await;

        let issued = source.issued();
        assert_eq!(issued.len(), 1);
        assert_eq!(issued[0].limit, Some(6));

        let view = page.view().await;
        let featured = &view.ready().unwrap().featured;
        assert_eq!(featured.len(), 6);
        assert_eq!(featured[0].slug, "d8");
        assert!(featured.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[tokio::test]
    async fn test_fewer_than_six_are_not_padded() {
        let rows = (0..3)
            .map(|i| destination_row(&format!("d{}", i), "City", 4.0, None))
            .collect();
        let source = Arc::new(MemorySource::new().with_rows(Table::Destinations, rows));
        let page = HomePage::new(Catalog::new(source));

        page.mount().await;
        assert_eq!(page.view().await.ready().unwrap().featured.len(), 3);
    }

    #[tokio::test]
    async fn test_query_failure_renders_empty() {
        let source = Arc::new(MemorySource::new().fail(Table::Destinations));
        let page = HomePage::new(Catalog::new(source));

        page.mount().await;
        assert_eq!(
            page.view().await,
            Loadable::Ready(HomeView { featured: vec![] })
        );
    }
}
