//! Destinations list with the category filter.

use crate::db::{Catalog, DataSource};
use crate::models::{CategoryFilter, Destination};

use super::{Loadable, PageSlot};

#[derive(Debug, Clone, PartialEq)]
pub struct DestinationsView {
    /// Filter the rows were fetched with
    pub filter: CategoryFilter,
    /// Best rated first
    pub destinations: Vec<Destination>,
}

pub struct DestinationsPage<D> {
    catalog: Catalog<D>,
    slot: PageSlot<CategoryFilter, DestinationsView>,
}

impl<D: DataSource> DestinationsPage<D> {
    pub fn new(catalog: Catalog<D>) -> Self {
        Self {
            catalog,
            slot: PageSlot::new(),
        }
    }

    /// First fetch, with every category shown.
    pub async fn mount(&self) {
        self.select_category(CategoryFilter::All).await;
    }

    /// Re-query for `filter`. The visible set is replaced by whichever selection came last.
    pub async fn select_category(&self, filter: CategoryFilter) {
        let ticket = self.slot.begin(filter).await;
        let destinations = self.catalog.destinations(filter).await.unwrap_or_default();
        self.slot
            .commit(
                ticket,
                DestinationsView {
                    filter,
                    destinations,
                },
            )
            .await;
    }

    /// Most recently selected filter.
    pub async fn selected(&self) -> CategoryFilter {
        self.slot.key().await.unwrap_or_default()
    }

    pub async fn view(&self) -> Loadable<DestinationsView> {
        self.slot.view().await
    }
}
