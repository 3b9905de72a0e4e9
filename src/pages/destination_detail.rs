//! Destination detail: one destination joined to its state, attractions and reviews.

use crate::db::{Catalog, DataSource};
use crate::models::{Attraction, Destination, Review, State};

use super::{Loadable, PageSlot};

#[derive(Debug, Clone, PartialEq)]
pub struct DestinationDetail {
    pub destination: Destination,
    /// `None` when the destination has no state or the state row is gone
    pub state: Option<State>,
    pub attractions: Vec<Attraction>,
    /// Newest first
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    /// No destination has the requested slug (or the lookup failed)
    NotFound,
    Found(Box<DestinationDetail>),
}

pub struct DestinationDetailPage<D> {
    catalog: Catalog<D>,
    slot: PageSlot<String, DetailView>,
}

impl<D: DataSource> DestinationDetailPage<D> {
    pub fn new(catalog: Catalog<D>) -> Self {
        Self {
            catalog,
            slot: PageSlot::new(),
        }
    }

    /// Load the page for `slug`. Opening another slug supersedes this one.
    pub async fn open(&self, slug: &str) {
        let ticket = self.slot.begin(slug.to_string()).await;
        let view = load_detail(&self.catalog, slug).await;
        self.slot.commit(ticket, view).await;
    }

    pub async fn view(&self) -> Loadable<DetailView> {
        self.slot.view().await
    }
}

async fn load_detail<D: DataSource>(catalog: &Catalog<D>, slug: &str) -> DetailView {
    let destination = match catalog.destination_by_slug(slug).await {
        Ok(Some(destination)) => destination,
        Ok(None) => {
            tracing::debug!(slug, "destination not found");
            return DetailView::NotFound;
        }
        Err(_) => return DetailView::NotFound,
    };

    let state = async {
        match destination.state_id.as_deref() {
            Some(state_id) => catalog.state_by_id(state_id).await.ok().flatten(),
            None => None,
        }
    };

    let (state, attractions, reviews) = tokio::join!(
        state,
        catalog.attractions_for(&destination.id),
        catalog.reviews_for(&destination.id),
    );

    DetailView::Found(Box::new(DestinationDetail {
        state,
        attractions: attractions.unwrap_or_default(),
        reviews: reviews.unwrap_or_default(),
        destination,
    }))
}
