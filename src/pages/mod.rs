//! Page view models.
//!
//! Each page owns a [`Catalog`](crate::db::Catalog) handle and a [`PageSlot`] holding what it
//! currently shows. Fetches are tagged with the generation that started them; a result that
//! arrives after a newer fetch has begun is dropped instead of overwriting the newer view.

mod destination_detail;
mod destinations;
mod home;
mod states;

pub use destination_detail::*;
pub use destinations::*;
pub use home::*;
pub use states::*;

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

/// What a page shows: a loading indicator until its first fetch settles, then the view.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<V> {
    Loading,
    Ready(V),
}

impl<V> Loadable<V> {
    pub fn ready(&self) -> Option<&V> {
        match self {
            Loadable::Loading => None,
            Loadable::Ready(view) => Some(view),
        }
    }
}

/// Handle for one in-flight fetch.
#[derive(Debug)]
pub struct Ticket<K> {
    generation: u64,
    key: K,
}

struct Current<K, V> {
    key: Option<K>,
    view: Loadable<V>,
}

/// Latest-wins holder for a page's view.
pub struct PageSlot<K, V> {
    generation: AtomicU64,
    current: RwLock<Current<K, V>>,
}

impl<K, V> Default for PageSlot<K, V> {
    fn default() -> Self {
        Self {
            generation: AtomicU64::new(0),
            current: RwLock::new(Current {
                key: None,
                view: Loadable::Loading,
            }),
        }
    }
}

impl<K, V> PageSlot<K, V>
where
    K: Clone + std::fmt::Debug + Send + Sync,
    V: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch for `key`. Any fetch started earlier becomes stale.
    pub async fn begin(&self, key: K) -> Ticket<K> {
        let mut current = self.current.write().await;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        current.key = Some(key.clone());
        current.view = Loadable::Loading;
        Ticket { generation, key }
    }

    /// Store the result of a fetch if it is still the latest one. Returns whether it was kept.
    pub async fn commit(&self, ticket: Ticket<K>, view: V) -> bool {
        let mut current = self.current.write().await;
        if ticket.generation != self.generation.load(Ordering::SeqCst) {
            tracing::debug!(key = ?ticket.key, "discarding stale page result");
            return false;
        }
        current.view = Loadable::Ready(view);
        true
    }

    /// Snapshot of what the page shows right now.
    pub async fn view(&self) -> Loadable<V> {
        self.current.read().await.view.clone()
    }

    /// Key of the most recently started fetch.
    pub async fn key(&self) -> Option<K> {
        self.current.read().await.key.clone()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::db::{DataSource, Row, Select};
    use crate::errors::DataError;
    use serde_json::{json, Value};
    use tokio::sync::Notify;

    pub fn state_row(slug: &str, name: &str, region: &str) -> Value {
        json!({
            "id": format!("id-{}", slug),
            "name": name,
            "slug": slug,
            "description": format!("About {}", name),
            "region": region,
            "image_url": null,
            "population": 1000000,
            "created_at": "2024-01-01T00:00:00Z",
        })
    }

    pub fn destination_row(slug: &str, category: &str, rating: f64, state_id: Option<&str>) -> Value {
        json!({
            "id": format!("id-{}", slug),
            "state_id": state_id,
            "name": format!("Destination {}", slug),
            "slug": slug,
            "description": null,
            "short_description": format!("Short {}", slug),
            "category": category,
            "image_url": null,
            "location": "Somewhere",
            "best_time_to_visit": null,
            "average_cost": null,
            "rating": rating,
            "views_count": 0,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
        })
    }

    pub fn attraction_row(name: &str, destination_id: &str, entry_fee: Option<&str>) -> Value {
        json!({
            "id": format!("id-{}", name),
            "destination_id": destination_id,
            "name": name,
            "description": format!("All about {}", name),
            "type": "Park",
            "location": null,
            "opening_hours": null,
            "entry_fee": entry_fee,
            "image_url": null,
            "created_at": "2024-01-01T00:00:00Z",
        })
    }

    pub fn review_row(id: &str, destination_id: &str, rating: f64, created_at: &str) -> Value {
        json!({
            "id": id,
            "destination_id": destination_id,
            "author_name": "ada",
            "rating": rating,
            "title": null,
            "content": "Lovely place",
            "visit_date": null,
            "helpful_count": 0,
            "created_at": created_at,
        })
    }

    /// Wraps a source and parks any query filtered on `value` until `release` is notified.
    pub struct GatedSource<S> {
        inner: S,
        value: &'static str,
        pub entered: Notify,
        pub release: Notify,
    }

    impl<S> GatedSource<S> {
        pub fn new(inner: S, value: &'static str) -> Self {
            Self {
                inner,
                value,
                entered: Notify::new(),
                release: Notify::new(),
            }
        }
    }

    impl<S: DataSource> DataSource for GatedSource<S> {
        async fn select(&self, query: &Select) -> Result<Vec<Row>, DataError> {
            if query.filter.as_ref().map(|f| f.value.as_str()) == Some(self.value) {
                self.entered.notify_one();
                self.release.notified().await;
            }
            self.inner.select(query).await
        }
    }

    #[tokio::test]
    async fn test_starts_loading() {
        let slot: PageSlot<(), Vec<u8>> = PageSlot::new();
        assert_eq!(slot.view().await, Loadable::Loading);
        assert_eq!(slot.key().await, None);
    }

    #[tokio::test]
    async fn test_latest_fetch_wins_out_of_order() {
        let slot: PageSlot<&str, &str> = PageSlot::new();

        let first = slot.begin("beach").await;
        let second = slot.begin("city").await;

        assert!(slot.commit(second, "city rows").await);
        assert!(!slot.commit(first, "beach rows").await);

        assert_eq!(slot.view().await, Loadable::Ready("city rows"));
        assert_eq!(slot.key().await, Some("city"));
    }

    #[tokio::test]
    async fn test_newer_begin_resets_to_loading() {
        let slot: PageSlot<u8, u8> = PageSlot::new();
        let ticket = slot.begin(1).await;
        assert!(slot.commit(ticket, 10).await);
        assert_eq!(slot.view().await, Loadable::Ready(10));

        let _pending = slot.begin(2).await;
        assert_eq!(slot.view().await, Loadable::Loading);
    }
}
