//! Typed data access over a [`DataSource`].
//!
//! Every page reads through a `Catalog`. Failures are logged here, once, and handed back to the
//! caller, which decides what the visitor sees.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::{DataSource, Direction, Select, Table};
use crate::errors::DataError;
use crate::models::{Attraction, CategoryFilter, Destination, Review, State, StateRef};

/// Number of destinations featured on the home page.
pub const FEATURED_LIMIT: usize = 6;

/// Read-only access to the guide's tables.
pub struct Catalog<D> {
    source: Arc<D>,
}

impl<D> Clone for Catalog<D> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<D: DataSource> Catalog<D> {
    pub fn new(source: Arc<D>) -> Self {
        Self { source }
    }

    /// Run a query and decode every row.
    pub async fn rows<T: DeserializeOwned>(&self, query: Select) -> Result<Vec<T>, DataError> {
        let table = query.table.name();
        let result = self.source.select(&query).await.and_then(|rows| {
            rows.into_iter()
                .map(|row| {
                    serde_json::from_value::<T>(serde_json::Value::Object(row))
                        .map_err(DataError::from)
                })
                .collect::<Result<Vec<T>, DataError>>()
        });

        match result {
            Ok(rows) => {
                tracing::debug!(table, count = rows.len(), "query succeeded");
                Ok(rows)
            }
            Err(err) => {
                tracing::error!(table, error = %err, "query failed");
                Err(err)
            }
        }
    }

    /// Run a query expected to match at most one row.
    ///
    /// No match is `Ok(None)`; more than one match is an error.
    pub async fn maybe_single<T: DeserializeOwned>(
        &self,
        query: Select,
    ) -> Result<Option<T>, DataError> {
        let table = query.table.name();
        let mut rows = self.rows::<T>(query.limit(2)).await?;
        if rows.len() > 1 {
            let err = DataError::MultipleRows { table };
            tracing::error!(table, error = %err, "query failed");
            return Err(err);
        }
        Ok(rows.pop())
    }

    /// Highest-rated destinations, best first.
    pub async fn featured_destinations(&self, limit: usize) -> Result<Vec<Destination>, DataError> {
        self.rows(
            Select::from(Table::Destinations)
                .order("rating", Direction::Descending)
                .limit(limit),
        )
        .await
    }

    /// Destinations in a category (or all of them), best rated first.
    pub async fn destinations(&self, filter: CategoryFilter) -> Result<Vec<Destination>, DataError> {
        let query = Select::from(Table::Destinations).order("rating", Direction::Descending);
        let query = match filter {
            CategoryFilter::All => query,
            CategoryFilter::Only(category) => query.eq("category", category.as_str()),
        };
        self.rows(query).await
    }

    pub async fn destination_by_slug(&self, slug: &str) -> Result<Option<Destination>, DataError> {
        self.maybe_single(Select::from(Table::Destinations).eq("slug", slug))
            .await
    }

    pub async fn state_by_id(&self, id: &str) -> Result<Option<State>, DataError> {
        self.maybe_single(Select::from(Table::States).eq("id", id))
            .await
    }

    pub async fn attractions_for(&self, destination_id: &str) -> Result<Vec<Attraction>, DataError> {
        self.rows(Select::from(Table::Attractions).eq("destination_id", destination_id))
            .await
    }

    /// Reviews of a destination, newest first.
    pub async fn reviews_for(&self, destination_id: &str) -> Result<Vec<Review>, DataError> {
        self.rows(
            Select::from(Table::Reviews)
                .eq("destination_id", destination_id)
                .order("created_at", Direction::Descending),
        )
        .await
    }

    /// All states, alphabetical.
    pub async fn states(&self) -> Result<Vec<State>, DataError> {
        self.rows(Select::from(Table::States).order("name", Direction::Ascending))
            .await
    }

    /// The `state_id` of every destination, nulls included.
    pub async fn destination_state_ids(&self) -> Result<Vec<Option<String>>, DataError> {
        let refs: Vec<StateRef> = self
            .rows(Select::from(Table::Destinations).columns(&["state_id"]))
            .await?;
        Ok(refs.into_iter().map(|r| r.state_id).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemorySource;
    use crate::models::Category;
    use serde_json::json;

    fn destination(id: &str, slug: &str, category: &str, rating: f64) -> serde_json::Value {
        json!({
            "id": id,
            "state_id": null,
            "name": slug,
            "slug": slug,
            "category": category,
            "rating": rating,
            "views_count": 0,
        })
    }

    #[tokio::test]
    async fn test_destinations_filter_and_order() {
        let source = Arc::new(MemorySource::new().with_rows(
            Table::Destinations,
            vec![
                destination("1", "a", "Beach", 3.9),
                destination("2", "b", "City", 4.8),
                destination("3", "c", "Beach", 4.5),
            ],
        ));
        let catalog = Catalog::new(source.clone());

        let beaches = catalog
            .destinations(CategoryFilter::Only(Category::Beach))
            .await
            .unwrap();
        assert!(beaches.iter().all(|d| d.category == "Beach"));
        assert_eq!(
            beaches.iter().map(|d| d.slug.as_str()).collect::<Vec<_>>(),
            vec!["c", "a"]
        );

        let all = catalog.destinations(CategoryFilter::All).await.unwrap();
        assert_eq!(
            all.iter().map(|d| d.slug.as_str()).collect::<Vec<_>>(),
            vec!["b", "c", "a"]
        );
        assert!(source.issued()[1].filter.is_none());
    }

    #[tokio::test]
    async fn test_maybe_single_distinguishes_none_and_many() {
        let source = Arc::new(MemorySource::new().with_rows(
            Table::Destinations,
            vec![
                destination("1", "dup", "Beach", 3.0),
                destination("2", "dup", "Beach", 3.0),
                destination("3", "solo", "City", 3.0),
            ],
        ));
        let catalog = Catalog::new(source);

        assert!(catalog.destination_by_slug("missing").await.unwrap().is_none());
        assert_eq!(
            catalog.destination_by_slug("solo").await.unwrap().map(|d| d.id),
            Some("3".to_string())
        );
        assert_eq!(
            catalog.destination_by_slug("dup").await.unwrap_err(),
            DataError::MultipleRows {
                table: "destinations"
            }
        );
    }

    #[tokio::test]
    async fn test_decode_failure_is_reported() {
        let source = Arc::new(
            MemorySource::new().with_rows(Table::States, vec![json!({ "id": "s1" })]),
        );
        let catalog = Catalog::new(source);

        assert!(matches!(
            catalog.states().await.unwrap_err(),
            DataError::Decode(_)
        ));
    }

    #[tokio::test]
    async fn test_state_ids_projection() {
        let source = Arc::new(MemorySource::new().with_rows(
            Table::Destinations,
            vec![
                json!({ "id": "1", "state_id": "A" }),
                json!({ "id": "2", "state_id": null }),
            ],
        ));
        let catalog = Catalog::new(source.clone());

        let ids = catalog.destination_state_ids().await.unwrap();
        assert_eq!(ids, vec![Some("A".to_string()), None]);
        assert_eq!(source.issued()[0].columns, Some(vec!["state_id"]));
    }
}
