//! Data source module.
//!
//! The hosted backend owns every table; this module only reads them. A [`Select`] describes one
//! read (projection, single equality filter, order, limit) and any [`DataSource`] executes it,
//! returning rows as JSON objects that [`Catalog`] decodes into models.

mod catalog;
#[cfg(test)]
mod memory;
mod rest;
mod sqlite;

pub use catalog::*;
#[cfg(test)]
pub use memory::*;
pub use rest::*;
pub use sqlite::*;

use std::future::Future;

use crate::errors::DataError;

/// One row as returned by a data source.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// The four tables the guide reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    States,
    Destinations,
    Attractions,
    Reviews,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::States => "states",
            Table::Destinations => "destinations",
            Table::Attractions => "attractions",
            Table::Reviews => "reviews",
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::States => &[
                "id",
                "name",
                "slug",
                "description",
                "region",
                "image_url",
                "population",
                "created_at",
            ],
            Table::Destinations => &[
                "id",
                "state_id",
                "name",
                "slug",
                "description",
                "short_description",
                "category",
                "image_url",
                "location",
                "best_time_to_visit",
                "average_cost",
                "rating",
                "views_count",
                "created_at",
                "updated_at",
            ],
            Table::Attractions => &[
                "id",
                "destination_id",
                "name",
                "description",
                "type",
                "location",
                "opening_hours",
                "entry_fee",
                "image_url",
                "created_at",
            ],
            Table::Reviews => &[
                "id",
                "destination_id",
                "author_name",
                "rating",
                "title",
                "content",
                "visit_date",
                "helpful_count",
                "created_at",
            ],
        }
    }

    fn has_column(&self, column: &str) -> bool {
        self.columns().contains(&column)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Equality constraint on one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: &'static str,
    pub value: String,
}

/// Sort on one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Order {
    pub column: &'static str,
    pub direction: Direction,
}

/// A read against one table.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: Table,
    /// `None` selects every column
    pub columns: Option<Vec<&'static str>>,
    pub filter: Option<Filter>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl Select {
    pub fn from(table: Table) -> Self {
        Self {
            table,
            columns: None,
            filter: None,
            order: None,
            limit: None,
        }
    }

    pub fn columns(mut self, columns: &[&'static str]) -> Self {
        self.columns = Some(columns.to_vec());
        self
    }

    pub fn eq(mut self, column: &'static str, value: impl Into<String>) -> Self {
        self.filter = Some(Filter {
            column,
            value: value.into(),
        });
        self
    }

    pub fn order(mut self, column: &'static str, direction: Direction) -> Self {
        self.order = Some(Order { column, direction });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Columns to return, resolved against the table.
    pub fn projection(&self) -> Vec<&'static str> {
        match &self.columns {
            Some(columns) => columns.clone(),
            None => self.table.columns().to_vec(),
        }
    }

    /// Reject column names the table does not have.
    ///
    /// Every source calls this before touching its backend, and the SQLite source relies on it
    /// to interpolate column names safely.
    pub fn validate(&self) -> Result<(), DataError> {
        let table = self.table;
        let referenced = self
            .columns
            .iter()
            .flatten()
            .copied()
            .chain(self.filter.as_ref().map(|f| f.column))
            .chain(self.order.as_ref().map(|o| o.column));

        for column in referenced {
            if !table.has_column(column) {
                return Err(DataError::InvalidQuery(format!(
                    "Unknown column {} on {}",
                    column,
                    table.name()
                )));
            }
        }
        Ok(())
    }
}

/// Read capability over the hosted tables.
pub trait DataSource: Send + Sync + 'static {
    /// Run one read and return the matching rows in order.
    fn select(&self, query: &Select) -> impl Future<Output = Result<Vec<Row>, DataError>> + Send;
}

/// Data source chosen at startup from configuration.
pub enum Backend {
    Rest(RestSource),
    Sqlite(SqliteSource),
}

impl DataSource for Backend {
    async fn select(&self, query: &Select) -> Result<Vec<Row>, DataError> {
        match self {
            Backend::Rest(source) => source.select(query).await,
            Backend::Sqlite(source) => source.select(query).await,
        }
    }
}
