//! In-memory data source used as the fake backend in tests.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use serde_json::Value;

use super::{DataSource, Direction, Row, Select, Table};
use crate::errors::DataError;

/// Tables held in memory, with a log of every query issued and optional per-table failures.
#[derive(Default)]
pub struct MemorySource {
    tables: HashMap<Table, Vec<Row>>,
    failing: Mutex<HashSet<Table>>,
    issued: Mutex<Vec<Select>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add rows to a table. Each value must be a JSON object.
    pub fn with_rows(mut self, table: Table, rows: Vec<Value>) -> Self {
        let entry = self.tables.entry(table).or_default();
        for row in rows {
            match row {
                Value::Object(map) => entry.push(map),
                other => panic!("row must be an object, got {}", other),
            }
        }
        self
    }

    /// Make every query against `table` fail with a server error.
    pub fn fail(self, table: Table) -> Self {
        self.failing.lock().unwrap().insert(table);
        self
    }

    /// Queries issued so far, oldest first.
    pub fn issued(&self) -> Vec<Select> {
        self.issued.lock().unwrap().clone()
    }

    /// Queries issued against one table.
    pub fn issued_for(&self, table: Table) -> Vec<Select> {
        self.issued()
            .into_iter()
            .filter(|q| q.table == table)
            .collect()
    }
}

fn matches(value: Option<&Value>, expected: &str) -> bool {
    match value {
        Some(Value::String(s)) => s == expected,
        Some(Value::Number(n)) => n.to_string() == expected,
        Some(Value::Bool(b)) => b.to_string() == expected,
        _ => false,
    }
}

/// Ascending comparison with nulls last.
fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

impl DataSource for MemorySource {
    async fn select(&self, query: &Select) -> Result<Vec<Row>, DataError> {
        self.issued.lock().unwrap().push(query.clone());
        query.validate()?;

        if self.failing.lock().unwrap().contains(&query.table) {
            return Err(DataError::Server {
                status: 500,
                message: format!("{} unavailable", query.table.name()),
            });
        }

        let mut rows: Vec<Row> = self
            .tables
            .get(&query.table)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|row| match &query.filter {
                Some(filter) => matches(row.get(filter.column), &filter.value),
                None => true,
            })
            .collect();

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| {
                let ordering = compare(a.get(order.column), b.get(order.column));
                match order.direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            });
        }

        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }

        if let Some(columns) = &query.columns {
            rows = rows
                .into_iter()
                .map(|row| {
                    columns
                        .iter()
                        .map(|c| (c.to_string(), row.get(*c).cloned().unwrap_or(Value::Null)))
                        .collect()
                })
                .collect();
        }

        Ok(rows)
    }
}
