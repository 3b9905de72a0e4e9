//! Hosted backend data source.
//!
//! Speaks the PostgREST query dialect: `GET {url}/rest/v1/{table}` with `select`, `col=eq.value`,
//! `order=col.asc|desc` and `limit` parameters.

use reqwest::Client;

use super::{DataSource, Direction, Row, Select};
use crate::errors::DataError;

/// Header carrying the project key.
pub const API_KEY_HEADER: &str = "apikey";

/// Data source reading from a PostgREST-compatible hosted backend.
#[derive(Clone)]
pub struct RestSource {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestSource {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn table_url(&self, query: &Select) -> String {
        format!("{}/rest/v1/{}", self.base_url, query.table.name())
    }
}

/// Query-string pairs for a validated query.
fn query_params(query: &Select) -> Vec<(String, String)> {
    let select = match &query.columns {
        Some(columns) => columns.join(","),
        None => "*".to_string(),
    };
    let mut params = vec![("select".to_string(), select)];

    if let Some(filter) = &query.filter {
        params.push((filter.column.to_string(), format!("eq.{}", filter.value)));
    }

    if let Some(order) = &query.order {
        let direction = match order.direction {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        };
        params.push(("order".to_string(), format!("{}.{}", order.column, direction)));
    }

    if let Some(limit) = query.limit {
        params.push(("limit".to_string(), limit.to_string()));
    }

    params
}

impl DataSource for RestSource {
    async fn select(&self, query: &Select) -> Result<Vec<Row>, DataError> {
        query.validate()?;

        let mut request = self
            .client
            .get(self.table_url(query))
            .query(&query_params(query));

        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key).bearer_auth(key);
        }

        tracing::debug!(table = query.table.name(), "rest select");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DataError::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<Vec<Row>>().await?)
    }
}
