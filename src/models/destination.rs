//! Destination model matching the `destinations` table.

use serde::{Deserialize, Serialize};

/// A place worth visiting, optionally attached to a state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    pub id: String,
    #[serde(default)]
    pub state_id: Option<String>,
    pub name: String,
    /// Unique, URL-safe key
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub best_time_to_visit: Option<String>,
    #[serde(default)]
    pub average_cost: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub views_count: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}
