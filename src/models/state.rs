//! State model matching the `states` table.

use serde::{Deserialize, Serialize};

/// One of the Nigerian states.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct State {
    pub id: String,
    pub name: String,
    /// Unique, URL-safe key
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub region: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub population: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Projection of a destination down to its parent state, used for per-state counts.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StateRef {
    #[serde(default)]
    pub state_id: Option<String>,
}
