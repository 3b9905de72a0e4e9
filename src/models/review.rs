//! Review model matching the `reviews` table.

use serde::{Deserialize, Serialize};

/// A visitor review of a destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: String,
    #[serde(default)]
    pub destination_id: Option<String>,
    pub author_name: String,
    /// Expected in 1..=5; stored as a number so fractional values still decode
    pub rating: f64,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(default)]
    pub visit_date: Option<String>,
    #[serde(default)]
    pub helpful_count: i64,
    pub created_at: String,
}
