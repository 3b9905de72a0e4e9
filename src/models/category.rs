//! Destination categories offered by the list filter.

use serde::{Deserialize, Serialize};

/// The fixed set of categories a visitor can filter by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Nature Reserve")]
    NatureReserve,
    Landmark,
    #[serde(rename = "Historical Site")]
    HistoricalSite,
    Beach,
    City,
    Mountain,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::NatureReserve,
        Category::Landmark,
        Category::HistoricalSite,
        Category::Beach,
        Category::City,
        Category::Mountain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::NatureReserve => "Nature Reserve",
            Category::Landmark => "Landmark",
            Category::HistoricalSite => "Historical Site",
            Category::Beach => "Beach",
            Category::City => "City",
            Category::Mountain => "Mountain",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Category selection on the destinations list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Every filter in display order, "all" first.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    /// Parse a filter value; unknown values select everything.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some("all") => CategoryFilter::All,
            Some(other) => match Category::from_str(other) {
                Some(category) => CategoryFilter::Only(category),
                None => {
                    tracing::debug!("Unknown category filter {:?}, showing all", other);
                    CategoryFilter::All
                }
            },
        }
    }

    /// Value carried in the `category` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}
