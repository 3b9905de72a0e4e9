//! HTML rendering.
//!
//! Components render one entity; views assemble a whole page from a page's current
//! [`Loadable`](crate::pages::Loadable) view. All data-derived text is escaped.

mod components;
mod format;
mod views;

pub use components::*;
pub use format::*;
pub use views::*;
