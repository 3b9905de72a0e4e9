//! HTTP routes.
//!
//! Each handler builds a fresh page, mounts it, and renders whatever the page settled on. The page
//! is dropped with the response.

mod destinations;
mod home;
mod states;

pub use destinations::*;
pub use home::*;
pub use states::*;
