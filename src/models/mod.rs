//! Data models for the guide.
//!
//! These models match the hosted tables column for column; the front end never writes them.

mod attraction;
mod category;
mod destination;
mod review;
mod state;

pub use attraction::*;
pub use category::*;
pub use destination::*;
pub use review::*;
pub use state::*;
