//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A short slug mapped to a destination
//! - [`Click`] - A recorded use of a link
//!
//! Creation input lives in separate structs (`NewClick`). Links are never
//! created by this service, so there is no `NewLink`.

pub mod click;
pub mod link;

pub use click::{Click, NewClick};
pub use link::Link;
