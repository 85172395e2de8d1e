//! HTTP request handlers for API endpoints.

pub mod click;
pub mod health;
pub mod link;

pub use click::click_handler;
pub use health::health_handler;
pub use link::{link_handler, link_index_handler};
