//! Application layer services implementing the two endpoint contracts.
//!
//! Services consume repository traits and give HTTP handlers a small API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Cached link resolution by slug
//! - [`services::click_service::ClickService`] - Click recording

pub mod services;
