//! Data Transfer Objects for API responses.

pub mod click;
pub mod health;
