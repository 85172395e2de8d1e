//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ClickService, LinkService};
use crate::infrastructure::cache::CacheService;

/// Application state shared across requests.
///
/// Cheap to clone; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub click_service: Arc<ClickService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        click_service: Arc<ClickService>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            link_service,
            click_service,
            cache,
        }
    }
}
