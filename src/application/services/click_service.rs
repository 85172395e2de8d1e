//! Click recording service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Service recording one click row per call.
///
/// No deduplication, rate limiting or retry: repeated calls insert repeated
/// rows and store failures are returned as-is.
pub struct ClickService {
    click_repository: Arc<dyn ClickRepository>,
}

impl ClickService {
    /// Creates a new click service.
    pub fn new(click_repository: Arc<dyn ClickRepository>) -> Self {
        Self { click_repository }
    }

    /// Records a click for the link identified by `raw_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `raw_id` is not a positive integer
    /// (nothing is inserted) or the link does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record_click(&self, raw_id: &str) -> Result<Click, AppError> {
        let link_id = parse_link_id(raw_id)?;

        let click = self
            .click_repository
            .record_click(NewClick { link_id })
            .await
            .inspect_err(|e| warn!("Failed to record click for link {}: {}", link_id, e))?;

        debug!("Recorded click {} for link {}", click.id, click.link);
        Ok(click)
    }
}

/// Parses a link identifier from a path segment.
///
/// Accepts base-10 integers greater than zero, surrounding whitespace
/// ignored.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for anything else.
pub fn parse_link_id(raw_id: &str) -> Result<i64, AppError> {
    match raw_id.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(
            "Link id must be a positive integer",
            json!({ "id": raw_id }),
        )),
    }
}
