//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and coordinates between the model and the backing services. It is
//! organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `actions`: Disk/feed/chat orchestration

mod actions;
mod input;

use std::sync::Arc;

use crate::model::AppModel;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<AppModel>,
}

impl AppController {
    pub fn new(model: Arc<AppModel>) -> Self {
        Self { model }
    }

    pub(crate) fn format_error(error: &anyhow::Error) -> String {
        let error_str = error.to_string();

        // Friendlier wording for common REST failures
        if error_str.contains("status 401") {
            "Not authorized. Check your API key.".to_string()
        } else if error_str.contains("status 403") {
            "Request forbidden (rate limited?). Try again later.".to_string()
        } else if error_str.contains("status 429") {
            "Rate limited. Please wait a moment.".to_string()
        } else {
            format!("Error: {}", error_str)
        }
    }
}
