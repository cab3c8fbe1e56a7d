//! The scheduling step shown after a successful submission.

use serde::Serialize;

/// Base URL of hosted Calendly booking pages.
pub const CALENDLY_BASE_URL: &str = "https://calendly.com";
/// Shown in place of the widget while no username is configured.
pub const NOT_CONFIGURED_NOTICE: &str = "Please configure your Calendly username";

/// What the visitor is advanced to once their details are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchedulingStep {
    /// No username configured; a notice replaces the widget.
    NotConfigured { notice: String },
    /// The inline booking widget for this URL.
    Widget { url: String },
}

impl SchedulingStep {
    pub fn resolve(username: Option<&str>) -> Self {
        match username {
            Some(username) => SchedulingStep::Widget {
                url: format!("{}/{}", CALENDLY_BASE_URL, username),
            },
            None => SchedulingStep::NotConfigured {
                notice: NOT_CONFIGURED_NOTICE.to_string(),
            },
        }
    }
}
