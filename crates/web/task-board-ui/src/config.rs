//! Page configuration
//!
//! Defaults match the markup rendered by the backend. A page can override a
//! few of them through `data-*` attributes on `<body>`:
//!
//! - `data-api-path`: path of the task endpoint (default `/api/data/`)
//! - `data-banner-timeout-ms`: how long a banner stays up
//! - `data-sparkle-count`: particles per button click

use bon::Builder;
use task_board_api::DEFAULT_API_PATH;
use web_sys::Document;

use crate::error::{UiError, UiResult};

#[derive(Debug, Clone, Builder)]
pub struct UiConfig {
    /// Id of the task creation form
    #[builder(default = "taskForm".to_string(), into)]
    pub form_id: String,

    #[builder(default = "taskTitle".to_string(), into)]
    pub title_input_id: String,

    #[builder(default = "taskDescription".to_string(), into)]
    pub description_input_id: String,

    /// Id of the container cards are prepended to
    #[builder(default = "tasksList".to_string(), into)]
    pub list_id: String,

    /// Id of the button that triggers the bulk load
    #[builder(default = "loadDataBtn".to_string(), into)]
    pub load_button_id: String,

    /// Id of the container the bulk load renders into
    #[builder(default = "ajaxResult".to_string(), into)]
    pub load_result_id: String,

    /// Label restored on the load button once a bulk load settles
    #[builder(default = "✨ Load Data via AJAX".to_string(), into)]
    pub load_button_label: String,

    /// Path of the task endpoint, joined onto the page origin
    #[builder(default = DEFAULT_API_PATH.to_string(), into)]
    pub api_path: String,

    /// Elements that fade in when first scrolled into view
    #[builder(
        default = ".task-card, .add-task-form, .tasks-container, .demo-section".to_string(),
        into
    )]
    pub reveal_selector: String,

    /// Visible fraction that counts as "in view"
    #[builder(default = 0.1)]
    pub reveal_threshold: f64,

    /// Delay before a freshly inserted element starts its transition
    #[builder(default = 10)]
    pub entrance_delay_ms: u32,

    #[builder(default = 4000)]
    pub banner_timeout_ms: u32,

    #[builder(default = 300)]
    pub banner_fade_ms: u32,

    #[builder(default = 6)]
    pub sparkle_count: u32,

    #[builder(default = 1000)]
    pub sparkle_duration_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl UiConfig {
    /// Defaults plus any `data-*` overrides found on `<body>`
    pub fn from_document(document: &Document) -> UiResult<Self> {
        let config = match document.body() {
            Some(body) => Self::default().with_overrides(|name| body.get_attribute(name))?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from an attribute lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> UiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("data-api-path") {
            self.api_path = path;
        }
        if let Some(raw) = lookup("data-banner-timeout-ms") {
            self.banner_timeout_ms = parse_number("data-banner-timeout-ms", &raw)?;
        }
        if let Some(raw) = lookup("data-sparkle-count") {
            self.sparkle_count = parse_number("data-sparkle-count", &raw)?;
        }
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> UiResult<()> {
        let ids = [
            ("form_id", &self.form_id),
            ("title_input_id", &self.title_input_id),
            ("description_input_id", &self.description_input_id),
            ("list_id", &self.list_id),
            ("load_button_id", &self.load_button_id),
            ("load_result_id", &self.load_result_id),
        ];
        for (name, value) in ids {
            if value.trim().is_empty() {
                return Err(UiError::config(format!("{} cannot be empty", name)));
            }
        }

        if !self.api_path.starts_with('/') {
            return Err(UiError::config(format!(
                "api_path must be absolute, got {:?}",
                self.api_path
            )));
        }

        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(UiError::config("reveal_threshold must be between 0 and 1"));
        }

        Ok(())
    }
}

fn parse_number(name: &str, raw: &str) -> UiResult<u32> {
    raw.trim()
        .parse()
        .map_err(|_| UiError::config(format!("{} is not a number: {:?}", name, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_page_markup() {
        let config = UiConfig::default();
        assert_eq!(config.form_id, "taskForm");
        assert_eq!(config.list_id, "tasksList");
        assert_eq!(config.api_path, "/api/data/");
        assert_eq!(config.banner_timeout_ms, 4000);
        assert_eq!(config.sparkle_count, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = UiConfig::builder()
            .form_id("newTask")
            .sparkle_count(3)
            .build();
        assert_eq!(config.form_id, "newTask");
        assert_eq!(config.sparkle_count, 3);
        assert_eq!(config.title_input_id, "taskTitle");
    }

    #[test]
    fn test_attribute_overrides() {
        let attrs: HashMap<&str, &str> = [
            ("data-api-path", "/v2/tasks/"),
            ("data-banner-timeout-ms", " 2500 "),
        ]
        .into_iter()
        .collect();

        let config = UiConfig::default()
            .with_overrides(|name| attrs.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.api_path, "/v2/tasks/");
        assert_eq!(config.banner_timeout_ms, 2500);
        assert_eq!(config.sparkle_count, 6);
    }

    #[test]
    fn test_bad_number_override() {
        let err = UiConfig::default()
            .with_overrides(|name| (name == "data-sparkle-count").then(|| "lots".to_string()))
            .unwrap_err();
        assert!(matches!(err, UiError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_relative_api_path() {
        let config = UiConfig::builder().api_path("api/data/").build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let config = UiConfig::builder().list_id("  ").build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_threshold_out_of_range() {
        let config = UiConfig::builder().reveal_threshold(1.5).build();
        assert!(config.validate().is_err());
    }
}
