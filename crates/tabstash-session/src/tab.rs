//! Tab reference data structure

use serde::{Deserialize, Serialize};

/// One saved tab: enough to reopen it and to render a list row.
///
/// Field names on the wire stay compatible with the records the browser
/// extension stored (`url`, `title`, `favIconUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabRef {
    /// Target URL; required for the tab to be reopenable
    pub url: String,
    /// Page title; display falls back to a placeholder when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Favicon URL if the browser reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fav_icon_url: Option<String>,
}

impl TabRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            fav_icon_url: None,
        }
    }

    pub fn with_title(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: Some(title.into()),
            fav_icon_url: None,
        }
    }

    /// Get display title (with fallback to a placeholder)
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "Untitled",
        }
    }
}
