//! Session data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tab::TabRef;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique identifier, assigned at creation
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Ordered tab snapshot; order is the reopen/display order
    pub tabs: Vec<TabRef>,
    /// When the session was created
    pub created_at: DateTime<Utc>,
    /// Last tab-list mutation; absent until the first update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Window the session was last reopened into; informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_id: Option<u64>,
    /// When the session was last reopened; informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_opened: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(name: String, tabs: Vec<TabRef>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            tabs,
            created_at: Utc::now(),
            updated_at: None,
            window_id: None,
            last_opened: None,
        }
    }

    /// Replace the tab list with a new snapshot
    pub fn replace_tabs(&mut self, tabs: Vec<TabRef>) {
        self.tabs = tabs;
        self.updated_at = Some(Utc::now());
    }

    /// Record that the session was reopened into a window.
    ///
    /// Not a tab-list mutation, so `updated_at` stays untouched and the
    /// display ordering does not change as a side effect of opening.
    pub fn mark_opened(&mut self, window_id: u64) {
        self.window_id = Some(window_id);
        self.last_opened = Some(Utc::now());
    }

    /// Recency key used to sort the session list for display
    pub fn sort_key(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    /// Get the number of tabs
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}
