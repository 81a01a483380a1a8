//! Browser host capability
//!
//! Window and tab enumeration/creation belong to the platform. The router
//! sees them only through this trait, so the whole command path runs
//! against a test double without a real browser.

use thiserror::Error;

use tabstash_session::TabRef;

pub type WindowId = u64;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Platform call failed: {0}")]
    Platform(String),
}

pub trait BrowserHost: Send + Sync {
    /// Tabs of the current window, in on-screen order
    fn list_open_tabs(&self) -> Result<Vec<TabRef>, HostError>;

    /// The focused tab of the current window, if any
    fn active_tab(&self) -> Result<Option<TabRef>, HostError>;

    /// Open a new window with exactly these URLs, in order
    fn open_window(&self, urls: &[String]) -> Result<WindowId, HostError>;

    /// Open the management view parameterized by a session id
    fn open_manager_view(&self, session_id: &str) -> Result<(), HostError>;
}
