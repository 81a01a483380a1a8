//! TabStash Session Management
//!
//! A Session is a named, ordered snapshot of browser tabs:
//! - Saving captures the tab list of the current window at that instant
//! - Tab order is meaningful; it is the reopen and display order
//! - A session with zero tabs is valid
//! - Sessions are local-only (no cross-device sync)

mod error;
mod session;
mod store;
mod tab;

pub use error::SessionError;
pub use session::Session;
pub use store::SessionStore;
pub use tab::TabRef;

pub type Result<T> = std::result::Result<T, SessionError>;
