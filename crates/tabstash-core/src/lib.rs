//! TabStash Core
//!
//! Wires storage, the session store, the command router, and the surface
//! view models into one application object. Everything platform-specific
//! enters through the [`BrowserHost`] capability.

mod app;
mod config;
mod error;

pub use app::App;
pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use tabstash_router::{BrowserHost, HostError, Request, Response, Router, WindowId};
pub use tabstash_session::{Session, SessionError, SessionStore, TabRef};
pub use tabstash_storage::{Database, StorageError};
pub use tabstash_surfaces::{Event, EventBus, ManagerView, Notice, PopupView};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
