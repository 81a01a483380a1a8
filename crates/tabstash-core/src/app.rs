//! Application wiring

use std::sync::Arc;

use tabstash_router::{BrowserHost, Router};
use tabstash_session::SessionStore;
use tabstash_storage::Database;
use tabstash_surfaces::{EventBus, ManagerView, PopupView};

use crate::config::Config;
use crate::Result;

/// The assembled application: one store, one router, one refresh bus.
///
/// Surfaces handed out by [`popup`](Self::popup) and
/// [`manager`](Self::manager) all commit through the same router, so
/// every mutation is serialized by the store underneath.
pub struct App {
    config: Config,
    router: Arc<Router>,
    bus: Arc<EventBus>,
}

impl App {
    pub fn new(config: Config, host: Arc<dyn BrowserHost>) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        Ok(Self::assemble(config, db, host))
    }

    /// Fully in-memory instance for tests and ephemeral use
    pub fn in_memory(host: Arc<dyn BrowserHost>) -> Result<Self> {
        let db = Database::open_in_memory()?;
        Ok(Self::assemble(Config::default(), db, host))
    }

    fn assemble(config: Config, db: Database, host: Arc<dyn BrowserHost>) -> Self {
        let store = SessionStore::new(db);
        let router = Arc::new(Router::new(store, host));

        tracing::info!(database = %config.database_path.display(), "TabStash ready");

        Self {
            config,
            router,
            bus: Arc::new(EventBus::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    /// Open the popup surface over the shared router
    pub fn popup(&self) -> PopupView {
        PopupView::open(self.router.clone())
    }

    /// Open the management surface for one session
    pub fn manager(&self, session_id: &str) -> ManagerView {
        ManagerView::open(self.router.clone(), self.bus.clone(), session_id)
    }
}
