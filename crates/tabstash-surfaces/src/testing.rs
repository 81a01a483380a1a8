//! Shared test fixtures for the surface view models

use std::sync::Arc;

use parking_lot::Mutex;

use tabstash_router::{BrowserHost, HostError, Router, WindowId};
use tabstash_session::{SessionStore, TabRef};
use tabstash_storage::Database;

use crate::bus::EventBus;

/// Test double standing in for the browser platform
#[derive(Default)]
pub struct MockHost {
    pub open_tabs: Mutex<Vec<TabRef>>,
    pub opened_windows: Mutex<Vec<Vec<String>>>,
    pub manager_views: Mutex<Vec<String>>,
}

impl MockHost {
    pub fn set_open_tabs(&self, urls: &[&str]) {
        *self.open_tabs.lock() = urls.iter().map(|u| TabRef::new(*u)).collect();
    }
}

impl BrowserHost for MockHost {
    fn list_open_tabs(&self) -> Result<Vec<TabRef>, HostError> {
        Ok(self.open_tabs.lock().clone())
    }

    fn active_tab(&self) -> Result<Option<TabRef>, HostError> {
        Ok(self.open_tabs.lock().first().cloned())
    }

    fn open_window(&self, urls: &[String]) -> Result<WindowId, HostError> {
        self.opened_windows.lock().push(urls.to_vec());
        Ok(1)
    }

    fn open_manager_view(&self, session_id: &str) -> Result<(), HostError> {
        self.manager_views.lock().push(session_id.to_string());
        Ok(())
    }
}

pub fn fixture() -> (Arc<Router>, Arc<MockHost>, Arc<EventBus>) {
    let (router, host, bus, _db) = fixture_with_db();
    (router, host, bus)
}

pub fn fixture_with_db() -> (Arc<Router>, Arc<MockHost>, Arc<EventBus>, Database) {
    let host = Arc::new(MockHost::default());
    let db = Database::open_in_memory().unwrap();
    let store = SessionStore::new(db.clone());
    let router = Arc::new(Router::new(store, host.clone()));
    let bus = Arc::new(EventBus::new());
    (router, host, bus, db)
}
