//! Command dispatch

use std::sync::Arc;

use thiserror::Error;

use tabstash_session::{SessionError, SessionStore};

use crate::host::{BrowserHost, HostError};
use crate::protocol::{Request, Response};

#[derive(Error, Debug)]
enum DispatchError {
    #[error("{0}")]
    Session(#[from] SessionError),

    #[error("{0}")]
    Host(#[from] HostError),
}

/// Stateless dispatcher translating commands into store and host calls.
pub struct Router {
    store: SessionStore,
    host: Arc<dyn BrowserHost>,
}

impl Router {
    pub fn new(store: SessionStore, host: Arc<dyn BrowserHost>) -> Self {
        Self { store, host }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn host(&self) -> &Arc<dyn BrowserHost> {
        &self.host
    }

    /// Handle one command and produce exactly one response.
    ///
    /// Never returns an error and never panics: store and platform
    /// failures come back as [`Response::Failed`]. No retries.
    pub fn dispatch(&self, request: Request) -> Response {
        match self.try_dispatch(request) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Command failed");
                Response::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    fn try_dispatch(&self, request: Request) -> Result<Response, DispatchError> {
        match request {
            Request::SaveSession { session_name } => {
                let tabs = self.host.list_open_tabs()?;
                let session = self.store.create(&session_name, tabs)?;
                Ok(Response::Saved { session })
            }
            Request::LoadSession { session_id } => {
                let Some(session) = self.store.get(&session_id)? else {
                    return Ok(Response::Loaded { session: None });
                };

                let urls: Vec<String> =
                    session.tabs.iter().map(|tab| tab.url.clone()).collect();
                let window_id = self.host.open_window(&urls)?;
                let session = self.store.mark_opened(&session_id, window_id)?;

                tracing::info!(
                    session_id = %session_id,
                    window_id,
                    "Reopened session"
                );

                Ok(Response::Loaded { session })
            }
            Request::DeleteSession { session_id } => {
                let sessions = self.store.delete(&session_id)?;
                Ok(Response::Deleted { sessions })
            }
            Request::GetSessions => {
                let sessions = self.store.list()?;
                Ok(Response::Listed { sessions })
            }
            Request::GetSession { session_id } => {
                let session = self.store.get(&session_id)?;
                Ok(Response::Fetched { session })
            }
            Request::UpdateSessionTabs { session_id, tabs } => {
                let session = self.store.update_tabs(&session_id, tabs)?;
                Ok(Response::Updated { session })
            }
            Request::OpenTabManager { session_id } => {
                self.host.open_manager_view(&session_id)?;
                Ok(Response::Ack)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use parking_lot::Mutex;
    use tabstash_session::TabRef;
    use tabstash_storage::Database;

    use crate::host::WindowId;

    /// Test double standing in for the browser platform
    #[derive(Default)]
    struct MockHost {
        open_tabs: Vec<TabRef>,
        fail_platform: bool,
        opened_windows: Mutex<Vec<Vec<String>>>,
        manager_views: Mutex<Vec<String>>,
    }

    impl MockHost {
        fn with_tabs(urls: &[&str]) -> Self {
            Self {
                open_tabs: urls.iter().map(|u| TabRef::new(*u)).collect(),
                ..Self::default()
            }
        }
    }

    impl BrowserHost for MockHost {
        fn list_open_tabs(&self) -> Result<Vec<TabRef>, HostError> {
            if self.fail_platform {
                return Err(HostError::Platform("tab query failed".to_string()));
            }
            Ok(self.open_tabs.clone())
        }

        fn active_tab(&self) -> Result<Option<TabRef>, HostError> {
            Ok(self.open_tabs.first().cloned())
        }

        fn open_window(&self, urls: &[String]) -> Result<WindowId, HostError> {
            if self.fail_platform {
                return Err(HostError::Platform("window creation failed".to_string()));
            }
            self.opened_windows.lock().push(urls.to_vec());
            Ok(7)
        }

        fn open_manager_view(&self, session_id: &str) -> Result<(), HostError> {
            self.manager_views.lock().push(session_id.to_string());
            Ok(())
        }
    }

    fn router_with(host: MockHost) -> (Router, Arc<MockHost>) {
        let host = Arc::new(host);
        let store = SessionStore::new(Database::open_in_memory().unwrap());
        (Router::new(store, host.clone()), host)
    }

    #[test]
    fn test_save_snapshots_current_window_tabs() {
        let (router, _host) =
            router_with(MockHost::with_tabs(&["https://a.com", "https://b.com"]));

        let response = router.dispatch(Request::SaveSession {
            session_name: "Work".to_string(),
        });

        match response {
            Response::Saved { session } => {
                assert_eq!(session.name, "Work");
                let urls: Vec<&str> = session.tabs.iter().map(|t| t.url.as_str()).collect();
                assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_load_opens_window_with_exact_url_order() {
        let (router, host) =
            router_with(MockHost::with_tabs(&["https://a.com", "https://b.com"]));

        let saved = match router.dispatch(Request::SaveSession {
            session_name: "Work".to_string(),
        }) {
            Response::Saved { session } => session,
            other => panic!("unexpected response: {other:?}"),
        };

        let response = router.dispatch(Request::LoadSession {
            session_id: saved.id.clone(),
        });

        match response {
            Response::Loaded { session: Some(session) } => {
                assert_eq!(session.window_id, Some(7));
                assert!(session.last_opened.is_some());
            }
            other => panic!("unexpected response: {other:?}"),
        }

        let windows = host.opened_windows.lock();
        assert_eq!(
            *windows,
            vec![vec![
                "https://a.com".to_string(),
                "https://b.com".to_string()
            ]]
        );
    }

    #[test]
    fn test_load_unknown_id_opens_nothing() {
        let (router, host) = router_with(MockHost::default());

        let response = router.dispatch(Request::LoadSession {
            session_id: "missing".to_string(),
        });

        assert!(matches!(response, Response::Loaded { session: None }));
        assert!(host.opened_windows.lock().is_empty());
    }

    #[test]
    fn test_platform_failure_becomes_failed_response() {
        let (router, _host) = router_with(MockHost {
            fail_platform: true,
            ..MockHost::default()
        });

        let response = router.dispatch(Request::SaveSession {
            session_name: "Work".to_string(),
        });
        assert!(response.is_failed());
    }

    #[test]
    fn test_empty_name_save_becomes_failed_response() {
        let (router, _host) = router_with(MockHost::with_tabs(&["https://a.com"]));

        let response = router.dispatch(Request::SaveSession {
            session_name: "  ".to_string(),
        });
        assert!(response.is_failed());

        // Nothing was created
        match router.dispatch(Request::GetSessions) {
            Response::Listed { sessions } => assert!(sessions.is_empty()),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_open_manager_forwards_session_id() {
        let (router, host) = router_with(MockHost::default());

        let response = router.dispatch(Request::OpenTabManager {
            session_id: "abc".to_string(),
        });

        assert!(matches!(response, Response::Ack));
        assert_eq!(*host.manager_views.lock(), vec!["abc".to_string()]);
    }

    #[test]
    fn test_delete_returns_updated_collection() {
        let (router, _host) = router_with(MockHost::with_tabs(&["https://a.com"]));

        let saved = match router.dispatch(Request::SaveSession {
            session_name: "One".to_string(),
        }) {
            Response::Saved { session } => session,
            other => panic!("unexpected response: {other:?}"),
        };

        match router.dispatch(Request::DeleteSession {
            session_id: saved.id,
        }) {
            Response::Deleted { sessions } => assert!(sessions.is_empty()),
            other => panic!("unexpected response: {other:?}"),
        }
    }
}
