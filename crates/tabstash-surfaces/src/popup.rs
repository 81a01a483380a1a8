//! Popup surface
//!
//! Shows the saved session list and collects save/open/delete/manage
//! intent. Holds a cached copy of the list and re-renders from it; the
//! cache is refreshed after every local mutation and on the cross-surface
//! refresh broadcast.

use std::sync::Arc;

use tabstash_router::{Request, Response, Router};
use tabstash_session::Session;

use crate::bus::Event;
use crate::notice::Notice;

pub struct PopupView {
    router: Arc<Router>,
    sessions: Vec<Session>,
    name_input: String,
    notice: Option<Notice>,
}

impl PopupView {
    /// Create the view and load the current session list, as the popup
    /// does when it opens.
    pub fn open(router: Arc<Router>) -> Self {
        let mut view = Self {
            router,
            sessions: Vec::new(),
            name_input: String::new(),
            notice: None,
        };
        view.reload();
        view
    }

    /// The cached list, already sorted by recency
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn set_name_input(&mut self, name: impl Into<String>) {
        self.name_input = name.into();
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    /// Take the pending notice, if any, for display
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Re-issue the list command and replace the cache
    pub fn reload(&mut self) {
        match self.router.dispatch(Request::GetSessions) {
            Response::Listed { sessions } => self.sessions = sessions,
            Response::Failed { error } => self.notice = Some(Notice::new(error)),
            other => {
                tracing::warn!(?other, "Unexpected response to getSessions");
            }
        }
    }

    /// Save the current window's tabs under the entered name.
    ///
    /// Blank input is rejected here without issuing a command; the store
    /// enforces the same rule for any caller that bypasses the popup.
    pub fn save(&mut self) {
        let name = self.name_input.trim().to_string();
        if name.is_empty() {
            self.notice = Some(Notice::new("Session name cannot be empty"));
            return;
        }

        match self.router.dispatch(Request::SaveSession { session_name: name }) {
            Response::Saved { .. } => {
                self.name_input.clear();
                self.reload();
            }
            Response::Failed { error } => self.notice = Some(Notice::new(error)),
            other => {
                tracing::warn!(?other, "Unexpected response to saveSession");
            }
        }
    }

    /// Reopen a saved session as a new window
    pub fn open_session(&mut self, session_id: &str) {
        match self.router.dispatch(Request::LoadSession {
            session_id: session_id.to_string(),
        }) {
            Response::Loaded { session: Some(_) } => self.reload(),
            Response::Loaded { session: None } => {
                self.notice = Some(Notice::new("Session not found"));
            }
            Response::Failed { error } => self.notice = Some(Notice::new(error)),
            other => {
                tracing::warn!(?other, "Unexpected response to loadSession");
            }
        }
    }

    /// Delete a session and refresh the list
    pub fn delete(&mut self, session_id: &str) {
        match self.router.dispatch(Request::DeleteSession {
            session_id: session_id.to_string(),
        }) {
            Response::Deleted { .. } => self.reload(),
            Response::Failed { error } => self.notice = Some(Notice::new(error)),
            other => {
                tracing::warn!(?other, "Unexpected response to deleteSession");
            }
        }
    }

    /// Open the management view for a session
    pub fn manage(&mut self, session_id: &str) {
        match self.router.dispatch(Request::OpenTabManager {
            session_id: session_id.to_string(),
        }) {
            Response::Ack => {}
            Response::Failed { error } => self.notice = Some(Notice::new(error)),
            other => {
                tracing::warn!(?other, "Unexpected response to openTabManager");
            }
        }
    }

    /// React to a cross-surface broadcast
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::RefreshPopup => self.reload(),
        }
    }
}
