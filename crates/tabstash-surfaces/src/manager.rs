//! Management surface
//!
//! Edits one session's tab list. The view holds a working copy of the
//! tabs; add/remove/reorder/rename touch only that copy, and nothing
//! reaches the store until the user saves. Saving commits the whole list
//! and broadcasts a refresh so the popup re-reads.

use std::sync::Arc;

use tabstash_router::{BrowserHost, Request, Response, Router};
use tabstash_session::TabRef;

use crate::bus::{Event, EventBus};
use crate::notice::Notice;

pub struct ManagerView {
    router: Arc<Router>,
    host: Arc<dyn BrowserHost>,
    bus: Arc<EventBus>,
    session_id: String,
    session_name: String,
    /// Last committed tab list, kept for cancel
    committed: Vec<TabRef>,
    /// Working copy the edits apply to
    tabs: Vec<TabRef>,
    dirty: bool,
    notice: Option<Notice>,
}

impl ManagerView {
    /// Open the view for one session, identified by the entry-point
    /// parameter. An unknown id leaves the view empty with a notice.
    pub fn open(
        router: Arc<Router>,
        bus: Arc<EventBus>,
        session_id: impl Into<String>,
    ) -> Self {
        let session_id = session_id.into();
        let host = router.host().clone();
        let mut view = Self {
            router,
            host,
            bus,
            session_id,
            session_name: String::new(),
            committed: Vec::new(),
            tabs: Vec::new(),
            dirty: false,
            notice: None,
        };
        view.load();
        view
    }

    fn load(&mut self) {
        match self.router.dispatch(Request::GetSession {
            session_id: self.session_id.clone(),
        }) {
            Response::Fetched { session: Some(session) } => {
                self.session_name = session.name;
                self.committed = session.tabs.clone();
                self.tabs = session.tabs;
                self.dirty = false;
            }
            Response::Fetched { session: None } => {
                self.notice = Some(Notice::new("Session not found"));
            }
            Response::Failed { error } => self.notice = Some(Notice::new(error)),
            other => {
                tracing::warn!(?other, "Unexpected response to getSession");
            }
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn session_name(&self) -> &str {
        &self.session_name
    }

    pub fn tabs(&self) -> &[TabRef] {
        &self.tabs
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    fn has_url(&self, url: &str) -> bool {
        self.tabs.iter().any(|t| t.url == url)
    }

    /// Add the focused tab of the current window, unless its URL is
    /// already in the list.
    pub fn add_current_tab(&mut self) {
        match self.host.active_tab() {
            Ok(Some(tab)) if !tab.url.is_empty() && !self.has_url(&tab.url) => {
                self.tabs.push(tab);
                self.dirty = true;
            }
            Ok(_) => {}
            Err(e) => self.notice = Some(Notice::new(e.to_string())),
        }
    }

    /// Add every tab of the current window whose URL is not already in
    /// the list, preserving window order.
    pub fn add_all_tabs(&mut self) {
        let open_tabs = match self.host.list_open_tabs() {
            Ok(tabs) => tabs,
            Err(e) => {
                self.notice = Some(Notice::new(e.to_string()));
                return;
            }
        };

        let mut added = false;
        for tab in open_tabs {
            if !tab.url.is_empty() && !self.has_url(&tab.url) {
                self.tabs.push(tab);
                added = true;
            }
        }

        if added {
            self.dirty = true;
        } else {
            self.notice = Some(Notice::new("No new tabs to add"));
        }
    }

    /// Remove the tab at a position; out-of-range indices are ignored
    pub fn remove_tab(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.tabs.remove(index);
            self.dirty = true;
        }
    }

    /// Move a tab to a new position (the settled result of a drag)
    pub fn move_tab(&mut self, from: usize, to: usize) {
        if from >= self.tabs.len() || from == to {
            return;
        }
        let tab = self.tabs.remove(from);
        let to = to.min(self.tabs.len());
        self.tabs.insert(to, tab);
        self.dirty = true;
    }

    /// Rename the tab at a position
    pub fn rename_tab(&mut self, index: usize, title: impl Into<String>) {
        if let Some(tab) = self.tabs.get_mut(index) {
            tab.title = Some(title.into());
            self.dirty = true;
        }
    }

    /// Commit the working copy and broadcast a refresh.
    ///
    /// On failure the working copy is left untouched so the user can
    /// retry.
    pub fn save(&mut self) {
        match self.router.dispatch(Request::UpdateSessionTabs {
            session_id: self.session_id.clone(),
            tabs: self.tabs.clone(),
        }) {
            Response::Updated { session: Some(_) } => {
                self.committed = self.tabs.clone();
                self.dirty = false;
                self.bus.publish(Event::RefreshPopup);
            }
            Response::Updated { session: None } => {
                self.notice = Some(Notice::new("Session not found"));
            }
            Response::Failed { error } => self.notice = Some(Notice::new(error)),
            other => {
                tracing::warn!(?other, "Unexpected response to updateSessionTabs");
            }
        }
    }

    /// Discard local edits back to the last committed state
    pub fn cancel(&mut self) {
        self.tabs = self.committed.clone();
        self.dirty = false;
    }
}
