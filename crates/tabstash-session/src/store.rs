//! Session Store
//!
//! Sole owner of the persisted session collection. Every operation is a
//! full read of the collection, an in-memory transform, and (for
//! mutations) a full write-back, all performed inside one connection
//! guard so in-process mutations are serialized and cannot interleave
//! their read and write phases.

use rusqlite::Connection;
use tabstash_storage::Database;

use crate::error::SessionError;
use crate::session::Session;
use crate::tab::TabRef;
use crate::Result;

/// Well-known key the whole collection is stored under
const SESSIONS_KEY: &str = "sessions";

pub struct SessionStore {
    db: Database,
}

impl SessionStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn read_collection(conn: &Connection) -> tabstash_storage::Result<Vec<Session>> {
        match Database::get_with(conn, SESSIONS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_collection(
        conn: &Connection,
        sessions: &[Session],
    ) -> tabstash_storage::Result<()> {
        let raw = serde_json::to_string(sessions)?;
        Database::put_with(conn, SESSIONS_KEY, &raw)
    }

    /// Create a new session from a snapshot of the supplied tabs.
    ///
    /// The name must be non-blank; this is enforced here so every caller
    /// gets the same contract regardless of which surface issued the save.
    pub fn create(&self, name: &str, tabs: Vec<TabRef>) -> Result<Session> {
        if name.trim().is_empty() {
            return Err(SessionError::EmptyName);
        }

        let session = Session::new(name.to_string(), tabs);
        let created = session.clone();

        self.db.with_connection(|conn| {
            let mut sessions = Self::read_collection(conn)?;
            sessions.push(session);
            Self::write_collection(conn, &sessions)
        })?;

        tracing::info!(
            session_id = %created.id,
            session_name = %created.name,
            tab_count = created.tab_count(),
            "Saved session"
        );

        Ok(created)
    }

    /// Look up a session by id. Absence is `Ok(None)`, not an error.
    pub fn get(&self, session_id: &str) -> Result<Option<Session>> {
        let found = self.db.with_connection(|conn| {
            let sessions = Self::read_collection(conn)?;
            Ok(sessions.into_iter().find(|s| s.id == session_id))
        })?;
        Ok(found)
    }

    /// All sessions, most recently touched first.
    ///
    /// Sessions that were never updated sort by creation time. The sort is
    /// stable, so ties keep their stored relative order.
    pub fn list(&self) -> Result<Vec<Session>> {
        let mut sessions = self
            .db
            .with_connection(|conn| Self::read_collection(conn))?;
        sessions.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
        Ok(sessions)
    }

    /// Replace a session's tab list with a new snapshot and bump
    /// `updated_at`. Returns `Ok(None)` when the id is unknown.
    ///
    /// Tabs are stored exactly as supplied; duplicate or odd URLs are the
    /// caller's concern at this layer.
    pub fn update_tabs(&self, session_id: &str, tabs: Vec<TabRef>) -> Result<Option<Session>> {
        let updated = self.db.with_connection(|conn| {
            let mut sessions = Self::read_collection(conn)?;
            let Some(session) = sessions.iter_mut().find(|s| s.id == session_id) else {
                return Ok(None);
            };

            session.replace_tabs(tabs);
            let updated = session.clone();
            Self::write_collection(conn, &sessions)?;
            Ok(Some(updated))
        })?;

        if let Some(session) = &updated {
            tracing::info!(
                session_id = %session.id,
                tab_count = session.tab_count(),
                "Updated session tabs"
            );
        }

        Ok(updated)
    }

    /// Remove a session and return the updated collection. Deleting an
    /// unknown id is a no-op, not an error.
    pub fn delete(&self, session_id: &str) -> Result<Vec<Session>> {
        let (removed, sessions) = self.db.with_connection(|conn| {
            let mut sessions = Self::read_collection(conn)?;
            let before = sessions.len();
            sessions.retain(|s| s.id != session_id);

            let removed = sessions.len() != before;
            if removed {
                Self::write_collection(conn, &sessions)?;
            }
            Ok((removed, sessions))
        })?;

        if removed {
            tracing::info!(session_id = %session_id, "Deleted session");
        }

        Ok(sessions)
    }

    /// Record that a session was reopened into a live window. Returns
    /// `Ok(None)` when the id is unknown.
    pub fn mark_opened(&self, session_id: &str, window_id: u64) -> Result<Option<Session>> {
        let opened = self.db.with_connection(|conn| {
            let mut sessions = Self::read_collection(conn)?;
            let Some(session) = sessions.iter_mut().find(|s| s.id == session_id) else {
                return Ok(None);
            };

            session.mark_opened(window_id);
            let opened = session.clone();
            Self::write_collection(conn, &sessions)?;
            Ok(Some(opened))
        })?;

        Ok(opened)
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
