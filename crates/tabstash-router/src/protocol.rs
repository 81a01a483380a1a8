//! Command protocol
//!
//! The message boundary between UI surfaces and the router: one request
//! variant per command, one response variant per command outcome, checked
//! exhaustively. Wire names (`action`, `sessionName`, `sessionId`,
//! `tabs`) stay compatible with the records the extension passed around.

use serde::{Deserialize, Serialize};

use tabstash_session::{Session, TabRef};

/// A command issued by a UI surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Request {
    /// Save the current window's tabs as a new named session
    SaveSession { session_name: String },
    /// Reopen a session as a new window
    LoadSession { session_id: String },
    /// Remove a session
    DeleteSession { session_id: String },
    /// List all sessions, most recently touched first
    GetSessions,
    /// Fetch one session by id
    GetSession { session_id: String },
    /// Replace a session's tab list
    UpdateSessionTabs {
        session_id: String,
        tabs: Vec<TabRef>,
    },
    /// Open the management view for a session
    OpenTabManager { session_id: String },
}

/// The single response produced for each request.
///
/// Not-found outcomes are carried as `None` payloads; only store or
/// platform failures produce [`Response::Failed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Response {
    /// The created session
    Saved { session: Session },
    /// The reopened session, or `None` if the id was unknown
    Loaded { session: Option<Session> },
    /// The collection after deletion
    Deleted { sessions: Vec<Session> },
    /// The sorted collection
    Listed { sessions: Vec<Session> },
    /// The session, or `None` if the id was unknown
    Fetched { session: Option<Session> },
    /// The updated session, or `None` if the id was unknown
    Updated { session: Option<Session> },
    /// The command had no data to return
    Ack,
    /// Explicit failure indicator; the command had no effect
    Failed { error: String },
}

impl Response {
    pub fn is_failed(&self) -> bool {
        matches!(self, Response::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_names() {
        let req = Request::SaveSession {
            session_name: "Work".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"action\":\"saveSession\""));
        assert!(json.contains("\"sessionName\":\"Work\""));

        let req: Request = serde_json::from_str(
            r#"{"action":"updateSessionTabs","sessionId":"abc","tabs":[{"url":"https://a.com"}]}"#,
        )
        .unwrap();
        match req {
            Request::UpdateSessionTabs { session_id, tabs } => {
                assert_eq!(session_id, "abc");
                assert_eq!(tabs.len(), 1);
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn test_failed_response_round_trip() {
        let resp = Response::Failed {
            error: "quota exceeded".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        let back: Response = serde_json::from_str(&json).unwrap();
        assert!(back.is_failed());
    }
}
