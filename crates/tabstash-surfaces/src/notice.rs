//! Transient user-facing notices
//!
//! Failures never crash a surface; they become a notice the renderer
//! shows briefly and auto-dismisses. The view model only keeps the
//! latest one.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
