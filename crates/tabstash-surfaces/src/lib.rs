//! TabStash UI Surfaces
//!
//! Headless view models behind the popup and the management page. Each
//! surface keeps its own working copy of session state, applies edits
//! locally, and only commits through the command router when the user
//! saves. Surfaces stay eventually consistent through an explicit refresh
//! broadcast; there is no live two-way binding.
//!
//! Rendering, drag gesture handling, and favicon derivation live outside
//! this crate.

mod bus;
mod manager;
mod notice;
mod popup;

#[cfg(test)]
mod testing;

pub use bus::{Event, EventBus};
pub use manager::ManagerView;
pub use notice::Notice;
pub use popup::PopupView;
