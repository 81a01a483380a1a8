//! TabStash Command Router
//!
//! Stateless dispatch between UI surfaces and the session store. Each
//! named command maps to exactly one store or host call and produces
//! exactly one response; failures never cross the boundary as errors,
//! they come back as an explicit [`Response::Failed`].

mod host;
mod protocol;
mod router;

pub use host::{BrowserHost, HostError, WindowId};
pub use protocol::{Request, Response};
pub use router::Router;
