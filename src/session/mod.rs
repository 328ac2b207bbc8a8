//! Session
//!
//! Token persistence, the shared session handle and the session view model.

mod handle;
mod store;
mod view_model;

pub use handle::{SessionHandle, SessionState};
pub use store::{BrowserSessionStore, MemorySessionStore, SessionStore};
pub use view_model::SessionViewModel;
