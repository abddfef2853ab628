//! Per-session state: an in-memory store keyed by a cookie-delivered session
//! identifier, plus the axum middleware that resolves the cookie on each
//! request.

pub mod middleware;
pub mod store;

pub use middleware::resolve_session;
pub use store::{SessionId, SessionStore};
