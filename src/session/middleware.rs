//! Axum middleware that resolves the session cookie on every request.
//!
//! The resolved [`SessionId`] is inserted into request extensions so view
//! handlers can extract it with `Extension<SessionId>`. When the store minted
//! a fresh session, the response gains a `Set-Cookie` header.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use super::store::SessionStore;

pub async fn resolve_session(
    State(store): State<SessionStore>,
    mut request: Request,
    next: Next,
) -> Response {
    let cookie = request
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|header| find_cookie(header, store.cookie_name()))
        .map(str::to_owned);

    let (session_id, created) = store.resolve(cookie.as_deref()).await;
    if created {
        debug!("created session {session_id}");
    }
    request.extensions_mut().insert(session_id);

    let mut response = next.run(request).await;

    if created {
        match HeaderValue::from_str(&store.set_cookie_header(session_id)) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => warn!("failed to encode session cookie: {e}"),
        }
    }

    response
}

/// Pick one cookie's value out of a `Cookie` request header.
fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_among_others() {
        let header = "theme=dark; taskpad_session=abc123; lang=en";
        assert_eq!(find_cookie(header, "taskpad_session"), Some("abc123"));
    }

    #[test]
    fn finds_single_cookie() {
        assert_eq!(find_cookie("taskpad_session=xyz", "taskpad_session"), Some("xyz"));
    }

    #[test]
    fn missing_cookie_returns_none() {
        assert_eq!(find_cookie("theme=dark", "taskpad_session"), None);
    }

    #[test]
    fn name_must_match_exactly() {
        assert_eq!(find_cookie("taskpad_session2=abc", "taskpad_session"), None);
    }

    #[test]
    fn empty_header_returns_none() {
        assert_eq!(find_cookie("", "taskpad_session"), None);
    }
}
