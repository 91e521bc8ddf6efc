//! # kz-auth
//!
//! Persists the backend session between CLI invocations.
//!
//! Signin returns a user and a session cookie; both are written to a local
//! file and replayed by later commands. Sessions are bound to the API base
//! that issued them.

pub mod error;
pub mod session_store;

pub use error::AuthError;
pub use session_store::{SessionStore, StoredSession};

/// Load the stored session for `api_base`.
///
/// Returns `Ok(None)` when nobody is signed in.
///
/// # Errors
///
/// Returns [`AuthError::ServerMismatch`] when the session was issued by a
/// different server, or [`AuthError::SessionStore`] on read failures.
pub fn current_session(
    store: &SessionStore,
    api_base: &str,
) -> Result<Option<StoredSession>, AuthError> {
    match store.load()? {
        Some(session) if session.server != api_base => Err(AuthError::ServerMismatch {
            stored: session.server,
            configured: api_base.to_string(),
        }),
        other => Ok(other),
    }
}

/// Like [`current_session`] but signed-in is mandatory.
///
/// # Errors
///
/// Returns [`AuthError::NotSignedIn`] when no session is stored, plus the
/// errors of [`current_session`].
pub fn require_session(store: &SessionStore, api_base: &str) -> Result<StoredSession, AuthError> {
    current_session(store, api_base)?.ok_or(AuthError::NotSignedIn)
}
