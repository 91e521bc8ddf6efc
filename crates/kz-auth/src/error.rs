use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not signed in, run `kambaz auth signin`")]
    NotSignedIn,

    #[error("stored session belongs to {stored}, not {configured}; run `kambaz auth signin`")]
    ServerMismatch { stored: String, configured: String },

    #[error("session store error: {0}")]
    SessionStore(String),
}
