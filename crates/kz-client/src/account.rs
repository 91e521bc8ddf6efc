//! Account endpoints: `/users/signin`, `/users/signup`, `/users/profile`,
//! `/users/signout`.

use kz_core::entities::{Credentials, NewUser, User};

use crate::{
    KambazClient,
    error::ClientError,
    http::{check_response, read_json, session_cookie},
};

/// A user plus the session cookie the backend set for them.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub user: User,
    /// `None` when the backend set no cookie.
    pub cookie: Option<String>,
}

impl KambazClient {
    /// Sign in and capture the session cookie.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidCredentials`] on `401`, otherwise any
    /// transport or parse failure.
    pub async fn signin(&self, credentials: &Credentials) -> Result<SignedIn, ClientError> {
        let url = self.url(&["users", "signin"]);
        tracing::debug!(%url, username = %credentials.username, "signing in");
        let resp = self.http.post(&url).json(credentials).send().await?;
        if resp.status() == 401 {
            return Err(ClientError::InvalidCredentials);
        }
        let resp = check_response(resp).await?;
        let cookie = session_cookie(&resp);
        let user = read_json(resp).await?;
        Ok(SignedIn { user, cookie })
    }

    /// Create an account. The backend signs the new user in.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] when the username is taken, otherwise any
    /// transport or parse failure.
    pub async fn signup(&self, new_user: &NewUser) -> Result<SignedIn, ClientError> {
        let url = self.url(&["users", "signup"]);
        let resp = check_response(self.http.post(&url).json(new_user).send().await?).await?;
        let cookie = session_cookie(&resp);
        let user = read_json(resp).await?;
        Ok(SignedIn { user, cookie })
    }

    /// The user behind the current session cookie.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status `401` when the session has
    /// expired.
    pub async fn profile(&self) -> Result<User, ClientError> {
        let url = self.url(&["users", "profile"]);
        let resp = check_response(self.http.post(&url).send().await?).await?;
        read_json(resp).await
    }

    /// End the backend session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn signout(&self) -> Result<(), ClientError> {
        let url = self.url(&["users", "signout"]);
        check_response(self.http.post(&url).send().await?).await?;
        Ok(())
    }
}
