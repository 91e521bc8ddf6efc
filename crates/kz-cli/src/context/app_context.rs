use anyhow::Context;
use kz_auth::{AuthError, SessionStore, StoredSession};
use kz_client::KambazClient;
use kz_config::KambazConfig;
use kz_core::entities::User;
use kz_core::enums::Role;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: KambazConfig,
    pub client: KambazClient,
    pub store: SessionStore,
    pub session: Option<StoredSession>,
}

impl AppContext {
    /// Load the stored session and build a client that replays its cookie.
    ///
    /// A session issued by another server is ignored with a warning.
    pub fn init(config: KambazConfig) -> anyhow::Result<Self> {
        let store = SessionStore::default_location()?;
        let api_base = config.server.api_base();

        let session = match kz_auth::current_session(&store, &api_base) {
            Ok(session) => session,
            Err(error @ AuthError::ServerMismatch { .. }) => {
                tracing::warn!(%error, "ignoring stored session");
                None
            }
            Err(error) => return Err(error).context("failed to read stored session"),
        };

        let cookie = session.as_ref().and_then(|s| s.cookie.as_deref());
        let client = KambazClient::new(&api_base, config.server.timeout(), cookie)
            .context("failed to build HTTP client")?;

        Ok(Self {
            config,
            client,
            store,
            session,
        })
    }

    pub fn api_base(&self) -> String {
        self.config.server.api_base()
    }

    /// Signed-in user, or the "not signed in" error.
    pub fn user(&self) -> anyhow::Result<&User> {
        self.session
            .as_ref()
            .map(|session| &session.user)
            .ok_or_else(|| AuthError::NotSignedIn.into())
    }

    pub fn role(&self) -> anyhow::Result<Role> {
        Ok(self.user()?.role)
    }

    /// Signed-in user with authoring rights.
    pub fn require_author(&self, action: &str) -> anyhow::Result<&User> {
        let user = self.user()?;
        user.role.require_author(action)?;
        Ok(user)
    }

    /// Signed-in user who may take quizzes.
    pub fn require_student(&self, action: &str) -> anyhow::Result<&User> {
        let user = self.user()?;
        user.role.require_student(action)?;
        Ok(user)
    }

    /// Course from `--course`, falling back to `general.default_course`.
    pub fn course(&self, flags: &GlobalFlags) -> anyhow::Result<String> {
        Ok(self
            .config
            .general
            .resolve_course(flags.course.as_deref())?)
    }

    /// Student whose attempts a command looks at: `--student` for staff,
    /// otherwise the signed-in user.
    pub fn attempt_owner(&self, student: Option<&str>) -> anyhow::Result<String> {
        let user = self.user()?;
        match student {
            Some(id) if id != user.id => {
                user.role.require_author("view another student's attempts")?;
                Ok(id.to_string())
            }
            _ => Ok(user.id.clone()),
        }
    }
}
