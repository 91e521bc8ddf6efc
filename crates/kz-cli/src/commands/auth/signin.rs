use anyhow::bail;
use kz_auth::StoredSession;
use kz_client::ClientError;
use kz_core::entities::Credentials;
use kz_core::responses::AuthStatusResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthSigninArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Sign in and persist the user plus session cookie for later commands.
pub async fn handle(
    args: &AuthSigninArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let credentials = Credentials {
        username: args.username.clone(),
        password: super::password_or_prompt(args.password.as_deref(), "Password")?,
    };

    let signed_in = match with_spinner("Signing in", ctx.client.signin(&credentials)).await {
        Ok(signed_in) => signed_in,
        Err(ClientError::InvalidCredentials) => bail!("Invalid credentials"),
        Err(error) => return Err(error.into()),
    };
    if signed_in.cookie.is_none() {
        tracing::warn!("backend set no session cookie; later requests may be rejected");
    }

    let server = ctx.api_base();
    let session = StoredSession::new(signed_in.user, signed_in.cookie, &server);
    ctx.store.save(&session)?;
    tracing::debug!(path = %ctx.store.path().display(), "session saved");

    let response = AuthStatusResponse {
        signed_in: true,
        user: Some(session.user.clone()),
        server,
    };
    ctx.session = Some(session);
    output(&response, flags.format)
}
