use kz_auth::StoredSession;
use kz_core::entities::NewUser;
use kz_core::enums::Role;
use kz_core::responses::AuthStatusResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthSignupArgs;
use crate::commands::shared::parse::parse_label;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Create an account; the backend signs the new user in.
pub async fn handle(
    args: &AuthSignupArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let role: Role = parse_label(&args.role, "--role")?;
    let new_user = NewUser {
        username: args.username.clone(),
        password: super::password_or_prompt(args.password.as_deref(), "Password")?,
        role,
    };

    let signed_in = with_spinner("Creating account", ctx.client.signup(&new_user)).await?;

    let server = ctx.api_base();
    let session = StoredSession::new(signed_in.user, signed_in.cookie, &server);
    ctx.store.save(&session)?;

    let response = AuthStatusResponse {
        signed_in: true,
        user: Some(session.user.clone()),
        server,
    };
    ctx.session = Some(session);
    output(&response, flags.format)
}
