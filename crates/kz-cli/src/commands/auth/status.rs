use kz_core::responses::AuthStatusResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Report the stored session; with `verify`, ask the backend for the profile.
pub async fn handle(verify: bool, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let server = ctx.api_base();
    let stored = ctx.session.as_ref().map(|session| session.user.clone());

    let user = match stored {
        Some(user) if verify => {
            match with_spinner("Checking session", ctx.client.profile()).await {
                Ok(profile) => Some(profile),
                Err(error) => {
                    tracing::warn!(
                        %error,
                        username = %user.username,
                        "stored session was rejected"
                    );
                    None
                }
            }
        }
        other => other,
    };

    output(
        &AuthStatusResponse {
            signed_in: user.is_some(),
            user,
            server,
        },
        flags.format,
    )
}
