use kz_core::responses::AuthStatusResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// End the backend session and delete the local one.
///
/// The local session is removed even when the backend call fails.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if ctx.session.is_some()
        && let Err(error) = ctx.client.signout().await
    {
        tracing::warn!(%error, "backend signout failed; removing local session anyway");
    }
    ctx.store.delete()?;
    ctx.session = None;

    output(
        &AuthStatusResponse {
            signed_in: false,
            user: None,
            server: ctx.api_base(),
        },
        flags.format,
    )
}
