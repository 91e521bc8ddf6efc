mod signin;
mod signout;
mod signup;
mod status;

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `kambaz auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Signin(args) => signin::handle(args, ctx, flags).await,
        AuthCommands::Signup(args) => signup::handle(args, ctx, flags).await,
        AuthCommands::Signout => signout::handle(ctx, flags).await,
        AuthCommands::Status { verify } => status::handle(*verify, ctx, flags).await,
    }
}

/// Use `given`, or read one line from stdin after printing `label`.
fn password_or_prompt(given: Option<&str>, label: &str) -> anyhow::Result<String> {
    if let Some(value) = given {
        return Ok(value.to_string());
    }
    eprint!("{label}: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
