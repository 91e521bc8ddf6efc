use clap::{Args, Subcommand};

/// Account commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in and remember the session.
    Signin(AuthSigninArgs),
    /// Create an account and sign in.
    Signup(AuthSignupArgs),
    /// End the session and forget it locally.
    Signout,
    /// Show who is signed in.
    Status {
        /// Ask the backend whether the session is still valid.
        #[arg(long)]
        verify: bool,
    },
}

#[derive(Clone, Debug, Args)]
pub struct AuthSigninArgs {
    #[arg(long)]
    pub username: String,
    /// Read from stdin when omitted.
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSignupArgs {
    #[arg(long)]
    pub username: String,
    /// Read from stdin when omitted.
    #[arg(long)]
    pub password: Option<String>,
    /// STUDENT, FACULTY, TA or ADMIN.
    #[arg(long, default_value = "STUDENT")]
    pub role: String,
}
