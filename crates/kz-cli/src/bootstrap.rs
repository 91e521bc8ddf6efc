use std::path::Path;

use anyhow::Context;
use kz_config::KambazConfig;

const PROJECT_DOTENV: &str = ".kambaz/.env";

/// Load dotenv files, then the layered config.
///
/// `.kambaz/.env` wins over a plain `.env` in the working directory.
pub fn load_config() -> anyhow::Result<KambazConfig> {
    load_project_dotenv()?;
    KambazConfig::load_with_dotenv().context("failed to load kambaz configuration")
}

fn load_project_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(Path::new(PROJECT_DOTENV));
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        tracing::debug!(path = %env_path.display(), "loaded project dotenv");
    }
    Ok(())
}
