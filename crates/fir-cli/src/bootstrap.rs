use std::path::Path;

use anyhow::Context;
use fir_config::FirConfig;

/// Project directory holding `config.toml` and an optional `.env`.
const PROJECT_DIR: &str = ".fir";

pub fn load_config() -> anyhow::Result<FirConfig> {
    load_dotenv(Path::new("."))?;
    FirConfig::load().context("failed to load FIR configuration")
}

/// Load `.fir/.env` when present, otherwise a plain `.env` from `root`.
/// Variables already set in the environment win.
fn load_dotenv(root: &Path) -> anyhow::Result<()> {
    let project_env = root.join(PROJECT_DIR).join(".env");
    if project_env.exists() {
        dotenvy::from_path(&project_env).with_context(|| {
            format!("failed to load dotenv file at {}", project_env.display())
        })?;
        return Ok(());
    }

    let env_path = root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
