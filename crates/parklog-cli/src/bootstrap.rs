use std::path::Path;

use anyhow::Context;
use parklog_config::ParkConfig;

/// Load `.env` from the project root (if any), then the layered configuration.
pub fn load_config(project_root: &Path) -> anyhow::Result<ParkConfig> {
    load_project_dotenv(project_root)?;
    ParkConfig::load_for_project(project_root).context("failed to load parklog configuration")
}

fn load_project_dotenv(project_root: &Path) -> anyhow::Result<()> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        tracing::debug!(path = %env_path.display(), "loaded project dotenv");
    }
    Ok(())
}
