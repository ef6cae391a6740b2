use std::path::{Path, PathBuf};

use anyhow::Context;
use parklog_config::PROJECT_DIR;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

const CONFIG_TEMPLATE: &str = r#"# parklog project configuration.
# Environment variables (PARKLOG_DATABASE__PATH, ...) override these values.

[database]
path = ".parklog/national_parks.db"
# url = "libsql://parks.example.io"
# auth_token = ""

[pagination]
parks_per_page = 5
visits_per_page = 3

[auth]
bcrypt_cost = 12
session_file = ".parklog/session.json"
"#;

#[derive(Debug, Serialize)]
struct InitResponse {
    project_root: String,
    config_file: String,
    config_created: bool,
    database: String,
}

/// Handle `parklog init`.
pub async fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = match &flags.project {
        Some(project) => PathBuf::from(project),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let response = execute(&root).await?;
    output(&response, flags.format)
}

async fn execute(root: &Path) -> anyhow::Result<InitResponse> {
    let project_dir = root.join(PROJECT_DIR);
    std::fs::create_dir_all(&project_dir)
        .with_context(|| format!("failed to create {}", project_dir.display()))?;

    let config_file = project_dir.join("config.toml");
    let config_created = !config_file.exists();
    if config_created {
        std::fs::write(&config_file, CONFIG_TEMPLATE)
            .with_context(|| format!("failed to write {}", config_file.display()))?;
    }

    let config = bootstrap::load_config(root)?;
    let database = if config.database.is_remote() {
        config.database.url.clone()
    } else {
        root.join(&config.database.path).display().to_string()
    };
    AppContext::init(root, config).await?;
    tracing::debug!(root = %root.display(), config_created, "initialized parklog project");

    Ok(InitResponse {
        project_root: root.display().to_string(),
        config_file: config_file.display().to_string(),
        config_created,
        database,
    })
}
