use std::path::{Path, PathBuf};

use anyhow::Context;
use parklog_auth::SessionStore;
use parklog_config::ParkConfig;
use parklog_core::context::RequestContext;
use parklog_db::service::ParkService;

/// Shared application resources initialized once per invocation.
pub struct AppContext {
    pub service: ParkService,
    pub config: ParkConfig,
    /// Signed-in user, pending request, and flash messages for this run.
    pub request: RequestContext,
    pub session: SessionStore,
}

impl AppContext {
    /// Open the park database and load the saved session.
    ///
    /// Relative paths in `config` resolve against `project_root`.
    pub async fn init(project_root: &Path, config: ParkConfig) -> anyhow::Result<Self> {
        let service = if config.database.is_remote() {
            ParkService::new_remote(&config.database.url, &config.database.auth_token)
                .await
                .context("failed to open remote park database")?
        } else {
            let db_path = resolve_db_path(project_root, &config.database.path);
            if let Some(parent) = db_path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            ParkService::new_local(&db_path.to_string_lossy())
                .await
                .context("failed to open park database")?
        };

        let session = SessionStore::new(project_root.join(&config.auth.session_file));
        let request = session.load();
        tracing::debug!(
            root = %project_root.display(),
            signed_in = request.is_signed_in(),
            "initialized app context"
        );

        Ok(Self {
            service,
            config,
            request,
            session,
        })
    }

    /// Persist the session so the next invocation sees the same sign-in.
    pub fn save_session(&self) -> anyhow::Result<()> {
        if self.request.is_signed_in() || self.request.original_request.is_some() {
            self.session.store(&self.request)?;
            tracing::debug!(path = %self.session.path().display(), "saved session");
        } else {
            self.session.clear()?;
            tracing::debug!(path = %self.session.path().display(), "cleared session");
        }
        Ok(())
    }
}

fn resolve_db_path(project_root: &Path, path: &str) -> PathBuf {
    if path == ":memory:" {
        return PathBuf::from(path);
    }
    project_root.join(path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn config_in_memory() -> ParkConfig {
        let mut config = ParkConfig::default();
        config.database.path = ":memory:".into();
        config
    }

    #[test]
    fn relative_db_path_joins_project_root() {
        let root = PathBuf::from("/srv/parks");
        assert_eq!(
            resolve_db_path(&root, ".parklog/national_parks.db"),
            PathBuf::from("/srv/parks/.parklog/national_parks.db")
        );
        assert_eq!(
            resolve_db_path(&root, "/var/db/parks.db"),
            PathBuf::from("/var/db/parks.db")
        );
        assert_eq!(resolve_db_path(&root, ":memory:"), PathBuf::from(":memory:"));
    }

    #[tokio::test]
    async fn session_survives_between_contexts() {
        let temp = TempDir::new().expect("tempdir should create");

        let mut ctx = AppContext::init(temp.path(), config_in_memory())
            .await
            .expect("context should init");
        assert!(!ctx.request.is_signed_in());
        ctx.request.sign_in("ranger");
        ctx.save_session().expect("session should save");

        let ctx = AppContext::init(temp.path(), config_in_memory())
            .await
            .expect("context should init");
        assert_eq!(ctx.request.username(), Some("ranger"));
    }

    #[tokio::test]
    async fn signing_out_removes_session_file() {
        let temp = TempDir::new().expect("tempdir should create");
        let mut ctx = AppContext::init(temp.path(), config_in_memory())
            .await
            .expect("context should init");
        ctx.request.sign_in("ranger");
        ctx.save_session().expect("session should save");
        assert!(ctx.session.path().exists());

        ctx.request.sign_out();
        ctx.save_session().expect("session should save");
        assert!(!ctx.session.path().exists());
    }

    #[tokio::test]
    async fn local_database_file_is_created_under_project() {
        let temp = TempDir::new().expect("tempdir should create");
        AppContext::init(temp.path(), ParkConfig::default())
            .await
            .expect("context should init");
        assert!(temp.path().join(".parklog/national_parks.db").exists());
    }
}
