use std::path::PathBuf;

use async_trait::async_trait;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaOutcome {
    Applied { known_migrations: usize },
    Skipped { reason: String },
}

/// Creates any schema objects the persistence layer declares but the
/// database lacks. Implementations must be safe to run on every start.
#[async_trait]
pub trait SchemaBootstrapper: Send + Sync {
    async fn ensure_schema(&self) -> Result<SchemaOutcome, MigrateError>;
}

/// Applies the SQL files of a migrations directory that the database has not
/// seen yet. Applied migrations unknown to the directory are left alone and
/// nothing is ever reverted.
pub struct SqlxSchemaBootstrapper {
    pool: PgPool,
    migrations_dir: PathBuf,
}

impl SqlxSchemaBootstrapper {
    pub fn new(pool: PgPool, migrations_dir: impl Into<PathBuf>) -> Self {
        Self {
            pool,
            migrations_dir: migrations_dir.into(),
        }
    }

    /// Reads the migrations directory. `None` when the directory is absent.
    pub async fn load_migrator(&self) -> Result<Option<Migrator>, MigrateError> {
        if !self.migrations_dir.is_dir() {
            return Ok(None);
        }

        let mut migrator = Migrator::new(self.migrations_dir.as_path()).await?;
        migrator.set_ignore_missing(true);
        Ok(Some(migrator))
    }
}

#[async_trait]
impl SchemaBootstrapper for SqlxSchemaBootstrapper {
    async fn ensure_schema(&self) -> Result<SchemaOutcome, MigrateError> {
        let Some(migrator) = self.load_migrator().await? else {
            let reason = format!(
                "migrations directory {} does not exist",
                self.migrations_dir.display()
            );
            warn!(%reason, "skipping schema bootstrap");
            return Ok(SchemaOutcome::Skipped { reason });
        };

        migrator.run(&self.pool).await?;

        let known_migrations = migrator.iter().count();
        info!(
            migrations_dir = %self.migrations_dir.display(),
            known_migrations,
            "schema bootstrap complete"
        );
        Ok(SchemaOutcome::Applied { known_migrations })
    }
}
