use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use roi_report::db::{DbPool, establish_connection_pool};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A throwaway sqlite database with the schema applied; files disappear with
/// the temp directory when the test ends.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let database_url = dir.path().join(name).display().to_string();
        let pool =
            establish_connection_pool(&database_url).expect("failed to build connection pool");
        {
            let mut conn = pool.get().expect("failed to get connection");
            conn.run_pending_migrations(MIGRATIONS)
                .expect("failed to run migrations");
        }
        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
