use crate::repositories::{
    CatalogStore, EphemeralOrderStore, MemoryOrderStore, OrderStore, PgCatalogStore,
    PgOrderStore, StaticCatalogStore,
};
use deli_primitives::error::ApiError;
use deli_primitives::models::app_state::storage_details::{StorageBackend, StorageInfo};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::{PgConnection, RunQueryDsl};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../../migrations");

/// Storage capability decided once at startup and never revisited.
#[derive(Clone)]
pub enum Persistence {
    Postgres(DbPool),
    Memory,
    Unavailable,
}

impl Persistence {
    /// Connects, checks the connection and applies pending migrations.
    /// Any failure leaves the process running without persistence.
    pub fn probe(storage: &StorageInfo) -> Self {
        if storage.backend == StorageBackend::Memory {
            info!("Using in-memory storage; orders will not survive a restart");
            return Persistence::Memory;
        }

        let Some(db_url) = &storage.database_url else {
            warn!("DATABASE_URL is not set; running without order persistence");
            return Persistence::Unavailable;
        };

        match connect(db_url) {
            Ok(pool) => {
                info!("PostgreSQL connection pool created; orders will be persisted");
                Persistence::Postgres(pool)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    "Database unreachable at startup; serving the fixed catalog and dropping order writes"
                );
                Persistence::Unavailable
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Persistence::Postgres(_) => "postgres",
            Persistence::Memory => "memory",
            Persistence::Unavailable => "unavailable",
        }
    }

    pub fn catalog_store(&self) -> Arc<dyn CatalogStore> {
        match self {
            Persistence::Postgres(pool) => Arc::new(PgCatalogStore::new(pool.clone())),
            Persistence::Memory | Persistence::Unavailable => Arc::new(StaticCatalogStore::seeded()),
        }
    }

    pub fn order_store(&self) -> Arc<dyn OrderStore> {
        match self {
            Persistence::Postgres(pool) => Arc::new(PgOrderStore::new(pool.clone())),
            Persistence::Memory => Arc::new(MemoryOrderStore::new()),
            Persistence::Unavailable => Arc::new(EphemeralOrderStore),
        }
    }

    /// Round-trips a trivial query. `Memory` is always healthy, `Unavailable` never is.
    pub fn check(&self) -> Result<(), ApiError> {
        match self {
            Persistence::Postgres(pool) => {
                let mut conn = pool.get()?;
                diesel::sql_query("SELECT 1").execute(&mut conn)?;
                Ok(())
            }
            Persistence::Memory => Ok(()),
            Persistence::Unavailable => Err(ApiError::PersistenceUnavailable(
                "no database connection".into(),
            )),
        }
    }
}

fn connect(db_url: &SecretString) -> Result<DbPool, ApiError> {
    let manager = ConnectionManager::<PgConnection>::new(db_url.expose_secret());

    let pool = Pool::builder()
        .max_size(16)
        .min_idle(Some(2))
        .connection_timeout(Duration::from_secs(5))
        .idle_timeout(Some(Duration::from_secs(300)))
        .max_lifetime(Some(Duration::from_secs(1800)))
        .test_on_check_out(true)
        .build(manager)?;

    let mut conn = pool.get()?;
    diesel::sql_query("SELECT 1").execute(&mut conn)?;
    run_migrations(&mut conn)?;

    Ok(pool)
}

pub fn run_migrations(conn: &mut PgConnection) -> Result<(), ApiError> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| ApiError::PersistenceUnavailable(format!("migrations failed: {}", e)))?;

    if !applied.is_empty() {
        info!("Applied {} database migrations", applied.len());
    }
    Ok(())
}
