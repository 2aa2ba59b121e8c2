use crate::config;
use async_trait::async_trait;
use herodex_migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, ConnectionTrait, DatabaseConnection, DbBackend, DbErr, ExecResult, QueryResult,
    Statement,
};
use std::time::Duration;

/// A handle to the backing store.
///
/// Wraps the sea-orm connection so that services can stay generic over
/// [`ConnectionTrait`] while callers pass this handle around by clone.
#[derive(Clone, Debug)]
pub struct Database {
    db: DatabaseConnection,
}

impl Database {
    /// Connect using the provided configuration, without touching the schema.
    pub async fn new(config: &config::Database) -> Result<Self, anyhow::Error> {
        log::info!("connecting to {}", config.uri);

        let mut opts = ConnectOptions::new(&config.uri);
        opts.min_connections(1)
            .max_connections(5)
            .connect_timeout(Duration::from_secs(5))
            .sqlx_logging_level(log::LevelFilter::Trace);

        let db = sea_orm::Database::connect(opts).await?;

        Ok(Self { db })
    }

    /// Connect and bring the schema up to date.
    pub async fn bootstrap(config: &config::Database) -> Result<Self, anyhow::Error> {
        let database = Self::new(config).await?;
        database.migrate().await?;
        Ok(database)
    }

    /// Apply all pending migrations.
    pub async fn migrate(&self) -> Result<(), anyhow::Error> {
        log::debug!("applying migrations");
        Migrator::up(&self.db, None).await?;
        Ok(())
    }

    /// Drop everything and re-apply the schema. Test use only.
    pub async fn refresh(&self) -> Result<(), anyhow::Error> {
        log::warn!("refreshing database schema");
        Migrator::refresh(&self.db).await?;
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), DbErr> {
        self.db.ping().await
    }

    pub async fn close(self) -> Result<(), DbErr> {
        self.db.close().await
    }
}

#[async_trait]
impl ConnectionTrait for Database {
    fn get_database_backend(&self) -> DbBackend {
        self.db.get_database_backend()
    }

    async fn execute(&self, stmt: Statement) -> Result<ExecResult, DbErr> {
        self.db.execute(stmt).await
    }

    async fn execute_unprepared(&self, sql: &str) -> Result<ExecResult, DbErr> {
        self.db.execute_unprepared(sql).await
    }

    async fn query_one(&self, stmt: Statement) -> Result<Option<QueryResult>, DbErr> {
        self.db.query_one(stmt).await
    }

    async fn query_all(&self, stmt: Statement) -> Result<Vec<QueryResult>, DbErr> {
        self.db.query_all(stmt).await
    }
}
