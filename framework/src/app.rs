//! Application runner
//!
//! Parses the command line, loads configuration, opens the database pool
//! and then either serves HTTP or runs a migration command.
//!
//! # Example
//!
//! ```rust,ignore
//! use todolist_web::Application;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     Application::new()
//!         .routes(routes::register)
//!         .migrations::<migrations::Migrator>()
//!         .run()
//!         .await
//! }
//! ```

use crate::config::Config;
use crate::database::DbConnection;
use crate::logging;
use crate::routing::Router;
use crate::server::Server;
use clap::{Parser, Subcommand};
use sea_orm_migration::prelude::*;
use std::marker::PhantomData;
use std::path::PathBuf;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Builds the router once the database pool is open
type RoutesFn = Box<dyn FnOnce(DbConnection) -> Router + Send>;

/// CLI structure for the service binary
#[derive(Parser)]
#[command(name = "todolist")]
#[command(about = "Todo list service and database utilities")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server (default command)
    Serve {
        /// Skip running migrations on startup
        #[arg(long)]
        no_migrate: bool,
    },
    /// Run pending database migrations
    Migrate,
    /// Show migration status
    #[command(name = "migrate:status")]
    MigrateStatus,
    /// Rollback the last migration(s)
    #[command(name = "migrate:rollback")]
    MigrateRollback {
        /// Number of migrations to rollback
        #[arg(default_value = "1")]
        steps: u32,
    },
    /// Drop all tables and re-run all migrations
    #[command(name = "migrate:fresh")]
    MigrateFresh,
}

/// Fluent builder for the service process
pub struct Application<M = NoMigrator>
where
    M: MigratorTrait,
{
    project_root: PathBuf,
    routes_fn: Option<RoutesFn>,
    _migrator: PhantomData<M>,
}

/// Placeholder type for when no migrator is configured
pub struct NoMigrator;

impl MigratorTrait for NoMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![]
    }
}

impl Application<NoMigrator> {
    pub fn new() -> Self {
        Application {
            project_root: PathBuf::from("."),
            routes_fn: None,
            _migrator: PhantomData,
        }
    }
}

impl Default for Application<NoMigrator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Application<M>
where
    M: MigratorTrait,
{
    /// Register the routes function
    ///
    /// It receives the shared database handle, so controllers get their
    /// connection at construction time.
    pub fn routes<F>(mut self, f: F) -> Self
    where
        F: FnOnce(DbConnection) -> Router + Send + 'static,
    {
        self.routes_fn = Some(Box::new(f));
        self
    }

    /// Configure the migrator type for database migrations
    pub fn migrations<NewM>(self) -> Application<NewM>
    where
        NewM: MigratorTrait,
    {
        Application {
            project_root: self.project_root,
            routes_fn: self.routes_fn,
            _migrator: PhantomData,
        }
    }

    /// Run the application
    ///
    /// - `serve` (default): migrate, then run the web server
    /// - `migrate`: run pending migrations
    /// - `migrate:status`: show migration status
    /// - `migrate:rollback`: rollback migrations
    /// - `migrate:fresh`: drop and re-run all migrations
    pub async fn run(self) -> Result<(), BoxError> {
        let cli = Cli::parse();

        let config = Config::load(&self.project_root);
        logging::init(config.app.debug);
        for file in &config.loaded_files {
            tracing::debug!(file = %file.display(), "loaded environment file");
        }
        tracing::info!(
            app = %config.app.name,
            environment = %config.environment(),
            "starting"
        );

        let db = DbConnection::connect(&config.database).await?;

        match cli.command {
            None | Some(Commands::Serve { no_migrate: false }) => {
                if let Err(e) = M::up(db.inner(), None).await {
                    tracing::warn!(error = %e, "migration failed on startup");
                }
                Self::serve(self.routes_fn, db, &config).await
            }
            Some(Commands::Serve { no_migrate: true }) => {
                Self::serve(self.routes_fn, db, &config).await
            }
            Some(Commands::Migrate) => {
                tracing::info!("running migrations");
                M::up(db.inner(), None).await?;
                tracing::info!("migrations completed");
                Ok(())
            }
            Some(Commands::MigrateStatus) => {
                M::status(db.inner()).await?;
                Ok(())
            }
            Some(Commands::MigrateRollback { steps }) => {
                tracing::info!(steps, "rolling back migrations");
                M::down(db.inner(), Some(steps)).await?;
                tracing::info!("rollback completed");
                Ok(())
            }
            Some(Commands::MigrateFresh) => {
                tracing::warn!("dropping all tables and re-running migrations");
                M::fresh(db.inner()).await?;
                tracing::info!("database refreshed");
                Ok(())
            }
        }
    }

    async fn serve(
        routes_fn: Option<RoutesFn>,
        db: DbConnection,
        config: &Config,
    ) -> Result<(), BoxError> {
        let router = match routes_fn {
            Some(routes_fn) => routes_fn(db),
            None => Router::new(),
        };

        Server::from_config(router, &config.server).run().await
    }
}
