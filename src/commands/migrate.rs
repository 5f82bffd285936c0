//! Migrate command - Database migration management.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config).await?;

    for line in run(&db, args.action).await? {
        println!("{}", line);
    }

    Ok(())
}

/// Apply a migration action, returning status lines for `Status`.
pub async fn run(db: &Database, action: MigrateAction) -> AppResult<Vec<String>> {
    match action {
        MigrateAction::Up => {
            tracing::info!("Running pending migrations...");
            db.run_migrations().await?;
            tracing::info!("Migrations completed successfully");
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back last migration...");
            db.rollback_migration().await?;
            tracing::info!("Rollback completed successfully");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            return Ok(status
                .into_iter()
                .map(|(name, applied)| {
                    let status_str = if applied { "applied" } else { "pending" };
                    format!("{}: {}", name, status_str)
                })
                .collect());
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations...");
            db.fresh_migrations().await?;
            tracing::info!("Fresh migrations completed successfully");
        }
    }

    Ok(Vec::new())
}
