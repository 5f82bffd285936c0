//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Message Board - store and list messages over HTTP
#[derive(Parser, Debug)]
#[command(name = "message-board")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),
}

/// Arguments for the serve command
///
/// Unset values fall back to `SERVER_HOST` / `SERVER_PORT` from the config.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_without_overrides() {
        let cli = Cli::try_parse_from(["message-board", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert!(args.host.is_none());
                assert!(args.port.is_none());
            }
            _ => panic!("expected serve command"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_serve_overrides() {
        let cli =
            Cli::try_parse_from(["message-board", "serve", "-H", "127.0.0.1", "-p", "9000"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
                assert_eq!(args.port, Some(9000));
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_migrate_actions() {
        let cases = [
            ("up", MigrateAction::Up),
            ("down", MigrateAction::Down),
            ("status", MigrateAction::Status),
            ("fresh", MigrateAction::Fresh),
        ];

        for (arg, expected) in cases {
            let cli = Cli::try_parse_from(["message-board", "migrate", arg]).unwrap();
            match cli.command {
                Commands::Migrate(args) => assert_eq!(args.action, expected),
                _ => panic!("expected migrate command"),
            }
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["message-board", "migrate", "status", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["message-board", "jobs"]).is_err());
    }
}
