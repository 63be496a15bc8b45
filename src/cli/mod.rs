//! CLI module for the user CRUD application
//!
//! Provides subcommands:
//! - `serve`: run the web server (default)
//! - `migrate`: apply PostgreSQL schema migrations and exit

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// User CRUD - server-rendered user management
#[derive(Parser)]
#[command(name = "user-crud")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Default, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the web server (default mode)
    #[default]
    Serve,

    /// Apply database migrations and exit
    Migrate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["user-crud"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::Serve);
    }

    #[test]
    fn test_migrate_subcommand() {
        let cli = Cli::try_parse_from(["user-crud", "migrate"]).unwrap();
        assert_eq!(cli.command, Some(Command::Migrate));
    }
}
