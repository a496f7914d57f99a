// NOTE: Command layout
//
// Top-level verbs for the frequent actions (login, posts, summary, dashboard),
// one namespace (`config`) for setup. Running with no command opens the
// dashboard when a session exists and prints guidance otherwise.

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pulseboard")]
#[command(about = "Dashboard for your social-media post metrics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $PULSEBOARD_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pulseboard",
            "posts",
            "--limit",
            "5",
            "--format",
            "csv",
            "--data-dir",
            "/tmp/pb",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Csv);
        assert_eq!(cli.data_dir.as_deref(), Some("/tmp/pb"));
        assert!(matches!(cli.command, Some(Commands::Posts { limit: Some(5) })));
    }

    #[test]
    fn test_no_command_is_allowed() {
        let cli = Cli::try_parse_from(["pulseboard"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, LogLevel::Warn);
    }
}
