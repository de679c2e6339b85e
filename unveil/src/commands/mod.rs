mod check;
mod completions;
mod decode;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use decode::DecodeCommand;
use eyre::Result;

#[derive(Parser)]
#[command(name = "unveil")]
#[command(version)]
#[command(about = "Decode base64 data in Kubernetes Secret manifests into typed YAML")]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Used when no subcommand is given
    #[command(flatten)]
    decode: DecodeCommand,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Some(Commands::Decode(cmd)) => cmd.run(),
            Some(Commands::Check(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
            None => self.decode.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Decode every secret manifest in a directory (the default)
    Decode(DecodeCommand),

    /// Report which manifests would decode, without writing anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_no_subcommand_decodes_current_directory() {
        let cli = Cli::try_parse_from(["unveil"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.decode.dir, Path::new("."));
        assert_eq!(cli.decode.pattern, "*.yaml");
        assert_eq!(cli.decode.suffix, "_decoded");
        assert!(!cli.decode.dry_run);
    }

    #[test]
    fn test_top_level_decode_flags() {
        let cli = Cli::try_parse_from(["unveil", "--dir", "secrets", "--dry-run"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.decode.dir, Path::new("secrets"));
        assert!(cli.decode.dry_run);
    }

    #[test]
    fn test_decode_subcommand() {
        let cli = Cli::try_parse_from(["unveil", "decode", "-s", ".plain"]).unwrap();

        match cli.command {
            Some(Commands::Decode(cmd)) => assert_eq!(cmd.suffix, ".plain"),
            _ => panic!("expected decode subcommand"),
        }
    }

    #[test]
    fn test_check_subcommand() {
        let cli = Cli::try_parse_from(["unveil", "check", "-d", "secrets"]).unwrap();

        match cli.command {
            Some(Commands::Check(cmd)) => assert_eq!(cmd.dir, Path::new("secrets")),
            _ => panic!("expected check subcommand"),
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;

        Cli::command().debug_assert();
    }
}
