use bg3paths::config::PersistedConfig;
use clap::Parser;
use std::path::PathBuf;

mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "bg3paths")]
#[command(about = "Locate Baldur's Gate 3 user data and Mods directories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Resolve from this home directory instead of the current user's
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print paths with ~ in place of the home directory
    #[arg(long, global = true)]
    tilde: bool,

    /// Log lookup details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for resolved paths
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let args = commands::GlobalArgs {
        home: cli.home,
        tilde: cli.tilde,
        config_file: cli.config.or_else(PersistedConfig::config_path),
    };
    cli.command.execute(&args, &mut std::io::stdout().lock())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::ConfigCommands;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["bg3paths", "mods", "--home", "/Users/Darwin", "--tilde"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Mods));
        assert_eq!(cli.home, Some(PathBuf::from("/Users/Darwin")));
        assert!(cli.tilde);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_config_set_home() {
        let cli = Cli::try_parse_from(["bg3paths", "-v", "config", "set-home", "/Users/Shared"])
            .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Config {
                command: ConfigCommands::SetHome { path },
            } => assert_eq!(path, PathBuf::from("/Users/Shared")),
            _ => panic!("expected config set-home"),
        }
    }

    #[test]
    fn test_parse_config_file_flag() {
        let cli = Cli::try_parse_from(["bg3paths", "config", "show", "--config", "/tmp/bg3.json"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/bg3.json")));
        assert!(matches!(
            cli.command,
            Commands::Config {
                command: ConfigCommands::Show
            }
        ));
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["bg3paths"]).is_err());
        assert!(Cli::try_parse_from(["bg3paths", "config", "set-home"]).is_err());
    }
}
