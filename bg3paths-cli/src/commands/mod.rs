use anyhow::Context;
use clap::Subcommand;
use std::io::Write;
use std::path::{Path, PathBuf};

use bg3paths::config::PersistedConfig;
use bg3paths::platform::{HomeOverride, HostPlatform};

pub mod config;
pub mod resolve;

/// Flags shared by every subcommand
pub struct GlobalArgs {
    pub home: Option<PathBuf>,
    pub tilde: bool,
    /// Config file to read and edit, if the platform has a config directory
    pub config_file: Option<PathBuf>,
}

impl GlobalArgs {
    /// The config file, required by commands that edit it
    pub fn config_file(&self) -> anyhow::Result<&Path> {
        self.config_file
            .as_deref()
            .context("no config directory on this platform; pass --config <FILE>")
    }

    /// The persisted config, or defaults when there is none
    pub fn load_config(&self) -> PersistedConfig {
        self.config_file
            .as_deref()
            .map(PersistedConfig::load_or_default)
            .unwrap_or_default()
    }

    /// Host platform with the effective home override: `--home`, then the config file
    pub fn platform(&self, config: &PersistedConfig) -> anyhow::Result<HomeOverride<HostPlatform>> {
        let platform = match &self.home {
            Some(home) => HomeOverride::new(HostPlatform, Some(home.clone()))?,
            None => config.platform()?,
        };
        Ok(platform)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the BG3 user data directory
    Game,

    /// Print the BG3 Mods directory
    Mods,

    /// Inspect or edit the persisted config
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the config file location and home override
    Show,

    /// Persist a home directory override
    SetHome {
        /// Home directory to resolve from
        path: PathBuf,
    },

    /// Remove the persisted home directory override
    ClearHome,
}

impl Commands {
    pub fn execute(&self, args: &GlobalArgs, out: &mut impl Write) -> anyhow::Result<()> {
        match self {
            Commands::Game => resolve::game(args, out),
            Commands::Mods => resolve::mods(args, out),
            Commands::Config { command } => match command {
                ConfigCommands::Show => config::show(args, out),
                ConfigCommands::SetHome { path } => config::set_home(args, path, out),
                ConfigCommands::ClearHome => config::clear_home(args, out),
            },
        }
    }
}
