//! CLI commands for the persisted config

use std::io::Write;
use std::path::Path;

use bg3paths::config::PersistedConfig;

use super::GlobalArgs;

/// Show the config file location and the effective home directory
pub fn show(args: &GlobalArgs, out: &mut impl Write) -> anyhow::Result<()> {
    match &args.config_file {
        Some(path) => writeln!(out, "Config file: {}", path.display())?,
        None => writeln!(out, "Config file: (no config directory on this platform)")?,
    }

    let config = args.load_config();
    match &config.home_dir {
        Some(home) => writeln!(out, "Saved home override: {}", home.display())?,
        None => writeln!(out, "Saved home override: (none)")?,
    }

    let platform = args.platform(&config)?;
    match platform.home_override() {
        Some(home) if args.home.is_some() => {
            writeln!(out, "Effective home override: {} (from --home)", home.display())?;
        }
        Some(home) => writeln!(out, "Effective home override: {}", home.display())?,
        None => writeln!(out, "Effective home override: (none)")?,
    }

    Ok(())
}

/// Persist a home directory override
pub fn set_home(args: &GlobalArgs, path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let file = args.config_file()?;
    if !path.is_dir() {
        tracing::warn!("{} is not a directory; saving anyway", path.display());
    }

    let mut config = PersistedConfig::load_or_default(file);
    let home = config.set_home_dir(path)?.to_path_buf();
    config.save_to(file)?;
    writeln!(out, "Home override set to {}", home.display())?;
    Ok(())
}

/// Remove the persisted home directory override
pub fn clear_home(args: &GlobalArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let file = args.config_file()?;
    let mut config = PersistedConfig::load_or_default(file);
    if config.home_dir.take().is_none() {
        writeln!(out, "No home override set")?;
        return Ok(());
    }

    config.save_to(file)?;
    writeln!(out, "Home override cleared")?;
    Ok(())
}
