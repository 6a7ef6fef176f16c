//! CLI commands for game and Mods directory lookup

use std::io::Write;
use std::path::Path;

use bg3paths::fs::HostFs;
use bg3paths::paths::{PathResolver, path_with_tilde};
use bg3paths::platform::Platform;

use super::GlobalArgs;

/// Print the BG3 user data directory
pub fn game(args: &GlobalArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let resolver = PathResolver::with_parts(args.platform(&args.load_config())?, HostFs);
    write_game_path(&resolver, args.tilde, out)
}

/// Print the BG3 Mods directory
pub fn mods(args: &GlobalArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let resolver = PathResolver::with_parts(args.platform(&args.load_config())?, HostFs);
    write_mods_path(&resolver, args.tilde, out)
}

pub fn write_game_path<P: Platform>(
    resolver: &PathResolver<P, HostFs>,
    tilde: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let path = resolver.game_path()?;
    write_path(&path, resolver.platform(), tilde, out)
}

pub fn write_mods_path<P: Platform>(
    resolver: &PathResolver<P, HostFs>,
    tilde: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let path = resolver.mods_path()?;
    write_path(&path, resolver.platform(), tilde, out)
}

fn write_path(
    path: &Path,
    platform: &impl Platform,
    tilde: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match platform.home_dir() {
        Some(home) if tilde => writeln!(out, "{}", path_with_tilde(path, &home))?,
        _ => writeln!(out, "{}", path.display())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bg3paths::Error;
    use bg3paths::platform::{FixedPlatform, HomeOverride, SUPPORTED_OS};
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn game_dir(home: &Path) -> PathBuf {
        home.join("Documents").join("Larian Studios").join("Baldur's Gate 3")
    }

    /// Resolver as `--home <home>` builds it, on a macOS host
    fn resolver(home: &Path) -> PathResolver<HomeOverride<FixedPlatform>, HostFs> {
        let platform = HomeOverride::new(
            FixedPlatform::without_home(SUPPORTED_OS),
            Some(home.to_path_buf()),
        )
        .unwrap();
        PathResolver::with_parts(platform, HostFs)
    }

    fn output(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_game_and_mods_paths() {
        let home = TempDir::new().unwrap();
        fs::create_dir_all(game_dir(home.path()).join("Mods")).unwrap();
        let resolver = resolver(home.path());

        let mut out = Vec::new();
        write_game_path(&resolver, false, &mut out).unwrap();
        write_mods_path(&resolver, false, &mut out).unwrap();

        let game = game_dir(home.path());
        assert_eq!(
            output(out),
            format!("{}\n{}\n", game.display(), game.join("Mods").display())
        );
    }

    #[test]
    fn test_write_mods_path_with_tilde() {
        let home = TempDir::new().unwrap();
        fs::create_dir_all(game_dir(home.path()).join("Mods")).unwrap();

        let mut out = Vec::new();
        write_mods_path(&resolver(home.path()), true, &mut out).unwrap();
        assert_eq!(output(out), "~/Documents/Larian Studios/Baldur's Gate 3/Mods\n");
    }

    #[test]
    fn test_missing_mods_dir_is_an_error() {
        let home = TempDir::new().unwrap();
        fs::create_dir_all(game_dir(home.path())).unwrap();

        let mut out = Vec::new();
        let err = write_mods_path(&resolver(home.path()), false, &mut out).unwrap_err();
        match err.downcast_ref::<Error>() {
            Some(Error::PathMissing { path }) => assert_eq!(path, &game_dir(home.path()).join("Mods")),
            other => panic!("expected PathMissing, got {other:?}"),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn test_mods_command_against_home_flag() {
        let home = TempDir::new().unwrap();
        fs::create_dir_all(game_dir(home.path()).join("Mods")).unwrap();
        let args = GlobalArgs {
            home: Some(home.path().to_path_buf()),
            tilde: true,
            config_file: Some(home.path().join("config.json")),
        };

        let mut out = Vec::new();
        let result = mods(&args, &mut out);
        if std::env::consts::OS == SUPPORTED_OS {
            result.unwrap();
            assert_eq!(output(out), "~/Documents/Larian Studios/Baldur's Gate 3/Mods\n");
        } else {
            let err = result.unwrap_err();
            assert!(matches!(
                err.downcast_ref::<Error>(),
                Some(Error::UnsupportedOs { current_os }) if current_os == std::env::consts::OS
            ));
            assert!(out.is_empty());
        }
    }
}
