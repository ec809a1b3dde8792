// ABOUTME: Configuration loading for the voxpop application shell.
// ABOUTME: Binds environment variables and .env files into startup Settings.

use std::path::{Path, PathBuf};

/// Default storage directory for history records, relative to the working
/// directory. Matches the store's documented default.
pub const DEFAULT_HISTORY_DIR: &str = "history";

/// Process-wide settings loaded at startup. The store never reads
/// configuration itself; the resolved directory is handed to it explicitly.
#[derive(Debug, Clone)]
pub struct Settings {
    pub history_dir: PathBuf,
}

impl Settings {
    /// Load settings from environment variables with defaults. Infallible:
    /// every field has a default, and re-calling observes a changed
    /// environment.
    ///
    /// Environment variables:
    /// - VOXPOP_HISTORY_DIR: history record directory (default: history)
    pub fn from_env() -> Self {
        let history_dir = std::env::var("VOXPOP_HISTORY_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_HISTORY_DIR));

        Self { history_dir }
    }
}

/// Pick which `.env` file to load: one in the working directory wins over
/// the installation default sitting next to the executable.
fn resolve_env_file(cwd: &Path, install_dir: Option<&Path>) -> Option<PathBuf> {
    let cwd_env = cwd.join(".env");
    if cwd_env.exists() {
        return Some(cwd_env);
    }

    let install_env = install_dir?.join(".env");
    install_env.exists().then_some(install_env)
}

/// Load environment overrides from the resolved `.env` file, if any exists.
/// Variables already present in the process environment keep priority.
pub fn load_env_file() {
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(_) => return,
    };
    let install_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    if let Some(path) = resolve_env_file(&cwd, install_dir.as_deref())
        && let Err(e) = dotenvy::from_path(&path)
    {
        tracing::warn!("failed to load env file {}: {}", path.display(), e);
    }
}
