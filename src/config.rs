//! Runtime configuration.
//!
//! Database path, first match wins:
//! 1. `--db` flag
//! 2. MESSENGER_DB env var
//! 3. `<data dir>/messenger/messenger.db`
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial implementation

use std::path::PathBuf;

use crate::db::connection::default_db_path;

/// Env var overriding the database path.
pub const DB_ENV_VAR: &str = "MESSENGER_DB";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    /// Resolve from the CLI flag and the process environment.
    pub fn resolve(cli_db: Option<&str>) -> Self {
        Self::resolve_with(cli_db, std::env::var(DB_ENV_VAR).ok().as_deref())
    }

    pub fn resolve_with(cli_db: Option<&str>, env_db: Option<&str>) -> Self {
        let db_path = cli_db
            .or(env_db)
            .filter(|p| !p.trim().is_empty())
            .map(expand_path)
            .unwrap_or_else(default_db_path);
        Self { db_path }
    }
}

/// Expand a leading `~` to the home directory.
fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path.trim()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_env() {
        let config = Config::resolve_with(Some("/tmp/a.db"), Some("/tmp/b.db"));
        assert_eq!(config.db_path, PathBuf::from("/tmp/a.db"));
    }

    #[test]
    fn test_env_used_without_flag() {
        let config = Config::resolve_with(None, Some("/tmp/b.db"));
        assert_eq!(config.db_path, PathBuf::from("/tmp/b.db"));
    }

    #[test]
    fn test_default_when_unset_or_blank() {
        assert_eq!(Config::resolve_with(None, None).db_path, default_db_path());
        assert_eq!(Config::resolve_with(None, Some("  ")).db_path, default_db_path());
    }

    #[test]
    fn test_tilde_expanded() {
        if dirs::home_dir().is_none() {
            return;
        }
        let config = Config::resolve_with(Some("~/m.db"), None);
        assert!(!config.db_path.starts_with("~"));
        assert!(config.db_path.ends_with("m.db"));
    }
}
