//! Startup configuration, read from flags or the environment.

use clap::Parser;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "NOTES_HOST";
    pub const PORT: &str = "NOTES_PORT";
    pub const CACHE_DIR: &str = "NOTES_CACHE_DIR";
}

/// `-h` is taken by `--host`, so the built-in help flag is replaced with a
/// long-only `--help`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "notes-service",
    version,
    about = "In-memory note storage over HTTP",
    disable_help_flag = true
)]
pub struct Config {
    /// Server address
    #[arg(short = 'h', long, env = env_vars::HOST)]
    pub host: String,

    /// Server port
    #[arg(short = 'p', long, env = env_vars::PORT)]
    pub port: u16,

    /// Path to the cache directory
    #[arg(short = 'c', long, env = env_vars::CACHE_DIR)]
    pub cache: PathBuf,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

impl Config {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Create the cache directory if it does not exist yet
    pub fn ensure_cache_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::tempdir;

    #[test]
    fn test_command_definition() {
        Config::command().debug_assert();
    }

    #[test]
    fn test_parse_short_flags() {
        let config =
            Config::try_parse_from(["notes-service", "-h", "127.0.0.1", "-p", "8081", "-c", "cache"])
                .expect("Failed to parse flags");

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8081);
        assert_eq!(config.cache, PathBuf::from("cache"));
        assert_eq!(config.socket_addr(), "127.0.0.1:8081");
    }

    #[test]
    fn test_parse_long_flags() {
        let config = Config::try_parse_from([
            "notes-service",
            "--host",
            "0.0.0.0",
            "--port",
            "3000",
            "--cache",
            "/tmp/notes-cache",
        ])
        .expect("Failed to parse flags");

        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result =
            Config::try_parse_from(["notes-service", "-h", "localhost", "-p", "http", "-c", "cache"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_options_rejected() {
        let result = Config::try_parse_from(["notes-service", "-p", "8081"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ensure_cache_dir() {
        let dir = tempdir().unwrap();
        let cache = dir.path().join("cache");
        let config = Config::try_parse_from([
            "notes-service",
            "-h",
            "localhost",
            "-p",
            "8081",
            "-c",
            cache.to_str().unwrap(),
        ])
        .unwrap();

        config.ensure_cache_dir().expect("Failed to create cache dir");
        assert!(cache.is_dir());

        // Existing directory is fine
        config.ensure_cache_dir().expect("Failed on existing cache dir");
    }
}
