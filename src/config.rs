//! Configuration management for RAX FTP Client
//!
//! Connection settings come from built-in defaults, an optional TOML file,
//! and `RAX_FTP_CLIENT_*` environment variables, in that order of precedence.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::client::session::DEFAULT_CONTROL_PORT;

/// Default configuration file, looked up in the working directory (extension optional)
const DEFAULT_CONFIG_PATH: &str = "config";

const ENV_PREFIX: &str = "RAX_FTP_CLIENT";

/// Client connection settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    /// Host name or IP address of the FTP server
    /// Environment: RAX_FTP_CLIENT_SERVER_HOST
    pub server_host: String,

    /// FTP control port
    pub control_port: u16,

    pub username: String,

    pub password: String,
}

impl ClientConfig {
    /// Load configuration, reading `path` if given (it must exist) or `config.toml` if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };

        let settings = Config::builder()
            .set_default("control_port", i64::from(DEFAULT_CONTROL_PORT))?
            .set_default("username", "anonymous")?
            .set_default("password", "")?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server_host.trim().is_empty() {
            return Err(ConfigError::Message("server_host cannot be empty".into()));
        }

        if self.control_port == 0 {
            return Err(ConfigError::Message("Control port cannot be 0".into()));
        }

        Ok(())
    }

    /// Host and control port as a connectable address
    pub fn control_socket(&self) -> (&str, u16) {
        (self.server_host.as_str(), self.control_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Environment variables are process-wide; loads must not overlap with a test setting them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn file_values_fill_in_over_defaults() {
        let file = write_config("server_host = \"ftp.example.com\"\nusername = \"alice\"\n");
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let config = ClientConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.server_host, "ftp.example.com");
        assert_eq!(config.control_port, 21);
        assert_eq!(config.username, "alice");
        assert_eq!(config.password, "");
        assert_eq!(config.control_socket(), ("ftp.example.com", 21));
    }

    #[test]
    fn explicit_port_is_used() {
        let file =
            write_config("server_host = \"10.0.0.5\"\ncontrol_port = 2121\npassword = \"pw\"\n");
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let config = ClientConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.control_port, 2121);
        assert_eq!(config.password, "pw");
    }

    #[test]
    fn zero_port_is_rejected() {
        let file = write_config("server_host = \"10.0.0.5\"\ncontrol_port = 0\n");
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        assert!(ClientConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        assert!(ClientConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn env_values_keep_leading_zeros() {
        let file = write_config("server_host = \"ftp.example.com\"\n");
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        // SAFETY: ENV_LOCK serializes every test in this module that reads the environment.
        unsafe {
            std::env::set_var("RAX_FTP_CLIENT_PASSWORD", "0123");
            std::env::set_var("RAX_FTP_CLIENT_USERNAME", "007");
            std::env::set_var("RAX_FTP_CLIENT_CONTROL_PORT", "2121");
        }
        let loaded = ClientConfig::load(Some(file.path()));
        unsafe {
            std::env::remove_var("RAX_FTP_CLIENT_PASSWORD");
            std::env::remove_var("RAX_FTP_CLIENT_USERNAME");
            std::env::remove_var("RAX_FTP_CLIENT_CONTROL_PORT");
        }

        let config = loaded.unwrap();
        assert_eq!(config.password, "0123");
        assert_eq!(config.username, "007");
        assert_eq!(config.control_port, 2121);
    }

    #[test]
    fn empty_host_fails_validation() {
        let config = ClientConfig {
            server_host: " ".into(),
            control_port: 21,
            username: "anonymous".into(),
            password: String::new(),
        };
        assert!(config.validate().is_err());
    }
}
