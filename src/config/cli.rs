
use crate::config::toml_config::{LoggingConfig, ServerConfig, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sujets")]
#[command(about = "List topics from a sujets server and submit new ones")]
pub struct CliConfig {
    #[arg(
        long,
        env = "SUJETS_BASE_URL",
        default_value = "http://127.0.0.1:5000",
        global = true
    )]
    pub base_url: String,

    #[arg(long, default_value = "/api/sujets", global = true)]
    pub topics_path: String,

    #[arg(long, global = true, help = "Request timeout in seconds (none by default)")]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, global = true, help = "Read server settings from a TOML file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the current topic list
    List,
    /// Submit one topic, then print the refreshed list
    Add { titre: String },
    /// Read one topic per line from stdin until EOF
    Interactive,
}

/// 合併命令列與設定檔後的最終設定
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

impl CliConfig {
    fn server_from_flags(&self) -> ServerConfig {
        ServerConfig {
            base_url: self.base_url.clone(),
            topics_path: Some(self.topics_path.clone()),
            timeout_seconds: self.timeout_seconds,
        }
    }

    /// 有 `--config` 時以檔案中的 server 設定為準；日誌旗標兩邊取聯集
    pub fn resolve(&self) -> Result<Settings> {
        let (server, file_logging) = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                (file.server, file.logging.unwrap_or_default())
            }
            None => (self.server_from_flags(), LoggingConfig::default()),
        };

        let logging = LoggingConfig {
            verbose: Some(self.verbose || file_logging.verbose.unwrap_or(false)),
            json: Some(self.json_logs || file_logging.json.unwrap_or(false)),
        };

        Ok(Settings { server, logging })
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.server.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_add_command_with_defaults() {
        let cli = CliConfig::try_parse_from(["sujets", "add", "  Bonjour  "]).unwrap();

        assert_eq!(cli.base_url, "http://127.0.0.1:5000");
        assert_eq!(cli.topics_path, "/api/sujets");
        assert!(matches!(cli.command, Command::Add { ref titre } if titre == "  Bonjour  "));
    }

    #[test]
    fn test_flags_resolve_without_config_file() {
        let cli = CliConfig::try_parse_from([
            "sujets",
            "--base-url",
            "http://forum.local:8000",
            "--timeout-seconds",
            "3",
            "list",
        ])
        .unwrap();

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.server.base_url(), "http://forum.local:8000");
        assert_eq!(settings.server.topics_path(), "/api/sujets");
        assert_eq!(settings.server.timeout_seconds, Some(3));
        assert_eq!(settings.logging.verbose, Some(false));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_config_file_overrides_server_flags() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[server]
base_url = "https://sujets.example.com"

[logging]
json = true
"#,
            )
            .unwrap();

        let path = temp_file.path().to_str().unwrap().to_string();
        let cli = CliConfig::try_parse_from(["sujets", "-v", "--config", &path, "list"]).unwrap();

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.server.base_url(), "https://sujets.example.com");
        assert_eq!(settings.logging.verbose, Some(true));
        assert_eq!(settings.logging.json, Some(true));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = CliConfig::try_parse_from([
            "sujets",
            "--config",
            "/nonexistent/sujets.toml",
            "list",
        ])
        .unwrap();

        assert!(cli.resolve().is_err());
    }
}
