use crate::config::page_config::PageConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hello-client")]
#[command(about = "Calls the greeting server endpoints and prints what the page would show")]
pub struct CliConfig {
    /// Actions to fire, by page name (loadGetMsg) or alias (get, post, pi, e). Defaults to all.
    pub actions: Vec<String>,

    #[arg(long, help = "Server base URL, overrides the config file")]
    pub base_url: Option<String>,

    #[arg(long, short, help = "Page configuration TOML file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Value typed into the GET name field")]
    pub name: Option<String>,

    #[arg(long, help = "Value typed into the POST name field")]
    pub post_name: Option<String>,

    #[arg(long, help = "Treat non-2xx responses as errors instead of rendering them")]
    pub reject_error_status: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 載入頁面配置並套用命令列覆寫
    pub fn page_config(&self) -> Result<PageConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading page config from {}", path.display());
                PageConfig::from_file(path)?
            }
            None => PageConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.server.base_url = base_url.clone();
        }
        if self.reject_error_status {
            config.server.reject_error_status = true;
        }

        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            validate_url("--base-url", base_url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = CliConfig::parse_from(["hello-client"]);
        assert!(cli.actions.is_empty());
        assert!(cli.base_url.is_none());

        let config = cli.page_config().unwrap();
        assert_eq!(config.server.base_url, "http://localhost:35000");
        assert!(!config.server.reject_error_status);
    }

    #[test]
    fn test_overrides() {
        let cli = CliConfig::parse_from([
            "hello-client",
            "--base-url",
            "http://127.0.0.1:9000",
            "--reject-error-status",
            "--name",
            "John 2",
            "get",
            "pi",
        ]);

        assert_eq!(cli.actions, vec!["get", "pi"]);
        assert_eq!(cli.name.as_deref(), Some("John 2"));
        assert!(cli.validate().is_ok());

        let config = cli.page_config().unwrap();
        assert_eq!(config.server.base_url, "http://127.0.0.1:9000");
        assert!(config.server.reject_error_status);
    }

    #[test]
    fn test_invalid_base_url() {
        let cli = CliConfig::parse_from(["hello-client", "--base-url", "localhost"]);
        assert!(cli.validate().is_err());
    }
}
