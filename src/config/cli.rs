use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cart-fragments")]
#[command(about = "Render cart fragments for AJAX cart refreshes")]
pub struct CliConfig {
    /// Cart snapshot JSON exported by the commerce engine
    #[arg(long)]
    pub snapshot: String,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Render menu items for this menu location instead of the fragment response
    #[arg(long, requires = "menu_items")]
    pub menu_location: Option<String>,

    /// Existing menu item markup to append the cart badge to
    #[arg(long, requires = "menu_location")]
    pub menu_items: Option<String>,

    #[arg(long, help = "Pretty-print the JSON response")]
    pub pretty: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl ConfigProvider for CliConfig {
    fn snapshot_path(&self) -> &str {
        &self.snapshot
    }

    fn config_path(&self) -> Option<&str> {
        self.config.as_deref()
    }

    fn pretty(&self) -> bool {
        self.pretty
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("snapshot", &self.snapshot)
    }
}
