use crate::core::fragments::FragmentRegistry;
use crate::core::menu::{MenuInjector, DEFAULT_MENU_LOCATION};
use crate::core::renderer::{
    CartBadgeRenderer, CartSummaryRenderer, DEFAULT_BADGE_TITLE, DEFAULT_SUMMARY_TITLE,
};
use crate::utils::error::{FragmentError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const BADGE_TRIGGER: &str = "cart_badge";
pub const SUMMARY_TRIGGER: &str = "cart_summary";

/// Every section is optional; an empty file yields the default storefront markup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FragmentConfig {
    #[serde(default)]
    pub shop: ShopConfig,
    #[serde(default)]
    pub badge: BadgeConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
    #[serde(default)]
    pub menu: MenuConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_badge_title")]
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_summary_title")]
    pub title: String,
    #[serde(default = "default_singular")]
    pub singular: String,
    #[serde(default = "default_plural")]
    pub plural: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "default_menu_location")]
    pub location: String,
}

fn default_true() -> bool {
    true
}

fn default_badge_title() -> String {
    DEFAULT_BADGE_TITLE.to_string()
}

fn default_summary_title() -> String {
    DEFAULT_SUMMARY_TITLE.to_string()
}

fn default_singular() -> String {
    "item".to_string()
}

fn default_plural() -> String {
    "items".to_string()
}

fn default_menu_location() -> String {
    DEFAULT_MENU_LOCATION.to_string()
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: default_badge_title(),
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: default_summary_title(),
            singular: default_singular(),
            plural: default_plural(),
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            location: default_menu_location(),
        }
    }
}

impl FragmentConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FragmentError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FragmentError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references with environment values; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FragmentError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(base_url) = &self.shop.base_url {
            validate_url("shop.base_url", base_url)?;
        }

        validate_non_empty_string("badge.title", &self.badge.title)?;
        validate_non_empty_string("summary.title", &self.summary.title)?;
        validate_non_empty_string("summary.singular", &self.summary.singular)?;
        validate_non_empty_string("summary.plural", &self.summary.plural)?;
        validate_non_empty_string("menu.location", &self.menu.location)?;

        Ok(())
    }

    pub fn badge_renderer(&self) -> CartBadgeRenderer {
        CartBadgeRenderer::new(self.badge.title.clone())
    }

    pub fn summary_renderer(&self) -> CartSummaryRenderer {
        CartSummaryRenderer::new(
            self.summary.title.clone(),
            self.summary.singular.clone(),
            self.summary.plural.clone(),
        )
    }

    /// Registry with the summary link first, then the badge, skipping disabled ones.
    pub fn build_registry(&self) -> FragmentRegistry {
        let mut registry = FragmentRegistry::new();
        if self.summary.enabled {
            registry.register(SUMMARY_TRIGGER, self.summary_renderer());
        }
        if self.badge.enabled {
            registry.register(BADGE_TRIGGER, self.badge_renderer());
        }
        registry
    }

    pub fn menu_injector(&self) -> MenuInjector {
        MenuInjector::new(self.menu.location.clone(), self.badge_renderer())
    }
}

impl Validate for FragmentConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
