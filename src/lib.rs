pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::JsonFileCartSource;
pub use config::FragmentConfig;
pub use crate::core::{
    engine::FragmentEngine,
    fragments::{collect_fragments, FragmentRegistry},
    menu::MenuInjector,
    renderer::{render_cart_badge, CartBadgeRenderer, CartSummaryRenderer, CART_BADGE_SELECTOR},
};
pub use domain::model::{CartSnapshot, FragmentEntry, FragmentResponse, FragmentSet};
pub use utils::error::{FragmentError, Result};
