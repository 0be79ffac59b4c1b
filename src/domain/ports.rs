use crate::domain::model::{CartSnapshot, FragmentEntry};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The commerce engine side: hands over the current visitor's cart state.
#[async_trait]
pub trait CartSource: Send + Sync {
    async fn snapshot(&self) -> Result<CartSnapshot>;
}

/// Renders one fragment. Implementations must be pure: same snapshot, same bytes.
pub trait FragmentRenderer: Send + Sync {
    /// CSS selector the client uses to find the node to replace.
    fn selector(&self) -> &str;
    fn render(&self, snapshot: &CartSnapshot) -> Result<FragmentEntry>;
}

pub trait ConfigProvider: Send + Sync {
    fn snapshot_path(&self) -> &str;
    fn config_path(&self) -> Option<&str>;
    fn pretty(&self) -> bool;
}
