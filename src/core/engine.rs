use crate::core::fragments::FragmentRegistry;
use crate::domain::model::FragmentResponse;
use crate::domain::ports::CartSource;
use crate::utils::error::Result;

pub struct FragmentEngine<S: CartSource> {
    source: S,
    registry: FragmentRegistry,
}

impl<S: CartSource> FragmentEngine<S> {
    pub fn new(source: S, registry: FragmentRegistry) -> Self {
        Self { source, registry }
    }

    /// Fetches the current cart and renders every registered fragment for it.
    pub async fn run(&self) -> Result<FragmentResponse> {
        tracing::debug!("Fetching cart snapshot...");
        let snapshot = self.source.snapshot().await?;
        tracing::debug!(
            "Cart has {} item(s), url {}",
            snapshot.item_count,
            snapshot.cart_url
        );

        let fragments = self.registry.refresh(&snapshot);
        tracing::info!(
            "Rendered {} of {} fragment(s)",
            fragments.len(),
            self.registry.len()
        );

        Ok(FragmentResponse::new(fragments))
    }
}
