use crate::core::{CartSnapshot, CartSource};
use crate::utils::error::{FragmentError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use url::Url;

/// Reads a cart snapshot exported by the commerce engine as JSON.
#[derive(Debug, Clone)]
pub struct JsonFileCartSource {
    path: PathBuf,
    base_url: Option<Url>,
}

impl JsonFileCartSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            base_url: None,
        }
    }

    /// Relative `cart_url` values get joined onto `base_url`.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url).map_err(|e| FragmentError::InvalidConfigValueError {
            field: "shop.base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        self.base_url = Some(url);
        Ok(self)
    }

    fn resolve(&self, mut snapshot: CartSnapshot) -> Result<CartSnapshot> {
        let base = match &self.base_url {
            Some(base) => base,
            None => return Ok(snapshot),
        };
        // absolute URLs and empty values are left for the renderer to judge
        if snapshot.cart_url.trim().is_empty() || Url::parse(&snapshot.cart_url).is_ok() {
            return Ok(snapshot);
        }

        let joined = base
            .join(&snapshot.cart_url)
            .map_err(|e| FragmentError::invalid_input("cart_url", e.to_string()))?;
        tracing::debug!("Resolved cart url '{}' to '{}'", snapshot.cart_url, joined);
        snapshot.cart_url = joined.to_string();
        Ok(snapshot)
    }
}

#[async_trait]
impl CartSource for JsonFileCartSource {
    async fn snapshot(&self) -> Result<CartSnapshot> {
        let data = tokio::fs::read(&self.path).await?;
        let snapshot: CartSnapshot = serde_json::from_slice(&data)?;
        self.resolve(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FragmentConfig;
    use crate::core::engine::FragmentEngine;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn snapshot_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_reads_snapshot() {
        let file = snapshot_file(
            r#"{"item_count": 3, "cart_url": "https://shop.example/cart", "cart_total_display": "$9.00"}"#,
        );
        let snapshot = JsonFileCartSource::new(file.path()).snapshot().await.unwrap();
        assert_eq!(
            snapshot,
            CartSnapshot::new(3, "https://shop.example/cart").with_total("$9.00")
        );
    }

    #[tokio::test]
    async fn test_relative_url_resolved_against_base() {
        let file = snapshot_file(r#"{"item_count": 1, "cart_url": "/cart"}"#);
        let source = JsonFileCartSource::new(file.path())
            .with_base_url("https://shop.example")
            .unwrap();
        let snapshot = source.snapshot().await.unwrap();
        assert_eq!(snapshot.cart_url, "https://shop.example/cart");
    }

    #[tokio::test]
    async fn test_absolute_url_kept() {
        let file = snapshot_file(r#"{"item_count": 1, "cart_url": "https://other.example/basket"}"#);
        let source = JsonFileCartSource::new(file.path())
            .with_base_url("https://shop.example")
            .unwrap();
        let snapshot = source.snapshot().await.unwrap();
        assert_eq!(snapshot.cart_url, "https://other.example/basket");
    }

    #[tokio::test]
    async fn test_blank_url_not_resolved_to_base() {
        let file = snapshot_file(r#"{"item_count": 1, "cart_url": "   "}"#);
        let source = JsonFileCartSource::new(file.path())
            .with_base_url("https://shop.example/shop")
            .unwrap();
        assert_eq!(source.snapshot().await.unwrap().cart_url, "   ");

        let engine = FragmentEngine::new(source, FragmentConfig::default().build_registry());
        let response = engine.run().await.unwrap();
        assert!(response.fragments.get("a.cart-contents").is_none());
        assert!(response.fragments.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = JsonFileCartSource::new("/nonexistent/snapshot.json");
        assert!(matches!(
            source.snapshot().await,
            Err(FragmentError::IoError(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_json_is_serialization_error() {
        let file = snapshot_file("{not json");
        assert!(matches!(
            JsonFileCartSource::new(file.path()).snapshot().await,
            Err(FragmentError::SerializationError(_))
        ));
    }
}
