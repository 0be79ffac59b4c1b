use crate::core::renderer::CartBadgeRenderer;
use crate::domain::model::CartSnapshot;
use crate::utils::error::Result;

pub const DEFAULT_MENU_LOCATION: &str = "navigation-main";

/// Appends the cart badge to the items of one navigation menu.
#[derive(Debug, Clone)]
pub struct MenuInjector {
    location: String,
    badge: CartBadgeRenderer,
}

impl MenuInjector {
    pub fn new(location: impl Into<String>, badge: CartBadgeRenderer) -> Self {
        Self {
            location: location.into(),
            badge,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Menus at other locations pass through untouched.
    pub fn inject(&self, location: &str, items_html: &str, snapshot: &CartSnapshot) -> Result<String> {
        if location != self.location {
            return Ok(items_html.to_string());
        }

        let badge = self.badge.markup(snapshot)?;
        tracing::debug!("Appending cart badge to menu '{}'", location);
        Ok(format!("{}{}", items_html, badge))
    }
}

impl Default for MenuInjector {
    fn default() -> Self {
        Self::new(DEFAULT_MENU_LOCATION, CartBadgeRenderer::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: &str = r#"<li><a href="/shop">Shop</a></li>"#;

    #[test]
    fn test_inject_on_configured_location() {
        let html = MenuInjector::default()
            .inject("navigation-main", ITEMS, &CartSnapshot::new(2, "/cart"))
            .unwrap();
        assert_eq!(
            html,
            r#"<li><a href="/shop">Shop</a></li><a class="menu-item cart-contents" href="/cart" title="My Basket"><span class="cart-contents-count">2</span></a>"#
        );
    }

    #[test]
    fn test_other_location_unchanged() {
        let html = MenuInjector::default()
            .inject("footer", ITEMS, &CartSnapshot::new(2, "/cart"))
            .unwrap();
        assert_eq!(html, ITEMS);
    }

    #[test]
    fn test_inject_propagates_invalid_snapshot() {
        assert!(MenuInjector::default()
            .inject("navigation-main", ITEMS, &CartSnapshot::new(-1, "/cart"))
            .is_err());
    }
}
