use crate::core::markup::Element;
use crate::domain::model::{CartSnapshot, FragmentEntry};
use crate::domain::ports::FragmentRenderer;
use crate::utils::error::Result;
use crate::utils::validation::{validate_cart_url, validate_item_count};

pub const CART_BADGE_SELECTOR: &str = "a.cart-contents";
pub const CART_SUMMARY_SELECTOR: &str = "a.cart-customlocation";

pub const DEFAULT_BADGE_TITLE: &str = "My Basket";
pub const DEFAULT_SUMMARY_TITLE: &str = "View your shopping cart";

fn validate_snapshot(snapshot: &CartSnapshot) -> Result<()> {
    validate_item_count("item_count", snapshot.item_count)?;
    validate_cart_url("cart_url", &snapshot.cart_url)
}

/// Renders the cart badge with the default title.
///
/// The count `<span>` is emitted only when the cart holds at least one item;
/// an empty cart renders a bare anchor.
pub fn render_cart_badge(snapshot: &CartSnapshot) -> Result<FragmentEntry> {
    CartBadgeRenderer::default().render(snapshot)
}

/// Header menu control linking to the cart, with an item-count badge.
#[derive(Debug, Clone)]
pub struct CartBadgeRenderer {
    title: String,
}

impl CartBadgeRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn markup(&self, snapshot: &CartSnapshot) -> Result<String> {
        validate_snapshot(snapshot)?;

        let count = snapshot.item_count;
        let html = Element::new("a")
            .attr("class", "menu-item cart-contents")
            .attr("href", snapshot.cart_url.as_str())
            .attr("title", self.title.as_str())
            .child_if(count > 0, || {
                Element::new("span")
                    .attr("class", "cart-contents-count")
                    .text(count.to_string())
            })
            .render();
        Ok(html)
    }
}

impl Default for CartBadgeRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_BADGE_TITLE)
    }
}

impl FragmentRenderer for CartBadgeRenderer {
    fn selector(&self) -> &str {
        CART_BADGE_SELECTOR
    }

    fn render(&self, snapshot: &CartSnapshot) -> Result<FragmentEntry> {
        let html = self.markup(snapshot)?;
        Ok(FragmentEntry::new(CART_BADGE_SELECTOR, html))
    }
}

/// "N items – total" link shown in the site header.
#[derive(Debug, Clone)]
pub struct CartSummaryRenderer {
    title: String,
    singular: String,
    plural: String,
}

impl CartSummaryRenderer {
    pub fn new(
        title: impl Into<String>,
        singular: impl Into<String>,
        plural: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    fn label(&self, snapshot: &CartSnapshot) -> String {
        let noun = if snapshot.item_count == 1 {
            &self.singular
        } else {
            &self.plural
        };
        match snapshot.cart_total_display.as_deref() {
            Some(total) if !total.is_empty() => {
                format!("{} {} – {}", snapshot.item_count, noun, total)
            }
            _ => format!("{} {}", snapshot.item_count, noun),
        }
    }
}

impl Default for CartSummaryRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY_TITLE, "item", "items")
    }
}

impl FragmentRenderer for CartSummaryRenderer {
    fn selector(&self) -> &str {
        CART_SUMMARY_SELECTOR
    }

    fn render(&self, snapshot: &CartSnapshot) -> Result<FragmentEntry> {
        validate_snapshot(snapshot)?;

        let html = Element::new("a")
            .attr("class", "cart-customlocation")
            .attr("href", snapshot.cart_url.as_str())
            .attr("title", self.title.as_str())
            .text(self.label(snapshot))
            .render();
        Ok(FragmentEntry::new(CART_SUMMARY_SELECTOR, html))
    }
}
