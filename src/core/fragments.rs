use crate::core::renderer::render_cart_badge;
use crate::domain::model::{CartSnapshot, FragmentEntry, FragmentSet};
use crate::domain::ports::FragmentRenderer;
use crate::utils::error::{FragmentError, Result};

/// Renders every snapshot as a cart badge and gathers the results.
///
/// Input order matters: when two entries resolve to the same selector, the later
/// one replaces the earlier one. A snapshot that fails validation is logged and
/// left out so the remaining fragments still reach the client.
pub fn collect_fragments<K, I>(snapshots: I) -> FragmentSet
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, CartSnapshot)>,
{
    let mut set = FragmentSet::new();
    for (trigger, snapshot) in snapshots {
        match render_cart_badge(&snapshot) {
            Ok(entry) => insert_logged(&mut set, trigger.as_ref(), entry),
            Err(e) => {
                tracing::warn!("Skipping fragment for trigger '{}': {}", trigger.as_ref(), e)
            }
        }
    }
    set
}

fn insert_logged(set: &mut FragmentSet, trigger: &str, entry: FragmentEntry) {
    let selector = entry.selector.clone();
    if set.insert(entry).is_some() {
        tracing::debug!(
            "Trigger '{}' replaced earlier fragment for selector '{}'",
            trigger,
            selector
        );
    }
}

/// Named renderers the host has wired up, in registration order.
#[derive(Default)]
pub struct FragmentRegistry {
    renderers: Vec<(String, Box<dyn FragmentRenderer>)>,
}

impl FragmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `renderer` under `trigger`. Re-registering a trigger replaces its renderer.
    pub fn register(
        &mut self,
        trigger: impl Into<String>,
        renderer: impl FragmentRenderer + 'static,
    ) -> &mut Self {
        let trigger = trigger.into();
        let boxed: Box<dyn FragmentRenderer> = Box::new(renderer);
        tracing::debug!(
            "Registering renderer '{}' for selector '{}'",
            trigger,
            boxed.selector()
        );

        match self.renderers.iter_mut().find(|(name, _)| *name == trigger) {
            Some(slot) => slot.1 = boxed,
            None => self.renderers.push((trigger, boxed)),
        }
        self
    }

    pub fn get(&self, trigger: &str) -> Option<&dyn FragmentRenderer> {
        self.renderers
            .iter()
            .find(|(name, _)| name == trigger)
            .map(|(_, renderer)| renderer.as_ref())
    }

    pub fn triggers(&self) -> impl Iterator<Item = &str> {
        self.renderers.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Renders one snapshot through the renderer registered for `trigger`.
    pub fn render(&self, trigger: &str, snapshot: &CartSnapshot) -> Result<FragmentEntry> {
        let renderer = self.get(trigger).ok_or_else(|| FragmentError::UnknownTrigger {
            trigger: trigger.to_string(),
        })?;
        renderer.render(snapshot)
    }

    /// Same policy as [`collect_fragments`], but each trigger uses its registered renderer.
    /// Unknown triggers and failed renders are logged and omitted.
    pub fn collect<K, I>(&self, snapshots: I) -> FragmentSet
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, CartSnapshot)>,
    {
        let mut set = FragmentSet::new();
        for (trigger, snapshot) in snapshots {
            let trigger = trigger.as_ref();
            match self.render(trigger, &snapshot) {
                Ok(entry) => insert_logged(&mut set, trigger, entry),
                Err(e) => tracing::warn!("Skipping fragment for trigger '{}': {}", trigger, e),
            }
        }
        set
    }

    /// Renders every registered fragment against the same snapshot.
    pub fn refresh(&self, snapshot: &CartSnapshot) -> FragmentSet {
        self.collect(self.triggers().map(|trigger| (trigger, snapshot.clone())))
    }
}

impl std::fmt::Debug for FragmentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.renderers
                    .iter()
                    .map(|(name, renderer)| (name, renderer.selector())),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::renderer::{CartBadgeRenderer, CartSummaryRenderer};

    const CART: &str = "https://shop.example/cart";

    #[test]
    fn test_collect_later_snapshot_wins() {
        let set = collect_fragments(vec![
            ("header", CartSnapshot::new(1, CART)),
            ("mini_cart", CartSnapshot::new(4, CART)),
        ]);

        assert_eq!(set.len(), 1);
        let entry = set.get("a.cart-contents").unwrap();
        assert_eq!(entry, &render_cart_badge(&CartSnapshot::new(4, CART)).unwrap());
    }

    #[test]
    fn test_collect_skips_invalid_snapshot() {
        let set = collect_fragments(vec![
            ("header", CartSnapshot::new(2, CART)),
            ("broken", CartSnapshot::new(-3, CART)),
        ]);
        assert_eq!(set.len(), 1);
        assert!(set.get("a.cart-contents").unwrap().html.contains(">2</span>"));
    }

    #[test]
    fn test_collect_empty_input() {
        let set = collect_fragments(Vec::<(String, CartSnapshot)>::new());
        assert!(set.is_empty());
    }

    #[test]
    fn test_registry_refresh_renders_all_in_order() {
        let mut registry = FragmentRegistry::new();
        registry
            .register("cart_summary", CartSummaryRenderer::default())
            .register("cart_badge", CartBadgeRenderer::default());

        let set = registry.refresh(&CartSnapshot::new(2, CART));
        let selectors: Vec<&str> = set.iter().map(|e| e.selector.as_str()).collect();
        assert_eq!(selectors, vec!["a.cart-customlocation", "a.cart-contents"]);
    }

    #[test]
    fn test_registry_omits_unknown_and_failed() {
        let mut registry = FragmentRegistry::new();
        registry
            .register("cart_summary", CartSummaryRenderer::default())
            .register("cart_badge", CartBadgeRenderer::default());

        let set = registry.collect(vec![
            ("cart_summary", CartSnapshot::new(3, CART)),
            ("cart_badge", CartSnapshot::new(3, "")),
            ("wishlist", CartSnapshot::new(3, CART)),
        ]);
        assert_eq!(set.len(), 1);
        assert!(set.get("a.cart-customlocation").is_some());
    }

    #[test]
    fn test_registry_render_unknown_trigger() {
        let registry = FragmentRegistry::new();
        let err = registry
            .render("cart_badge", &CartSnapshot::new(1, CART))
            .unwrap_err();
        assert!(matches!(err, FragmentError::UnknownTrigger { .. }));
    }

    #[test]
    fn test_register_same_trigger_replaces() {
        let mut registry = FragmentRegistry::new();
        registry
            .register("cart_badge", CartBadgeRenderer::default())
            .register("cart_badge", CartBadgeRenderer::new("Basket"));
        assert_eq!(registry.len(), 1);

        let entry = registry
            .render("cart_badge", &CartSnapshot::new(0, CART))
            .unwrap();
        assert!(entry.html.contains(r#"title="Basket""#));
    }
}
