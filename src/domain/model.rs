use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Cart state as reported by the commerce engine for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Signed so that a bad upstream value reaches validation instead of failing to parse.
    pub item_count: i64,
    pub cart_url: String,
    /// Formatted total as plain text (e.g. `£12.50`). It is HTML-escaped on render,
    /// so hosts must pass decoded text, not markup or entities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_total_display: Option<String>,
}

impl CartSnapshot {
    pub fn new(item_count: i64, cart_url: impl Into<String>) -> Self {
        Self {
            item_count,
            cart_url: cart_url.into(),
            cart_total_display: None,
        }
    }

    pub fn with_total(mut self, total: impl Into<String>) -> Self {
        self.cart_total_display = Some(total.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentEntry {
    pub selector: String,
    pub html: String,
}

impl FragmentEntry {
    pub fn new(selector: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            html: html.into(),
        }
    }
}

/// Fragments for one response, at most one per selector.
///
/// Inserting a selector that is already present replaces the earlier html but keeps
/// the selector at its original position. The last insert for a selector always wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentSet {
    entries: Vec<FragmentEntry>,
}

impl FragmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry that was replaced, if any.
    pub fn insert(&mut self, entry: FragmentEntry) -> Option<FragmentEntry> {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.selector == entry.selector)
        {
            Some(existing) => Some(std::mem::replace(existing, entry)),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn get(&self, selector: &str) -> Option<&FragmentEntry> {
        self.entries.iter().find(|e| e.selector == selector)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FragmentEntry> {
        self.entries.iter()
    }
}

impl Extend<FragmentEntry> for FragmentSet {
    fn extend<I: IntoIterator<Item = FragmentEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl FromIterator<FragmentEntry> for FragmentSet {
    fn from_iter<I: IntoIterator<Item = FragmentEntry>>(iter: I) -> Self {
        let mut set = FragmentSet::new();
        set.extend(iter);
        set
    }
}

impl Serialize for FragmentSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.selector, &entry.html)?;
        }
        map.end()
    }
}

/// Body returned to the client script after a cart-mutating request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FragmentResponse {
    pub fragments: FragmentSet,
}

impl FragmentResponse {
    pub fn new(fragments: FragmentSet) -> Self {
        Self { fragments }
    }

    pub fn to_json(&self, pretty: bool) -> crate::utils::error::Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_insert_wins_in_place() {
        let mut set = FragmentSet::new();
        set.insert(FragmentEntry::new("a.one", "first"));
        set.insert(FragmentEntry::new("a.two", "two"));
        let replaced = set.insert(FragmentEntry::new("a.one", "second"));

        assert_eq!(replaced.map(|e| e.html), Some("first".to_string()));
        assert_eq!(set.len(), 2);
        let selectors: Vec<&str> = set.iter().map(|e| e.selector.as_str()).collect();
        assert_eq!(selectors, vec!["a.one", "a.two"]);
        assert_eq!(set.get("a.one").unwrap().html, "second");
    }

    #[test]
    fn test_response_json_keeps_insertion_order() {
        let set: FragmentSet = vec![
            FragmentEntry::new("a.cart-customlocation", "<a>s</a>"),
            FragmentEntry::new("a.cart-contents", "<a>b</a>"),
        ]
        .into_iter()
        .collect();

        let json = FragmentResponse::new(set).to_json(false).unwrap();
        assert_eq!(
            json,
            r#"{"fragments":{"a.cart-customlocation":"<a>s</a>","a.cart-contents":"<a>b</a>"}}"#
        );
    }

    #[test]
    fn test_snapshot_total_is_optional() {
        let snapshot: CartSnapshot =
            serde_json::from_str(r#"{"item_count": 2, "cart_url": "https://shop.example/cart"}"#)
                .unwrap();
        assert_eq!(snapshot, CartSnapshot::new(2, "https://shop.example/cart"));
    }
}
