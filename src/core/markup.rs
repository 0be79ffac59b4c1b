//! Minimal markup builder used by the fragment renderers.
//!
//! Attributes keep insertion order so rendered output is stable byte for byte.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag_name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag_name: &str) -> Self {
        Element {
            tag_name: tag_name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.push((name.to_string(), value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Appends `child` only when `condition` holds; nothing is emitted otherwise.
    pub fn child_if(self, condition: bool, child: impl FnOnce() -> Element) -> Self {
        if condition {
            self.child(child())
        } else {
            self
        }
    }

    pub fn render(&self) -> String {
        let mut buffer = String::new();
        self.write_to(&mut buffer);
        buffer
    }

    fn write_to(&self, buffer: &mut String) {
        buffer.push('<');
        buffer.push_str(&self.tag_name);
        for (key, value) in &self.attributes {
            buffer.push(' ');
            buffer.push_str(key);
            buffer.push_str("=\"");
            buffer.push_str(&escape_html(value));
            buffer.push('"');
        }
        buffer.push('>');

        for child in &self.children {
            match child {
                Node::Element(element) => element.write_to(buffer),
                Node::Text(text) => buffer.push_str(&escape_html(text)),
            }
        }

        buffer.push_str("</");
        buffer.push_str(&self.tag_name);
        buffer.push('>');
    }
}

/// Escapes HTML special characters for text and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }
    escaped
}
