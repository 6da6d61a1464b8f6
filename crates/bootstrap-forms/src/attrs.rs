//! HTML attribute maps and void tag rendering.

use std::collections::BTreeMap;

/// Attributes that are always generated by the builder and never taken from
/// caller-supplied HTML options.
const GENERATED: [&str; 2] = ["id", "name"];

/// A sorted set of HTML attributes.
///
/// Attributes render in key order, so the same inputs always produce the
/// same markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    attrs: BTreeMap<String, String>,
}

impl Attributes {
    /// Creates new empty attributes.
    pub fn new() -> Self {
        Self {
            attrs: BTreeMap::new(),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Removes an attribute, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.attrs.remove(key)
    }

    /// Returns whether no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Merges caller-supplied attributes over these ones.
    ///
    /// `id` and `name` are derived from the object and field and are left
    /// untouched.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.attrs {
            if !GENERATED.contains(&key.as_str()) {
                self.attrs.insert(key.clone(), value.clone());
            }
        }
    }

    /// Renders attributes as an HTML attribute string.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#"{k}="{}""#, html_escape(v)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attrs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Renders a self-closing tag such as `<input id="a" type="text" />`.
pub fn void_tag(name: &str, attrs: &Attributes) -> String {
    if attrs.is_empty() {
        format!("<{name} />")
    } else {
        format!("<{name} {} />", attrs.to_html())
    }
}

/// Renders an element with escaped text content.
pub fn content_tag(name: &str, attrs: &Attributes, content: &str) -> String {
    let open = if attrs.is_empty() {
        format!("<{name}>")
    } else {
        format!("<{name} {}>", attrs.to_html())
    };
    format!("{open}{}</{name}>", html_escape(content))
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_render_sorted() {
        let attrs = Attributes::new()
            .with("type", "text")
            .with("name", "item[name]")
            .with("id", "item_name")
            .with("size", "30");
        assert_eq!(
            attrs.to_html(),
            r#"id="item_name" name="item[name]" size="30" type="text""#
        );
    }

    #[test]
    fn test_merge_keeps_generated_attributes() {
        let mut attrs = Attributes::new()
            .with("id", "item_name")
            .with("size", "30");
        let caller: Attributes = [("id", "custom"), ("size", "10"), ("placeholder", "Name")]
            .into_iter()
            .collect();
        attrs.merge(&caller);

        assert_eq!(attrs.get("id").map(String::as_str), Some("item_name"));
        assert_eq!(attrs.get("size").map(String::as_str), Some("10"));
        assert_eq!(attrs.get("placeholder").map(String::as_str), Some("Name"));
    }

    #[test]
    fn test_void_tag() {
        let attrs = Attributes::new().with("type", "text").with("id", "q");
        assert_eq!(void_tag("input", &attrs), r#"<input id="q" type="text" />"#);
        assert_eq!(void_tag("br", &Attributes::new()), "<br />");
    }

    #[test]
    fn test_content_tag_escapes() {
        let attrs = Attributes::new().with("value", "1");
        assert_eq!(
            content_tag("option", &attrs, "<b>"),
            r#"<option value="1">&lt;b&gt;</option>"#
        );
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
    }
}
