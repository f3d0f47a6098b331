// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Element tree and serialization

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::node::{ChildSpec, Node};
use super::text::{escape, TextMode, TextPolicy};
use crate::error::Result;

/// Attribute map, kept in insertion order so output is deterministic
pub type Attributes = IndexMap<String, String>;

/// Build an attribute map from name/value pairs
pub fn attributes<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// An HTML element with attributes and ordered children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name
    tag_name: String,
    /// Raw attribute values, escaped on render
    #[serde(default)]
    attributes: Attributes,
    /// Children in document order
    #[serde(default)]
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Create an element with attributes and children
    ///
    /// Plain strings in `children` are stored verbatim; wrap text in a
    /// [`TextMode`] to have it escaped or obfuscated.
    pub fn from_parts(
        tag_name: impl Into<String>,
        attributes: Attributes,
        children: Vec<ChildSpec>,
    ) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes,
            children: children.into_iter().map(ChildSpec::into_node).collect(),
        }
    }

    /// Set an attribute, builder style
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Append a child, builder style
    pub fn child(mut self, child: impl Into<ChildSpec>) -> Self {
        self.children.push(child.into().into_node());
        self
    }

    /// Append escaped text, builder style
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child((text, TextMode::Escape))
    }

    /// Get the tag name
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Get all attributes
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get the children
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Append a child
    ///
    /// Text is prepared according to `policy`. Elements are appended
    /// as-is and the policy is ignored.
    pub fn add_child(&mut self, child: impl Into<Node>, policy: TextPolicy) -> Result<()> {
        let node = match child.into() {
            Node::Text(text) => Node::Text(policy.apply(&text)?),
            element @ Node::Element(_) => element,
        };

        tracing::trace!(tag = %self.tag_name, text = node.is_text(), "Child added");
        self.children.push(node);
        Ok(())
    }

    /// Remove the first child equal to `child`
    ///
    /// Text is matched in every form it could have been stored in, so the
    /// original unescaped string finds its escaped or obfuscated child.
    /// Returns whether anything was removed.
    pub fn remove_child(&mut self, child: impl Into<Node>) -> bool {
        let position = match child.into() {
            Node::Text(text) => {
                let forms = TextPolicy::candidate_forms(&text);
                self.children.iter().position(|node| {
                    node.as_text()
                        .map(|stored| forms.iter().any(|form| form == stored))
                        .unwrap_or(false)
                })
            }
            element @ Node::Element(_) => self.children.iter().position(|node| *node == element),
        };

        match position {
            Some(index) => {
                self.children.remove(index);
                true
            }
            None => {
                tracing::debug!(tag = %self.tag_name, "No matching child to remove");
                false
            }
        }
    }

    /// Set an attribute; the value is escaped on render
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Get an attribute, or an empty string when it is not set
    pub fn get_attribute(&self, key: &str) -> &str {
        self.attributes.get(key).map(String::as_str).unwrap_or("")
    }

    /// Check if has attribute
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Remove an attribute, keeping the order of the rest
    pub fn remove_attribute(&mut self, key: &str) -> Option<String> {
        self.attributes.shift_remove(key)
    }

    /// Serialize the element and its subtree to HTML
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag_name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
        out.push('>');

        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.render_into(out),
            }
        }

        out.push_str("</");
        out.push_str(&self.tag_name);
        out.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element() {
        assert_eq!(Element::new("span").render(), "<span></span>");
    }

    #[test]
    fn test_raw_children_are_space_joined() {
        let div = Element::from_parts("div", Attributes::new(), vec!["a".into(), "b".into()]);
        assert_eq!(div.render(), "<div>a b</div>");
    }

    #[test]
    fn test_attributes_render_escaped_in_order() {
        let el = Element::new("input")
            .attr("type", "text")
            .attr("value", r#"say "hi" & <bye>"#);
        assert_eq!(
            el.render(),
            r#"<input type="text" value="say &quot;hi&quot; &amp; &lt;bye&gt;"></input>"#
        );
        assert_eq!(el.get_attribute("value"), r#"say "hi" & <bye>"#);
    }

    #[test]
    fn test_get_missing_attribute() {
        let el = Element::new("a");
        assert_eq!(el.get_attribute("href"), "");
        assert!(!el.has_attribute("href"));
    }

    #[test]
    fn test_set_and_remove_attribute() {
        let mut el = Element::new("a")
            .attr("id", "x")
            .attr("class", "y")
            .attr("href", "/");
        el.set_attribute("id", "z");
        assert!(el.has_attribute("class"));
        assert_eq!(el.remove_attribute("class"), Some("y".to_string()));
        assert!(!el.has_attribute("class"));
        assert_eq!(el.remove_attribute("class"), None);
        assert_eq!(el.render(), r#"<a id="z" href="/"></a>"#);
    }

    #[test]
    fn test_add_child_escapes_by_default() {
        let mut p = Element::new("p");
        p.add_child("1 < 2", TextPolicy::default()).unwrap();
        p.add_child("<em>raw</em>", TextPolicy::raw()).unwrap();
        p.add_child(Element::new("br"), TextPolicy::raw().obfuscate(true))
            .unwrap();
        assert_eq!(p.render(), "<p>1 &lt; 2 <em>raw</em> <br></br></p>");
    }

    #[test]
    fn test_add_child_obfuscates() {
        let mut p = Element::new("p");
        p.add_child("a@b", TextPolicy::obfuscated()).unwrap();
        assert_eq!(p.render(), "<p>&#97;&#64;&#98;</p>");
    }

    #[test]
    fn test_add_child_rejects_obfuscate_without_escape() {
        let mut p = Element::new("p");
        let err = p
            .add_child("secret", TextPolicy::raw().obfuscate(true))
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(p.children().is_empty());
    }

    #[test]
    fn test_remove_escaped_child_by_original_text() {
        let mut p = Element::new("p");
        p.add_child("Tom & Jerry", TextPolicy::default()).unwrap();
        p.add_child("keep", TextPolicy::default()).unwrap();

        assert!(p.remove_child("Tom & Jerry"));
        assert_eq!(p.render(), "<p>keep</p>");
    }

    #[test]
    fn test_remove_obfuscated_child_by_original_text() {
        let mut p = Element::new("p");
        p.add_child("x<y", TextPolicy::obfuscated()).unwrap();

        assert!(p.remove_child("x<y"));
        assert!(p.children().is_empty());
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut ul = Element::new("ul")
            .child(Element::new("li").child("one"))
            .child(Element::new("li").child("two"))
            .child(Element::new("li").child("one"));

        assert!(ul.remove_child(Element::new("li").child("one")));
        assert_eq!(ul.render(), "<ul><li>two</li> <li>one</li></ul>");
    }

    #[test]
    fn test_remove_missing_child_is_noop() {
        let mut p = Element::new("p").child("a");
        assert!(!p.remove_child("b"));
        assert!(!p.remove_child(Element::new("b")));
        assert_eq!(p.render(), "<p>a</p>");
    }

    #[test]
    fn test_nested_render() {
        let el = Element::new("div")
            .attr("class", "card")
            .child(Element::new("h1").text("Fish & Chips"))
            .child(Element::new("p").child("Served <b>hot</b>"));
        assert_eq!(
            el.render(),
            r#"<div class="card"><h1>Fish &amp; Chips</h1> <p>Served <b>hot</b></p></div>"#
        );
        assert_eq!(el.to_string(), el.render());
    }

    #[test]
    fn test_constructions_do_not_share_storage() {
        let mut first = Element::from_parts("div", Attributes::new(), Vec::new());
        let second = Element::from_parts("div", Attributes::new(), Vec::new());
        first.set_attribute("id", "one");
        first.add_child("x", TextPolicy::default()).unwrap();

        assert_eq!(second.render(), "<div></div>");
    }

    #[test]
    fn test_debug_exposes_attributes_and_children() {
        let el = Element::new("a").attr("href", "/").child("home");
        let debug = format!("{:?}", el);
        assert!(debug.contains("attributes"));
        assert!(debug.contains("children"));
        assert!(debug.contains("home"));
    }

    #[test]
    fn test_attributes_helper() {
        let attrs = attributes([("b", "2"), ("a", "1")]);
        let keys: Vec<_> = attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn test_json_round_trip() {
        let el = Element::new("p").attr("id", "x").text("<hi>");
        let json = serde_json::to_string(&el).unwrap();
        let back: Element = serde_json::from_str(&json).unwrap();
        assert_eq!(back, el);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_remove_by_original_text(s in "\\PC*", obfuscate in any::<bool>()) {
                let mut el = Element::new("p");
                el.add_child(s.as_str(), TextPolicy::new().obfuscate(obfuscate)).unwrap();

                prop_assert!(el.remove_child(s.as_str()));
                prop_assert!(el.children().is_empty());
            }

            #[test]
            fn prop_add_child_without_escape_cannot_obfuscate(s in "\\PC*") {
                let mut el = Element::new("p");
                let err = el.add_child(s, TextPolicy::raw().obfuscate(true)).unwrap_err();
                prop_assert!(err.is_invalid_argument());
                prop_assert_eq!(el.render(), "<p></p>");
            }
        }
    }
}
