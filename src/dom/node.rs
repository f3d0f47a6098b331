// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Child node types

use serde::{Deserialize, Serialize};

use super::element::Element;
use super::text::{escape, obfuscate, TextMode};

/// A child stored inside an element
///
/// `Text` already holds its final, emitted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Prepared text
    Text(String),
    /// Nested element, owned by its parent
    Element(Element),
}

impl Node {
    /// Serialize this node to HTML
    pub fn render(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.render(),
        }
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Get the text, if this is a text node
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    /// Get the element, if this is an element node
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// A child handed to an element at construction time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildSpec {
    /// Trusted markup, stored verbatim
    Raw(String),
    /// Text to transform before storing
    Text(String, TextMode),
    /// Nested element
    Element(Element),
}

impl ChildSpec {
    /// Resolve into the node that gets stored
    pub(crate) fn into_node(self) -> Node {
        match self {
            ChildSpec::Raw(text) => Node::Text(text),
            ChildSpec::Text(text, mode) => Node::Text(prepare(&text, mode)),
            ChildSpec::Element(element) => Node::Element(element),
        }
    }
}

/// Both modes escape, so neither can hit the invalid policy
fn prepare(text: &str, mode: TextMode) -> String {
    let escaped = escape(text);
    match mode {
        TextMode::Escape => escaped,
        TextMode::Obfuscate => obfuscate(&escaped),
    }
}

impl From<&str> for ChildSpec {
    fn from(text: &str) -> Self {
        ChildSpec::Raw(text.to_string())
    }
}

impl From<String> for ChildSpec {
    fn from(text: String) -> Self {
        ChildSpec::Raw(text)
    }
}

impl<S: Into<String>> From<(S, TextMode)> for ChildSpec {
    fn from((text, mode): (S, TextMode)) -> Self {
        ChildSpec::Text(text.into(), mode)
    }
}

impl From<Element> for ChildSpec {
    fn from(element: Element) -> Self {
        ChildSpec::Element(element)
    }
}

impl From<Node> for ChildSpec {
    fn from(node: Node) -> Self {
        match node {
            Node::Text(text) => ChildSpec::Raw(text),
            Node::Element(element) => ChildSpec::Element(element),
        }
    }
}
