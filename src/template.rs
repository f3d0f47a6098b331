// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! JSON element templates
//!
//! A template describes a tree declaratively:
//!
//! ```json
//! {
//!   "tag": "html",
//!   "attributes": { "lang": "en" },
//!   "children": [
//!     { "tag": "body", "children": [
//!       "<b>trusted markup</b>",
//!       { "text": "escaped <text>" },
//!       { "obfuscate": "me@example.com" }
//!     ]}
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::dom::{Attributes, ChildSpec, Document, Element, TextMode};
use crate::error::{Error, Result};

/// Declarative description of an element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementTemplate {
    /// Tag name
    pub tag: String,
    /// Attributes, in document order
    #[serde(default)]
    pub attributes: Attributes,
    /// Children
    #[serde(default)]
    pub children: Vec<ChildTemplate>,
}

/// Declarative description of a child
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChildTemplate {
    /// Trusted markup, stored verbatim
    Raw(String),
    /// Nested element; tried before the text forms since it requires `tag`
    Element(ElementTemplate),
    /// Escaped text
    Text {
        /// Text to escape
        text: String,
    },
    /// Escaped and obfuscated text
    Obfuscated {
        /// Text to obfuscate
        obfuscate: String,
    },
}

impl ElementTemplate {
    /// Parse a template from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the element tree
    pub fn build(&self) -> Element {
        tracing::debug!(tag = %self.tag, children = self.children.len(), "Building template");
        Element::from_parts(
            self.tag.clone(),
            self.attributes.clone(),
            self.children.iter().map(ChildTemplate::to_spec).collect(),
        )
    }

    /// Build a document; the root must be `<html>`
    pub fn build_document(&self) -> Result<Document> {
        Document::from_root(self.build()).map_err(|root| {
            Error::invalid_argument(format!(
                "document root must be <html>, found <{}>",
                root.tag_name()
            ))
        })
    }

    /// Render the template, with a doctype when the root is `<html>`
    pub fn render(&self) -> String {
        match Document::from_root(self.build()) {
            Ok(document) => document.render(),
            Err(root) => root.render(),
        }
    }
}

impl ChildTemplate {
    fn to_spec(&self) -> ChildSpec {
        match self {
            ChildTemplate::Raw(markup) => ChildSpec::Raw(markup.clone()),
            ChildTemplate::Text { text } => ChildSpec::Text(text.clone(), TextMode::Escape),
            ChildTemplate::Obfuscated { obfuscate } => {
                ChildSpec::Text(obfuscate.clone(), TextMode::Obfuscate)
            }
            ChildTemplate::Element(template) => ChildSpec::Element(template.build()),
        }
    }
}
