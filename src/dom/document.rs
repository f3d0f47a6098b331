// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Document root representation

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::element::{Attributes, Element};
use super::node::ChildSpec;

/// Doctype line emitted before the root element
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// An `<html>` root that renders with a doctype
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Root element
    root: Element,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            root: Element::new("html"),
        }
    }

    /// Create a document with root attributes and children
    pub fn from_parts(attributes: Attributes, children: Vec<ChildSpec>) -> Self {
        Self {
            root: Element::from_parts("html", attributes, children),
        }
    }

    /// Wrap an existing element as the document root
    ///
    /// Hands the element back unless it is `<html>`.
    pub fn from_root(root: Element) -> std::result::Result<Self, Element> {
        if root.tag_name() == "html" {
            Ok(Self { root })
        } else {
            Err(root)
        }
    }

    /// Get the root element
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Unwrap into the root element, dropping the doctype
    pub fn into_root(self) -> Element {
        self.root
    }

    /// Serialize the document, doctype first
    pub fn render(&self) -> String {
        format!("{}\n{}", DOCTYPE, self.root.render())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Document {
    type Target = Element;

    fn deref(&self) -> &Self::Target {
        &self.root
    }
}

impl DerefMut for Document {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.root
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
