// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # htmlgen - HTML Builder
//!
//! Build HTML documents as a tree of owned elements and render them to a
//! single escaped string.
//!
//! ## Features
//!
//! - Escape by default: text added with [`Element::add_child`] is escaped once, on insertion
//! - Obfuscation: emit text as numeric character references to hinder scraping
//! - Attribute values are always escaped on render
//! - Tag catalog: `html`, `body`, `div`, `p`, `img`, `a` and friends
//! - JSON templates for declarative trees
//!
//! ## Example
//!
//! ```rust
//! use htmlgen::dom::tags::{body, html, p};
//! use htmlgen::{attributes, Attributes, TextMode, TextPolicy};
//!
//! let mut para = p(Attributes::new(), vec![("Fish & Chips", TextMode::Escape).into()]);
//! para.add_child("<b>hot</b>", TextPolicy::raw()).unwrap();
//!
//! let page = html(
//!     attributes([("lang", "en")]),
//!     vec![body(Attributes::new(), vec![para.into()]).into()],
//! );
//!
//! assert_eq!(
//!     page.render(),
//!     "<!DOCTYPE html>\n<html lang=\"en\"><body><p>Fish &amp; Chips <b>hot</b></p></body></html>"
//! );
//! ```

pub mod dom;
pub mod error;
pub mod template;

// Re-exports for convenience

// DOM
pub use dom::{attributes, Attributes, ChildSpec, Document, Element, Node};
pub use dom::{escape, obfuscate, TextMode, TextPolicy};

// Errors
pub use error::{Error, Result};

// Templates
pub use template::{ChildTemplate, ElementTemplate};

/// htmlgen version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
