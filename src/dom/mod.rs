// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Element tree for building HTML
//!
//! Trees are built bottom-up from owned elements and rendered from the
//! root. There is no parsing path.

mod document;
mod element;
mod node;
pub mod tags;
mod text;

pub use document::{Document, DOCTYPE};
pub use element::{attributes, Attributes, Element};
pub use node::{ChildSpec, Node};
pub use text::{escape, obfuscate, TextMode, TextPolicy};
