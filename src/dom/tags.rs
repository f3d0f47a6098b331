// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Tag catalog
//!
//! Each constructor fixes the tag name and forwards attributes and
//! children to [`Element::from_parts`]. Add a tag by adding a line to the
//! table below.

use super::document::Document;
use super::element::{Attributes, Element};
use super::node::ChildSpec;

macro_rules! tags {
    ($($(#[$doc:meta])* $name:ident => $tag:literal;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(attributes: Attributes, children: Vec<ChildSpec>) -> Element {
                Element::from_parts($tag, attributes, children)
            }
        )*
    };
}

tags! {
    /// `<body>`
    body => "body";
    /// `<div>`, the generic block container
    div => "div";
    /// `<p>`
    p => "p";
    /// `<a>`
    a => "a";
    /// `<head>`
    head => "head";
    /// `<title>`
    title => "title";
    /// `<span>`
    span => "span";
    /// `<h1>`
    h1 => "h1";
    /// `<h2>`
    h2 => "h2";
    /// `<ul>`
    ul => "ul";
    /// `<li>`
    li => "li";
}

/// `<html>` document root, rendered with a doctype
pub fn html(attributes: Attributes, children: Vec<ChildSpec>) -> Document {
    Document::from_parts(attributes, children)
}

/// `<img>`, which takes no children
pub fn img(attributes: Attributes) -> Element {
    Element::from_parts("img", attributes, Vec::new())
}
