// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Text escaping and obfuscation
//!
//! Text children are transformed once, when they are attached to an
//! element. Rendering never touches them again.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Escape HTML special characters, including both quote kinds
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Replace every character with a decimal numeric character reference
///
/// Expects text that was already passed through [`escape`].
pub fn obfuscate(s: &str) -> String {
    s.chars().map(|c| format!("&#{};", c as u32)).collect()
}

/// Transformation tag for text passed at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    /// Escape markup characters
    Escape,
    /// Escape, then emit every character as a numeric reference
    Obfuscate,
}

impl TextMode {
    /// The policy equivalent to this mode
    pub fn policy(self) -> TextPolicy {
        match self {
            TextMode::Escape => TextPolicy::new(),
            TextMode::Obfuscate => TextPolicy::obfuscated(),
        }
    }
}

/// How text is prepared when added as a child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPolicy {
    /// Escape HTML special characters
    pub escape: bool,
    /// Emit escaped text as numeric character references
    pub obfuscate: bool,
}

impl Default for TextPolicy {
    fn default() -> Self {
        Self {
            escape: true,
            obfuscate: false,
        }
    }
}

impl TextPolicy {
    /// Escape only (the default)
    pub fn new() -> Self {
        Self::default()
    }

    /// Store text verbatim; the caller vouches for it being valid markup
    pub fn raw() -> Self {
        Self {
            escape: false,
            obfuscate: false,
        }
    }

    /// Escape and obfuscate
    pub fn obfuscated() -> Self {
        Self {
            escape: true,
            obfuscate: true,
        }
    }

    /// Set escaping
    pub fn escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Set obfuscation
    pub fn obfuscate(mut self, obfuscate: bool) -> Self {
        self.obfuscate = obfuscate;
        self
    }

    /// Reject obfuscation without escaping
    pub fn validate(&self) -> Result<()> {
        if self.obfuscate && !self.escape {
            return Err(Error::invalid_argument("cannot obfuscate without escaping"));
        }
        Ok(())
    }

    /// Prepare text for storage as a child
    pub fn apply(&self, text: &str) -> Result<String> {
        self.validate()?;

        if !self.escape {
            return Ok(text.to_string());
        }

        let escaped = escape(text);
        if self.obfuscate {
            Ok(obfuscate(&escaped))
        } else {
            Ok(escaped)
        }
    }

    /// Every stored form `text` could take under some valid policy
    ///
    /// Ordered verbatim, escaped, escaped and obfuscated.
    pub fn candidate_forms(text: &str) -> [String; 3] {
        let escaped = escape(text);
        let obfuscated = obfuscate(&escaped);
        [text.to_string(), escaped, obfuscated]
    }
}
