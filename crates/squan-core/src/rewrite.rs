// SPDX-License-Identifier: Apache-2.0
//! Fixpoint string-rewrite engine for move notation.
//!
//! A [`RewriteTable`] maps surface tokens to replacement text. Keys carry an
//! explicit space on both sides so a key can only match at token boundaries,
//! never inside a longer token; replacements carry their own boundary spaces
//! so the property is preserved across passes. The engine applies full
//! replace-all passes until a pass changes nothing.
//!
//! Termination is a property of the table, not the engine: every shipped
//! rule strictly reduces named tokens toward numeric `top,bottom` pairs. A
//! cyclic table is a configuration defect; a debug-only pass cap exists to
//! catch one in tests, never as user-facing control flow.

use regex::{Captures, Regex};
use rustc_hash::FxHashMap;

/// Pass ceiling asserted in debug builds. Generous: realistic scrambles
/// reach their fixpoint in a handful of passes.
const MAX_PASSES: usize = 4096;

/// An immutable token-rewrite table compiled into a single alternation.
pub struct RewriteTable {
    pattern: Option<Regex>,
    rules: FxHashMap<&'static str, &'static str>,
}

impl RewriteTable {
    /// Compiles a table from `(key, replacement)` entries.
    ///
    /// Keys are sorted longest-first before the alternation is built: the
    /// regex engine prefers earlier alternatives, and a short key must not
    /// pre-empt a longer key that could match at the same position.
    #[must_use]
    pub fn new(entries: &[(&'static str, &'static str)]) -> Self {
        let mut keys: Vec<&'static str> = entries.iter().map(|&(key, _)| key).collect();
        keys.sort_by_key(|key| std::cmp::Reverse(key.len()));
        let pattern = if keys.is_empty() {
            None
        } else {
            let alternation = keys
                .iter()
                .map(|key| regex::escape(key))
                .collect::<Vec<_>>()
                .join("|");
            let compiled = Regex::new(&alternation);
            debug_assert!(compiled.is_ok(), "escaped alternation must compile");
            compiled.ok()
        };
        Self {
            pattern,
            rules: entries.iter().copied().collect(),
        }
    }

    /// Whether `token` (without boundary padding) is a key of this table.
    #[must_use]
    pub fn contains_token(&self, token: &str) -> bool {
        self.rules.contains_key(format!(" {token} ").as_str())
    }

    /// Rewrites `text` to its fixpoint under this table.
    ///
    /// The subject is padded with one sentinel space per side so keys match
    /// at the outermost token boundaries too, then passes run until stable
    /// and the sentinels are stripped again. Adjacent tokens share a
    /// boundary space, so a single pass can miss every other token; the
    /// following pass picks those up.
    #[must_use]
    pub fn rewrite(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_owned();
        };
        let mut current = format!(" {text} ");
        let mut passes = 0usize;
        loop {
            let next = pattern.replace_all(&current, |caps: &Captures<'_>| {
                let matched = &caps[0];
                (*self.rules.get(matched).unwrap_or(&matched)).to_owned()
            });
            if next.as_ref() == current {
                break;
            }
            current = next.into_owned();
            passes += 1;
            debug_assert!(passes < MAX_PASSES, "rewrite table failed to reach a fixpoint");
        }
        let stripped = current.strip_prefix(' ').unwrap_or(&current);
        stripped.strip_suffix(' ').unwrap_or(stripped).to_owned()
    }
}
