// SPDX-License-Identifier: Apache-2.0
//! JSON color-configuration overlay for the render command.

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;
use squan_scene::{ColorScheme, Paint, PieceColors, StickerRole};

/// A scheme file: optional face-color overrides plus optional per-sticker
/// repaints, applied over the built-in defaults.
///
/// ```json
/// {
///   "scheme": { "top": "#2a2a2a", "slice": "#666666" },
///   "stickers": [ { "piece": "3", "sticker": "top", "paint": "#ff00ff" } ]
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemeFile {
    scheme: Option<ColorScheme>,
    stickers: Vec<StickerOverride>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StickerOverride {
    piece: char,
    sticker: StickerRole,
    paint: Paint,
}

impl SchemeFile {
    /// Loads and parses a scheme file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scheme file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing scheme file {}", path.display()))
    }

    /// Applies the overlay, returning the effective scheme and paints.
    pub fn apply(self) -> anyhow::Result<(ColorScheme, PieceColors)> {
        let scheme = self.scheme.unwrap_or_default();
        let mut colors = PieceColors::default();
        for entry in self.stickers {
            colors
                .set_sticker(entry.piece, entry.sticker, entry.paint)
                .with_context(|| format!("sticker override for piece `{}`", entry.piece))?;
        }
        Ok((scheme, colors))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use squan_scene::Face;

    #[test]
    fn empty_file_yields_defaults() {
        let file: SchemeFile = serde_json::from_str("{}").unwrap();
        let (scheme, colors) = file.apply().unwrap();
        assert_eq!(scheme, ColorScheme::default());
        assert_eq!(colors, PieceColors::default());
    }

    #[test]
    fn overlay_applies_scheme_and_sticker_overrides() {
        let text = r##"{
            "scheme": { "top": "#111111" },
            "stickers": [
                { "piece": "4", "sticker": "outer", "paint": "#222222" },
                { "piece": "4", "sticker": "inner", "paint": "left" }
            ]
        }"##;
        let file: SchemeFile = serde_json::from_str(text).unwrap();
        let (scheme, colors) = file.apply().unwrap();
        assert_eq!(scheme.top, "#111111");
        let paints = colors.edge('4').unwrap();
        assert_eq!(paints.outer, Paint::Color("#222222".to_owned()));
        assert_eq!(paints.inner, Paint::Face(Face::Left));
    }

    #[test]
    fn bad_sticker_override_is_reported() {
        let text = r##"{ "stickers": [ { "piece": "4", "sticker": "left", "paint": "#fff" } ] }"##;
        let file: SchemeFile = serde_json::from_str(text).unwrap();
        assert!(file.apply().is_err());
    }
}
