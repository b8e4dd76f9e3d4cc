// SPDX-License-Identifier: Apache-2.0
//! Color scheme and per-piece sticker paints.
//!
//! Colors flow in two stages: a [`ColorScheme`] names a color per face, and
//! [`PieceColors`] says which face (or literal color) paints each sticker
//! of each piece. Both are plain values threaded through render calls;
//! nothing here is process-global or mutable behind the caller's back.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// A face of the assembled puzzle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    /// Top layer face.
    Top,
    /// Bottom layer face.
    Bottom,
    /// Front side.
    Front,
    /// Right side.
    Right,
    /// Back side.
    Back,
    /// Left side.
    Left,
}

/// Face colors plus the border stroke and an optional slice-indicator
/// override. Values are whatever the SVG consumer accepts, usually
/// `#rrggbb`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    /// Top face color.
    pub top: String,
    /// Bottom face color.
    pub bottom: String,
    /// Front face color.
    pub front: String,
    /// Right face color.
    pub right: String,
    /// Back face color.
    pub back: String,
    /// Left face color.
    pub left: String,
    /// Border stroke color.
    pub border: String,
    /// Slice-indicator color; falls back to the layer face color.
    pub slice: Option<String>,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            top: "#4d4d4d".to_owned(),
            bottom: "#FFFFFF".to_owned(),
            front: "#CC0000".to_owned(),
            right: "#00AA00".to_owned(),
            back: "#FF8C00".to_owned(),
            left: "#0066CC".to_owned(),
            border: "#000000".to_owned(),
            slice: None,
        }
    }
}

impl ColorScheme {
    /// Color assigned to `face`.
    #[must_use]
    pub fn face(&self, face: Face) -> &str {
        match face {
            Face::Top => &self.top,
            Face::Bottom => &self.bottom,
            Face::Front => &self.front,
            Face::Right => &self.right,
            Face::Back => &self.back,
            Face::Left => &self.left,
        }
    }
}

/// What a sticker is painted with: a scheme face, or a literal color that
/// bypasses the scheme.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paint {
    /// Resolve through the [`ColorScheme`] at render time.
    Face(Face),
    /// Use this color directly.
    Color(String),
}

impl Paint {
    /// Resolves to a concrete color under `scheme`.
    #[must_use]
    pub fn resolve<'a>(&'a self, scheme: &'a ColorScheme) -> &'a str {
        match self {
            Self::Face(face) => scheme.face(*face),
            Self::Color(color) => color,
        }
    }
}

/// Sticker position on a piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickerRole {
    /// Edge sticker on the layer face.
    Inner,
    /// Edge sticker on the side band.
    Outer,
    /// Corner sticker on the layer face.
    Top,
    /// Corner sticker on the counterclockwise side.
    Left,
    /// Corner sticker on the clockwise side.
    Right,
}

impl fmt::Display for StickerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Inner => "inner",
            Self::Outer => "outer",
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Paints for an edge piece's two stickers.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct EdgePaint {
    /// Layer-face sticker.
    pub inner: Paint,
    /// Side-band sticker.
    pub outer: Paint,
}

/// Paints for a corner piece's three stickers.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CornerPaint {
    /// Layer-face sticker.
    pub top: Paint,
    /// Counterclockwise side sticker.
    pub left: Paint,
    /// Clockwise side sticker.
    pub right: Paint,
}

/// Per-piece sticker paints for all sixteen pieces.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PieceColors {
    edges: BTreeMap<char, EdgePaint>,
    corners: BTreeMap<char, CornerPaint>,
}

fn edge(inner: Face, outer: Face) -> EdgePaint {
    EdgePaint {
        inner: Paint::Face(inner),
        outer: Paint::Face(outer),
    }
}

fn corner(top: Face, left: Face, right: Face) -> CornerPaint {
    CornerPaint {
        top: Paint::Face(top),
        left: Paint::Face(left),
        right: Paint::Face(right),
    }
}

impl Default for PieceColors {
    fn default() -> Self {
        let edges = BTreeMap::from([
            ('0', edge(Face::Top, Face::Back)),
            ('2', edge(Face::Top, Face::Left)),
            ('4', edge(Face::Top, Face::Front)),
            ('6', edge(Face::Top, Face::Right)),
            ('8', edge(Face::Bottom, Face::Right)),
            ('a', edge(Face::Bottom, Face::Front)),
            ('c', edge(Face::Bottom, Face::Left)),
            ('e', edge(Face::Bottom, Face::Back)),
        ]);
        let corners = BTreeMap::from([
            ('1', corner(Face::Top, Face::Back, Face::Left)),
            ('3', corner(Face::Top, Face::Left, Face::Front)),
            ('5', corner(Face::Top, Face::Front, Face::Right)),
            ('7', corner(Face::Top, Face::Right, Face::Back)),
            ('9', corner(Face::Bottom, Face::Back, Face::Right)),
            ('b', corner(Face::Bottom, Face::Right, Face::Front)),
            ('d', corner(Face::Bottom, Face::Front, Face::Left)),
            ('f', corner(Face::Bottom, Face::Left, Face::Back)),
        ]);
        Self { edges, corners }
    }
}

impl PieceColors {
    /// Paints for an edge piece.
    ///
    /// # Errors
    /// [`SceneError::UnknownPiece`] when `piece` is not an edge digit.
    pub fn edge(&self, piece: char) -> Result<&EdgePaint, SceneError> {
        self.edges
            .get(&piece.to_ascii_lowercase())
            .ok_or(SceneError::UnknownPiece(piece))
    }

    /// Paints for a corner piece.
    ///
    /// # Errors
    /// [`SceneError::UnknownPiece`] when `piece` is not a corner digit.
    pub fn corner(&self, piece: char) -> Result<&CornerPaint, SceneError> {
        self.corners
            .get(&piece.to_ascii_lowercase())
            .ok_or(SceneError::UnknownPiece(piece))
    }

    /// Repaints a single sticker.
    ///
    /// # Errors
    /// [`SceneError::UnknownPiece`] for an unknown piece digit, or
    /// [`SceneError::StickerMismatch`] when the role does not exist on the
    /// piece's kind.
    pub fn set_sticker(
        &mut self,
        piece: char,
        sticker: StickerRole,
        paint: Paint,
    ) -> Result<(), SceneError> {
        let key = piece.to_ascii_lowercase();
        if let Some(paints) = self.edges.get_mut(&key) {
            match sticker {
                StickerRole::Inner => paints.inner = paint,
                StickerRole::Outer => paints.outer = paint,
                _ => return Err(SceneError::StickerMismatch { piece, sticker }),
            }
            return Ok(());
        }
        if let Some(paints) = self.corners.get_mut(&key) {
            match sticker {
                StickerRole::Top => paints.top = paint,
                StickerRole::Left => paints.left = paint,
                StickerRole::Right => paints.right = paint,
                _ => return Err(SceneError::StickerMismatch { piece, sticker }),
            }
            return Ok(());
        }
        Err(SceneError::UnknownPiece(piece))
    }

    /// Restores a single sticker to its default paint.
    ///
    /// # Errors
    /// Same conditions as [`PieceColors::set_sticker`].
    pub fn reset_sticker(&mut self, piece: char, sticker: StickerRole) -> Result<(), SceneError> {
        let defaults = Self::default();
        let key = piece.to_ascii_lowercase();
        let paint = if self.edges.contains_key(&key) {
            let paints = defaults.edge(key)?;
            match sticker {
                StickerRole::Inner => paints.inner.clone(),
                StickerRole::Outer => paints.outer.clone(),
                _ => return Err(SceneError::StickerMismatch { piece, sticker }),
            }
        } else if self.corners.contains_key(&key) {
            let paints = defaults.corner(key)?;
            match sticker {
                StickerRole::Top => paints.top.clone(),
                StickerRole::Left => paints.left.clone(),
                StickerRole::Right => paints.right.clone(),
                _ => return Err(SceneError::StickerMismatch { piece, sticker }),
            }
        } else {
            return Err(SceneError::UnknownPiece(piece));
        };
        self.set_sticker(piece, sticker, paint)
    }

    /// Restores every sticker to its default paint.
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }
}
