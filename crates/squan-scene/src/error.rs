// SPDX-License-Identifier: Apache-2.0
//! Error types for the rendering layer.
use thiserror::Error;

use crate::color::StickerRole;

/// Errors raised while resolving piece colors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The piece digit is not a known piece identifier.
    #[error("`{0}` is not a piece identifier")]
    UnknownPiece(char),
    /// The sticker role does not exist on the piece's kind (edges carry
    /// inner/outer stickers, corners carry top/left/right).
    #[error("piece `{piece}` has no `{sticker}` sticker")]
    StickerMismatch {
        /// Piece identifier digit.
        piece: char,
        /// Role that was requested.
        sticker: StickerRole,
    },
}
