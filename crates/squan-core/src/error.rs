// SPDX-License-Identifier: Apache-2.0
//! Error types for scramble compilation.
use thiserror::Error;

/// Errors raised while decoding states or compiling scrambles.
///
/// Every variant is fatal for the request that raised it: a scramble either
/// compiles completely or the caller receives one of these. Unrecognized
/// tokens in already-canonical move text are NOT an error (see
/// [`crate::parse_scramble`]); the variants here cover the failures the
/// notation layers detect before canonical move text exists.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScrambleError {
    /// A wire-form state string did not decode to exactly 24 hex piece
    /// characters (one `|` or `/` separator is tolerated and removed).
    #[error("malformed puzzle state `{0}`: expected 24 hex piece characters")]
    MalformedState(String),
    /// A bare numeric move token had a character count outside the
    /// supported 1–4 range during comma insertion.
    #[error("numeric move token `{0}` has an unsupported length")]
    UnrecognizedToken(String),
    /// A shorthand move had no expansion entry for the alignment it was
    /// reached under. The alignment is reported in suffix form
    /// (`"1"`/`"0"` for the top layer followed by `"-1"`/`"0"` for the
    /// bottom layer) so authors can see which variant was looked up.
    #[error("shorthand `{name}` has no expansion at alignment {alignment}")]
    UnknownShorthand {
        /// The shorthand token as written in the scramble.
        name: String,
        /// Alignment suffix the lookup was attempted under.
        alignment: String,
    },
}
