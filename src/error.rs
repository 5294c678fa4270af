//! Hard failures. Bad user input never ends up here, it resolves to an
//! invalid color instead.

use thiserror::Error;

use crate::color::Notation;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can be returned by the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A hex string could not be split into two digit channel tokens.
    #[error("expected 6 or 8 hex digits, got {0:?}")]
    HexDigits(String),

    /// A single hex channel token was not one or two hex digits.
    #[error("invalid hex channel {0:?}")]
    HexChannel(String),

    /// The keyword does not name a hue on the color wheel.
    #[error("unknown hue {0:?}")]
    UnknownHue(String),

    /// The keyword is not a known color name.
    #[error("unknown color name {0:?}")]
    UnknownName(String),

    /// No formatter is registered for the notation.
    #[error("no formatter registered for notation {0}")]
    NoFormatter(Notation),
}
