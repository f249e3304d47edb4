/// Convenience result type used across Hexshift.
pub type HexshiftResult<T> = Result<T, HexshiftError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every generation entry point fails with one of these kinds before any
/// output is produced; there are no partial results.
#[derive(thiserror::Error, Debug)]
pub enum HexshiftError {
    /// Color string that is not 3 or 6 hexadecimal digits (optional `#`).
    #[error("invalid color: {0:?} is not a 3- or 6-digit hex color")]
    InvalidColor(String),

    /// Frame count outside the accepted range.
    #[error("invalid frame count: frames must be >= 1")]
    InvalidFrameCount,

    /// Shift mode string other than `wrap` or `pingpong`.
    #[error("invalid shift mode: {0:?} (expected \"wrap\" or \"pingpong\")")]
    InvalidShiftMode(String),

    /// A generation request carried no gradients at all.
    #[error("empty gradient set: at least one gradient is required")]
    EmptyGradientSet,

    /// Explicit stop positions did not pair 1:1 with the color list.
    #[error("mismatched positions: {positions} positions for {colors} colors")]
    MismatchedPositions {
        /// Number of explicit positions supplied.
        positions: usize,
        /// Number of colors supplied.
        colors: usize,
    },

    /// Errors while reading or writing the preset catalog.
    #[error("preset error: {0}")]
    Preset(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HexshiftError {
    /// Build a [`HexshiftError::InvalidColor`] value.
    pub fn invalid_color(s: impl Into<String>) -> Self {
        Self::InvalidColor(s.into())
    }

    /// Build a [`HexshiftError::InvalidShiftMode`] value.
    pub fn invalid_shift_mode(s: impl Into<String>) -> Self {
        Self::InvalidShiftMode(s.into())
    }

    /// Build a [`HexshiftError::Preset`] value.
    pub fn preset(msg: impl Into<String>) -> Self {
        Self::Preset(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
