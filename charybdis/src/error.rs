use core::fmt;

/// Errors of fallible keymap lookups over raw indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyMapError {
    /// The layer index is outside the layer table
    InvalidLayer(u8),
    /// The matrix position is outside the layer grid
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for KeyMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyMapError::InvalidLayer(layer) => write!(f, "invalid layer {}", layer),
            KeyMapError::OutOfBounds { row, col } => write!(f, "position ({}, {}) is out of the matrix", row, col),
        }
    }
}

impl core::error::Error for KeyMapError {}
