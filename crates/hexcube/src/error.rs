use thiserror::Error;

/// Error produced by constructing, twisting, or rendering a cube.
///
/// Every error is caused by invalid caller input and is reported before the
/// cube is modified.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CubeError {
    /// Wrong number of facelets
    #[error("cube must have exactly {expected} facelets; got {actual}")]
    InvalidSize {
        /// Required number of facelets.
        expected: usize,
        /// Number of facelets supplied.
        actual: usize,
    },
    /// Color symbol is not one of `O G Y W R B`
    #[error("{}invalid color {symbol:?} (expected one of O, G, Y, W, R, B)", at_index(.index))]
    InvalidColor {
        /// Index of the offending entry, if known.
        index: Option<usize>,
        /// Color symbol that was supplied.
        symbol: String,
    },
    /// Entry is not a well-formed `(color, label)` pair
    #[error("{}malformed facelet entry {entry:?}: {reason}", at_index(.index))]
    InvalidEntry {
        /// Index of the offending entry, if known.
        index: Option<usize>,
        /// Entry text that was supplied.
        entry: String,
        /// What is wrong with the entry.
        reason: &'static str,
    },
    /// Move token is not one of the 18 recognized tokens
    #[error("{0:?} is not a valid move")]
    InvalidMove(String),
    /// Render mode is neither color nor label
    #[error("{0:?} is not a valid render mode (expected `color` or `label`)")]
    InvalidRenderMode(String),
}

impl CubeError {
    /// Attaches an entry index to an [`CubeError::InvalidColor`] or
    /// [`CubeError::InvalidEntry`] error. Other errors are returned unchanged.
    #[must_use]
    pub fn at(self, i: usize) -> Self {
        match self {
            Self::InvalidColor { symbol, .. } => Self::InvalidColor {
                index: Some(i),
                symbol,
            },
            Self::InvalidEntry { entry, reason, .. } => Self::InvalidEntry {
                index: Some(i),
                entry,
                reason,
            },
            other => other,
        }
    }
}

fn at_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("entry {i}: "),
        None => String::new(),
    }
}
