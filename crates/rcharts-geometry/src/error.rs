/// Errors raised by the layout engine.
///
/// All of these are configuration mistakes at the call site. Degenerate or
/// partially missing data never produces an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No axis is configured under this name and index.
    UnknownAxis { name: String, index: usize },

    /// Domain mode string is neither `exact` nor `rounded`.
    UnsupportedMode(String),

    /// The dataset has no series with this name.
    UnknownSeries(String),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::UnknownAxis { name, index } => {
                write!(f, "Unknown axis {} with index {}", name, index)
            }
            LayoutError::UnsupportedMode(mode) => write!(
                f,
                "Unsupported domain mode {:?}: mode must be one of \"exact\", \"rounded\"",
                mode
            ),
            LayoutError::UnknownSeries(name) => write!(f, "Unknown series {:?}", name),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
