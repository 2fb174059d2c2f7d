use thiserror::Error;

/// Errors that stop a document from being analyzed at all.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DocumentError {
    #[error("failed to parse document: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// Non-fatal problems found while building contours. Each one is also logged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Warning {
    /// A command outside M/L/H/V/Z/C/Q/A was skipped.
    #[error("element {element}: unsupported path command '{code}'")]
    UnsupportedCommand { element: usize, code: char },
    /// Path data stopped parsing early; the prefix before the error was kept.
    #[error("element {element}: malformed path data: {message}")]
    MalformedPathData { element: usize, message: String },
    /// A leaf element had no `d` attribute and was left out.
    #[error("element {element}: <{name}> has no path data")]
    MissingPathData { element: usize, name: String },
    /// Path data produced no points and was left out.
    #[error("element {element}: path data has no points")]
    EmptyContour { element: usize },
}
