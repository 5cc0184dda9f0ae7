//! Fragment resolution and playback control errors.

/// Reasons a temporal fragment could not be resolved into a span.
///
/// These never escape the extractor's `Option`-returning entry point; they
/// exist so callers that care (the CLI, logging) can say *why*.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FragmentError {
    #[error("invalid npt time: '{token}'")]
    TokenSyntax { token: String },

    #[error("temporal fragment has neither a start nor an end")]
    MissingBounds,

    #[error("temporal fragment '{raw}' ends before it starts")]
    EmptyRange { raw: String },
}

/// Errors raised when binding a window to a playback handle.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControlError {
    #[error("playback window {start}..{end} is empty")]
    EmptyWindow { start: f64, end: f64 },
}
