use thiserror::Error;

/// Discriminates the circumstance under which a [`DiffError`] was raised.
///
/// Callers that only need "did it fail" can ignore this and use
/// [`DiffError`]'s `Display` impl; callers that branch on failure kind can
/// match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffErrorKind {
    /// Malformed configuration: invalid regex, unknown output format name,
    /// unknown option.
    Config,
    /// A format parser rejected its input.
    Parse,
    /// A filesystem operation failed in a convenience entry point.
    Io,
    /// `diff_files` was given an extension with no viable parser fallback.
    UnsupportedExtension,
}

/// The single error type raised across this system's fallible boundaries.
///
/// See the crate-level contract: every caller receives either a result or
/// a `DiffError` carrying a human-readable message. The engine itself never
/// fails on valid inputs and valid options; only option validation, parsing,
/// and file I/O can produce one.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DiffError {
    kind: DiffErrorKind,
    message: String,
}

impl DiffError {
    pub fn new(kind: DiffErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(DiffErrorKind::Config, message)
    }

    pub fn parse(format: &str, message: impl std::fmt::Display) -> Self {
        Self::new(DiffErrorKind::Parse, format!("{format} parse error: {message}"))
    }

    pub fn io(path: impl std::fmt::Display, source: impl std::fmt::Display) -> Self {
        Self::new(DiffErrorKind::Io, format!("io error reading {path}: {source}"))
    }

    pub fn unsupported_extension(path: impl std::fmt::Display) -> Self {
        Self::new(
            DiffErrorKind::UnsupportedExtension,
            format!("unsupported file extension for {path} and JSON fallback also failed"),
        )
    }

    pub fn kind(&self) -> DiffErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
