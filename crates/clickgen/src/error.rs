// ABOUTME: Error types for clickgen including ErrorCode enum and GenerateError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing different categories of generation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidUrl,
    FileNotFound,
    Fetch,
    Ssrf,
    NameSource,
    Unresolved,
    Io,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::FileNotFound => "file not found",
            ErrorCode::Fetch => "fetch error",
            ErrorCode::Ssrf => "SSRF blocked",
            ErrorCode::NameSource => "no name source",
            ErrorCode::Unresolved => "unresolved element",
            ErrorCode::Io => "io error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for generation operations.
///
/// `subject` identifies what failed: the input path or URL for acquisition
/// errors, the element tag for per-element errors.
#[derive(Debug, thiserror::Error)]
pub struct GenerateError {
    pub code: ErrorCode,
    pub subject: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clickgen: {} {}: {}", self.op, self.subject, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl GenerateError {
    /// Create an InvalidUrl error.
    pub fn invalid_url(
        subject: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::InvalidUrl,
            subject: subject.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a FileNotFound error naming the missing path.
    pub fn file_not_found(
        subject: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::FileNotFound,
            subject: subject.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Fetch error.
    pub fn fetch(
        subject: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Fetch,
            subject: subject.into(),
            op: op.into(),
            source,
        }
    }

    /// Create an SSRF error.
    pub fn ssrf(
        subject: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Ssrf,
            subject: subject.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a NameSource error: an element with nothing to derive a name from.
    pub fn name_source(
        subject: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::NameSource,
            subject: subject.into(),
            op: op.into(),
            source,
        }
    }

    /// Create an Unresolved error: an element no structural path can reach.
    pub fn unresolved(
        subject: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Unresolved,
            subject: subject.into(),
            op: op.into(),
            source,
        }
    }

    /// Create an Io error.
    pub fn io(
        subject: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Io,
            subject: subject.into(),
            op: op.into(),
            source,
        }
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// Returns true if this is a FileNotFound error.
    pub fn is_file_not_found(&self) -> bool {
        self.code == ErrorCode::FileNotFound
    }

    /// Returns true if this is a Fetch error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }

    /// Returns true if this is an SSRF error.
    pub fn is_ssrf(&self) -> bool {
        self.code == ErrorCode::Ssrf
    }

    /// Returns true if this is a NameSource error.
    pub fn is_name_source(&self) -> bool {
        self.code == ErrorCode::NameSource
    }

    /// Returns true if this is an Unresolved error.
    pub fn is_unresolved(&self) -> bool {
        self.code == ErrorCode::Unresolved
    }

    /// Returns true if this is an Io error.
    pub fn is_io(&self) -> bool {
        self.code == ErrorCode::Io
    }
}
