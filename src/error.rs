//! Unified error types for sbom-tagvalue.
//!
//! Rendering fails in exactly two ways: the template mapping lacks a
//! mandatory tag, or an external resolver reports a failure. Resolver errors
//! travel back to the caller untouched.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigFileError;
use crate::tagvalue::SpdxTag;

/// Main error type for sbom-tagvalue operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TagValueError {
    /// The template mapping lacks a mandatory tag
    #[error("Missing required field: {tag} in {entity}")]
    MissingField { tag: SpdxTag, entity: String },

    /// A resolver collaborator could not produce a value
    #[error("{operation} failed: {message}")]
    Resolve { operation: ResolveOp, message: String },

    /// Failure raised by a foreign resolver implementation
    #[error("{operation} failed")]
    External {
        operation: ResolveOp,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Resolver operation that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveOp {
    FileRef,
    PackageRef,
    FileChecksum,
    CanonicalizeLicense,
    CollectFileLicenses,
    PrimaryFileNotice,
}

impl fmt::Display for ResolveOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FileRef => "file reference resolution",
            Self::PackageRef => "package reference resolution",
            Self::FileChecksum => "file checksum",
            Self::CanonicalizeLicense => "license canonicalization",
            Self::CollectFileLicenses => "file license collection",
            Self::PrimaryFileNotice => "primary file notice",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for sbom-tagvalue operations
pub type Result<T> = std::result::Result<T, TagValueError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl TagValueError {
    /// Create a missing field error for an entity
    pub fn missing_field(tag: SpdxTag, entity: impl Into<String>) -> Self {
        Self::MissingField {
            tag,
            entity: entity.into(),
        }
    }

    /// Create a resolver error with a plain message
    pub fn resolve(operation: ResolveOp, message: impl Into<String>) -> Self {
        Self::Resolve {
            operation,
            message: message.into(),
        }
    }

    /// Wrap an error raised by a foreign resolver
    pub fn external(
        operation: ResolveOp,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::External {
            operation,
            source: source.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The resolver operation behind this error, if any
    #[must_use]
    pub fn resolve_op(&self) -> Option<ResolveOp> {
        match self {
            Self::Resolve { operation, .. } | Self::External { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TagValueError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<ConfigFileError> for TagValueError {
    fn from(err: ConfigFileError) -> Self {
        match err {
            ConfigFileError::Io(source) => Self::from(source),
            other => Self::Config(other.to_string()),
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context is only attached to errors whose message is owned by this crate
/// (IO and configuration). Missing-field and resolver errors pass through
/// unchanged so callers see exactly what the collaborator raised.
///
/// ```ignore
/// use sbom_tagvalue::error::ErrorContext;
///
/// let content = std::fs::read_to_string(path)
///     .with_context(|| format!("reading {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<TagValueError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: TagValueError, new_ctx: &str) -> TagValueError {
    match err {
        TagValueError::Io {
            path,
            message,
            source,
        } => TagValueError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        TagValueError::Config(msg) => TagValueError::Config(chain_context(new_ctx, &msg)),
        other => other,
    }
}

/// Returns "`new`: `existing`", or just `new` when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
