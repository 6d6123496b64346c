//! Unified error types for the toggle tools.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// PersistenceError
// ---------------------------------------------------------------------------

/// Errors from the per-user preference store.
///
/// Missing keys and values of the wrong type are *not* errors; readers
/// normalize those to their defaults. This type covers stores that could not
/// be opened, created, or written.
#[derive(Debug)]
pub enum PersistenceError {
    /// The underlying store rejected an operation.
    Io {
        context: String,
        source: std::io::Error,
    },
    /// The file-backed store could not serialize its document.
    Encode(toml::ser::Error),
}

impl PersistenceError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { context, source } => write!(f, "{context}: {source}"),
            Self::Encode(e) => write!(f, "encode preference state: {e}"),
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode(e) => Some(e),
        }
    }
}

impl From<toml::ser::Error> for PersistenceError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Encode(e)
    }
}

// ---------------------------------------------------------------------------
// ShellInteropError
// ---------------------------------------------------------------------------

/// Errors talking to the desktop shell's wallpaper interface.
#[derive(Debug)]
pub enum ShellInteropError {
    /// The interface could not be reached at all (not registered, COM
    /// initialization failed, unsupported OS version).
    Unavailable(String),
    /// The interface was reached but rejected a call.
    CallFailed { call: &'static str, detail: String },
}

impl fmt::Display for ShellInteropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "desktop shell unavailable: {msg}"),
            Self::CallFailed { call, detail } => write!(f, "{call} failed: {detail}"),
        }
    }
}

impl std::error::Error for ShellInteropError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors from the optional config file.
///
/// An absent file is not an error; the defaults apply.
#[derive(Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not TOML or a field has the wrong shape.
    Parse(toml::de::Error),
    /// A field parsed but its value is unusable.
    Value { field: &'static str, reason: String },
    /// No `state.path` was given and the platform has no data directory.
    NoStateDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Parse(e) => write!(f, "malformed config file: {e}"),
            Self::Value { field, reason } => write!(f, "{field}: {reason}"),
            Self::NoStateDir => {
                f.write_str("no data directory for preference state; set state.path")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            Self::Value { .. } | Self::NoStateDir => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// ToggleError — top-level
// ---------------------------------------------------------------------------

/// Top-level error reported by every tool before exiting nonzero.
#[derive(Debug)]
pub enum ToggleError {
    /// Command-line arguments were rejected.
    Usage(String),
    Config(ConfigError),
    Persistence(PersistenceError),
    Shell(ShellInteropError),
}

impl fmt::Display for ToggleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => f.write_str(msg),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Persistence(e) => write!(f, "preference store: {e}"),
            Self::Shell(e) => write!(f, "shell: {e}"),
        }
    }
}

impl std::error::Error for ToggleError {}

impl From<ConfigError> for ToggleError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PersistenceError> for ToggleError {
    fn from(e: PersistenceError) -> Self {
        Self::Persistence(e)
    }
}

impl From<ShellInteropError> for ToggleError {
    fn from(e: ShellInteropError) -> Self {
        Self::Shell(e)
    }
}
