use thiserror::Error;

/// Unified error type for gitmoji-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Log parsing error: {0}")]
    LogParse(String),

    #[error("No emoji found in commit subject: {subject:?}")]
    MissingEmoji { subject: String },

    #[error("Version parsing error: {0}")]
    VersionParse(#[from] semver::Error),

    #[error("Invalid release type: {value:?} (expected \"major\", \"minor\" or \"patch\")")]
    InvalidReleaseType { value: String },

    #[error("Command `{command}` failed with args {args:?}: {stderr}")]
    Subprocess {
        command: String,
        args: Vec<String>,
        stderr: String,
    },

    #[error("Commits are not sorted newest-first: {0}")]
    UnsortedCommits(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in gitmoji-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a log parsing error with context
    pub fn log_parse(msg: impl Into<String>) -> Self {
        ReleaseError::LogParse(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        ReleaseError::Tag(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseError::Manifest(msg.into())
    }
}
