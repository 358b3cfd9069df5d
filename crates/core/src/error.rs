use std::io;

/// Errors that can occur while transpiling handlers or assembling a plugin
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Malformed handler signature: {0}")]
    MalformedSignature(String),

    #[error("Cannot infer a type for the declaration on line {line}: {message}")]
    UninferableDeclaration { line: usize, message: String },

    #[error("'{0}' is not a valid Java identifier")]
    InvalidIdentifier(String),

    #[error("A command class named '{0}' is already registered")]
    DuplicateCommand(String),

    #[error("Command '{0}' has no handler")]
    MissingHandler(String),

    #[error("Plugin '{0}' has the same name as the support library directory")]
    LibraryNameCollision(String),

    #[error("Required tool '{0}' was not found on PATH")]
    ToolNotFound(String),

    #[error("{tool} failed ({status})\n{stderr}")]
    ExternalTool {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("Archive error: {0}")]
    ArchiveError(#[from] zip::result::ZipError),

    #[error("Manifest error: {0}")]
    ManifestError(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Registration ended before the plugin was marked ready")]
    RegistrationAbandoned,

    #[error("The deferred build was cancelled")]
    TriggerCancelled,

    #[error("{0}")]
    Other(String),
}

/// Result type alias for plugsmith operations
pub type Result<T> = std::result::Result<T, Error>;
