//! Domain-specific error types for fluent-patch.
//!
//! Each stage of an enable/disable run has its own error type so the command
//! handlers can turn every failure into the right user-facing notification.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a shipped (or user-overridden) asset.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The asset exists neither in the override directory nor in the bundle.
    #[error("Asset '{0}' not found")]
    NotFound(String),

    /// The asset exists but could not be read or is not valid UTF-8.
    #[error("Asset '{name}' is unreadable: {reason}")]
    Unreadable { name: String, reason: String },
}

/// Errors raised while applying the patch.
#[derive(Error, Debug)]
pub enum PatchError {
    /// A source asset for the rendered script could not be loaded.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// The target file is missing or may not be written by this user.
    #[error("Insufficient privileges to modify {}: {source}", path.display())]
    InsufficientPrivileges {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure.
    #[error("Unexpected I/O error on {}: {source}", path.display())]
    UnexpectedIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PatchError {
    /// Classify an I/O error on `path`.
    ///
    /// Missing files and permission failures both mean the installation
    /// directory is out of reach for the current user.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                PatchError::InsufficientPrivileges { path, source }
            }
            _ => PatchError::UnexpectedIo { path, source },
        }
    }
}

/// Errors raised while removing the patch.
#[derive(Error, Debug)]
pub enum UnpatchError {
    /// Reading or writing the workbench markup failed.
    #[error("Failed to remove Fluent UI from {}: {source}", path.display())]
    Failed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Version comparison errors.
#[derive(Error, Debug)]
pub enum VersionError {
    /// A version string is not valid semver.
    #[error("Invalid version format '{version}': {source}")]
    InvalidFormat {
        version: String,
        #[source]
        source: semver::Error,
    },
}

/// Installation discovery errors.
#[derive(Error, Debug)]
pub enum InstallError {
    /// No VS Code installation could be located.
    #[error("VS Code installation not found. Pass --install-root or set install_root in the config.")]
    NotFound,

    /// The given root does not look like a VS Code `out` directory.
    #[error("No vs/code directory under {}", .0.display())]
    MissingWorkbench(PathBuf),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config directory could not be determined.
    #[error("Config directory not found")]
    NoDirFound,

    /// Failed to read the config file.
    #[error("Failed to read config: {0}")]
    ReadFailed(#[source] io::Error),

    /// Failed to parse the config file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),
}

/// Persisted state errors.
#[derive(Error, Debug)]
pub enum StateError {
    /// Reading or writing the state file failed.
    #[error("State file I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The state file is not a JSON object of strings.
    #[error("State file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Process execution errors.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The command string was empty.
    #[error("Empty command")]
    EmptyCommand,

    /// Failed to spawn the process.
    #[error("Failed to spawn process: {0}")]
    SpawnFailed(#[source] io::Error),
}
