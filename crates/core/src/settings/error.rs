use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving settings.
///
/// Every variant is fatal at startup. A process with broken configuration
/// must not come up.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Production refuses to run on the built-in development secret.
    #[error("SECRET_KEY environment variable must be set in production")]
    MissingSecretKey,

    /// The profile name did not match any known profile.
    #[error("unknown profile: {0}")]
    UnknownProfile(String),

    /// `DB_PORT` was set to something that is not a port number.
    #[error("invalid DB_PORT value: {0}")]
    InvalidPort(String),

    /// The password file was present but could not be read.
    #[error("failed to read password file {}: {source}", .path.display())]
    PasswordFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
