use thiserror::Error;

use panchito_core::settings::SettingsError;

use crate::db::DatabaseError;

/// Failures that prevent the service from starting.
///
/// Bootstrap is deliberately all-or-nothing: a process with broken
/// configuration or an unusable database URL refuses to come up.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("configuration error: {0}")]
    Settings(#[from] SettingsError),

    #[error("database error: {0}")]
    Database(#[from] DatabaseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_failures_keep_their_message() {
        let error = BootstrapError::from(SettingsError::MissingSecretKey);
        assert_eq!(
            error.to_string(),
            "configuration error: SECRET_KEY environment variable must be set in production"
        );
    }

    #[test]
    fn database_failures_keep_their_message() {
        let error = BootstrapError::from(DatabaseError::UnsupportedScheme);
        assert_eq!(
            error.to_string(),
            "database error: unsupported database URL scheme (expected mysql:// or sqlite:)"
        );
    }
}
