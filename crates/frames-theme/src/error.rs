use thiserror::Error;

/// Configuration failures around theme selection.
///
/// The palette mapping itself is total over `ThemeMode`, so the only way to
/// ask for a palette that does not exist is with a mode string from outside
/// the enum (environment variables, config files). Those are rejected here
/// instead of silently falling back to an arbitrary palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unrecognized theme mode '{0}', expected \"light\" or \"dark\"")]
    UnknownThemeMode(String),
}
