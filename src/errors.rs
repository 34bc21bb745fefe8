use thiserror::Error;

/// Failures while asking the session resolver whether the visitor is logged in.
///
/// Views never show these to the visitor; they collapse into the
/// "authentication required" screen and are only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("session request failed: {0}")]
    Transport(String),
    #[error("session endpoint answered with status {0}")]
    Status(u16),
    #[error("could not decode session response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("session storage rejected write for key `{0}`")]
    WriteRejected(String),
}
