use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The private key file could not be read.
#[derive(Debug, Error)]
#[error("cannot read private key {}: {source}", .path.display())]
pub struct KeyLoadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Error)]
pub enum SigningError {
    /// Key bytes are not a PEM-encoded RSA private key.
    #[error("private key is not a valid PEM-encoded RSA key: {0}")]
    InvalidKey(#[source] jsonwebtoken::errors::Error),

    /// The key parsed but RS256 signing rejected it.
    #[error("signing token failed: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    KeyLoad(#[from] KeyLoadError),

    #[error(transparent)]
    Signing(#[from] SigningError),
}
