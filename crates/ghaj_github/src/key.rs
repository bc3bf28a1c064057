use crate::error::KeyLoadError;
use secstr::SecStr;
use std::fs;
use std::path::Path;

/// Raw PEM bytes of a GitHub App private key.
///
/// Nothing is parsed at load time; `sign` validates the material. The buffer
/// is zeroed on drop and never shows up in `Debug` output.
#[derive(Debug)]
pub struct SigningKey(SecStr);

impl SigningKey {
    pub fn from_pem(pem: impl Into<Vec<u8>>) -> Self {
        SigningKey(SecStr::new(pem.into()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.unsecure()
    }
}

pub fn load_key(path: &Path) -> Result<SigningKey, KeyLoadError> {
    let bytes = fs::read(path).map_err(|source| KeyLoadError {
        path: path.to_owned(),
        source,
    })?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "read private key");
    Ok(SigningKey::from_pem(bytes))
}
