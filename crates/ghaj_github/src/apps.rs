use crate::error::{Error, SigningError};
use crate::key::{load_key, SigningKey};
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Seconds between `iat` and `exp`. GitHub accepts at most 10 minutes.
pub const TOKEN_LIFETIME_SECS: i64 = 5 * 60;

/// Payload of a GitHub App JWT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issued at time
    #[serde(rename = "iat")]
    pub issued_at: i64,
    /// JWT expiration time
    #[serde(rename = "exp")]
    pub expires_at: i64,
    /// GitHub App's identifier
    #[serde(rename = "iss")]
    pub issuer: String,
}

/// `expires_at` saturates at `i64::MAX` instead of overflowing.
pub fn build_claims(issuer_id: &str, now: i64) -> Claims {
    Claims {
        issued_at: now,
        expires_at: now.saturating_add(TOKEN_LIFETIME_SECS),
        issuer: issuer_id.to_owned(),
    }
}

/// Compact `header.payload.signature` JWT.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// The token is a bearer credential; keep it out of logs.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(..)")
    }
}

/// Signs `claims` with RS256.
pub fn sign(claims: &Claims, key: &SigningKey) -> Result<Token, SigningError> {
    let header = Header::new(Algorithm::RS256);
    let encoding_key =
        EncodingKey::from_rsa_pem(key.as_bytes()).map_err(SigningError::InvalidKey)?;

    // PEM framing and key type are checked above. Broken RSA material only
    // surfaces once ring parses the DER while signing.
    let token = encode(&header, claims, &encoding_key).map_err(|err| match err.kind() {
        ErrorKind::InvalidRsaKey(_) | ErrorKind::InvalidKeyFormat => SigningError::InvalidKey(err),
        _ => SigningError::Encode(err),
    })?;
    Ok(Token(token))
}

#[derive(Debug, Clone)]
pub struct IssuerConfig {
    /// GitHub App ID, used verbatim as `iss`.
    pub issuer_id: String,
    /// PEM-encoded RSA private key downloaded from the App settings.
    pub key_path: PathBuf,
}

/// Issues App JWTs for a single GitHub App.
///
/// The key file is read again on every call. Nothing is cached between
/// tokens.
#[derive(Debug)]
pub struct TokenIssuer {
    config: IssuerConfig,
}

impl TokenIssuer {
    pub fn new(config: IssuerConfig) -> Self {
        TokenIssuer { config }
    }

    /// Issues a token valid from now until `TOKEN_LIFETIME_SECS` from now.
    #[tracing::instrument(skip(self), fields(issuer = %self.config.issuer_id))]
    pub fn run(&self) -> Result<Token, Error> {
        let key = load_key(&self.config.key_path)?;
        let now = Utc::now().timestamp();
        self.sign_with(&key, now)
    }

    /// Like `run`, with `now` supplied by the caller.
    pub fn issue_at(&self, now: i64) -> Result<Token, Error> {
        let key = load_key(&self.config.key_path)?;
        self.sign_with(&key, now)
    }

    fn sign_with(&self, key: &SigningKey, now: i64) -> Result<Token, Error> {
        let claims = build_claims(&self.config.issuer_id, now);
        let token = sign(&claims, key)?;
        tracing::debug!(
            iat = claims.issued_at,
            exp = claims.expires_at,
            "issued app token"
        );
        Ok(token)
    }
}
