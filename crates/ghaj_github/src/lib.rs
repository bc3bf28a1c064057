mod apps;
mod error;
mod key;

pub use apps::{build_claims, sign, Claims, IssuerConfig, Token, TokenIssuer, TOKEN_LIFETIME_SECS};
pub use error::{Error, KeyLoadError, SigningError};
pub use key::{load_key, SigningKey};
