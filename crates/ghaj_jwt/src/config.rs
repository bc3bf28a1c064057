use ghaj_github::IssuerConfig;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("env {name} is not set")]
    Missing { name: &'static str },
}

pub struct Config {
    pub issuer: IssuerConfig,
}

fn env<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing { name }),
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_from(|name| std::env::var(name).ok())
}

fn load_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(Config {
        issuer: IssuerConfig {
            issuer_id: env(&lookup, "GITHUB_APP_ID")?,
            key_path: PathBuf::from(env(&lookup, "GITHUB_PRIVATE_KEY_PATH")?),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn load_test() {
        let config = load_from(lookup(&[
            ("GITHUB_APP_ID", "2782987"),
            ("GITHUB_PRIVATE_KEY_PATH", "/etc/app/private-key.pem"),
        ]))
        .unwrap();
        assert_eq!("2782987", config.issuer.issuer_id);
        assert_eq!(
            PathBuf::from("/etc/app/private-key.pem"),
            config.issuer.key_path
        );
    }

    #[test]
    fn load_keeps_app_id_verbatim() {
        let config = load_from(lookup(&[
            ("GITHUB_APP_ID", "000123"),
            ("GITHUB_PRIVATE_KEY_PATH", "key.pem"),
            ("GH_APP_ID", "999"),
        ]))
        .unwrap();
        assert_eq!("000123", config.issuer.issuer_id);
    }

    #[test]
    fn load_missing_app_id() {
        let err = load_from(lookup(&[("GITHUB_PRIVATE_KEY_PATH", "key.pem")]))
            .err()
            .unwrap();
        assert_eq!("env GITHUB_APP_ID is not set", err.to_string());
    }

    #[test]
    fn load_empty_key_path() {
        let err = load_from(lookup(&[
            ("GITHUB_APP_ID", "1"),
            ("GITHUB_PRIVATE_KEY_PATH", " "),
        ]))
        .err()
        .unwrap();
        assert!(matches!(
            err,
            ConfigError::Missing {
                name: "GITHUB_PRIVATE_KEY_PATH"
            }
        ));
    }
}
