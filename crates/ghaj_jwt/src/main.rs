mod config;

use ghaj_github::{Error, TokenIssuer};
use ghaj_tracing::error;
use std::process::ExitCode;

const EXIT_CONFIG: u8 = 1;
const EXIT_KEY_LOAD: u8 = 2;
const EXIT_SIGNING: u8 = 3;

fn exit_status(err: &Error) -> u8 {
    match err {
        Error::KeyLoad(_) => EXIT_KEY_LOAD,
        Error::Signing(_) => EXIT_SIGNING,
    }
}

fn main() -> ExitCode {
    if let Err(err) = ghaj_tracing::setup() {
        eprintln!("initializing logging failed: {}", err);
        return ExitCode::from(EXIT_CONFIG);
    }

    let config = match config::load() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid configuration");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let issuer = TokenIssuer::new(config.issuer);
    match issuer.run() {
        Ok(token) => {
            println!("{}", token);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "issuing app token failed");
            ExitCode::from(exit_status(&err))
        }
    }
}
