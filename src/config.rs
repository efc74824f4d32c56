//! Environment-based configuration for the transaction service credentials.

use std::env;

use crate::{Error, client::Credential};

/// The base URL of the transaction service.
const API_URL_VAR: &str = "SPENDWATCH_API_URL";

/// The static credential, pre-encoded for basic auth or a raw bearer token.
const API_TOKEN_VAR: &str = "SPENDWATCH_API_TOKEN";

/// Optional: `basic` (the default) or `bearer`.
const API_SCHEME_VAR: &str = "SPENDWATCH_API_SCHEME";

/// Everything needed to talk to the transaction service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The base URL of the transaction service.
    pub base_url: String,
    /// The credential sent on every request.
    pub credential: Credential,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns [Error::MissingConfig] naming the first variable that is
    /// missing or empty.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let base_url = read_required(&lookup, API_URL_VAR)?;
        let token = read_required(&lookup, API_TOKEN_VAR)?;

        let credential = match lookup(API_SCHEME_VAR) {
            Some(scheme) if scheme.eq_ignore_ascii_case("bearer") => Credential::Bearer(token),
            _ => Credential::Basic(token),
        };

        Ok(Self {
            base_url,
            credential,
        })
    }
}

fn read_required(
    lookup: impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, Error> {
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or(Error::MissingConfig(name))
}
