use std::fmt;
use std::fs;

use log::debug;
use url::Url;

use super::{DEFAULT_ENDPOINT_URL, ENV_API_KEY, ENV_API_KEY_FILE, ENV_API_URL};
use crate::error::{Error, Result};

/// Provider settings. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    api_key: String,
    endpoint: Url,
}

impl Config {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::MissingCredentials(ENV_API_KEY));
        }

        let endpoint = endpoint.into();
        let url = Url::parse(&endpoint).map_err(|e| Error::InvalidEndpoint {
            endpoint: endpoint.clone(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidEndpoint {
                endpoint,
                reason: "not a base URL".to_string(),
            });
        }

        Ok(Self {
            api_key,
            endpoint: url,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let api_key = match (get(ENV_API_KEY), get(ENV_API_KEY_FILE)) {
            (Some(key), _) => key,
            (None, Some(path)) => {
                debug!("Reading API key from {}", path);
                let contents =
                    fs::read_to_string(&path).map_err(|source| Error::CredentialsFile {
                        var: ENV_API_KEY_FILE,
                        path,
                        source,
                    })?;
                contents.trim().to_string()
            }
            (None, None) => return Err(Error::MissingCredentials(ENV_API_KEY)),
        };

        let endpoint = get(ENV_API_URL).unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string());

        Self::new(api_key, endpoint)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}
