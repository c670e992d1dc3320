/*---------- Imports ----------*/
use crate::errors::ConfigError;
use std::env;

/*---------- Constants ----------*/
const QUEUE_URL: &str = "QUEUE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderConfig {
    pub queue_url: String,
}

impl SenderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let queue_url = match lookup(QUEUE_URL) {
            Some(value) if value.trim().is_empty() => return Err(ConfigError::Empty(QUEUE_URL)),
            Some(value) => value.trim().to_owned(),
            None => return Err(ConfigError::Missing(QUEUE_URL)),
        };

        Ok(Self { queue_url })
    }
}
