use std::collections::HashMap;
use std::env::{self, VarError};

use tracing::debug;

use crate::builder::AuthenticationOptionsBuilder;
use crate::error::ConfigError;

pub const DEFAULT_PREFIX: &str = "HAWKULAR_AUTH_";

const ENABLED_KEY: &str = "ENABLED";
const ID_KEY: &str = "ID";
const SECRET_KEY: &str = "SECRET";

/// Reads authentication overrides from environment-style variables.
///
/// Keys are `<prefix>ENABLED`, `<prefix>ID` and `<prefix>SECRET`. A key
/// that is missing leaves its field unrecorded in the resulting builder.
pub struct EnvSource {
    prefix: String,
    // None reads the process environment.
    vars: Option<HashMap<String, String>>,
}

impl EnvSource {
    pub fn from_env() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            vars: None,
        }
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            vars: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn load(&self) -> Result<AuthenticationOptionsBuilder, ConfigError> {
        let mut builder = AuthenticationOptionsBuilder::default();

        let enabled_key = self.key(ENABLED_KEY);
        if let Some(value) = self.lookup(&enabled_key)? {
            builder = builder.enabled(parse_bool(&enabled_key, &value)?);
        }
        if let Some(id) = self.lookup(&self.key(ID_KEY))? {
            builder = builder.id(id);
        }
        if let Some(secret) = self.lookup(&self.key(SECRET_KEY))? {
            builder = builder.secret(secret);
        }

        debug!(
            prefix = %self.prefix,
            fields = ?builder.recorded_fields(),
            "loaded authentication overrides"
        );
        Ok(builder)
    }

    fn key(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.prefix)
    }

    fn lookup(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match &self.vars {
            Some(vars) => Ok(vars.get(key).cloned()),
            None => match env::var(key) {
                Ok(value) => Ok(Some(value)),
                Err(VarError::NotPresent) => Ok(None),
                Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
                    key: key.to_string(),
                }),
            },
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" | "on" => Ok(true),
        "false" | "f" | "0" | "no" | "n" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
