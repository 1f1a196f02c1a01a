use std::fmt;

use crate::builder::AuthenticationOptionsBuilder;
use crate::types::Secret;

/// Authentication is off unless a caller turns it on.
pub const DEFAULT_ENABLED: bool = false;

/// Authentication options handed to the metrics reporter.
///
/// Nothing here is validated. An enabled value with no secret is
/// representable; rejecting it is up to whoever consumes the options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationOptions {
    enabled: bool,
    id: Option<String>,
    secret: Option<Secret>,
}

impl Default for AuthenticationOptions {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ENABLED,
            id: None,
            secret: None,
        }
    }
}

impl AuthenticationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AuthenticationOptionsBuilder {
        AuthenticationOptionsBuilder::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn secret(&self) -> Option<&str> {
        self.secret.as_ref().map(Secret::expose)
    }

    pub fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.enabled = enabled;
        self
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = Some(id.into());
        self
    }

    pub fn set_secret(&mut self, secret: impl Into<String>) -> &mut Self {
        self.secret = Some(Secret::new(secret));
        self
    }
}

/// One-line summary. The secret is reported only as set or unset.
impl fmt::Display for AuthenticationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "enabled={} id={} secret={}",
            self.enabled,
            self.id.as_deref().unwrap_or("-"),
            if self.secret.is_some() { "set" } else { "unset" }
        )
    }
}

/// Build options from optional parts.
///
/// Starts from [`AuthenticationOptions::default`] and calls the setter for
/// each argument that is `Some`. A `None` leaves the default in place.
pub fn authentication_options(
    enabled: Option<bool>,
    id: Option<String>,
    secret: Option<String>,
) -> AuthenticationOptions {
    let mut options = AuthenticationOptions::new();

    if let Some(enabled) = enabled {
        options.set_enabled(enabled);
    }
    if let Some(id) = id {
        options.set_id(id);
    }
    if let Some(secret) = secret {
        options.set_secret(secret);
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_gives_defaults() {
        let options = authentication_options(None, None, None);
        assert_eq!(options, AuthenticationOptions::default());
        assert!(!options.is_enabled());
        assert_eq!(options.id(), None);
        assert_eq!(options.secret(), None);
    }

    #[test]
    fn all_arguments_are_applied() {
        let options = authentication_options(
            Some(true),
            Some("svc-1".to_string()),
            Some("topsecret".to_string()),
        );
        assert!(options.is_enabled());
        assert_eq!(options.id(), Some("svc-1"));
        assert_eq!(options.secret(), Some("topsecret"));
    }

    #[test]
    fn explicit_false_matches_default() {
        let options = authentication_options(Some(false), None, None);
        assert_eq!(options, AuthenticationOptions::default());
    }

    #[test]
    fn enabled_without_credentials_is_accepted() {
        let options = authentication_options(Some(true), None, None);
        assert!(options.is_enabled());
        assert_eq!(options.secret(), None);
    }

    #[test]
    fn setters_chain() {
        let mut options = AuthenticationOptions::new();
        options.set_enabled(true).set_id("a").set_secret("b").set_id("c");
        assert_eq!(options.id(), Some("c"));
        assert_eq!(options.secret(), Some("b"));
    }

    #[test]
    fn clone_is_independent() {
        let original = authentication_options(Some(true), Some("id".into()), None);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.set_id("other");
        assert_eq!(original.id(), Some("id"));
    }

    #[test]
    fn display_summary() {
        let options = authentication_options(Some(true), Some("svc-1".into()), Some("x".into()));
        assert_eq!(options.to_string(), "enabled=true id=svc-1 secret=set");
        assert_eq!(
            AuthenticationOptions::default().to_string(),
            "enabled=false id=- secret=unset"
        );
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let options = authentication_options(None, None, Some("topsecret".into()));
        let debug = format!("{options:?}");
        assert!(!debug.contains("topsecret"));
        assert!(debug.contains("***"));
    }
}
