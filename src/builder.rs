use crate::options::{AuthenticationOptions, authentication_options};

/// Records which authentication fields a caller wants to override.
///
/// Every field starts unset. `build` and `apply_to` only touch the fields
/// that were recorded, so the rest keep whatever value the target has.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthenticationOptionsBuilder {
    enabled: Option<bool>,
    id: Option<String>,
    secret: Option<String>,
}

impl AuthenticationOptionsBuilder {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_none() && self.id.is_none() && self.secret.is_none()
    }

    /// Layer `other` on top of `self`. Fields recorded in `other` win.
    pub fn merge(self, other: Self) -> Self {
        Self {
            enabled: other.enabled.or(self.enabled),
            id: other.id.or(self.id),
            secret: other.secret.or(self.secret),
        }
    }

    /// Write the recorded fields onto an existing value.
    pub fn apply_to(&self, options: &mut AuthenticationOptions) {
        if let Some(enabled) = self.enabled {
            options.set_enabled(enabled);
        }
        if let Some(id) = &self.id {
            options.set_id(id.as_str());
        }
        if let Some(secret) = &self.secret {
            options.set_secret(secret.as_str());
        }
    }

    pub fn build(self) -> AuthenticationOptions {
        authentication_options(self.enabled, self.id, self.secret)
    }

    /// Names of the recorded fields, for logging.
    pub(crate) fn recorded_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.enabled.is_some() {
            fields.push("enabled");
        }
        if self.id.is_some() {
            fields.push("id");
        }
        if self.secret.is_some() {
            fields.push("secret");
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_builds_defaults() {
        let builder = AuthenticationOptions::builder();
        assert!(builder.is_empty());
        assert_eq!(builder.build(), AuthenticationOptions::default());
    }

    #[test]
    fn build_matches_function() {
        let built = AuthenticationOptions::builder()
            .enabled(true)
            .id("svc-1")
            .secret("topsecret")
            .build();
        let expected = authentication_options(
            Some(true),
            Some("svc-1".into()),
            Some("topsecret".into()),
        );
        assert_eq!(built, expected);
    }

    #[test]
    fn apply_to_keeps_unrecorded_fields() {
        let mut options = AuthenticationOptions::new();
        options.set_enabled(true).set_id("keep").set_secret("old");

        AuthenticationOptions::builder()
            .secret("new")
            .apply_to(&mut options);

        assert!(options.is_enabled());
        assert_eq!(options.id(), Some("keep"));
        assert_eq!(options.secret(), Some("new"));
    }

    #[test]
    fn merge_prefers_later_fields() {
        let base = AuthenticationOptions::builder().enabled(true).id("env-id");
        let overrides = AuthenticationOptions::builder().id("cli-id").secret("s");

        let merged = base.merge(overrides);
        assert_eq!(
            merged,
            AuthenticationOptions::builder()
                .enabled(true)
                .id("cli-id")
                .secret("s")
        );
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let base = AuthenticationOptions::builder().enabled(false).secret("s");
        assert_eq!(
            base.clone().merge(AuthenticationOptionsBuilder::default()),
            base
        );
    }

    #[test]
    fn recorded_fields_lists_set_values() {
        let builder = AuthenticationOptions::builder().enabled(false).secret("");
        assert_eq!(builder.recorded_fields(), vec!["enabled", "secret"]);
    }
}
