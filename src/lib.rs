//! Authentication options for the Hawkular metrics reporter.
//!
//! [`authentication_options`] builds an [`AuthenticationOptions`] from
//! optional parts, overriding only what the caller supplies.
//! [`AuthenticationOptionsBuilder`] does the same with chained calls and can
//! layer several sources, such as [`EnvSource`] and command-line flags.

pub mod builder;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod types;

pub use builder::AuthenticationOptionsBuilder;
pub use config::EnvSource;
pub use error::ConfigError;
pub use options::{AuthenticationOptions, DEFAULT_ENABLED, authentication_options};
pub use types::Secret;
