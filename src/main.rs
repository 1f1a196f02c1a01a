use std::process;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use tracing::{error, info};

use hawkular_auth::logging::init_logging;
use hawkular_auth::{AuthenticationOptions, AuthenticationOptionsBuilder, ConfigError, EnvSource};

/// Resolve Hawkular authentication options from the environment and flags.
#[derive(Debug, Parser)]
#[command(name = "hawkular-auth", version)]
struct Cli {
    /// Require authentication. Accepts the same spellings as HAWKULAR_AUTH_ENABLED.
    #[arg(
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    enabled: Option<bool>,

    /// Identifier credential.
    #[arg(long)]
    id: Option<String>,

    /// Secret credential.
    #[arg(long)]
    secret: Option<String>,

    /// Ignore HAWKULAR_AUTH_* variables.
    #[arg(long)]
    no_env: bool,

    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn overrides(&self) -> AuthenticationOptionsBuilder {
        let mut builder = AuthenticationOptions::builder();
        if let Some(enabled) = self.enabled {
            builder = builder.enabled(enabled);
        }
        if let Some(id) = &self.id {
            builder = builder.id(id.as_str());
        }
        if let Some(secret) = &self.secret {
            builder = builder.secret(secret.as_str());
        }
        builder
    }
}

/// Environment first, then flags on top.
fn resolve(cli: &Cli, env: &EnvSource) -> Result<AuthenticationOptions, ConfigError> {
    let base = if cli.no_env {
        AuthenticationOptionsBuilder::default()
    } else {
        env.load()?
    };
    Ok(base.merge(cli.overrides()).build())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("{e}");
        process::exit(1);
    }

    match resolve(&cli, &EnvSource::from_env()) {
        Ok(options) => {
            info!(enabled = options.is_enabled(), "authentication options resolved");
            println!("{options}");
        }
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
