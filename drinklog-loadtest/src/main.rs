//! Load-test binary for the drinklog API.
//!
//! Goose owns the engine surface: virtual-user spawning, scheduling,
//! request metrics, and reporting all come from its command line (host,
//! `--users`, `--hatch-rate`, `--run-time`, ...). This binary only wires up
//! the scenario and a default host.
//!
//! ```bash
//! cargo run -p drinklog-loadtest --release -- --host http://localhost:3001 -u 50 -t 60s
//! ```

use goose::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod scenarios;

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    init_tracing();

    GooseAttack::initialize()?
        .register_scenario(scenarios::api_user::scenario()?)
        .set_default(GooseDefault::Host, config::default_host().as_str())?
        .execute()
        .await?;

    Ok(())
}

/// Scenario-level logging; `RUST_LOG` overrides the default level.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
