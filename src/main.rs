/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use clap::Parser;
use std::sync::Arc;
use store::init_state;
use store::types::Cli;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logger(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "holonet_server={level},store={level},web={level},tower_http={level},warn",
            level = log_level
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(&cli.log_level);

    let state = init_state(cli).await?;

    web::serve_web(Arc::clone(&state)).await?;

    match Arc::try_unwrap(state) {
        Ok(state) => state.store.close().await?,
        Err(_) => tracing::warn!("Server state still shared, leaving pool to drop"),
    }

    Ok(())
}
