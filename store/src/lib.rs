/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod characters;
pub mod consts;
pub mod database;
pub mod error;
pub mod favorites;
pub mod input;
pub mod planets;
pub mod state;
pub mod types;
pub mod users;

use anyhow::{Context, Result};
use database::Store;
use std::sync::Arc;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    tracing::info!("Starting Holonet Server on {}:{}", cli.ip, cli.port);

    let store = Store::connect(&cli).await?;

    if let Some(path) = cli.state_file.as_deref() {
        state::load_and_apply_state(&store, path)
            .await
            .context("Failed to apply state file")?;
    }

    Ok(Arc::new(ServerState { store, cli }))
}
