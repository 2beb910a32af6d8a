/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod admin;
pub mod endpoints;
pub mod error;
pub mod sitemap;

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use store::types::ServerState;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(endpoints::get_sitemap))
        .route("/health", get(endpoints::get_health))
        .route(
            "/people",
            get(endpoints::people::get).post(endpoints::people::post),
        )
        .route(
            "/people/{id}",
            get(endpoints::people::get_person)
                .put(endpoints::people::put_person)
                .delete(endpoints::people::delete_person),
        )
        .route(
            "/planets",
            get(endpoints::planets::get).post(endpoints::planets::post),
        )
        .route(
            "/planets/{id}",
            get(endpoints::planets::get_planet)
                .put(endpoints::planets::put_planet)
                .delete(endpoints::planets::delete_planet),
        )
        .route("/users", get(endpoints::users::get))
        .route(
            "/users/{id}/favorites",
            get(endpoints::users::get_favorites),
        )
        .route(
            "/users/{id}/favorite/people/{people_id}",
            post(endpoints::users::post_favorite_person)
                .delete(endpoints::users::delete_favorite_person),
        )
        .route(
            "/users/{id}/favorite/planet/{planet_id}",
            post(endpoints::users::post_favorite_planet)
                .delete(endpoints::users::delete_favorite_planet),
        )
        .route("/admin", get(admin::get_index))
        .route("/admin/", get(admin::get_index))
        .route("/admin/{table}", get(admin::get_table))
        .route(
            "/admin/{table}/new",
            get(admin::get_new).post(admin::post_new),
        )
        .route(
            "/admin/{table}/{id}/edit",
            get(admin::get_edit).post(admin::post_edit),
        )
        .route("/admin/{table}/{id}/delete", post(admin::post_delete))
        .fallback(endpoints::handle_404)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
