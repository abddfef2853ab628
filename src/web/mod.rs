//! HTTP surface: router construction and server startup.
//!
//! Routes:
//!   GET  /            -> redirect to /tasks
//!   GET  /tasks[/]    -> list view
//!   GET  /tasks/add[/] -> add form
//!   POST /tasks/add[/] -> add submission
//!   GET  /health      -> JSON health status (outside the session layer)

pub mod routes;
pub mod templates;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::session::{self, SessionStore};
use templates::TemplateEngine;

#[derive(Clone)]
pub struct AppState {
    pub store: SessionStore,
    pub templates: Arc<TemplateEngine>,
}

pub fn build_router(state: AppState) -> Router {
    // Trailing-slash tolerant: axum 0.8 matches paths literally.
    Router::new()
        .route("/", get(routes::root))
        .route("/tasks", get(routes::show_list))
        .route("/tasks/", get(routes::show_list))
        .route(
            "/tasks/add",
            get(routes::show_add_form).post(routes::submit_task),
        )
        .route(
            "/tasks/add/",
            get(routes::show_add_form).post(routes::submit_task),
        )
        .layer(middleware::from_fn_with_state(
            state.store.clone(),
            session::resolve_session,
        ))
        .route("/health", get(routes::health_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(config: Config) -> Result<()> {
    let store = SessionStore::new(config.session.clone());
    let templates = Arc::new(TemplateEngine::new()?);
    let router = build_router(AppState { store, templates });

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("taskpad listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
