//! View handlers: list view, add view (display and submit), health.

use axum::{
    extract::{Extension, Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::templates::AddFormView;
use super::AppState;
use crate::forms::RawTaskForm;
use crate::session::SessionId;

pub async fn root() -> Redirect {
    Redirect::to("/tasks")
}

/// List view: render the session's ordered task list. The session entry was
/// lazily created by the session middleware on first visit, so a fresh
/// session renders the empty-state placeholder.
pub async fn show_list(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Result<Html<String>, StatusCode> {
    let tasks = state.store.tasks(session).await;
    state
        .templates
        .render_list(&tasks)
        .map(Html)
        .map_err(internal_error)
}

/// Add view, display branch: an unfilled form with the session's
/// anti-forgery token. Idempotent and read-only.
pub async fn show_add_form(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Result<Html<String>, StatusCode> {
    let csrf_token = state
        .store
        .csrf_token(session)
        .await
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
    state
        .templates
        .render_add(&AddFormView::empty(csrf_token))
        .map(Html)
        .map_err(internal_error)
}

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    task: Option<String>,
    priority: Option<String>,
    csrf_token: Option<String>,
}

/// Add view, submit branch. The anti-forgery token is checked before the
/// validator runs; an invalid submission re-renders the form with the
/// submitted values and field errors, leaving session state untouched.
pub async fn submit_task(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(body): Form<AddTaskRequest>,
) -> Result<Response, StatusCode> {
    let presented = body.csrf_token.as_deref().unwrap_or("");
    if !state.store.verify_csrf(session, presented).await {
        debug!("rejected task submission with bad anti-forgery token");
        return Err(StatusCode::FORBIDDEN);
    }

    let raw = RawTaskForm {
        task: body.task,
        priority: body.priority,
    };

    match raw.validate() {
        Ok(task) => {
            state.store.append_task(session, task).await;
            Ok(Redirect::to("/tasks").into_response())
        }
        Err(errors) => {
            let csrf_token = state
                .store
                .csrf_token(session)
                .await
                .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
            state
                .templates
                .render_add(&AddFormView::with_submission(csrf_token, &raw, &errors))
                .map(|html| Html(html).into_response())
                .map_err(internal_error)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    status: String,
    timestamp: DateTime<Utc>,
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

fn internal_error(e: crate::error::Error) -> StatusCode {
    error!("failed to render page: {e}");
    StatusCode::INTERNAL_SERVER_ERROR
}
