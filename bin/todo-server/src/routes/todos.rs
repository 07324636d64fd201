//! Page and task-list endpoints.
//!
//! Every handler answers with an HTML fragment for htmx to swap into the
//! page. Toggling or deleting an unknown id is not an error: the response is
//! an empty `200`, so a stale row in the browser never produces a failure.

use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{Form, FromRequest, Path, Request, State};
use axum::http::header;
use axum::response::Html;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use todo_types::TodoId;
use tracing::{debug, info};

use crate::error::ServerError;
use crate::state::AppState;
use crate::store::TodoStore;

pub fn router<S: TodoStore>() -> Router<Arc<AppState<S>>> {
    Router::new()
        .route("/",                   get(index::<S>))
        .route("/todos",              get(list_todos::<S>).post(create_todo::<S>))
        .route("/todos/{id}/toggle",  post(toggle_todo::<S>))
        .route("/todos/{id}",         delete(delete_todo::<S>))
}

/// Body of `POST /todos`, form-encoded or JSON.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub content: String,
}

type FragmentResult = Result<Html<String>, ServerError>;

fn path_id(id: Result<Path<TodoId>, PathRejection>) -> Result<TodoId, ServerError> {
    id.map(|Path(id)| id)
        .map_err(|e| ServerError::BadRequest(e.body_text()))
}

fn is_json(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| {
            let mime = mime.trim();
            mime.starts_with("application/") && mime.ends_with("json")
        })
}

/// Extract the create body. `application/json` (and `+json`) bodies go
/// through [`Json`], everything else through [`Form`], whose rejection covers
/// a missing or wrong content type.
async fn create_body(request: Request) -> Result<CreateTodo, ServerError> {
    if is_json(&request) {
        let Json(body) = Json::<CreateTodo>::from_request(request, &())
            .await
            .map_err(|e| ServerError::BadRequest(e.body_text()))?;
        Ok(body)
    } else {
        let Form(body) = Form::<CreateTodo>::from_request(request, &())
            .await
            .map_err(|e| ServerError::BadRequest(e.body_text()))?;
        Ok(body)
    }
}

pub async fn index<S: TodoStore>(State(state): State<Arc<AppState<S>>>) -> FragmentResult {
    Ok(Html(state.renderer.index()?))
}

pub async fn list_todos<S: TodoStore>(State(state): State<Arc<AppState<S>>>) -> FragmentResult {
    let todos = state.store.list().await?;
    Ok(Html(state.renderer.todo_list(&todos)?))
}

pub async fn create_todo<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
    request: Request,
) -> FragmentResult {
    let body = create_body(request).await?;
    if body.content.is_empty() {
        info!("rejected empty content");
        return Err(ServerError::BadRequest("Content can't be empty".to_owned()));
    }

    let todo = state.store.insert(&body.content).await?;
    info!(todo_id = todo.id, "todo created");
    Ok(Html(state.renderer.todo_item(&todo)?))
}

pub async fn toggle_todo<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
    id: Result<Path<TodoId>, PathRejection>,
) -> FragmentResult {
    let id = path_id(id)?;
    match state.store.toggle_completed(id).await? {
        Some(todo) => {
            info!(todo_id = id, completed = todo.completed, "todo toggled");
            Ok(Html(state.renderer.todo_item(&todo)?))
        }
        None => {
            debug!(todo_id = id, "toggle for unknown todo ignored");
            Ok(Html(String::new()))
        }
    }
}

pub async fn delete_todo<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
    id: Result<Path<TodoId>, PathRejection>,
) -> FragmentResult {
    let id = path_id(id)?;
    if state.store.delete_by_id(id).await? {
        info!(todo_id = id, "todo deleted");
    } else {
        debug!(todo_id = id, "delete for unknown todo ignored");
    }
    Ok(Html(String::new()))
}
