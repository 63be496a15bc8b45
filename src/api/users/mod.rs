//! User management pages

pub mod controller;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Response,
    routing::{get, post},
    Router,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{Form, UserForm, ViewContext, WebError};
use crate::domain::user::UserId;

/// Create the user pages router
pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/getUserForm", get(add_form))
        .route("/addUser", post(add_user))
        .route("/getUserList", get(user_list))
        .route("/update/{id}", get(update_form))
        .route("/updateUser", post(update_user))
        .route("/delete/{id}", get(delete_user))
}

/// GET /
pub async fn index(view: ViewContext) -> Result<Response, WebError> {
    debug!("Rendering main page");
    view.respond(controller::index())
}

/// GET /getUserForm
pub async fn add_form(view: ViewContext) -> Result<Response, WebError> {
    debug!("Rendering add user form");
    view.respond(controller::add_form())
}

/// POST /addUser
pub async fn add_user(
    State(state): State<AppState>,
    view: ViewContext,
    Form(form): Form<UserForm>,
) -> Result<Response, WebError> {
    debug!(name = %form.name, "Adding user");
    let outcome = controller::add_user(state.users.as_ref(), form).await?;
    view.respond(outcome)
}

/// GET /getUserList
pub async fn user_list(
    State(state): State<AppState>,
    view: ViewContext,
) -> Result<Response, WebError> {
    let outcome = controller::user_list(state.users.as_ref()).await?;
    view.respond(outcome)
}

/// GET /update/{id}
pub async fn update_form(
    State(state): State<AppState>,
    view: ViewContext,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, WebError> {
    let id = path_id(id)?;
    debug!(user_id = %id, "Rendering update form");
    let outcome = controller::update_form(state.users.as_ref(), id).await?;
    view.respond(outcome)
}

/// POST /updateUser
pub async fn update_user(
    State(state): State<AppState>,
    view: ViewContext,
    Form(form): Form<UserForm>,
) -> Result<Response, WebError> {
    debug!(id = ?form.id, "Updating user");
    let outcome = controller::update_user(state.users.as_ref(), form).await?;
    view.respond(outcome)
}

/// GET /delete/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    view: ViewContext,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, WebError> {
    let id = path_id(id)?;
    debug!(user_id = %id, "Deleting user");
    let outcome = controller::delete_user(state.users.as_ref(), id).await?;
    view.respond(outcome)
}

fn path_id(id: Result<Path<i64>, PathRejection>) -> Result<UserId, WebError> {
    match id {
        Ok(Path(id)) => Ok(UserId::new(id)),
        Err(rejection) => Err(WebError::bad_request(
            rejection.status(),
            rejection.body_text(),
        )),
    }
}
