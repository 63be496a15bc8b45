//! User page flows, independent of the HTTP framework

use tracing::{debug, info};

use crate::api::types::{Outcome, UserForm, WebError};
use crate::domain::user::{validate_user, UserId, UserRepository};
use crate::infrastructure::view::{FormState, View};

/// Where successful submissions send the browser
pub const HOME: &str = "/";

/// Landing page
pub fn index() -> Outcome {
    Outcome::Render(View::Main)
}

/// Empty form for a new user
pub fn add_form() -> Outcome {
    Outcome::Render(View::AddUser(FormState::empty()))
}

/// Validate and store a new user.
///
/// Invalid input re-renders the add form with the submitted values and
/// leaves the repository untouched. A submitted `id` is ignored, so this
/// always creates a new record.
pub async fn add_user(users: &dyn UserRepository, form: UserForm) -> Result<Outcome, WebError> {
    let form = UserForm { id: None, ..form };
    let (user, mut errors) = form.bind();
    errors.extend(validate_user(&user));

    if !errors.is_empty() {
        info!(user = %user, errors = errors.len(), "Rejected new user");
        return Ok(Outcome::Render(View::AddUser(form.into_state(errors))));
    }

    let saved = users.save(user).await?;
    info!(user = %saved, "User added");

    Ok(Outcome::Redirect(HOME))
}

/// All users, ordered by id
pub async fn user_list(users: &dyn UserRepository) -> Result<Outcome, WebError> {
    let all = users.find_all().await?;
    debug!(count = all.len(), "Listing users");

    Ok(Outcome::Render(View::UserList(all)))
}

/// Update form pre-filled with a stored user
pub async fn update_form(users: &dyn UserRepository, id: UserId) -> Result<Outcome, WebError> {
    let user = users
        .find_by_id(&id)
        .await?
        .ok_or(WebError::InvalidUserId(id))?;

    Ok(Outcome::Render(View::UpdateUser(FormState::from_user(&user))))
}

/// Validate and store changes to a user.
///
/// Invalid input re-renders the update form. A valid submission is an upsert,
/// so an id that is no longer stored is recreated under that id.
pub async fn update_user(
    users: &dyn UserRepository,
    form: UserForm,
) -> Result<Outcome, WebError> {
    let (user, mut errors) = form.bind();
    errors.extend(validate_user(&user));

    if !errors.is_empty() {
        info!(user = %user, errors = errors.len(), "Rejected user update");
        return Ok(Outcome::Render(View::UpdateUser(form.into_state(errors))));
    }

    let saved = users.save(user).await?;
    info!(user = %saved, "User updated");

    Ok(Outcome::Redirect(HOME))
}

/// Delete a stored user and show the landing page
pub async fn delete_user(users: &dyn UserRepository, id: UserId) -> Result<Outcome, WebError> {
    users
        .find_by_id(&id)
        .await?
        .ok_or(WebError::InvalidUserId(id))?;

    users.delete(&id).await?;
    info!(user_id = %id, "User deleted");

    Ok(Outcome::Render(View::Main))
}
