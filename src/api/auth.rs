//! Authentication endpoints
//!
//! - GET/POST /login - credential check; success answers with a redirect to
//!   the admin surface and nothing else (no token, cookie, or session)
//! - GET/POST /register - account creation

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;

use crate::api::common::{ApiError, AppState};
use crate::api::responses::AuthPage;
use crate::models::NewUser;
use crate::services::UserServiceError;

/// Form fields for login
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Form fields for registration
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// GET /login - blank login page
pub async fn login_page() -> Json<AuthPage> {
    Json(AuthPage::empty())
}

/// POST /login - check credentials
///
/// Success redirects to `/admin`. Failure re-serves the page payload with a
/// generic message that never says which field was wrong.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, ApiError> {
    match state.users.authenticate(&form.email, &form.password).await {
        Ok(user) => {
            tracing::debug!("Login succeeded for {}", user.email);
            Ok(Redirect::to("/admin").into_response())
        }
        Err(err @ UserServiceError::InvalidCredentials) => {
            Ok(Json(AuthPage::with_error(err.to_string())).into_response())
        }
        Err(err) => Err(ApiError::internal_error(err.to_string())),
    }
}

/// GET /register - blank registration page
pub async fn register_page() -> Json<AuthPage> {
    Json(AuthPage::empty())
}

/// POST /register - create an account
///
/// Success redirects to `/login`. A duplicate email re-serves the page
/// payload with a user-facing message; it is not an error status.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, ApiError> {
    let new_user = NewUser::new(form.email, form.password, form.name);

    match state.users.register(new_user).await {
        Ok(_) => Ok(Redirect::to("/login").into_response()),
        Err(err @ UserServiceError::EmailTaken) => {
            Ok(Json(AuthPage::with_error(err.to_string())).into_response())
        }
        Err(err) => Err(ApiError::internal_error(err.to_string())),
    }
}
