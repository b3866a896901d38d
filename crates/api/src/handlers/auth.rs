//! Handlers for the `/auth` resource (signup, login, password change).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use logoforge_core::error::CoreError;
use logoforge_core::roles::{ACCOUNT_BLOCKED, ROLE_USER};
use logoforge_db::models::account::{AccountInfo, CreateAccount};
use logoforge_db::repositories::AccountRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Successful authentication response returned by signup and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub account: AccountInfo,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/signup
///
/// Register a new account with the `user` role and sign it in. Duplicate
/// emails surface as 409 via the unique constraint.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let email = input.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "A valid email address is required".into(),
        )));
    }

    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let account = AccountRepo::create(
        &state.pool,
        &CreateAccount {
            email,
            password_hash,
            role: ROLE_USER.to_string(),
        },
    )
    .await?;

    tracing::info!(account_id = account.id, "Account created");

    let response = auth_response(&state, account)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Blocked accounts are refused even
/// with correct credentials.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = input.email.trim().to_lowercase();

    let account = AccountRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &account.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    // Status is checked after the password so probing for blocked emails
    // still requires valid credentials.
    if account.status == ACCOUNT_BLOCKED {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is blocked".into(),
        )));
    }

    tracing::info!(account_id = account.id, "Account signed in");

    let response = auth_response(&state, account)?;
    Ok(Json(response))
}

/// POST /api/v1/auth/password
///
/// Change the caller's own password. Requires the current password.
pub async fn change_password(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    let account = AccountRepo::find_by_id(&state.pool, user.account_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "account",
            id: user.account_id,
        }))?;

    let current_valid = verify_password(&input.current_password, &account.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;

    if !current_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Current password is incorrect".into(),
        )));
    }

    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let new_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    AccountRepo::set_password_hash(&state.pool, user.account_id, &new_hash).await?;

    tracing::info!(account_id = user.account_id, "Password changed");

    Ok(StatusCode::NO_CONTENT)
}

/// Build the token + profile payload shared by signup and login.
fn auth_response(
    state: &AppState,
    account: logoforge_db::models::account::Account,
) -> Result<AuthResponse, AppError> {
    let access_token = generate_access_token(account.id, &account.role, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        account: account.into(),
    })
}
