use axum::extract::FromRef;
use tracing::{info, warn};

use crate::auth::dto::{LoginRequest, RegisterRequest, RegisteredUser, TokenResponse};
use crate::auth::jwt::JwtKeys;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo::StoreError;
use crate::auth::repo_types::{NewUser, Role};
use crate::auth::validate::{is_strong_password, is_valid_email};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn register(
    state: &AppState,
    payload: RegisterRequest,
) -> Result<RegisteredUser, ApiError> {
    let (Some(name), Some(email), Some(password)) =
        (payload.name, payload.email, payload.password)
    else {
        return Err(ApiError::Validation("Data tidak lengkap"));
    };
    // A blank name is as useless as a missing one.
    if name.trim().is_empty() {
        return Err(ApiError::Validation("Data tidak lengkap"));
    }

    if !is_valid_email(&email) {
        warn!(%email, "register rejected: invalid email");
        return Err(ApiError::Validation("Email tidak valid"));
    }

    if !is_strong_password(&password) {
        warn!(%email, "register rejected: weak password");
        return Err(ApiError::Validation("Password terlalu lemah"));
    }

    // Fast path only; the unique index on email is what actually keeps
    // concurrent duplicates out.
    if state.users.find_by_email(&email).await?.is_some() {
        warn!(%email, "register rejected: email taken");
        return Err(ApiError::Conflict("Email sudah terdaftar"));
    }

    let password_hash = hash_password(&password)?;

    let user = state
        .users
        .insert(NewUser {
            name,
            email,
            password_hash,
            role: Role::User,
        })
        .await
        .map_err(|e| match e {
            StoreError::DuplicateEmail => ApiError::Conflict("Email sudah terdaftar"),
            StoreError::Other(e) => ApiError::Internal(e),
        })?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(RegisteredUser {
        name: user.name,
        email: user.email,
    })
}

pub async fn login(state: &AppState, payload: LoginRequest) -> Result<TokenResponse, ApiError> {
    let (Some(email), Some(password)) = (payload.email, payload.password) else {
        return Err(ApiError::Validation("Data tidak lengkap"));
    };

    if !is_valid_email(&email) {
        warn!(%email, "login rejected: invalid email");
        return Err(ApiError::Validation("Email tidak valid"));
    }

    // No strength check here: stored accounts may predate the current
    // password policy.
    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or(ApiError::NotFound("Email tidak ditemukan"))?;

    if !verify_password(&password, &user.password_hash)? {
        warn!(%email, user_id = %user.id, "login rejected: wrong password");
        return Err(ApiError::Unauthorized("Password salah"));
    }

    let keys = JwtKeys::from_ref(state);
    let token = keys.sign(&user)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(TokenResponse { token })
}
