use serde::{Deserialize, Serialize};

/// Request body for registration. Fields are optional so an absent key is
/// answered as incomplete data instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Public part of a freshly registered user.
#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub name: String,
    pub email: String,
}

/// Response data for a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
