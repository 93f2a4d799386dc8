use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    routing::post,
    Json, Router,
};
use tracing::instrument;

use crate::auth::dto::{LoginRequest, RegisterRequest};
use crate::auth::services;
use crate::error::ApiError;
use crate::response;
use crate::state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Response, ApiError> {
    let user = services::register(&state, payload).await?;
    Ok(response::success(
        user,
        "Register berhasil",
        StatusCode::CREATED,
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let data = services::login(&state, payload).await?;
    Ok(response::success(data, "Login berhasil", StatusCode::OK))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    fn register_body(name: &str, email: &str, password: &str) -> Json<RegisterRequest> {
        Json(RegisterRequest {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        })
    }

    fn login_body(email: &str, password: &str) -> Json<LoginRequest> {
        Json(LoginRequest {
            email: Some(email.into()),
            password: Some(password.into()),
        })
    }

    async fn response_of(result: Result<Response, ApiError>) -> (StatusCode, serde_json::Value) {
        let res = result.map_or_else(|e| e.into_response(), |r| r);
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = serde_json::from_slice(&bytes).expect("body is json");
        (status, json)
    }

    #[tokio::test]
    async fn register_login_scenario_over_the_wire_shape() {
        let state = AppState::fake();

        // 201 with the public fields only
        let (status, body) = response_of(
            register(
                State(state.clone()),
                register_body("Hanzo", "hanzo@example.com", "Halo12!!"),
            )
            .await,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], true);
        assert_eq!(body["message"], "Register berhasil");
        assert_eq!(body["data"]["name"], "Hanzo");
        assert_eq!(body["data"]["email"], "hanzo@example.com");
        assert!(body["data"].get("password_hash").is_none());

        // duplicate email -> 409
        let (status, body) = response_of(
            register(
                State(state.clone()),
                register_body("Hanzo", "hanzo@example.com", "Halo12!!"),
            )
            .await,
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["status"], false);
        assert_eq!(body["message"], "Email sudah terdaftar");
        assert_eq!(body["data"], serde_json::Value::Null);

        // correct credentials -> 200 with a token
        let (status, body) = response_of(
            login(
                State(state.clone()),
                login_body("hanzo@example.com", "Halo12!!"),
            )
            .await,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Login berhasil");
        assert!(!body["data"]["token"].as_str().unwrap().is_empty());

        // wrong password -> 401
        let (status, body) = response_of(
            login(
                State(state.clone()),
                login_body("hanzo@example.com", "wrong"),
            )
            .await,
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Password salah");

        // unknown email -> 404
        let (status, body) = response_of(
            login(State(state.clone()), login_body("nobody@x.com", "Halo12!!")).await,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Email tidak ditemukan");
    }

    #[tokio::test]
    async fn register_with_missing_field_is_bad_request() {
        let state = AppState::fake();
        let (status, body) = response_of(
            register(
                State(state),
                Json(RegisterRequest {
                    name: Some("Hanzo".into()),
                    email: None,
                    password: Some("Halo12!!".into()),
                }),
            )
            .await,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Data tidak lengkap");
    }
}
