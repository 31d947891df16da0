use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    dto::{
        api::ApiResponse,
        auth::{LoginRequest, LoginResponse, RefreshTokenRequest, RegisterRequest},
    },
    error::AppError,
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with username and password.
///
/// Issues a short-lived access token and a long-lived refresh token. Unknown
/// usernames and wrong passwords are answered identically.
///
/// # Returns
/// - `200` - Tokens and profile in the envelope
/// - `400` - Blank fields, wrong credentials or disabled account
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponse),
        (status = 400, description = "Wrong credentials or disabled account")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = AuthService::new(&state.db, &state.tokens);
    let result = service.login(&payload.username, &payload.password).await?;

    Ok(Json(ApiResponse::success(LoginResponse {
        access_token: result.access_token,
        refresh_token: result.refresh_token,
        user: result.user.into_info_dto(),
    })))
}

/// Register a new account.
///
/// New accounts get the User role and Normal status; the nickname defaults to
/// the username.
///
/// # Returns
/// - `200` - Account created
/// - `400` - Validation failure or duplicate username/email
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created"),
        (status = 400, description = "Validation failure or duplicate identity")
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = AuthService::new(&state.db, &state.tokens);
    service.register(payload.into()).await?;

    Ok(Json(ApiResponse::ok("注册成功")))
}

/// Exchange a refresh token for a new access token.
///
/// The refresh token must validate and its user must still exist; the same
/// refresh token is returned for continued use.
///
/// # Returns
/// - `200` - New access token plus current profile
/// - `401` - Invalid refresh token or deleted user
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = AUTH_TAG,
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Access token refreshed", body = LoginResponse),
        (status = 401, description = "Invalid refresh token or deleted user")
    ),
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);
    let result = service.refresh(&payload.refresh_token).await?;

    Ok(Json(ApiResponse::success(LoginResponse {
        access_token: result.access_token,
        refresh_token: result.refresh_token,
        user: result.user.into_info_dto(),
    })))
}

/// Log out.
///
/// Authentication is stateless, so the server has nothing to invalidate; the
/// client drops its tokens.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses((status = 200, description = "Logged out")),
)]
pub async fn logout() -> impl IntoResponse {
    Json(ApiResponse::ok("登出成功"))
}
