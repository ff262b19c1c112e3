use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{
    AuthResponseDto, LoginRequestDto, RefreshTokenRequestDto, RegisterRequestDto,
};
use crate::features::auth::services::AuthService;
use crate::shared::types::ApiResponse;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/accounts/register",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<AuthResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username or email already taken")
    ),
    tag = "auth"
)]
pub async fn register(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<RegisterRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service.register(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(response),
            Some("Регистрация успешна! Пожалуйста, дождитесь верификации администратором.".to_string()),
            None,
        )),
    ))
}

/// Log in with username and password
#[utoipa::path(
    post,
    path = "/api/accounts/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<AuthResponseDto>),
        (status = 401, description = "Invalid username or password")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<ApiResponse<AuthResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service.login(dto).await?;
    Ok(Json(ApiResponse::success(Some(response), None, None)))
}

/// Exchange a refresh token for a new token pair
#[utoipa::path(
    post,
    path = "/api/accounts/refresh",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "Tokens refreshed", body = ApiResponse<AuthResponseDto>),
        (status = 401, description = "Invalid or expired refresh token")
    ),
    tag = "auth"
)]
pub async fn refresh_token(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<RefreshTokenRequestDto>,
) -> Result<Json<ApiResponse<AuthResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service.refresh(&dto.refresh).await?;
    Ok(Json(ApiResponse::success(Some(response), None, None)))
}
