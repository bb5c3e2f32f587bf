//! User API handlers: account creation and login

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{CreateUserRequest, LoginRequest, UserDto};
use crate::application::UserService;
use crate::domain::DomainError;
use crate::infrastructure::database::repositories::SeaOrmUserRepository;
use crate::interfaces::http::common::ApiResponse;

/// User handler state — concrete over `SeaOrmUserRepository` for Axum
/// compatibility.
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService<SeaOrmUserRepository>>,
}

#[utoipa::path(
    post,
    path = "/api/usuarios",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Account created", body = ApiResponse<UserDto>),
        (status = 409, description = "E-mail already registered")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<UserDto>>, (StatusCode, Json<ApiResponse<UserDto>>)> {
    match state.user_service.create(request.into()).await {
        Ok(user) => Ok(Json(ApiResponse::success(UserDto::from(user)))),
        Err(e) => {
            let status = match &e {
                DomainError::Conflict(_) => StatusCode::CONFLICT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            Err((status, Json(ApiResponse::error(e.to_string()))))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/usuarios/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<String>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<UserHandlerState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<String>>)> {
    match state
        .user_service
        .authenticate(&request.email, &request.password)
        .await
    {
        Ok(_) => Ok(Json(ApiResponse::success("Login exitoso".to_string()))),
        Err(DomainError::Unauthorized(msg)) => {
            Err((StatusCode::UNAUTHORIZED, Json(ApiResponse::error(msg))))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )),
    }
}
