//! Product API handlers
//!
//! Thin wrappers over `ProductService`; all business rules live in the
//! application layer.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateProductRequest, ProductDto};
use crate::application::ProductService;
use crate::domain::DomainError;
use crate::infrastructure::database::repositories::SeaOrmProductRepository;
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse, PaginationParams};

/// How many products the showcase endpoint returns.
const RANDOM_SHOWCASE_COUNT: usize = 10;

/// Product handler state — concrete over `SeaOrmProductRepository` for Axum
/// compatibility.
#[derive(Clone)]
pub struct ProductHandlerState {
    pub product_service: Arc<ProductService<SeaOrmProductRepository>>,
}

#[utoipa::path(
    post,
    path = "/api/producto",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created", body = ApiResponse<ProductDto>),
        (status = 400, description = "Validation error (too few images or name in use)"),
        (status = 409, description = "Name already taken (database constraint)")
    )
)]
pub async fn create_product(
    State(state): State<ProductHandlerState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<Json<ApiResponse<ProductDto>>, (StatusCode, Json<ApiResponse<ProductDto>>)> {
    match state.product_service.create(request.into()).await {
        Ok(product) => Ok(Json(ApiResponse::success(ProductDto::from(product)))),
        Err(e) => {
            let status = match &e {
                DomainError::Validation(_) => StatusCode::BAD_REQUEST,
                DomainError::Conflict(_) => StatusCode::CONFLICT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            Err((status, Json(ApiResponse::error(e.to_string()))))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/producto/aleatorios",
    tag = "Products",
    responses(
        (status = 200, description = "Up to 10 random products", body = ApiResponse<Vec<ProductDto>>)
    )
)]
pub async fn get_random_products(
    State(state): State<ProductHandlerState>,
) -> Result<Json<ApiResponse<Vec<ProductDto>>>, (StatusCode, Json<ApiResponse<Vec<ProductDto>>>)> {
    match state.product_service.get_random(RANDOM_SHOWCASE_COUNT).await {
        Ok(products) => Ok(Json(ApiResponse::success(
            products.into_iter().map(ProductDto::from).collect(),
        ))),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/api/producto/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_product(
    State(state): State<ProductHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ProductDto>>, (StatusCode, Json<ApiResponse<ProductDto>>)> {
    match state.product_service.get_by_id(id).await {
        Ok(Some(product)) => Ok(Json(ApiResponse::success(ProductDto::from(product)))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Producto no encontrado")),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/api/producto",
    tag = "Products",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of products", body = PaginatedResponse<ProductDto>)
    )
)]
pub async fn list_products(
    State(state): State<ProductHandlerState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<ProductDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.product_service.get_page(params.page, params.size).await {
        Ok(result) => {
            let items: Vec<ProductDto> = result.items.into_iter().map(ProductDto::from).collect();
            Ok(Json(PaginatedResponse::new(
                items,
                result.total,
                result.page,
                result.size,
            )))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/api/producto/admin",
    tag = "Products",
    responses(
        (status = 200, description = "Full catalog", body = ApiResponse<Vec<ProductDto>>)
    )
)]
pub async fn list_all_products(
    State(state): State<ProductHandlerState>,
) -> Result<Json<ApiResponse<Vec<ProductDto>>>, (StatusCode, Json<ApiResponse<Vec<ProductDto>>>)> {
    match state.product_service.get_all().await {
        Ok(products) => Ok(Json(ApiResponse::success(
            products.into_iter().map(ProductDto::from).collect(),
        ))),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )),
    }
}

#[utoipa::path(
    delete,
    path = "/api/producto/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<String>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_product(
    State(state): State<ProductHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<String>>)> {
    match state.product_service.delete(id).await {
        Ok(()) => Ok(Json(ApiResponse::success(
            "Producto eliminado correctamente".to_string(),
        ))),
        Err(DomainError::NotFound { .. }) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("El producto no existe")),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )),
    }
}
