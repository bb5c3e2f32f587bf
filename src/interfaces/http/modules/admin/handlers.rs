//! Administration panel handlers

use axum::Json;

use crate::interfaces::http::common::ApiResponse;

#[utoipa::path(
    get,
    path = "/api/administracion/menu",
    tag = "Administration",
    responses(
        (status = 200, description = "Available admin panel functions", body = ApiResponse<Vec<String>>)
    )
)]
pub async fn get_admin_menu() -> Json<ApiResponse<Vec<String>>> {
    let funciones = vec![
        "Agregar producto".to_string(),
        "Editar producto".to_string(),
        "Eliminar producto".to_string(),
        "Ver reservas".to_string(),
        "Gestionar usuarios".to_string(),
    ];
    Json(ApiResponse::success(funciones))
}
