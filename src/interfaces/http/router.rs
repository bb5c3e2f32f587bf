//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{ProductService, UserService};
use crate::infrastructure::database::repositories::{
    SeaOrmProductRepository, SeaOrmUserRepository,
};
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse, PaginationParams};
use crate::interfaces::http::modules::{admin, health, products, users};
use crate::interfaces::http::modules::health::HealthState;
use crate::interfaces::http::modules::products::{dto::ProductDto, ProductHandlerState};
use crate::interfaces::http::modules::users::UserHandlerState;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Products
        products::handlers::create_product,
        products::handlers::list_products,
        products::handlers::get_random_products,
        products::handlers::list_all_products,
        products::handlers::get_product,
        products::handlers::delete_product,
        // Users
        users::handlers::create_user,
        users::handlers::login,
        // Administration
        admin::handlers::get_admin_menu,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginatedResponse<ProductDto>,
            PaginationParams,
            // Products
            products::dto::ProductDto,
            products::dto::CreateProductRequest,
            // Users
            users::dto::UserDto,
            users::dto::CreateUserRequest,
            users::dto::LoginRequest,
            // Health
            health::handlers::HealthResponse,
            health::handlers::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Products", description = "Product catalog: create, paginated listing, random showcase, delete"),
        (name = "Users", description = "Account creation and login"),
        (name = "Administration", description = "Admin panel support endpoints"),
    ),
    info(
        title = "Tienda Service API",
        version = "1.0.0",
        description = "REST API for the product catalog and user accounts",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(db: DatabaseConnection) -> Router {
    let product_service = Arc::new(ProductService::new(Arc::new(SeaOrmProductRepository::new(
        db.clone(),
    ))));
    let user_service = Arc::new(UserService::new(Arc::new(SeaOrmUserRepository::new(
        db.clone(),
    ))));

    let product_state = ProductHandlerState { product_service };
    let user_state = UserHandlerState { user_service };
    let health_state = HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Product routes. Static segments (/aleatorios, /admin) take priority
    // over the /{id} capture.
    let product_routes = Router::new()
        .route(
            "/",
            post(products::handlers::create_product).get(products::handlers::list_products),
        )
        .route("/aleatorios", get(products::handlers::get_random_products))
        .route("/admin", get(products::handlers::list_all_products))
        .route(
            "/{id}",
            get(products::handlers::get_product).delete(products::handlers::delete_product),
        )
        .with_state(product_state);

    // User routes
    let user_routes = Router::new()
        .route("/", post(users::handlers::create_user))
        .route("/login", post(users::handlers::login))
        .with_state(user_state);

    // Administration routes
    let admin_routes = Router::new().route("/menu", get(admin::handlers::get_admin_menu));

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::handlers::health_check))
        .with_state(health_state)
        // Resources
        .nest("/api/producto", product_routes)
        .nest("/api/usuarios", user_routes)
        .nest("/api/administracion", admin_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
