//! 应用层：路由装配与各业务模块

pub mod product;
pub mod shopping_cart;

use axum::{http::StatusCode, middleware, response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::core::{middleware::request_logging_middleware, AppError};
use crate::core::response::{ErrorResponse, PongResponse};
use product::ProductService;
use shopping_cart::ShoppingCartService;

pub const API_PREFIX: &str = "/api/v1";

/// 组装完整路由，业务接口挂载在 `/api/v1` 下
pub fn router(shopping_cart_service: ShoppingCartService, product_service: ProductService) -> Router {
    info!("loading routes");

    let api = Router::new()
        .merge(shopping_cart::routes(shopping_cart_service))
        .merge(product::routes(product_service));

    Router::new()
        .route("/ping", get(ping).fallback(method_not_allowed))
        .nest(API_PREFIX, api)
        .fallback(route_not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
}

pub async fn ping() -> Json<PongResponse> {
    Json(PongResponse::pong())
}

async fn route_not_found() -> AppError {
    AppError::not_found("route not found")
}

/// 路径存在但方法未注册，挂在每个路由的 MethodRouter 上
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("method not allowed")),
    )
}
