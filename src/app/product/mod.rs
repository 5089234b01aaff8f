//! 商品模块

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

use axum::{
    routing::{get, post},
    Router,
};

use crate::app::{method_not_allowed, ping};

pub use model::Product;
pub use repository::ProductRepository;
pub use service::ProductService;

pub fn routes(service: ProductService) -> Router {
    Router::new()
        .route(
            "/product",
            post(handler::create_product).fallback(method_not_allowed),
        )
        .route("/product/ping", get(ping).fallback(method_not_allowed))
        // 同一路径段上 GET 取购物车标识，PATCH/DELETE 取商品标识
        .route(
            "/product/:id",
            get(handler::list_products)
                .patch(handler::update_quantity)
                .delete(handler::delete_product)
                .fallback(method_not_allowed),
        )
        .with_state(service)
}
