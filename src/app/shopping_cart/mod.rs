//! 购物车模块

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

pub use model::ShoppingCart;
pub use repository::ShoppingCartRepository;
pub use service::ShoppingCartService;

pub fn routes(service: ShoppingCartService) -> Router {
    Router::new()
        .route(
            "/shopping-cart",
            post(handler::create_cart).fallback(method_not_allowed),
        )
        .route("/shopping-cart/ping", get(ping).fallback(method_not_allowed))
        .route(
            "/shopping-cart/:id",
            get(handler::get_cart).fallback(method_not_allowed),
        )
        .with_state(service)
}
