//! 购物车处理器

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::{
    dto::{ShoppingCartRequest, ShoppingCartResponse},
    service::ShoppingCartService,
};
use crate::core::AppResult;

/// POST /shopping-cart
pub async fn create_cart(
    State(service): State<ShoppingCartService>,
    payload: Result<Json<ShoppingCartRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    info!("on create shopping cart");

    let Json(input) = payload?;
    input.validate()?;

    service.create_cart(input.try_into()?).await?;
    Ok(StatusCode::CREATED)
}

/// GET /shopping-cart/:id，路径参数为用户标识
pub async fn get_cart(
    State(service): State<ShoppingCartService>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ShoppingCartResponse>> {
    info!("on get shopping cart");

    let user_id = Uuid::parse_str(&user_id)?;
    let cart = service.get_cart_by_user(user_id).await?;

    Ok(Json(cart.into()))
}
