//! 商品处理器

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::{
    dto::{ProductQuantityRequest, ProductRequest, ProductResponse},
    service::ProductService,
};
use crate::core::AppResult;

/// POST /product
pub async fn create_product(
    State(service): State<ProductService>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    info!("on create product");

    let Json(input) = payload?;
    input.validate()?;

    service.create_product(input.try_into()?).await?;
    Ok(StatusCode::CREATED)
}

/// GET /product/:id，路径参数为购物车标识
pub async fn list_products(
    State(service): State<ProductService>,
    Path(shopping_cart_id): Path<String>,
) -> AppResult<Json<Vec<ProductResponse>>> {
    info!("on list products");

    let shopping_cart_id = Uuid::parse_str(&shopping_cart_id)?;
    let products = service.list_products(shopping_cart_id).await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// PATCH /product/:id
pub async fn update_quantity(
    State(service): State<ProductService>,
    Path(product_id): Path<String>,
    payload: Result<Json<ProductQuantityRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    info!("on update product quantity");

    let product_id = Uuid::parse_str(&product_id)?;
    let Json(input) = payload?;
    input.validate()?;

    service
        .update_product_quantity(product_id, input.quantity)
        .await?;
    Ok(StatusCode::ACCEPTED)
}

/// DELETE /product/:id
pub async fn delete_product(
    State(service): State<ProductService>,
    Path(product_id): Path<String>,
) -> AppResult<StatusCode> {
    info!("on delete product");

    let product_id = Uuid::parse_str(&product_id)?;
    service.delete_product(product_id).await?;

    Ok(StatusCode::OK)
}
