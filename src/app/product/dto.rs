//! 商品请求与响应

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::model::Product;
use crate::core::AppError;

/// 缺省字段按空值处理，交由校验拒绝
#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
    #[serde(default)]
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[serde(rename = "shoppingCartId")]
    #[validate(required(message = "shoppingCartId is required"))]
    pub shopping_cart_id: Option<Uuid>,
}

impl TryFrom<ProductRequest> for Product {
    type Error = AppError;

    fn try_from(request: ProductRequest) -> Result<Self, Self::Error> {
        let shopping_cart_id = request.shopping_cart_id.ok_or_else(|| {
            AppError::Validation("invalid params: shoppingCartId is required".to_string())
        })?;

        Ok(Product::new(
            request.name,
            request.quantity,
            request.description,
            shopping_cart_id,
        ))
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProductQuantityRequest {
    #[serde(default)]
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductResponse {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub quantity: i32,
    pub description: String,
    #[serde(rename = "shoppingCartId")]
    pub shopping_cart_id: Uuid,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            quantity: product.quantity,
            description: product.description,
            shopping_cart_id: product.shopping_cart_id,
        }
    }
}
