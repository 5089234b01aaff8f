//! 购物车请求与响应

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::model::ShoppingCart;
use crate::core::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct ShoppingCartRequest {
    #[validate(required(message = "user_id is required"))]
    pub user_id: Option<Uuid>,
}

impl TryFrom<ShoppingCartRequest> for ShoppingCart {
    type Error = AppError;

    fn try_from(request: ShoppingCartRequest) -> Result<Self, Self::Error> {
        request
            .user_id
            .map(ShoppingCart::new)
            .ok_or_else(|| AppError::Validation("invalid params: user_id is required".to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ShoppingCartResponse {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Uuid>,
    pub user_id: Uuid,
}

impl From<ShoppingCart> for ShoppingCartResponse {
    fn from(cart: ShoppingCart) -> Self {
        Self {
            id: cart.id,
            user_id: cart.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_user_id_fails_validation() {
        let request: ShoppingCartRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn present_user_id_passes_validation() {
        let user_id = Uuid::new_v4();
        let request: ShoppingCartRequest =
            serde_json::from_value(json!({ "user_id": user_id })).unwrap();

        assert!(request.validate().is_ok());
        let cart = ShoppingCart::try_from(request).unwrap();
        assert_eq!(cart.user_id, user_id);
        assert!(cart.id.is_none());
    }

    #[test]
    fn empty_user_id_is_not_a_uuid() {
        let result = serde_json::from_value::<ShoppingCartRequest>(json!({ "user_id": "" }));
        assert!(result.is_err());
    }

    #[test]
    fn response_omits_unset_id() {
        let user_id = Uuid::new_v4();
        let body = serde_json::to_value(ShoppingCartResponse::from(ShoppingCart::new(user_id)))
            .unwrap();
        assert_eq!(body, json!({ "user_id": user_id }));
    }

    #[test]
    fn response_carries_persisted_id() {
        let cart = ShoppingCart {
            id: Some(Uuid::new_v4()),
            user_id: Uuid::new_v4(),
        };
        let body = serde_json::to_value(ShoppingCartResponse::from(cart.clone())).unwrap();
        assert_eq!(body["id"], json!(cart.id));
        assert_eq!(body["user_id"], json!(cart.user_id));
    }
}
