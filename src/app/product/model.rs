//! 商品数据模型

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: Option<Uuid>,
    pub name: String,
    pub quantity: i32,
    pub description: String,
    pub shopping_cart_id: Uuid,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        quantity: i32,
        description: impl Into<String>,
        shopping_cart_id: Uuid,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            quantity,
            description: description.into(),
            shopping_cart_id,
        }
    }
}
