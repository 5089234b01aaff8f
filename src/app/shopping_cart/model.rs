//! 购物车数据模型

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingCart {
    /// 持久化之前为空，由存储层生成
    pub id: Option<Uuid>,
    pub user_id: Uuid,
}

impl ShoppingCart {
    pub fn new(user_id: Uuid) -> Self {
        Self { id: None, user_id }
    }
}
