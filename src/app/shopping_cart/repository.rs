//! 购物车持久化接口

use async_trait::async_trait;
use uuid::Uuid;

use super::model::ShoppingCart;
use crate::core::AppResult;

#[async_trait]
pub trait ShoppingCartRepository: Send + Sync {
    /// 保存购物车，标识由实现方生成，忽略 `cart.id`
    async fn create(&self, cart: &ShoppingCart) -> AppResult<()>;

    /// 按用户精确查找，不存在时返回 `AppError::NotFound`
    async fn get_by_user_id(&self, user_id: Uuid) -> AppResult<ShoppingCart>;
}
