//! 商品持久化接口

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Product;
use crate::core::AppResult;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 保存商品，标识由实现方生成，忽略 `product.id`
    async fn create(&self, product: &Product) -> AppResult<()>;

    /// 列出购物车下的全部商品，没有时返回空列表
    async fn list_by_cart(&self, shopping_cart_id: Uuid) -> AppResult<Vec<Product>>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    async fn update_quantity(&self, id: Uuid, quantity: i32) -> AppResult<()>;
}
