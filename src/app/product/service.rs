//! 商品业务服务

use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use super::{model::Product, repository::ProductRepository};
use crate::core::AppResult;

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip_all, fields(shopping_cart_id = %product.shopping_cart_id))]
    pub async fn create_product(&self, product: Product) -> AppResult<()> {
        info!("creating product");
        self.repository.create(&product).await
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, shopping_cart_id: Uuid) -> AppResult<Vec<Product>> {
        info!("listing products");
        self.repository.list_by_cart(shopping_cart_id).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> AppResult<()> {
        info!("deleting product");
        self.repository.delete(id).await
    }

    #[instrument(skip(self))]
    pub async fn update_product_quantity(&self, id: Uuid, quantity: i32) -> AppResult<()> {
        info!("updating product quantity");
        self.repository.update_quantity(id, quantity).await
    }
}
