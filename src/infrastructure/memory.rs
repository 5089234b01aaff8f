//! 内存仓储，与 PostgreSQL 仓储语义一致，用于测试替身

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::app::product::{Product, ProductRepository};
use crate::app::shopping_cart::{ShoppingCart, ShoppingCartRepository};
use crate::core::{AppError, AppResult};

fn lock<T>(store: &Mutex<T>) -> AppResult<MutexGuard<'_, T>> {
    store
        .lock()
        .map_err(|e| AppError::internal(format!("memory store poisoned: {}", e)))
}

#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    rows: Arc<Mutex<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前全部记录的拷贝
    pub fn snapshot(&self) -> AppResult<Vec<Product>> {
        lock(&self.rows).map(|rows| rows.clone())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &Product) -> AppResult<()> {
        let mut stored = product.clone();
        stored.id = Some(Uuid::new_v4());
        lock(&self.rows)?.push(stored);
        Ok(())
    }

    async fn list_by_cart(&self, shopping_cart_id: Uuid) -> AppResult<Vec<Product>> {
        Ok(lock(&self.rows)?
            .iter()
            .filter(|p| p.shopping_cart_id == shopping_cart_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut rows = lock(&self.rows)?;
        let index = rows
            .iter()
            .position(|p| p.id == Some(id))
            .ok_or_else(|| AppError::not_found("product not found"))?;
        rows.remove(index);
        Ok(())
    }

    async fn update_quantity(&self, id: Uuid, quantity: i32) -> AppResult<()> {
        let mut rows = lock(&self.rows)?;
        let product = rows
            .iter_mut()
            .find(|p| p.id == Some(id))
            .ok_or_else(|| AppError::not_found("product not found"))?;
        product.quantity = quantity;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryShoppingCartRepository {
    rows: Arc<Mutex<Vec<ShoppingCart>>>,
}

impl InMemoryShoppingCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShoppingCartRepository for InMemoryShoppingCartRepository {
    async fn create(&self, cart: &ShoppingCart) -> AppResult<()> {
        lock(&self.rows)?.push(ShoppingCart {
            id: Some(Uuid::new_v4()),
            user_id: cart.user_id,
        });
        Ok(())
    }

    async fn get_by_user_id(&self, user_id: Uuid) -> AppResult<ShoppingCart> {
        lock(&self.rows)?
            .iter()
            .find(|c| c.user_id == user_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("shopping cart not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_cart_of_user_wins() {
        let repository = InMemoryShoppingCartRepository::new();
        let user_id = Uuid::new_v4();

        repository.create(&ShoppingCart::new(user_id)).await.unwrap();
        let first = repository.get_by_user_id(user_id).await.unwrap();
        repository.create(&ShoppingCart::new(user_id)).await.unwrap();

        assert_eq!(repository.get_by_user_id(user_id).await.unwrap(), first);
    }

    #[tokio::test]
    async fn listing_filters_by_cart() {
        let repository = InMemoryProductRepository::new();
        let cart_a = Uuid::new_v4();
        let cart_b = Uuid::new_v4();

        repository.create(&Product::new("a", 1, "x", cart_a)).await.unwrap();
        repository.create(&Product::new("b", 1, "y", cart_b)).await.unwrap();

        let listed = repository.list_by_cart(cart_a).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "a");
        assert_eq!(repository.snapshot().unwrap().len(), 2);
    }

    #[test]
    fn snapshot_of_poisoned_store_is_an_error() {
        let repository = InMemoryProductRepository::new();
        let rows = repository.rows.clone();
        let _ = std::thread::spawn(move || {
            let _guard = rows.lock().unwrap();
            panic!("poison the store");
        })
        .join();

        let err = repository.snapshot().unwrap_err();
        assert!(matches!(err, AppError::Internal(msg) if msg.starts_with("memory store poisoned")));
    }
}
