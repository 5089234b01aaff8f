//! 购物车业务服务

use std::sync::Arc;

use tracing::{error, info, instrument};
use uuid::Uuid;

use super::{model::ShoppingCart, repository::ShoppingCartRepository};
use crate::core::AppResult;

#[derive(Clone)]
pub struct ShoppingCartService {
    repository: Arc<dyn ShoppingCartRepository>,
}

impl ShoppingCartService {
    pub fn new(repository: Arc<dyn ShoppingCartRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip_all, fields(user_id = %cart.user_id))]
    pub async fn create_cart(&self, cart: ShoppingCart) -> AppResult<()> {
        info!("creating shopping cart");
        self.repository.create(&cart).await
    }

    #[instrument(skip(self))]
    pub async fn get_cart_by_user(&self, user_id: Uuid) -> AppResult<ShoppingCart> {
        info!("getting shopping cart for user");
        self.repository
            .get_by_user_id(user_id)
            .await
            .inspect_err(|err| error!("error querying shopping cart: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AppError;
    use crate::infrastructure::memory::InMemoryShoppingCartRepository;
    use async_trait::async_trait;

    struct BrokenRepository;

    #[async_trait]
    impl ShoppingCartRepository for BrokenRepository {
        async fn create(&self, _cart: &ShoppingCart) -> AppResult<()> {
            Err(AppError::internal("error creating shopping cart"))
        }

        async fn get_by_user_id(&self, _user_id: Uuid) -> AppResult<ShoppingCart> {
            Err(AppError::internal("error getting shopping cart"))
        }
    }

    fn service() -> ShoppingCartService {
        ShoppingCartService::new(Arc::new(InMemoryShoppingCartRepository::new()))
    }

    #[tokio::test]
    async fn create_then_get_round_trips_user() {
        let service = service();
        let user_id = Uuid::new_v4();

        service.create_cart(ShoppingCart::new(user_id)).await.unwrap();
        let cart = service.get_cart_by_user(user_id).await.unwrap();

        assert_eq!(cart.user_id, user_id);
        assert!(cart.id.is_some());
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let err = service().get_cart_by_user(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "shopping cart not found"));
    }

    #[tokio::test]
    async fn repository_errors_pass_through_unchanged() {
        let service = ShoppingCartService::new(Arc::new(BrokenRepository));

        let err = service
            .create_cart(ShoppingCart::new(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(msg) if msg == "error creating shopping cart"));

        let err = service.get_cart_by_user(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(msg) if msg == "error getting shopping cart"));
    }
}
