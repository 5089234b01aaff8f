//! 购物车 PostgreSQL 仓储

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use crate::app::shopping_cart::{ShoppingCart, ShoppingCartRepository};
use crate::core::{AppError, AppResult};

#[derive(Debug, FromRow)]
struct ShoppingCartRow {
    id: String,
    user_id: String,
}

impl TryFrom<ShoppingCartRow> for ShoppingCart {
    type Error = AppError;

    fn try_from(row: ShoppingCartRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id).map_err(|e| {
            AppError::internal(format!("malformed shopping cart id {:?}: {}", row.id, e))
        })?;
        let user_id = Uuid::parse_str(&row.user_id)
            .map_err(|e| AppError::internal(format!("malformed user id {:?}: {}", row.user_id, e)))?;

        Ok(ShoppingCart {
            id: Some(id),
            user_id,
        })
    }
}

#[derive(Clone)]
pub struct PgShoppingCartRepository {
    pool: PgPool,
}

impl PgShoppingCartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShoppingCartRepository for PgShoppingCartRepository {
    async fn create(&self, cart: &ShoppingCart) -> AppResult<()> {
        info!("on shopping cart repository - creating shopping cart");

        sqlx::query("INSERT INTO shopping_cart (id, user_id) VALUES ($1, $2)")
            .bind(Uuid::new_v4().to_string())
            .bind(cart.user_id.to_string())
            .execute(&self.pool)
            .await
            .inspect_err(|e| error!("error saving shopping cart: {}", e))?;

        Ok(())
    }

    async fn get_by_user_id(&self, user_id: Uuid) -> AppResult<ShoppingCart> {
        info!("on shopping cart repository - get shopping cart info");

        // 同一用户存在多条记录时只取第一条
        let row = sqlx::query_as::<_, ShoppingCartRow>(
            "SELECT * FROM shopping_cart WHERE user_id = $1",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .inspect_err(|e| error!("error getting shopping cart: {}", e))?
        .ok_or_else(|| AppError::not_found("shopping cart not found"))?;

        ShoppingCart::try_from(row)
            .inspect_err(|e| error!("error getting shopping cart values: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_round_trips_identifiers() {
        let id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let cart = ShoppingCart::try_from(ShoppingCartRow {
            id: id.to_string(),
            user_id: user_id.to_string(),
        })
        .unwrap();

        assert_eq!(cart.id, Some(id));
        assert_eq!(cart.user_id, user_id);
    }

    #[test]
    fn malformed_user_id_is_internal_error() {
        let result = ShoppingCart::try_from(ShoppingCartRow {
            id: Uuid::new_v4().to_string(),
            user_id: "nope".to_string(),
        });
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
