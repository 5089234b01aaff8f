//! 商品 PostgreSQL 仓储

use async_trait::async_trait;
use sqlx::{postgres::PgRow, FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use crate::app::product::{Product, ProductRepository};
use crate::core::{AppError, AppResult};

#[derive(Debug, FromRow)]
struct ProductRow {
    id: String,
    name: String,
    quantity: i32,
    product_description: String,
    shopping_cart_id: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = AppError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| AppError::internal(format!("malformed product id {:?}: {}", row.id, e)))?;
        let shopping_cart_id = Uuid::parse_str(&row.shopping_cart_id).map_err(|e| {
            AppError::internal(format!(
                "malformed shopping cart id {:?}: {}",
                row.shopping_cart_id, e
            ))
        })?;

        Ok(Product {
            id: Some(id),
            name: row.name,
            quantity: row.quantity,
            description: row.product_description,
            shopping_cart_id,
        })
    }
}

fn scan_product(row: &PgRow) -> AppResult<Product> {
    Product::try_from(ProductRow::from_row(row)?)
}

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 存在性探测；与随后的 DELETE/UPDATE 不在同一事务内
    async fn ensure_exists(&self, id: Uuid) -> AppResult<()> {
        let existing: Option<(String,)> = sqlx::query_as("SELECT id FROM product WHERE id = $1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .inspect_err(|e| error!("error querying product: {}", e))?;

        match existing {
            Some(_) => Ok(()),
            None => {
                info!(%id, "product not found");
                Err(AppError::not_found("product not found"))
            }
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, product: &Product) -> AppResult<()> {
        info!("on create product repository");

        sqlx::query(
            "INSERT INTO product (id, name, quantity, product_description, shopping_cart_id) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&product.name)
        .bind(product.quantity)
        .bind(&product.description)
        .bind(product.shopping_cart_id.to_string())
        .execute(&self.pool)
        .await
        .inspect_err(|e| error!("error saving product: {}", e))?;

        Ok(())
    }

    async fn list_by_cart(&self, shopping_cart_id: Uuid) -> AppResult<Vec<Product>> {
        info!("on list products repository");

        let rows = sqlx::query("SELECT * FROM product WHERE shopping_cart_id = $1")
            .bind(shopping_cart_id.to_string())
            .fetch_all(&self.pool)
            .await
            .inspect_err(|e| error!("error getting products of cart: {}", e))?;

        // 单行解析失败只记录并跳过，不影响其余行
        let products = rows
            .iter()
            .filter_map(|row| match scan_product(row) {
                Ok(product) => Some(product),
                Err(e) => {
                    error!("error scanning row: {}", e);
                    None
                }
            })
            .collect();

        Ok(products)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        info!("on delete product repository");

        self.ensure_exists(id).await?;

        sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .inspect_err(|e| error!("error deleting product: {}", e))?;

        Ok(())
    }

    async fn update_quantity(&self, id: Uuid, quantity: i32) -> AppResult<()> {
        info!("on update product quantity repository");

        self.ensure_exists(id).await?;

        sqlx::query("UPDATE product SET quantity = $1 WHERE id = $2")
            .bind(quantity)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .inspect_err(|e| error!("error updating product: {}", e))?;

        Ok(())
    }
}
