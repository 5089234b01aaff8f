//! 数据库基础设施

use sqlx::{
    postgres::{PgPool, PgPoolOptions},
    Error,
};
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;

pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, Error> {
        info!("connecting to database: {}", config.redacted_url());

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await?;

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// 建表（幂等），标识列以文本形式保存 UUID
    pub async fn ensure_schema(&self) -> Result<(), Error> {
        info!("ensuring database schema");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS shopping_cart (
                id VARCHAR(36) PRIMARY KEY,
                user_id VARCHAR(36) NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_shopping_cart_user_id ON shopping_cart (user_id)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS product (
                id VARCHAR(36) PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                quantity INTEGER NOT NULL,
                product_description TEXT NOT NULL,
                shopping_cart_id VARCHAR(36) NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_product_shopping_cart_id ON product (shopping_cart_id)",
        )
        .execute(&self.pool)
        .await?;

        info!("database schema ready");
        Ok(())
    }

    pub async fn close(&self) {
        info!("closing database pool");
        self.pool.close().await;
    }
}
