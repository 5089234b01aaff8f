//! 关系型存储适配器

mod product_repository;
mod shopping_cart_repository;

pub use product_repository::PgProductRepository;
pub use shopping_cart_repository::PgShoppingCartRepository;
