//! # 购物车服务
//!
//! 基于 Axum + SQLx 的分层 REST 服务：
//! - `app`：购物车与商品的处理器、请求校验、业务服务和仓储接口
//! - `core`：统一错误类型、响应体与中间件
//! - `infrastructure`：PostgreSQL 仓储、连接池、日志与内存仓储
//! - `config`：配置加载

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::{AppError, AppResult};
