//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// 统一错误响应体
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 健康检查响应
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PongResponse {
    pub msg: String,
}

impl PongResponse {
    pub fn pong() -> Self {
        Self {
            msg: "pong".to_string(),
        }
    }
}
