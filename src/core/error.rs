//! 核心错误处理模块

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// 存储层错误
///
/// 后端的任何失败（连接断开、约束冲突、SQL 错误）都折叠成这一种错误，
/// 不做分类也不重试。序列化为 `{"error": "..."}` 直接作为响应体返回。
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct StoreError {
    #[serde(rename = "error")]
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(feature = "database")]
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::new(err.to_string())
    }
}

// 失败时状态码保持默认的 200，只有响应体不同
impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// 启动阶段的致命错误，main 中统一记录日志后以退出码 1 结束进程
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] envconfig::Error),

    #[error("unsupported dialect: {0}")]
    UnsupportedDialect(String),

    #[error("failed to connect to database: {0}")]
    Database(#[from] StoreError),

    #[error("failed to bind or serve: {0}")]
    Io(#[from] std::io::Error),
}
