//! # People API
//!
//! 基于 Axum 的 Person / User 记录 CRUD 服务：
//! - app: 通用 CRUD 服务与处理器，两类实体的模型和路由
//! - core: 错误、请求体解码、中间件、记录与存储抽象
//! - infrastructure: 配置、日志、数据库连接与存储实现

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::router;
pub use crate::core::error::{StartupError, StoreError};
pub use crate::core::record::{Model, Record};
pub use crate::core::store::RecordStore;
