//! 通用 CRUD 组件：服务和处理器只实现一次，按记录类型实例化

pub mod handler;
pub mod service;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub use service::CrudService;

use crate::core::{record::Record, store::SharedStore};

/// 注册一类记录的四条路由
///
/// `plural` 用于列表路径，`singular` 用于创建/删除/更新路径。
pub fn routes<R: Record>(plural: &str, singular: &str, store: SharedStore<R>) -> Router {
    Router::new()
        .route(&format!("/{plural}"), get(handler::list::<R>))
        .route(&format!("/create/{singular}"), post(handler::create::<R>))
        .route(
            &format!("/delete/{singular}/:id"),
            delete(handler::delete::<R>),
        )
        .route(
            &format!("/update/{singular}/:id"),
            put(handler::update::<R>),
        )
        .with_state(CrudService::new(store))
}
