//! 应用层

pub mod crud;
pub mod person;
pub mod user;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::core::{middleware::request_logging_middleware, store::SharedStore};
use person::Person;
use user::User;

/// 合并两组路由；未匹配的请求走 axum 默认的 404
pub fn router(people: SharedStore<Person>, users: SharedStore<User>) -> Router {
    Router::new()
        .merge(person::routes(people))
        .merge(user::routes(users))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
}
