//! User 路由族：/users, /create/user, /delete/user/:id, /update/user/:id

mod model;

use axum::Router;

pub use model::{User, UserPatch};

use super::crud;
use crate::core::store::SharedStore;

pub fn routes(store: SharedStore<User>) -> Router {
    crud::routes("users", "user", store)
}
