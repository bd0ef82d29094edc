//! Person 路由族：/people, /create/person, /delete/person/:id, /update/person/:id

mod model;

use axum::Router;

pub use model::{Person, PersonPatch};

use super::crud;
use crate::core::store::SharedStore;

pub fn routes(store: SharedStore<Person>) -> Router {
    crud::routes("people", "person", store)
}
