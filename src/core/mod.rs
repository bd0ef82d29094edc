//! 核心层

pub mod error;
pub mod middleware;
pub mod payload;
pub mod record;
pub mod store;
