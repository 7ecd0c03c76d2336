//! HTTP API 模块

pub mod blogs;
pub mod entity;
pub mod funnels;
pub mod policies;
pub mod routes;

pub use routes::{AppState, router};
