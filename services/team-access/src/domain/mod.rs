//! 领域层模块

pub mod blog;
pub mod funnel;
pub mod policy;
