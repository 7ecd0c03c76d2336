//! Blog 领域模块（策略引擎的纯调用方）

pub mod entity;
pub mod service;

pub use entity::{
    ReadBlogPageRequest, ReadBlogSettingsRequest, WriteBlogPageRequest, WriteBlogSettingsRequest,
};
pub use service::BlogService;
