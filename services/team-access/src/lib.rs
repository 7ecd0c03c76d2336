//! Team Access Service - 基于策略的权限模型
//!
//! 按 (账户, 团队成员) 作用域存储资源策略，对层级资源路径做权限评估。
//! 核心是策略评估与冲突消解引擎，blog/funnel 领域只是策略引擎的调用方。

pub mod api;
pub mod domain;
pub mod infrastructure;
