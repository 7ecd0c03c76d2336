//! Funnel 领域模块（策略引擎的纯调用方）

pub mod entity;
pub mod service;

pub use entity::{CreateFunnelRequest, EditFunnelRequest, Funnel, GetFunnelRequest};
pub use service::FunnelService;
