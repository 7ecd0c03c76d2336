//! Policy 策略领域模块
//!
//! 资源路径匹配算法与策略集一致性算法都在这里

pub mod matcher;
pub mod policy;
pub mod repository;
pub mod service;

pub use policy::{Action, Policy};
pub use repository::PolicyRepository;
pub use service::{CheckPermissionRequest, PolicyError, PolicyService};
