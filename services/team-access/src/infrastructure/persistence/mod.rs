//! 持久化层模块

pub mod connection;
pub mod memory;
pub mod policy_repository;

pub use connection::create_pool;
pub use memory::InMemoryPolicyRepository;
pub use policy_repository::PostgresPolicyRepository;
