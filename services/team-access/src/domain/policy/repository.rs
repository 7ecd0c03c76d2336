//! 策略仓储接口

use async_trait::async_trait;
use teamgate_common::{AccountId, PolicyId, TeamMemberId};
use teamgate_errors::AppResult;

use super::policy::{Action, Policy};

/// 策略仓储接口
///
/// 仓储不理解资源层级语义：get 返回作用域下的全部候选策略，
/// 层级过滤在引擎内存中完成
#[async_trait]
pub trait PolicyRepository: Send + Sync {
    /// 持久化策略，返回存储后的策略
    async fn create(&self, policy: &Policy) -> AppResult<Policy>;

    /// 按 ID 删除策略，ID 不存在时返回 NotFound
    async fn delete(&self, id: &PolicyId) -> AppResult<()>;

    /// 列出 (账户, 团队成员, 操作) 下的全部策略
    async fn get(
        &self,
        account_id: AccountId,
        team_member_id: TeamMemberId,
        action: Action,
    ) -> AppResult<Vec<Policy>>;

    /// 批量删除同一作用域下资源以 resource_prefix 开头的策略
    async fn delete_by_prefix(
        &self,
        account_id: AccountId,
        team_member_id: TeamMemberId,
        action: Action,
        resource_prefix: &str,
    ) -> AppResult<()>;
}
