//! 内存策略仓储
//!
//! 测试用实现，语义与 PostgreSQL 仓储一致（包括删除不存在 ID 报错、
//! 前缀按字面匹配）。可注入故障来演练 fail-closed 行为。

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use teamgate_common::{AccountId, PolicyId, TeamMemberId};
use teamgate_errors::{AppError, AppResult};

use crate::domain::policy::{Action, Policy, PolicyRepository};

#[derive(Default)]
pub struct InMemoryPolicyRepository {
    policies: RwLock<Vec<Policy>>,
    failing: AtomicBool,
}

impl InMemoryPolicyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 让后续所有操作返回存储错误
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// 当前存储的全部策略（测试断言用）
    pub async fn dump(&self) -> Vec<Policy> {
        self.policies.read().await.clone()
    }

    fn check_failing(&self) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::database("simulated store failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl PolicyRepository for InMemoryPolicyRepository {
    async fn create(&self, policy: &Policy) -> AppResult<Policy> {
        self.check_failing()?;
        let mut policies = self.policies.write().await;
        policies.push(policy.clone());
        Ok(policy.clone())
    }

    async fn delete(&self, id: &PolicyId) -> AppResult<()> {
        self.check_failing()?;
        let mut policies = self.policies.write().await;
        let before = policies.len();
        policies.retain(|p| p.id != *id);
        if policies.len() == before {
            return Err(AppError::not_found(format!("Policy {} not found", id)));
        }
        Ok(())
    }

    async fn get(
        &self,
        account_id: AccountId,
        team_member_id: TeamMemberId,
        action: Action,
    ) -> AppResult<Vec<Policy>> {
        self.check_failing()?;
        let policies = self.policies.read().await;
        Ok(policies
            .iter()
            .filter(|p| {
                p.account_id == account_id
                    && p.team_member_id == team_member_id
                    && p.action == action
            })
            .cloned()
            .collect())
    }

    async fn delete_by_prefix(
        &self,
        account_id: AccountId,
        team_member_id: TeamMemberId,
        action: Action,
        resource_prefix: &str,
    ) -> AppResult<()> {
        self.check_failing()?;
        let mut policies = self.policies.write().await;
        policies.retain(|p| {
            !(p.account_id == account_id
                && p.team_member_id == team_member_id
                && p.action == action
                && p.resource.starts_with(resource_prefix))
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_by_prefix_scoped() {
        let repo = InMemoryPolicyRepository::new();
        repo.create(&Policy::new(
            AccountId(1),
            TeamMemberId(2),
            "blogs/123/*",
            Action::Read,
        ))
        .await
        .unwrap();
        repo.create(&Policy::new(
            AccountId(1),
            TeamMemberId(3),
            "blogs/456/*",
            Action::Read,
        ))
        .await
        .unwrap();

        repo.delete_by_prefix(AccountId(1), TeamMemberId(2), Action::Read, "blogs/")
            .await
            .unwrap();

        let remaining = repo.dump().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].team_member_id, TeamMemberId(3));
    }

    #[tokio::test]
    async fn test_delete_missing_id_errors() {
        let repo = InMemoryPolicyRepository::new();
        let result = repo.delete(&PolicyId::new()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
