//! Blog 领域服务
//!
//! 用自身标识拼出资源路径后委托策略引擎校验，没有独立逻辑

use std::sync::Arc;

use teamgate_common::{AccountId, TeamMemberId};
use teamgate_errors::{AppError, AppResult};

use super::entity::{
    ReadBlogPageRequest, ReadBlogSettingsRequest, WriteBlogPageRequest, WriteBlogSettingsRequest,
};
use crate::domain::policy::{Action, CheckPermissionRequest, PolicyService};

pub struct BlogService {
    policies: Arc<PolicyService>,
}

impl BlogService {
    pub fn new(policies: Arc<PolicyService>) -> Self {
        Self { policies }
    }

    pub async fn write_blog_page(&self, request: &WriteBlogPageRequest) -> AppResult<()> {
        self.require(
            request.account_id,
            request.team_member_id,
            format!("blogs/{}", request.page_id),
            Action::Write,
        )
        .await
    }

    pub async fn read_blog_page(&self, request: &ReadBlogPageRequest) -> AppResult<()> {
        // 资源路径带多级标识
        self.require(
            request.account_id,
            request.team_member_id,
            format!("blogs/{}/pages/{}", request.blog_id, request.page_id),
            Action::Read,
        )
        .await
    }

    pub async fn read_blog_settings(&self, request: &ReadBlogSettingsRequest) -> AppResult<()> {
        self.require(
            request.account_id,
            request.team_member_id,
            format!("blogs/{}/settings", request.blog_id),
            Action::Read,
        )
        .await
    }

    pub async fn write_blog_settings(&self, request: &WriteBlogSettingsRequest) -> AppResult<()> {
        self.require(
            request.account_id,
            request.team_member_id,
            format!("blogs/{}/settings", request.blog_id),
            Action::Write,
        )
        .await
    }

    async fn require(
        &self,
        account_id: AccountId,
        team_member_id: TeamMemberId,
        resource: String,
        action: Action,
    ) -> AppResult<()> {
        let permitted = self
            .policies
            .check_permission(&CheckPermissionRequest {
                account_id,
                team_member_id,
                resource,
                action,
            })
            .await;
        if !permitted {
            return Err(AppError::forbidden("Permission denied"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policy::Policy;
    use crate::infrastructure::persistence::InMemoryPolicyRepository;

    fn setup() -> (Arc<InMemoryPolicyRepository>, BlogService, Arc<PolicyService>) {
        let repo = Arc::new(InMemoryPolicyRepository::new());
        let policies = Arc::new(PolicyService::new(repo.clone()));
        (repo.clone(), BlogService::new(policies.clone()), policies)
    }

    #[tokio::test]
    async fn test_read_blog_settings_with_subtree_grant() {
        let (_, blogs, policies) = setup();
        policies
            .create_policy(Policy::new(
                AccountId(100),
                TeamMemberId(200),
                "blogs/*",
                Action::Read,
            ))
            .await
            .unwrap();

        let result = blogs
            .read_blog_settings(&ReadBlogSettingsRequest {
                account_id: AccountId(100),
                team_member_id: TeamMemberId(200),
                blog_id: 42,
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_write_denied_without_write_grant() {
        let (_, blogs, policies) = setup();
        policies
            .create_policy(Policy::new(
                AccountId(100),
                TeamMemberId(200),
                "blogs/*",
                Action::Read,
            ))
            .await
            .unwrap();

        let result = blogs
            .write_blog_settings(&WriteBlogSettingsRequest {
                account_id: AccountId(100),
                team_member_id: TeamMemberId(200),
                blog_id: 42,
                title: "t".to_string(),
                content: "c".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }
}
