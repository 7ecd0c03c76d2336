//! Funnel 领域服务

use std::sync::Arc;

use teamgate_common::{AccountId, TeamMemberId};
use teamgate_errors::{AppError, AppResult};

use super::entity::{CreateFunnelRequest, EditFunnelRequest, Funnel, GetFunnelRequest};
use crate::domain::policy::{Action, CheckPermissionRequest, PolicyService};

pub struct FunnelService {
    policies: Arc<PolicyService>,
}

impl FunnelService {
    pub fn new(policies: Arc<PolicyService>) -> Self {
        Self { policies }
    }

    /// 新建 funnel 需要对 funnels 子树的写权限
    pub async fn create_funnel(&self, request: &CreateFunnelRequest) -> AppResult<()> {
        self.require(
            request.account_id,
            request.team_member_id,
            "funnels/*".to_string(),
            Action::Write,
        )
        .await
    }

    pub async fn edit_funnel(&self, request: &EditFunnelRequest) -> AppResult<()> {
        self.require(
            request.account_id,
            request.team_member_id,
            format!("funnels/{}", request.funnel_id),
            Action::Write,
        )
        .await
    }

    pub async fn get_funnel(&self, request: &GetFunnelRequest) -> AppResult<Funnel> {
        self.require(
            request.account_id,
            request.team_member_id,
            format!("funnels/{}", request.funnel_id),
            Action::Read,
        )
        .await?;

        Ok(Funnel {
            funnel_id: request.funnel_id.clone(),
            name: "Demo Funnel".to_string(),
        })
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
