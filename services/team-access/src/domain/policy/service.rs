//! 策略领域服务
//!
//! 无状态评估 + 写时一致性维护。评估失败一律拒绝放行 (fail-closed)；
//! 创建/删除的存储错误原样向调用方传播。

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::error;

use teamgate_common::{AccountId, PolicyId, TeamMemberId};
use teamgate_errors::{AppError, AppResult};

use super::matcher;
use super::policy::{Action, Policy};
use super::repository::PolicyRepository;

/// 权限校验请求
#[derive(Debug, Clone)]
pub struct CheckPermissionRequest {
    pub account_id: AccountId,
    pub team_member_id: TeamMemberId,
    /// 要访问的资源路径。例如 blogs/123/settings
    pub resource: String,
    /// 要执行的操作
    pub action: Action,
}

#[derive(Debug, Error)]
pub enum PolicyError {
    /// 已存在覆盖该资源的更宽策略，创建被拒绝。
    /// 目标权限已经存在，调用方可按成功处理
    #[error("Team member already has a broader policy covering this resource")]
    AlreadyHasBroaderPolicy,

    #[error(transparent)]
    Store(#[from] AppError),
}

impl From<PolicyError> for AppError {
    fn from(error: PolicyError) -> Self {
        match error {
            PolicyError::AlreadyHasBroaderPolicy => AppError::Conflict(error.to_string()),
            PolicyError::Store(e) => e,
        }
    }
}

type ScopeKey = (AccountId, TeamMemberId, Action);

/// 策略服务
pub struct PolicyService {
    repo: Arc<dyn PolicyRepository>,
    /// 同一作用域的并发创建串行化。create 是读-判-写序列，
    /// 不加临界区时两个并发创建都会看到变更前的策略集，破坏非冗余不变量
    create_locks: StdMutex<HashMap<ScopeKey, Arc<Mutex<()>>>>,
}

impl PolicyService {
    pub fn new(repo: Arc<dyn PolicyRepository>) -> Self {
        Self {
            repo,
            create_locks: StdMutex::new(HashMap::new()),
        }
    }

    /// 权限评估：作用域下任一策略命中即放行
    ///
    /// 存储读取失败时记录日志并拒绝放行，不向调用方暴露错误
    pub async fn check_permission(&self, request: &CheckPermissionRequest) -> bool {
        let policies = match self
            .repo
            .get(request.account_id, request.team_member_id, request.action)
            .await
        {
            Ok(policies) => policies,
            Err(e) => {
                error!(error = %e, "failed to get policies");
                return false;
            }
        };

        policies
            .iter()
            .any(|policy| matcher::matches(&policy.resource, &request.resource, request.action))
    }

    /// 创建策略，维护策略集非冗余
    ///
    /// 1. 已有更宽策略时拒绝（例如已有 blogs/*，不再添加 blogs/123/*）
    /// 2. 删除被新策略覆盖的更窄策略（例如添加 blogs/* 时先移除 blogs/123/*）
    /// 3. 写入新策略
    pub async fn create_policy(&self, policy: Policy) -> Result<Policy, PolicyError> {
        let lock = self.scope_lock((policy.account_id, policy.team_member_id, policy.action));
        let _guard = lock.lock().await;

        let existing = self
            .repo
            .get(policy.account_id, policy.team_member_id, policy.action)
            .await?;
        if matcher::has_broader_policy(&policy.resource, &existing) {
            return Err(PolicyError::AlreadyHasBroaderPolicy);
        }

        let prefix = matcher::resource_prefix(&policy.resource);
        self.repo
            .delete_by_prefix(
                policy.account_id,
                policy.team_member_id,
                policy.action,
                &prefix,
            )
            .await?;

        Ok(self.repo.create(&policy).await?)
    }

    /// 按 ID 删除策略。ID 不存在时返回 NotFound，不静默忽略
    pub async fn delete_policy(&self, id: &PolicyId) -> AppResult<()> {
        self.repo.delete(id).await
    }

    fn scope_lock(&self, key: ScopeKey) -> Arc<Mutex<()>> {
        let mut locks = self
            .create_locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        locks
            .entry(key)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
