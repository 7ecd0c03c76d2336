//! 策略实体

use serde::{Deserialize, Serialize};
use teamgate_common::{AccountId, PolicyId, TeamMemberId};

/// 操作类型
///
/// read 与 write 相互独立，一个操作的授权不隐含另一个
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Read,
    Write,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Read => write!(f, "read"),
            Action::Write => write!(f, "write"),
        }
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(Action::Read),
            "write" => Ok(Action::Write),
            _ => Err(format!("Unknown action: {}", s)),
        }
    }
}

/// 策略实体
///
/// 授权一个 (账户, 团队成员) 对某资源作用域执行某操作。
/// 资源作用域三种形式:
/// - `*` 全部资源
/// - `blogs/*` 子树（blogs 下所有资源）
/// - `blogs/123` 精确资源
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: PolicyId,
    pub account_id: AccountId,
    pub team_member_id: TeamMemberId,
    pub resource: String,
    pub action: Action,
}

impl Policy {
    pub fn new(
        account_id: AccountId,
        team_member_id: TeamMemberId,
        resource: impl Into<String>,
        action: Action,
    ) -> Self {
        Self {
            id: PolicyId::new(),
            account_id,
            team_member_id,
            resource: resource.into(),
            action,
        }
    }
}
