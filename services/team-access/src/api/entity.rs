//! HTTP 请求/响应实体

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::policy::Policy;

/// 请求包装：载荷统一放在 data 字段
#[derive(Debug, Deserialize)]
pub struct CommonRequest<T> {
    pub data: T,
}

/// 成功响应包装
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn message(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePolicyDto {
    pub account_id: i64,
    pub team_member_id: i64,
    pub resource: String,
    pub action: String,
}

#[derive(Debug, Serialize)]
pub struct PolicyDto {
    pub id: Uuid,
    pub account_id: i64,
    pub team_member_id: i64,
    pub resource: String,
    pub action: String,
}

impl From<Policy> for PolicyDto {
    fn from(policy: Policy) -> Self {
        Self {
            id: policy.id.0,
            account_id: policy.account_id.0,
            team_member_id: policy.team_member_id.0,
            resource: policy.resource,
            action: policy.action.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckPermissionDto {
    pub account_id: i64,
    pub team_member_id: i64,
    /// 要访问的资源路径
    pub resource: String,
    /// 要执行的操作
    pub action: String,
}

#[derive(Debug, Deserialize)]
pub struct WriteBlogPageDto {
    pub account_id: i64,
    pub team_member_id: i64,
    pub title: String,
    pub content: String,
    pub page_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct WriteBlogSettingsDto {
    pub account_id: i64,
    pub team_member_id: i64,
    pub blog_id: i64,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ReadBlogPageParams {
    pub account_id: i64,
    pub team_member_id: i64,
    pub blog_id: i64,
    pub page_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CallerParams {
    pub account_id: i64,
    pub team_member_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateFunnelDto {
    pub account_id: i64,
    pub team_member_id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct FunnelDto {
    pub funnel_id: String,
    pub name: String,
}
