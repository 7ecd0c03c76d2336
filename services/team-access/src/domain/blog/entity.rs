//! Blog 领域实体

use teamgate_common::{AccountId, TeamMemberId};

#[derive(Debug, Clone)]
pub struct WriteBlogPageRequest {
    pub account_id: AccountId,
    pub team_member_id: TeamMemberId,
    pub title: String,
    pub content: String,
    pub page_id: i64,
}

#[derive(Debug, Clone)]
pub struct WriteBlogSettingsRequest {
    pub account_id: AccountId,
    pub team_member_id: TeamMemberId,
    pub blog_id: i64,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct ReadBlogPageRequest {
    pub account_id: AccountId,
    pub team_member_id: TeamMemberId,
    pub blog_id: i64,
    pub page_id: i64,
}

#[derive(Debug, Clone)]
pub struct ReadBlogSettingsRequest {
    pub account_id: AccountId,
    pub team_member_id: TeamMemberId,
    pub blog_id: i64,
}
