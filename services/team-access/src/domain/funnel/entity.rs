//! Funnel 领域实体

use teamgate_common::{AccountId, TeamMemberId};

#[derive(Debug, Clone)]
pub struct Funnel {
    pub funnel_id: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct CreateFunnelRequest {
    pub account_id: AccountId,
    pub team_member_id: TeamMemberId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct GetFunnelRequest {
    pub account_id: AccountId,
    pub team_member_id: TeamMemberId,
    pub funnel_id: String,
}

#[derive(Debug, Clone)]
pub struct EditFunnelRequest {
    pub account_id: AccountId,
    pub team_member_id: TeamMemberId,
    pub funnel_id: String,
}
