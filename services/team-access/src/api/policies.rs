//! 策略 HTTP 处理器

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use teamgate_common::{AccountId, PolicyId, TeamMemberId};
use teamgate_errors::AppError;

use super::entity::{
    ApiResponse, CheckPermissionDto, CommonRequest, CreatePolicyDto, PolicyDto,
};
use super::routes::AppState;
use crate::domain::policy::{Action, CheckPermissionRequest, Policy, PolicyError};

fn parse_action(s: &str) -> Result<Action, AppError> {
    s.parse()
        .map_err(|_| AppError::validation("Action must be 'read' or 'write'"))
}

pub async fn create_policy(
    State(state): State<AppState>,
    Json(request): Json<CommonRequest<CreatePolicyDto>>,
) -> Result<(StatusCode, Json<ApiResponse<PolicyDto>>), AppError> {
    let action = parse_action(&request.data.action)?;
    let policy = Policy::new(
        AccountId(request.data.account_id),
        TeamMemberId(request.data.team_member_id),
        request.data.resource,
        action,
    );

    match state.policies.create_policy(policy).await {
        Ok(policy) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::with_data(
                201,
                "Successfully created policy",
                PolicyDto::from(policy),
            )),
        )),
        // 更宽策略已存在等于目标权限已存在，按成功返回
        Err(PolicyError::AlreadyHasBroaderPolicy) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::message(201, "Successfully created policy")),
        )),
        Err(PolicyError::Store(e)) => Err(e),
    }
}

pub async fn delete_policy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.policies.delete_policy(&PolicyId::from_uuid(id)).await?;
    Ok(Json(ApiResponse::message(200, "Successfully deleted policy")))
}

pub async fn check_permission(
    State(state): State<AppState>,
    Json(request): Json<CommonRequest<CheckPermissionDto>>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let action = parse_action(&request.data.action)?;
    let permitted = state
        .policies
        .check_permission(&CheckPermissionRequest {
            account_id: AccountId(request.data.account_id),
            team_member_id: TeamMemberId(request.data.team_member_id),
            resource: request.data.resource,
            action,
        })
        .await;

    if !permitted {
        return Err(AppError::forbidden("Permission denied"));
    }

    Ok(Json(ApiResponse::message(200, "Permission is valid")))
}
