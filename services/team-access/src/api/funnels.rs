//! Funnel HTTP 处理器

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use teamgate_common::{AccountId, TeamMemberId};
use teamgate_errors::AppError;

use super::entity::{ApiResponse, CallerParams, CommonRequest, CreateFunnelDto, FunnelDto};
use super::routes::AppState;
use crate::domain::funnel::{CreateFunnelRequest, EditFunnelRequest, GetFunnelRequest};

pub async fn create_funnel(
    State(state): State<AppState>,
    Json(request): Json<CommonRequest<CreateFunnelDto>>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), AppError> {
    state
        .funnels
        .create_funnel(&CreateFunnelRequest {
            account_id: AccountId(request.data.account_id),
            team_member_id: TeamMemberId(request.data.team_member_id),
            name: request.data.name,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message(201, "Successfully created funnel")),
    ))
}

pub async fn get_funnel(
    State(state): State<AppState>,
    Path(funnel_id): Path<String>,
    Query(params): Query<CallerParams>,
) -> Result<Json<ApiResponse<FunnelDto>>, AppError> {
    let funnel = state
        .funnels
        .get_funnel(&GetFunnelRequest {
            account_id: AccountId(params.account_id),
            team_member_id: TeamMemberId(params.team_member_id),
            funnel_id,
        })
        .await?;
    Ok(Json(ApiResponse::with_data(
        200,
        "Successfully fetched funnel",
        FunnelDto {
            funnel_id: funnel.funnel_id,
            name: funnel.name,
        },
    )))
}

pub async fn edit_funnel(
    State(state): State<AppState>,
    Path(funnel_id): Path<String>,
    Query(params): Query<CallerParams>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state
        .funnels
        .edit_funnel(&EditFunnelRequest {
            account_id: AccountId(params.account_id),
            team_member_id: TeamMemberId(params.team_member_id),
            funnel_id,
        })
        .await?;
    Ok(Json(ApiResponse::message(200, "Successfully edited funnel")))
}
