//! Blog HTTP 处理器

use axum::Json;
use axum::extract::{Path, Query, State};

use teamgate_common::{AccountId, TeamMemberId};
use teamgate_errors::AppError;

use super::entity::{
    ApiResponse, CallerParams, CommonRequest, ReadBlogPageParams, WriteBlogPageDto,
    WriteBlogSettingsDto,
};
use super::routes::AppState;
use crate::domain::blog::{
    ReadBlogPageRequest, ReadBlogSettingsRequest, WriteBlogPageRequest, WriteBlogSettingsRequest,
};

pub async fn write_blog_page(
    State(state): State<AppState>,
    Json(request): Json<CommonRequest<WriteBlogPageDto>>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state
        .blogs
        .write_blog_page(&WriteBlogPageRequest {
            account_id: AccountId(request.data.account_id),
            team_member_id: TeamMemberId(request.data.team_member_id),
            title: request.data.title,
            content: request.data.content,
            page_id: request.data.page_id,
        })
        .await?;
    Ok(Json(ApiResponse::message(200, "Successfully wrote blog page")))
}

pub async fn read_blog_page(
    State(state): State<AppState>,
    Query(params): Query<ReadBlogPageParams>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state
        .blogs
        .read_blog_page(&ReadBlogPageRequest {
            account_id: AccountId(params.account_id),
            team_member_id: TeamMemberId(params.team_member_id),
            blog_id: params.blog_id,
            page_id: params.page_id,
        })
        .await?;
    Ok(Json(ApiResponse::message(200, "Successfully read blog page")))
}

pub async fn write_blog_settings(
    State(state): State<AppState>,
    Json(request): Json<CommonRequest<WriteBlogSettingsDto>>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state
        .blogs
        .write_blog_settings(&WriteBlogSettingsRequest {
            account_id: AccountId(request.data.account_id),
            team_member_id: TeamMemberId(request.data.team_member_id),
            blog_id: request.data.blog_id,
            title: request.data.title,
            content: request.data.content,
        })
        .await?;
    Ok(Json(ApiResponse::message(
        200,
        "Successfully wrote blog settings",
    )))
}

pub async fn read_blog_settings(
    State(state): State<AppState>,
    Path(blog_id): Path<i64>,
    Query(params): Query<CallerParams>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state
        .blogs
        .read_blog_settings(&ReadBlogSettingsRequest {
            account_id: AccountId(params.account_id),
            team_member_id: TeamMemberId(params.team_member_id),
            blog_id,
        })
        .await?;
    Ok(Json(ApiResponse::message(
        200,
        "Successfully read blog settings",
    )))
}
