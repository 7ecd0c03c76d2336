//! PostgreSQL 策略仓储实现

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use teamgate_common::{AccountId, PolicyId, TeamMemberId};
use teamgate_errors::{AppError, AppResult};

use crate::domain::policy::{Action, Policy, PolicyRepository};

/// 将 sqlx 错误转换为 AppError
fn map_sqlx_error(e: sqlx::Error) -> AppError {
    AppError::database(e.to_string())
}

/// 转义 LIKE 模式元字符，让前缀按字面匹配
fn escape_like(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub struct PostgresPolicyRepository {
    pool: PgPool,
}

impl PostgresPolicyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PolicyRow {
    id: Uuid,
    account_id: i64,
    team_member_id: i64,
    resource: String,
    action: String,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
    #[allow(dead_code)]
    updated_at: DateTime<Utc>,
}

impl TryFrom<PolicyRow> for Policy {
    type Error = AppError;

    fn try_from(row: PolicyRow) -> Result<Self, Self::Error> {
        let action: Action = row
            .action
            .parse()
            .map_err(|_| AppError::internal(format!("Unknown action in policy row: {}", row.action)))?;
        Ok(Policy {
            id: PolicyId::from_uuid(row.id),
            account_id: AccountId(row.account_id),
            team_member_id: TeamMemberId(row.team_member_id),
            resource: row.resource,
            action,
        })
    }
}

#[async_trait]
impl PolicyRepository for PostgresPolicyRepository {
    async fn create(&self, policy: &Policy) -> AppResult<Policy> {
        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO policies (id, account_id, team_member_id, resource, action, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(policy.id.0)
        .bind(policy.account_id.0)
        .bind(policy.team_member_id.0)
        .bind(&policy.resource)
        .bind(policy.action.to_string())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(policy.clone())
    }

    async fn delete(&self, id: &PolicyId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM policies WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        // 删除不存在的 ID 是错误，不静默忽略
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Policy {} not found", id)));
        }

        Ok(())
    }

    async fn get(
        &self,
        account_id: AccountId,
        team_member_id: TeamMemberId,
        action: Action,
    ) -> AppResult<Vec<Policy>> {
        let rows = sqlx::query_as::<_, PolicyRow>(
            r#"
            SELECT id, account_id, team_member_id, resource, action, created_at, updated_at
            FROM policies
            WHERE account_id = $1 AND team_member_id = $2 AND action = $3
            "#,
        )
        .bind(account_id.0)
        .bind(team_member_id.0)
        .bind(action.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(Policy::try_from).collect()
    }

    async fn delete_by_prefix(
        &self,
        account_id: AccountId,
        team_member_id: TeamMemberId,
        action: Action,
        resource_prefix: &str,
    ) -> AppResult<()> {
        let pattern = format!("{}%", escape_like(resource_prefix));
        sqlx::query(
            r#"
            DELETE FROM policies
            WHERE account_id = $1 AND team_member_id = $2 AND action = $3
              AND resource LIKE $4 ESCAPE '\'
            "#,
        )
        .bind(account_id.0)
        .bind(team_member_id.0)
        .bind(action.to_string())
        .bind(pattern)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}
