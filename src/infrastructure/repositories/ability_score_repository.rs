//! Ability Score Repository Implementation
//!
//! PostgreSQL implementation of the AbilityScoreRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Ability, AbilityScore, AbilityScoreRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct AbilityScoreRow {
    id: String,
    character_id: String,
    ability: String,
    score: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AbilityScoreRow {
    fn into_ability_score(self) -> Result<AbilityScore, AppError> {
        let ability = Ability::from_str(&self.ability).ok_or_else(|| {
            AppError::Internal(format!("Unknown ability '{}' in row {}", self.ability, self.id))
        })?;

        Ok(AbilityScore {
            id: self.id,
            character_id: self.character_id,
            ability,
            score: self.score,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// PostgreSQL ability score repository implementation.
#[derive(Clone)]
pub struct PgAbilityScoreRepository {
    pool: PgPool,
}

impl PgAbilityScoreRepository {
    /// Create a new PgAbilityScoreRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AbilityScoreRepository for PgAbilityScoreRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<AbilityScore>, AppError> {
        let row = sqlx::query_as::<_, AbilityScoreRow>(
            r#"
            SELECT id, character_id, ability, score, created_at, updated_at
            FROM ability_scores
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_ability_score()).transpose()
    }

    async fn find_by_character_id(
        &self,
        character_id: &str,
    ) -> Result<Vec<AbilityScore>, AppError> {
        let rows = sqlx::query_as::<_, AbilityScoreRow>(
            r#"
            SELECT id, character_id, ability, score, created_at, updated_at
            FROM ability_scores
            WHERE character_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(character_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_ability_score()).collect()
    }

    async fn create(&self, score: &AbilityScore) -> Result<AbilityScore, AppError> {
        let row = sqlx::query_as::<_, AbilityScoreRow>(
            r#"
            INSERT INTO ability_scores (id, character_id, ability, score)
            VALUES ($1, $2, $3, $4)
            RETURNING id, character_id, ability, score, created_at, updated_at
            "#,
        )
        .bind(&score.id)
        .bind(&score.character_id)
        .bind(score.ability.as_str())
        .bind(score.score)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AppError::Conflict(
                "Character already has a score for this ability".to_string(),
            ),
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::BadRequest("Referenced character does not exist".to_string())
            }
            _ => AppError::Database(e),
        })?;

        row.into_ability_score()
    }

    async fn update(&self, score: &AbilityScore) -> Result<AbilityScore, AppError> {
        let row = sqlx::query_as::<_, AbilityScoreRow>(
            r#"
            UPDATE ability_scores
            SET score = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, character_id, ability, score, created_at, updated_at
            "#,
        )
        .bind(&score.id)
        .bind(score.score)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Ability score with id {} not found", score.id))
        })?;

        row.into_ability_score()
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM ability_scores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Ability score with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
