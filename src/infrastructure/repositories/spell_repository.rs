//! Spell Repository Implementation
//!
//! PostgreSQL implementation of the SpellRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{MagicSchool, Spell, SpellRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct SpellRow {
    id: String,
    character_id: String,
    name: String,
    level: i32,
    school: String,
    casting_time: String,
    range: String,
    duration: String,
    components: Vec<String>,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SpellRow {
    fn into_spell(self) -> Spell {
        Spell {
            id: self.id,
            character_id: self.character_id,
            name: self.name,
            level: self.level,
            school: MagicSchool::from_str(&self.school),
            casting_time: self.casting_time,
            range: self.range,
            duration: self.duration,
            components: self.components,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

const SPELL_COLUMNS: &str = r#"id, character_id, name, level, school, casting_time,
       range, duration, components, description, created_at, updated_at"#;

/// PostgreSQL spell repository implementation.
#[derive(Clone)]
pub struct PgSpellRepository {
    pool: PgPool,
}

impl PgSpellRepository {
    /// Create a new PgSpellRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpellRepository for PgSpellRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Spell>, AppError> {
        let row = sqlx::query_as::<_, SpellRow>(&format!(
            "SELECT {SPELL_COLUMNS} FROM spells WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_spell()))
    }

    async fn find_by_character_id(&self, character_id: &str) -> Result<Vec<Spell>, AppError> {
        let rows = sqlx::query_as::<_, SpellRow>(&format!(
            "SELECT {SPELL_COLUMNS} FROM spells WHERE character_id = $1 ORDER BY level, name"
        ))
        .bind(character_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_spell()).collect())
    }

    async fn create(&self, spell: &Spell) -> Result<Spell, AppError> {
        let row = sqlx::query_as::<_, SpellRow>(&format!(
            r#"
            INSERT INTO spells (id, character_id, name, level, school, casting_time,
                                range, duration, components, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {SPELL_COLUMNS}
            "#
        ))
        .bind(&spell.id)
        .bind(&spell.character_id)
        .bind(&spell.name)
        .bind(spell.level)
        .bind(spell.school.as_str())
        .bind(&spell.casting_time)
        .bind(&spell.range)
        .bind(&spell.duration)
        .bind(&spell.components)
        .bind(&spell.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::BadRequest("Referenced character does not exist".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.into_spell())
    }

    async fn update(&self, spell: &Spell) -> Result<Spell, AppError> {
        let row = sqlx::query_as::<_, SpellRow>(&format!(
            r#"
            UPDATE spells
            SET name = $2,
                level = $3,
                school = $4,
                casting_time = $5,
                range = $6,
                duration = $7,
                components = $8,
                description = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {SPELL_COLUMNS}
            "#
        ))
        .bind(&spell.id)
        .bind(&spell.name)
        .bind(spell.level)
        .bind(spell.school.as_str())
        .bind(&spell.casting_time)
        .bind(&spell.range)
        .bind(&spell.duration)
        .bind(&spell.components)
        .bind(&spell.description)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Spell with id {} not found", spell.id)))?;

        Ok(row.into_spell())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM spells WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Spell with id {} not found", id)));
        }

        Ok(())
    }
}
