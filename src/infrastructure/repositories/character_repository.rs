//! Character Repository Implementation
//!
//! PostgreSQL implementation of the CharacterRepository trait.
//! Maps between the database schema and the domain Character entity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Character, CharacterRepository, GameSystem};
use crate::shared::error::AppError;

/// Database row representation matching the `characters` table schema.
/// String arrays are stored as PostgreSQL TEXT[].
#[derive(Debug, sqlx::FromRow)]
struct CharacterRow {
    id: String,
    player_id: String,
    name: String,
    race: String,
    subrace: Option<String>,
    experience: i32,
    level: i32,
    background: String,
    alignment: String,
    ideal: String,
    bond: String,
    flaw: String,
    personality_traits: Vec<String>,
    proficiencies: Vec<String>,
    languages: Vec<String>,
    max_health: i32,
    health: i32,
    is_dead: bool,
    game: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CharacterRow {
    /// Convert database row to domain Character entity.
    fn into_character(self) -> Character {
        Character {
            id: self.id,
            player_id: self.player_id,
            name: self.name,
            race: self.race,
            subrace: self.subrace,
            experience: self.experience,
            level: self.level,
            background: self.background,
            alignment: self.alignment,
            ideal: self.ideal,
            bond: self.bond,
            flaw: self.flaw,
            personality_traits: self.personality_traits,
            proficiencies: self.proficiencies,
            languages: self.languages,
            max_health: self.max_health,
            health: self.health,
            is_dead: self.is_dead,
            game: GameSystem::from_str(&self.game),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

const CHARACTER_COLUMNS: &str = r#"id, player_id, name, race, subrace, experience, level,
       background, alignment, ideal, bond, flaw,
       personality_traits, proficiencies, languages,
       max_health, health, is_dead, game, created_at, updated_at"#;

/// PostgreSQL character repository implementation.
#[derive(Clone)]
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    /// Create a new PgCharacterRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacterRepository for PgCharacterRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Character>, AppError> {
        let row = sqlx::query_as::<_, CharacterRow>(&format!(
            "SELECT {CHARACTER_COLUMNS} FROM characters WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_character()))
    }

    async fn find_by_player_id(&self, player_id: &str) -> Result<Vec<Character>, AppError> {
        let rows = sqlx::query_as::<_, CharacterRow>(&format!(
            "SELECT {CHARACTER_COLUMNS} FROM characters WHERE player_id = $1 ORDER BY created_at"
        ))
        .bind(player_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_character()).collect())
    }

    async fn create(&self, character: &Character) -> Result<Character, AppError> {
        let row = sqlx::query_as::<_, CharacterRow>(&format!(
            r#"
            INSERT INTO characters (id, player_id, name, race, subrace, experience, level,
                                    background, alignment, ideal, bond, flaw,
                                    personality_traits, proficiencies, languages,
                                    max_health, health, is_dead, game)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                    $13, $14, $15, $16, $17, $18, $19)
            RETURNING {CHARACTER_COLUMNS}
            "#
        ))
        .bind(&character.id)
        .bind(&character.player_id)
        .bind(&character.name)
        .bind(&character.race)
        .bind(&character.subrace)
        .bind(character.experience)
        .bind(character.level)
        .bind(&character.background)
        .bind(&character.alignment)
        .bind(&character.ideal)
        .bind(&character.bond)
        .bind(&character.flaw)
        .bind(&character.personality_traits)
        .bind(&character.proficiencies)
        .bind(&character.languages)
        .bind(character.max_health)
        .bind(character.health)
        .bind(character.is_dead)
        .bind(character.game.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::BadRequest("Referenced player does not exist".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.into_character())
    }

    async fn update(&self, character: &Character) -> Result<Character, AppError> {
        let row = sqlx::query_as::<_, CharacterRow>(&format!(
            r#"
            UPDATE characters
            SET name = $2,
                race = $3,
                subrace = $4,
                experience = $5,
                level = $6,
                background = $7,
                alignment = $8,
                ideal = $9,
                bond = $10,
                flaw = $11,
                personality_traits = $12,
                proficiencies = $13,
                languages = $14,
                max_health = $15,
                health = $16,
                is_dead = $17,
                game = $18,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {CHARACTER_COLUMNS}
            "#
        ))
        .bind(&character.id)
        .bind(&character.name)
        .bind(&character.race)
        .bind(&character.subrace)
        .bind(character.experience)
        .bind(character.level)
        .bind(&character.background)
        .bind(&character.alignment)
        .bind(&character.ideal)
        .bind(&character.bond)
        .bind(&character.flaw)
        .bind(&character.personality_traits)
        .bind(&character.proficiencies)
        .bind(&character.languages)
        .bind(character.max_health)
        .bind(character.health)
        .bind(character.is_dead)
        .bind(character.game.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Character with id {} not found", character.id))
        })?;

        Ok(row.into_character())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Character with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
