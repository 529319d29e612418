//! Spell Service
//!
//! Handles per-character spell operations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{CharacterRepository, MagicSchool, Spell, SpellRepository};
use crate::shared::ids::{new_id, IdPrefix};

/// Spell service trait
#[async_trait]
pub trait SpellService: Send + Sync {
    /// Get a spell by ID
    async fn get_spell(&self, id: &str) -> Result<SpellDto, SpellError>;

    /// Get all spells known by a character
    async fn get_spells_by_character_id(
        &self,
        character_id: &str,
    ) -> Result<Vec<SpellDto>, SpellError>;

    /// Insert a new spell for a character owned by the user
    async fn insert_new_spell(
        &self,
        user_id: &str,
        character_id: &str,
        new_spell: NewSpellDto,
    ) -> Result<SpellDto, SpellError>;

    /// Apply a partial update to a spell
    async fn update_spell(
        &self,
        user_id: &str,
        id: &str,
        update: UpdateSpellDto,
    ) -> Result<SpellDto, SpellError>;

    /// Delete a spell
    async fn delete_spell(&self, user_id: &str, id: &str) -> Result<(), SpellError>;
}

/// Spell data transfer object
#[derive(Debug, Clone, PartialEq)]
pub struct SpellDto {
    pub id: String,
    pub character_id: String,
    pub name: String,
    pub level: i32,
    pub school: String,
    pub casting_time: String,
    pub range: String,
    pub duration: String,
    pub components: Vec<String>,
    pub description: String,
}

impl From<Spell> for SpellDto {
    fn from(spell: Spell) -> Self {
        Self {
            id: spell.id,
            character_id: spell.character_id,
            name: spell.name,
            level: spell.level,
            school: spell.school.as_str().to_string(),
            casting_time: spell.casting_time,
            range: spell.range,
            duration: spell.duration,
            components: spell.components,
            description: spell.description,
        }
    }
}

/// New spell request
#[derive(Debug, Clone, Default)]
pub struct NewSpellDto {
    pub name: String,
    pub level: i32,
    pub school: Option<String>,
    pub casting_time: String,
    pub range: String,
    pub duration: String,
    pub components: Vec<String>,
    pub description: String,
}

/// Partial spell update request
#[derive(Debug, Clone, Default)]
pub struct UpdateSpellDto {
    pub name: Option<String>,
    pub level: Option<i32>,
    pub school: Option<String>,
    pub casting_time: Option<String>,
    pub range: Option<String>,
    pub duration: Option<String>,
    pub components: Option<Vec<String>>,
    pub description: Option<String>,
}

/// Spell service errors
#[derive(Debug, thiserror::Error)]
pub enum SpellError {
    #[error("Spell not found")]
    NotFound,

    #[error("Character not found")]
    CharacterNotFound,

    #[error("Character belongs to another player")]
    NotOwner,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// SpellService implementation
pub struct SpellServiceImpl<S, C>
where
    S: SpellRepository,
    C: CharacterRepository,
{
    spell_repo: Arc<S>,
    character_repo: Arc<C>,
}

impl<S, C> SpellServiceImpl<S, C>
where
    S: SpellRepository,
    C: CharacterRepository,
{
    pub fn new(spell_repo: Arc<S>, character_repo: Arc<C>) -> Self {
        Self {
            spell_repo,
            character_repo,
        }
    }

    async fn check_character_owner(
        &self,
        user_id: &str,
        character_id: &str,
    ) -> Result<(), SpellError> {
        let character = self
            .character_repo
            .find_by_id(character_id)
            .await
            .map_err(|e| SpellError::Internal(e.to_string()))?
            .ok_or(SpellError::CharacterNotFound)?;

        if character.player_id != user_id {
            return Err(SpellError::NotOwner);
        }

        Ok(())
    }
}

#[async_trait]
impl<S, C> SpellService for SpellServiceImpl<S, C>
where
    S: SpellRepository + 'static,
    C: CharacterRepository + 'static,
{
    async fn get_spell(&self, id: &str) -> Result<SpellDto, SpellError> {
        let spell = self
            .spell_repo
            .find_by_id(id)
            .await
            .map_err(|e| SpellError::Internal(e.to_string()))?
            .ok_or(SpellError::NotFound)?;

        Ok(SpellDto::from(spell))
    }

    async fn get_spells_by_character_id(
        &self,
        character_id: &str,
    ) -> Result<Vec<SpellDto>, SpellError> {
        let spells = self
            .spell_repo
            .find_by_character_id(character_id)
            .await
            .map_err(|e| SpellError::Internal(e.to_string()))?;

        Ok(spells.into_iter().map(SpellDto::from).collect())
    }

    async fn insert_new_spell(
        &self,
        user_id: &str,
        character_id: &str,
        new_spell: NewSpellDto,
    ) -> Result<SpellDto, SpellError> {
        self.check_character_owner(user_id, character_id).await?;

        let spell = Spell {
            id: new_id(IdPrefix::Spell),
            character_id: character_id.to_string(),
            name: new_spell.name,
            level: new_spell.level,
            school: new_spell
                .school
                .as_deref()
                .map(MagicSchool::from_str)
                .unwrap_or_default(),
            casting_time: new_spell.casting_time,
            range: new_spell.range,
            duration: new_spell.duration,
            components: new_spell.components,
            description: new_spell.description,
            ..Spell::default()
        };

        let created = self
            .spell_repo
            .create(&spell)
            .await
            .map_err(|e| SpellError::Internal(e.to_string()))?;

        Ok(SpellDto::from(created))
    }

    async fn update_spell(
        &self,
        user_id: &str,
        id: &str,
        update: UpdateSpellDto,
    ) -> Result<SpellDto, SpellError> {
        let mut spell = self
            .spell_repo
            .find_by_id(id)
            .await
            .map_err(|e| SpellError::Internal(e.to_string()))?
            .ok_or(SpellError::NotFound)?;

        self.check_character_owner(user_id, &spell.character_id)
            .await?;

        // Apply updates
        if let Some(name) = update.name {
            spell.name = name;
        }
        if let Some(level) = update.level {
            spell.level = level;
        }
        if let Some(school) = update.school {
            spell.school = MagicSchool::from_str(&school);
        }
        if let Some(casting_time) = update.casting_time {
            spell.casting_time = casting_time;
        }
        if let Some(range) = update.range {
            spell.range = range;
        }
        if let Some(duration) = update.duration {
            spell.duration = duration;
        }
        if let Some(components) = update.components {
            spell.components = components;
        }
        if let Some(description) = update.description {
            spell.description = description;
        }

        let updated = self
            .spell_repo
            .update(&spell)
            .await
            .map_err(|e| SpellError::Internal(e.to_string()))?;

        Ok(SpellDto::from(updated))
    }

    async fn delete_spell(&self, user_id: &str, id: &str) -> Result<(), SpellError> {
        let spell = self
            .spell_repo
            .find_by_id(id)
            .await
            .map_err(|e| SpellError::Internal(e.to_string()))?
            .ok_or(SpellError::NotFound)?;

        self.check_character_owner(user_id, &spell.character_id)
            .await?;

        self.spell_repo
            .delete(id)
            .await
            .map_err(|e| SpellError::Internal(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Character, MockCharacterRepository, MockSpellRepository};
    use mockall::predicate::eq;

    fn sample_spell(id: &str, character_id: &str) -> Spell {
        Spell {
            id: id.to_string(),
            character_id: character_id.to_string(),
            name: "Fire Bolt".to_string(),
            level: 0,
            school: MagicSchool::Evocation,
            casting_time: "1 action".to_string(),
            range: "120 feet".to_string(),
            duration: "Instantaneous".to_string(),
            components: vec!["V".to_string(), "S".to_string()],
            ..Spell::default()
        }
    }

    fn owned_character(id: &str, player_id: &str) -> Character {
        Character {
            id: id.to_string(),
            player_id: player_id.to_string(),
            ..Character::default()
        }
    }

    #[tokio::test]
    async fn test_get_spell_returns_repository_record() {
        let mut spell_repo = MockSpellRepository::new();
        spell_repo
            .expect_find_by_id()
            .with(eq("SPL-TEST1"))
            .returning(|id| Ok(Some(sample_spell(id, "CHR-TEST1"))));

        let service =
            SpellServiceImpl::new(Arc::new(spell_repo), Arc::new(MockCharacterRepository::new()));
        let dto = service.get_spell("SPL-TEST1").await.expect("should find spell");

        assert_eq!(dto.id, "SPL-TEST1");
        assert_eq!(dto.name, "Fire Bolt");
        assert_eq!(dto.school, "evocation");
    }

    #[tokio::test]
    async fn test_insert_new_spell_returns_input_shape() {
        let mut spell_repo = MockSpellRepository::new();
        spell_repo
            .expect_create()
            .returning(|spell| Ok(spell.clone()));

        let mut character_repo = MockCharacterRepository::new();
        character_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(owned_character(id, "USR-TEST"))));

        let service = SpellServiceImpl::new(Arc::new(spell_repo), Arc::new(character_repo));
        let input = NewSpellDto {
            name: "Shield".to_string(),
            level: 1,
            school: Some("abjuration".to_string()),
            casting_time: "1 reaction".to_string(),
            range: "Self".to_string(),
            duration: "1 round".to_string(),
            components: vec!["V".to_string(), "S".to_string()],
            description: "+5 AC until your next turn.".to_string(),
        };

        let dto = service
            .insert_new_spell("USR-TEST", "CHR-TEST", input.clone())
            .await
            .expect("insert should succeed");

        assert!(dto.id.starts_with("SPL-"));
        assert_eq!(dto.character_id, "CHR-TEST");
        assert_eq!(dto.name, input.name);
        assert_eq!(dto.level, input.level);
        assert_eq!(dto.school, "abjuration");
        assert_eq!(dto.components, input.components);
    }

    #[tokio::test]
    async fn test_update_spell_checks_ownership() {
        let mut spell_repo = MockSpellRepository::new();
        spell_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_spell(id, "CHR-TEST"))));

        let mut character_repo = MockCharacterRepository::new();
        character_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(owned_character(id, "USR-SOMEONE-ELSE"))));

        let service = SpellServiceImpl::new(Arc::new(spell_repo), Arc::new(character_repo));
        let result = service
            .update_spell("USR-TEST", "SPL-TEST", UpdateSpellDto::default())
            .await;

        assert!(matches!(result, Err(SpellError::NotOwner)));
    }

    #[tokio::test]
    async fn test_delete_spell_forwards_to_repository() {
        let mut spell_repo = MockSpellRepository::new();
        spell_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_spell(id, "CHR-TEST"))));
        spell_repo
            .expect_delete()
            .with(eq("SPL-TEST"))
            .returning(|_| Ok(()));

        let mut character_repo = MockCharacterRepository::new();
        character_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(owned_character(id, "USR-TEST"))));

        let service = SpellServiceImpl::new(Arc::new(spell_repo), Arc::new(character_repo));
        service
            .delete_spell("USR-TEST", "SPL-TEST")
            .await
            .expect("delete should succeed");
    }
}
