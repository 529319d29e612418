//! Character Service
//!
//! Handles character sheet operations: lookup by id, listing a player's
//! characters, inserting new sheets and applying partial updates.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Character, CharacterRepository, GameSystem};
use crate::shared::ids::{new_id, IdPrefix};

/// Character service trait
#[async_trait]
pub trait CharacterService: Send + Sync {
    /// Get a character by ID
    async fn get_character_by_id(&self, id: &str) -> Result<CharacterDto, CharacterError>;

    /// Get all characters belonging to a user
    async fn get_characters_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Vec<CharacterDto>, CharacterError>;

    /// Insert a new character sheet for a user
    async fn insert_new_character(
        &self,
        user_id: &str,
        new_character: NewCharacterDto,
    ) -> Result<CharacterDto, CharacterError>;

    /// Apply a partial update to a character sheet
    async fn update_character(
        &self,
        user_id: &str,
        character_id: &str,
        update: UpdateCharacterDto,
    ) -> Result<CharacterDto, CharacterError>;

    /// Delete a character sheet
    async fn delete_character(&self, user_id: &str, character_id: &str)
        -> Result<(), CharacterError>;
}

/// Character data transfer object
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterDto {
    pub id: String,
    pub player_id: String,
    pub name: String,
    pub race: String,
    pub subrace: Option<String>,
    pub experience: i32,
    pub level: i32,
    pub background: String,
    pub alignment: String,
    pub ideal: String,
    pub bond: String,
    pub flaw: String,
    pub personality_traits: Vec<String>,
    pub proficiencies: Vec<String>,
    pub languages: Vec<String>,
    pub max_health: i32,
    pub health: i32,
    pub is_dead: bool,
    pub game: String,
    pub created_at: String,
}

impl From<Character> for CharacterDto {
    fn from(character: Character) -> Self {
        Self {
            id: character.id,
            player_id: character.player_id,
            name: character.name,
            race: character.race,
            subrace: character.subrace,
            experience: character.experience,
            level: character.level,
            background: character.background,
            alignment: character.alignment,
            ideal: character.ideal,
            bond: character.bond,
            flaw: character.flaw,
            personality_traits: character.personality_traits,
            proficiencies: character.proficiencies,
            languages: character.languages,
            max_health: character.max_health,
            health: character.health,
            is_dead: character.is_dead,
            game: character.game.as_str().to_string(),
            created_at: character.created_at.to_rfc3339(),
        }
    }
}

/// New character request
#[derive(Debug, Clone, Default)]
pub struct NewCharacterDto {
    pub name: String,
    pub race: String,
    pub subrace: Option<String>,
    pub experience: i32,
    pub level: i32,
    pub background: String,
    pub alignment: String,
    pub ideal: String,
    pub bond: String,
    pub flaw: String,
    pub personality_traits: Vec<String>,
    pub proficiencies: Vec<String>,
    pub languages: Vec<String>,
    pub max_health: i32,
    pub health: i32,
    pub game: Option<String>,
}

/// Partial character update request
#[derive(Debug, Clone, Default)]
pub struct UpdateCharacterDto {
    pub name: Option<String>,
    pub race: Option<String>,
    pub subrace: Option<String>,
    pub experience: Option<i32>,
    pub level: Option<i32>,
    pub background: Option<String>,
    pub alignment: Option<String>,
    pub ideal: Option<String>,
    pub bond: Option<String>,
    pub flaw: Option<String>,
    pub personality_traits: Option<Vec<String>>,
    pub proficiencies: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub max_health: Option<i32>,
    pub health: Option<i32>,
    pub is_dead: Option<bool>,
}

/// Character service errors
#[derive(Debug, thiserror::Error)]
pub enum CharacterError {
    #[error("Character not found")]
    NotFound,

    #[error("Character belongs to another player")]
    NotOwner,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// CharacterService implementation
pub struct CharacterServiceImpl<C>
where
    C: CharacterRepository,
{
    character_repo: Arc<C>,
}

impl<C> CharacterServiceImpl<C>
where
    C: CharacterRepository,
{
    pub fn new(character_repo: Arc<C>) -> Self {
        Self { character_repo }
    }

    async fn find_owned(
        &self,
        user_id: &str,
        character_id: &str,
    ) -> Result<Character, CharacterError> {
        let character = self
            .character_repo
            .find_by_id(character_id)
            .await
            .map_err(|e| CharacterError::Internal(e.to_string()))?
            .ok_or(CharacterError::NotFound)?;

        if character.player_id != user_id {
            return Err(CharacterError::NotOwner);
        }

        Ok(character)
    }
}

#[async_trait]
impl<C> CharacterService for CharacterServiceImpl<C>
where
    C: CharacterRepository + 'static,
{
    async fn get_character_by_id(&self, id: &str) -> Result<CharacterDto, CharacterError> {
        let character = self
            .character_repo
            .find_by_id(id)
            .await
            .map_err(|e| CharacterError::Internal(e.to_string()))?
            .ok_or(CharacterError::NotFound)?;

        Ok(CharacterDto::from(character))
    }

    async fn get_characters_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Vec<CharacterDto>, CharacterError> {
        let characters = self
            .character_repo
            .find_by_player_id(user_id)
            .await
            .map_err(|e| CharacterError::Internal(e.to_string()))?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    async fn insert_new_character(
        &self,
        user_id: &str,
        new_character: NewCharacterDto,
    ) -> Result<CharacterDto, CharacterError> {
        let character = Character {
            id: new_id(IdPrefix::Character),
            player_id: user_id.to_string(),
            name: new_character.name,
            race: new_character.race,
            subrace: new_character.subrace,
            experience: new_character.experience,
            level: new_character.level,
            background: new_character.background,
            alignment: new_character.alignment,
            ideal: new_character.ideal,
            bond: new_character.bond,
            flaw: new_character.flaw,
            personality_traits: new_character.personality_traits,
            proficiencies: new_character.proficiencies,
            languages: new_character.languages,
            max_health: new_character.max_health,
            health: new_character.health,
            is_dead: false,
            game: new_character
                .game
                .as_deref()
                .map(GameSystem::from_str)
                .unwrap_or_default(),
            ..Character::default()
        };

        let created = self
            .character_repo
            .create(&character)
            .await
            .map_err(|e| CharacterError::Internal(e.to_string()))?;

        Ok(CharacterDto::from(created))
    }

    async fn update_character(
        &self,
        user_id: &str,
        character_id: &str,
        update: UpdateCharacterDto,
    ) -> Result<CharacterDto, CharacterError> {
        let mut character = self.find_owned(user_id, character_id).await?;

        // Apply updates
        if let Some(name) = update.name {
            character.name = name;
        }
        if let Some(race) = update.race {
            character.race = race;
        }
        if let Some(subrace) = update.subrace {
            character.subrace = Some(subrace);
        }
        if let Some(experience) = update.experience {
            character.experience = experience;
        }
        if let Some(level) = update.level {
            character.level = level;
        }
        if let Some(background) = update.background {
            character.background = background;
        }
        if let Some(alignment) = update.alignment {
            character.alignment = alignment;
        }
        if let Some(ideal) = update.ideal {
            character.ideal = ideal;
        }
        if let Some(bond) = update.bond {
            character.bond = bond;
        }
        if let Some(flaw) = update.flaw {
            character.flaw = flaw;
        }
        if let Some(personality_traits) = update.personality_traits {
            character.personality_traits = personality_traits;
        }
        if let Some(proficiencies) = update.proficiencies {
            character.proficiencies = proficiencies;
        }
        if let Some(languages) = update.languages {
            character.languages = languages;
        }
        if let Some(max_health) = update.max_health {
            character.max_health = max_health;
        }
        if let Some(health) = update.health {
            character.health = health;
        }
        if let Some(is_dead) = update.is_dead {
            character.is_dead = is_dead;
        }

        // Save updates
        let updated = self
            .character_repo
            .update(&character)
            .await
            .map_err(|e| CharacterError::Internal(e.to_string()))?;

        Ok(CharacterDto::from(updated))
    }

    async fn delete_character(
        &self,
        user_id: &str,
        character_id: &str,
    ) -> Result<(), CharacterError> {
        let character = self.find_owned(user_id, character_id).await?;

        self.character_repo
            .delete(&character.id)
            .await
            .map_err(|e| CharacterError::Internal(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockCharacterRepository;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn sample_character(id: &str, player_id: &str) -> Character {
        Character {
            id: id.to_string(),
            player_id: player_id.to_string(),
            name: "Test character".to_string(),
            race: "Halfling".to_string(),
            subrace: Some("Lightfoot".to_string()),
            experience: 0,
            level: 1,
            background: "Hermit".to_string(),
            alignment: "Neutral Good".to_string(),
            languages: vec!["Common".to_string(), "Dwarvish".to_string()],
            max_health: 15,
            health: 15,
            ..Character::default()
        }
    }

    fn service(repo: MockCharacterRepository) -> CharacterServiceImpl<MockCharacterRepository> {
        CharacterServiceImpl::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_get_character_by_id_returns_repository_record() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_find_by_id()
            .with(eq("CHR-TEST1"))
            .returning(|id| Ok(Some(sample_character(id, "USR-TEST1"))));

        let dto = service(repo)
            .get_character_by_id("CHR-TEST1")
            .await
            .expect("lookup should succeed");

        assert_eq!(dto.id, "CHR-TEST1");
        assert_eq!(dto.name, "Test character");
        assert_eq!(dto.race, "Halfling");
    }

    #[tokio::test]
    async fn test_get_character_by_id_missing_is_not_found() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo).get_character_by_id("CHR-MISSING").await;
        assert!(matches!(result, Err(CharacterError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_characters_by_user_id_returns_all_rows() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_find_by_player_id()
            .with(eq("USR-TEST1"))
            .returning(|player_id| {
                Ok(vec![
                    sample_character("CHR-1", player_id),
                    sample_character("CHR-2", player_id),
                ])
            });

        let dtos = service(repo)
            .get_characters_by_user_id("USR-TEST1")
            .await
            .expect("listing should succeed");

        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].id, "CHR-1");
        assert_eq!(dtos[1].id, "CHR-2");
    }

    #[tokio::test]
    async fn test_insert_new_character_returns_input_shape() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_create()
            .returning(|character| Ok(character.clone()));

        let input = NewCharacterDto {
            name: "Test character".to_string(),
            race: "Halfling".to_string(),
            subrace: Some("Lightfoot".to_string()),
            experience: 0,
            level: 1,
            background: "Hermit".to_string(),
            alignment: "Neutral Good".to_string(),
            languages: vec!["Common".to_string(), "Dwarvish".to_string()],
            max_health: 15,
            health: 15,
            game: Some("dd5".to_string()),
            ..NewCharacterDto::default()
        };

        let dto = service(repo)
            .insert_new_character("USR-TEST", input.clone())
            .await
            .expect("insert should succeed");

        assert!(dto.id.starts_with("CHR-"));
        assert_eq!(dto.player_id, "USR-TEST");
        assert_eq!(dto.name, input.name);
        assert_eq!(dto.race, input.race);
        assert_eq!(dto.subrace, input.subrace);
        assert_eq!(dto.languages, input.languages);
        assert_eq!(dto.max_health, input.max_health);
        assert_eq!(dto.game, "dd5");
        assert!(!dto.is_dead);
    }

    #[tokio::test]
    async fn test_update_character_forwards_patch() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_find_by_id()
            .with(eq("CHR-TEST"))
            .returning(|id| Ok(Some(sample_character(id, "USR-TEST"))));
        repo.expect_update()
            .withf(|character| character.level == 2 && character.name == "Test character")
            .returning(|character| Ok(character.clone()));

        let update = UpdateCharacterDto {
            level: Some(2),
            ..UpdateCharacterDto::default()
        };

        let dto = service(repo)
            .update_character("USR-TEST", "CHR-TEST", update)
            .await
            .expect("update should succeed");

        assert_eq!(dto.id, "CHR-TEST");
        assert_eq!(dto.level, 2);
    }

    #[tokio::test]
    async fn test_update_character_rejects_other_players() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(sample_character(id, "USR-SOMEONE-ELSE"))));

        let result = service(repo)
            .update_character("USR-TEST", "CHR-TEST", UpdateCharacterDto::default())
            .await;

        assert!(matches!(result, Err(CharacterError::NotOwner)));
    }

    #[tokio::test]
    async fn test_delete_character_checks_ownership() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(sample_character(id, "USR-TEST"))));
        repo.expect_delete()
            .with(eq("CHR-TEST"))
            .returning(|_| Ok(()));

        service(repo)
            .delete_character("USR-TEST", "CHR-TEST")
            .await
            .expect("delete should succeed");
    }
}
