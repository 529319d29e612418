//! Ability Score Service
//!
//! Handles per-character ability score operations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Ability, AbilityScore, AbilityScoreRepository, CharacterRepository};
use crate::shared::ids::{new_id, IdPrefix};

/// Ability score service trait
#[async_trait]
pub trait AbilityScoreService: Send + Sync {
    /// Get an ability score by ID
    async fn get_ability_score(&self, id: &str) -> Result<AbilityScoreDto, AbilityScoreError>;

    /// Get all ability scores for a character
    async fn get_ability_scores_by_character_id(
        &self,
        character_id: &str,
    ) -> Result<Vec<AbilityScoreDto>, AbilityScoreError>;

    /// Insert a new ability score for a character owned by the user
    async fn insert_ability_score(
        &self,
        user_id: &str,
        character_id: &str,
        new_score: NewAbilityScoreDto,
    ) -> Result<AbilityScoreDto, AbilityScoreError>;

    /// Update the value of an existing ability score
    async fn update_ability_score(
        &self,
        user_id: &str,
        id: &str,
        score: i32,
    ) -> Result<AbilityScoreDto, AbilityScoreError>;

    /// Delete an ability score
    async fn delete_ability_score(&self, user_id: &str, id: &str)
        -> Result<(), AbilityScoreError>;
}

/// Ability score data transfer object
#[derive(Debug, Clone, PartialEq)]
pub struct AbilityScoreDto {
    pub id: String,
    pub character_id: String,
    pub ability: String,
    pub score: i32,
    pub modifier: i32,
}

impl From<AbilityScore> for AbilityScoreDto {
    fn from(score: AbilityScore) -> Self {
        let modifier = score.modifier();
        Self {
            id: score.id,
            character_id: score.character_id,
            ability: score.ability.as_str().to_string(),
            score: score.score,
            modifier,
        }
    }
}

/// New ability score request
#[derive(Debug, Clone)]
pub struct NewAbilityScoreDto {
    pub ability: String,
    pub score: i32,
}

/// Ability score service errors
#[derive(Debug, thiserror::Error)]
pub enum AbilityScoreError {
    #[error("Ability score not found")]
    NotFound,

    #[error("Character not found")]
    CharacterNotFound,

    #[error("Character belongs to another player")]
    NotOwner,

    #[error("Unknown ability: {0}")]
    UnknownAbility(String),

    #[error("Character already has a score for this ability")]
    Duplicate,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// AbilityScoreService implementation
pub struct AbilityScoreServiceImpl<A, C>
where
    A: AbilityScoreRepository,
    C: CharacterRepository,
{
    score_repo: Arc<A>,
    character_repo: Arc<C>,
}

impl<A, C> AbilityScoreServiceImpl<A, C>
where
    A: AbilityScoreRepository,
    C: CharacterRepository,
{
    pub fn new(score_repo: Arc<A>, character_repo: Arc<C>) -> Self {
        Self {
            score_repo,
            character_repo,
        }
    }

    async fn check_character_owner(
        &self,
        user_id: &str,
        character_id: &str,
    ) -> Result<(), AbilityScoreError> {
        let character = self
            .character_repo
            .find_by_id(character_id)
            .await
            .map_err(|e| AbilityScoreError::Internal(e.to_string()))?
            .ok_or(AbilityScoreError::CharacterNotFound)?;

        if character.player_id != user_id {
            return Err(AbilityScoreError::NotOwner);
        }

        Ok(())
    }
}

#[async_trait]
impl<A, C> AbilityScoreService for AbilityScoreServiceImpl<A, C>
where
    A: AbilityScoreRepository + 'static,
    C: CharacterRepository + 'static,
{
    async fn get_ability_score(&self, id: &str) -> Result<AbilityScoreDto, AbilityScoreError> {
        let score = self
            .score_repo
            .find_by_id(id)
            .await
            .map_err(|e| AbilityScoreError::Internal(e.to_string()))?
            .ok_or(AbilityScoreError::NotFound)?;

        Ok(AbilityScoreDto::from(score))
    }

    async fn get_ability_scores_by_character_id(
        &self,
        character_id: &str,
    ) -> Result<Vec<AbilityScoreDto>, AbilityScoreError> {
        let scores = self
            .score_repo
            .find_by_character_id(character_id)
            .await
            .map_err(|e| AbilityScoreError::Internal(e.to_string()))?;

        Ok(scores.into_iter().map(AbilityScoreDto::from).collect())
    }

    async fn insert_ability_score(
        &self,
        user_id: &str,
        character_id: &str,
        new_score: NewAbilityScoreDto,
    ) -> Result<AbilityScoreDto, AbilityScoreError> {
        self.check_character_owner(user_id, character_id).await?;

        let ability = Ability::from_str(&new_score.ability)
            .ok_or_else(|| AbilityScoreError::UnknownAbility(new_score.ability.clone()))?;

        let score = AbilityScore {
            id: new_id(IdPrefix::AbilityScore),
            character_id: character_id.to_string(),
            ability,
            score: new_score.score,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let created = self
            .score_repo
            .create(&score)
            .await
            .map_err(|e| match e {
                crate::shared::error::AppError::Conflict(_) => AbilityScoreError::Duplicate,
                e => AbilityScoreError::Internal(e.to_string()),
            })?;

        Ok(AbilityScoreDto::from(created))
    }

    async fn update_ability_score(
        &self,
        user_id: &str,
        id: &str,
        score_value: i32,
    ) -> Result<AbilityScoreDto, AbilityScoreError> {
        let mut score = self
            .score_repo
            .find_by_id(id)
            .await
            .map_err(|e| AbilityScoreError::Internal(e.to_string()))?
            .ok_or(AbilityScoreError::NotFound)?;

        self.check_character_owner(user_id, &score.character_id)
            .await?;

        score.score = score_value;

        let updated = self
            .score_repo
            .update(&score)
            .await
            .map_err(|e| AbilityScoreError::Internal(e.to_string()))?;

        Ok(AbilityScoreDto::from(updated))
    }

    async fn delete_ability_score(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<(), AbilityScoreError> {
        let score = self
            .score_repo
            .find_by_id(id)
            .await
            .map_err(|e| AbilityScoreError::Internal(e.to_string()))?
            .ok_or(AbilityScoreError::NotFound)?;

        self.check_character_owner(user_id, &score.character_id)
            .await?;

        self.score_repo
            .delete(id)
            .await
            .map_err(|e| AbilityScoreError::Internal(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Character, MockAbilityScoreRepository, MockCharacterRepository};
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_score(id: &str, character_id: &str, value: i32) -> AbilityScore {
        AbilityScore {
            id: id.to_string(),
            character_id: character_id.to_string(),
            ability: Ability::Strength,
            score: value,
            created_at: Utc::now(),
            updated_at: Utc::now(),
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
    async fn test_get_ability_scores_returns_repository_rows() {
        let mut score_repo = MockAbilityScoreRepository::new();
        score_repo
            .expect_find_by_character_id()
            .with(eq("CHR-TEST1"))
            .returning(|character_id| {
                Ok(vec![
                    sample_score("ABL-1", character_id, 15),
                    sample_score("ABL-2", character_id, 8),
                ])
            });

        let service =
            AbilityScoreServiceImpl::new(Arc::new(score_repo), Arc::new(MockCharacterRepository::new()));
        let dtos = service
            .get_ability_scores_by_character_id("CHR-TEST1")
            .await
            .expect("listing should succeed");

        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].score, 15);
        assert_eq!(dtos[0].modifier, 2);
        assert_eq!(dtos[1].modifier, -1);
    }

    #[tokio::test]
    async fn test_insert_rejects_unknown_ability() {
        let mut character_repo = MockCharacterRepository::new();
        character_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(owned_character(id, "USR-TEST"))));

        let service = AbilityScoreServiceImpl::new(
            Arc::new(MockAbilityScoreRepository::new()),
            Arc::new(character_repo),
        );

        let result = service
            .insert_ability_score(
                "USR-TEST",
                "CHR-TEST",
                NewAbilityScoreDto {
                    ability: "luck".to_string(),
                    score: 12,
                },
            )
            .await;

        assert!(matches!(result, Err(AbilityScoreError::UnknownAbility(_))));
    }

    #[tokio::test]
    async fn test_insert_checks_ownership() {
        let mut character_repo = MockCharacterRepository::new();
        character_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(owned_character(id, "USR-SOMEONE-ELSE"))));

        let service = AbilityScoreServiceImpl::new(
            Arc::new(MockAbilityScoreRepository::new()),
            Arc::new(character_repo),
        );

        let result = service
            .insert_ability_score(
                "USR-TEST",
                "CHR-TEST",
                NewAbilityScoreDto {
                    ability: "strength".to_string(),
                    score: 12,
                },
            )
            .await;

        assert!(matches!(result, Err(AbilityScoreError::NotOwner)));
    }

    #[tokio::test]
    async fn test_update_forwards_new_value() {
        let mut score_repo = MockAbilityScoreRepository::new();
        score_repo
            .expect_find_by_id()
            .with(eq("ABL-TEST"))
            .returning(|id| Ok(Some(sample_score(id, "CHR-TEST", 10))));
        score_repo
            .expect_update()
            .withf(|score| score.score == 18)
            .returning(|score| Ok(score.clone()));

        let mut character_repo = MockCharacterRepository::new();
        character_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(owned_character(id, "USR-TEST"))));

        let service =
            AbilityScoreServiceImpl::new(Arc::new(score_repo), Arc::new(character_repo));
        let dto = service
            .update_ability_score("USR-TEST", "ABL-TEST", 18)
            .await
            .expect("update should succeed");

        assert_eq!(dto.score, 18);
        assert_eq!(dto.modifier, 4);
    }
}
