//! GraphQL representation of a character sheet.

use async_graphql::{Context, FieldResult, Object, ID};
use std::sync::Arc;

use crate::application::services::{
    AbilityScoreService, AbilityScoreServiceImpl, CharacterDto, SpellService, SpellServiceImpl,
};
use crate::infrastructure::repositories::{
    PgAbilityScoreRepository, PgCharacterRepository, PgSpellRepository,
};
use crate::presentation::graphql::schema::GraphQLContext;

use super::{AbilityScore, Spell};

/// GraphQL representation of a Character
#[derive(Clone)]
pub struct Character {
    pub inner: CharacterDto,
}

impl From<CharacterDto> for Character {
    fn from(character: CharacterDto) -> Self {
        Self { inner: character }
    }
}

#[Object]
impl Character {
    /// The unique identifier for the character
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    /// The owning player's user ID
    async fn player_id(&self) -> ID {
        ID(self.inner.player_id.clone())
    }

    /// The character's name
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// The character's race
    async fn race(&self) -> &str {
        &self.inner.race
    }

    /// The character's subrace, if any
    async fn subrace(&self) -> Option<&str> {
        self.inner.subrace.as_deref()
    }

    /// Accumulated experience points
    async fn experience(&self) -> i32 {
        self.inner.experience
    }

    /// Character level
    async fn level(&self) -> i32 {
        self.inner.level
    }

    /// Background
    async fn background(&self) -> &str {
        &self.inner.background
    }

    /// Alignment
    async fn alignment(&self) -> &str {
        &self.inner.alignment
    }

    /// Ideal the character lives by
    async fn ideal(&self) -> &str {
        &self.inner.ideal
    }

    /// Bond to people or places
    async fn bond(&self) -> &str {
        &self.inner.bond
    }

    /// Character flaw
    async fn flaw(&self) -> &str {
        &self.inner.flaw
    }

    /// Personality traits
    async fn personality_traits(&self) -> &[String] {
        &self.inner.personality_traits
    }

    /// Proficiencies
    async fn proficiencies(&self) -> &[String] {
        &self.inner.proficiencies
    }

    /// Known languages
    async fn languages(&self) -> &[String] {
        &self.inner.languages
    }

    /// Maximum hit points
    async fn max_health(&self) -> i32 {
        self.inner.max_health
    }

    /// Current hit points
    async fn health(&self) -> i32 {
        self.inner.health
    }

    /// Whether the character has died
    async fn is_dead(&self) -> bool {
        self.inner.is_dead
    }

    /// Game system this sheet belongs to
    async fn game(&self) -> &str {
        &self.inner.game
    }

    /// When the sheet was created
    async fn created_at(&self) -> &str {
        &self.inner.created_at
    }

    /// The character's ability scores
    async fn ability_scores(&self, ctx: &Context<'_>) -> FieldResult<Vec<AbilityScore>> {
        let context = ctx.data::<GraphQLContext>()?;
        let service = AbilityScoreServiceImpl::new(
            Arc::new(PgAbilityScoreRepository::new(context.db.clone())),
            Arc::new(PgCharacterRepository::new(context.db.clone())),
        );

        let scores = service
            .get_ability_scores_by_character_id(&self.inner.id)
            .await?;
        Ok(scores.into_iter().map(|s| s.into()).collect())
    }

    /// The spells known by this character
    async fn spells(&self, ctx: &Context<'_>) -> FieldResult<Vec<Spell>> {
        let context = ctx.data::<GraphQLContext>()?;
        let service = SpellServiceImpl::new(
            Arc::new(PgSpellRepository::new(context.db.clone())),
            Arc::new(PgCharacterRepository::new(context.db.clone())),
        );

        let spells = service.get_spells_by_character_id(&self.inner.id).await?;
        Ok(spells.into_iter().map(|s| s.into()).collect())
    }
}
