//! Root query object for GraphQL.

use async_graphql::{Context, FieldResult, Object, ID};
use std::sync::Arc;

use crate::application::services::{
    AbilityScoreService, AbilityScoreServiceImpl, CharacterError, CharacterService,
    CharacterServiceImpl, SpellService, SpellServiceImpl, UserError, UserService, UserServiceImpl,
};
use crate::infrastructure::repositories::{
    PgAbilityScoreRepository, PgCharacterRepository, PgSpellRepository, PgUserRepository,
};
use crate::presentation::graphql::schema::GraphQLContext;
use crate::presentation::graphql::types::{AbilityScore, Character, Spell, User};

/// Root query object for GraphQL
pub struct Query;

#[Object]
impl Query {
    /// Get a character by ID
    async fn character(&self, ctx: &Context<'_>, id: ID) -> FieldResult<Option<Character>> {
        let context = ctx.data::<GraphQLContext>()?;
        let service =
            CharacterServiceImpl::new(Arc::new(PgCharacterRepository::new(context.db.clone())));

        match service.get_character_by_id(&id).await {
            Ok(character) => Ok(Some(character.into())),
            Err(CharacterError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get all characters belonging to a user
    async fn characters(&self, ctx: &Context<'_>, user_id: ID) -> FieldResult<Vec<Character>> {
        let context = ctx.data::<GraphQLContext>()?;
        let service =
            CharacterServiceImpl::new(Arc::new(PgCharacterRepository::new(context.db.clone())));

        let characters = service.get_characters_by_user_id(&user_id).await?;
        Ok(characters.into_iter().map(|c| c.into()).collect())
    }

    /// Get a user by ID
    async fn user(&self, ctx: &Context<'_>, id: ID) -> FieldResult<Option<User>> {
        let context = ctx.data::<GraphQLContext>()?;
        let service = UserServiceImpl::new(Arc::new(PgUserRepository::new(context.db.clone())));

        match service.get_user(&id).await {
            Ok(user) => Ok(Some(user.into())),
            Err(UserError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get a character's ability scores
    async fn ability_scores(
        &self,
        ctx: &Context<'_>,
        character_id: ID,
    ) -> FieldResult<Vec<AbilityScore>> {
        let context = ctx.data::<GraphQLContext>()?;
        let service = AbilityScoreServiceImpl::new(
            Arc::new(PgAbilityScoreRepository::new(context.db.clone())),
            Arc::new(PgCharacterRepository::new(context.db.clone())),
        );

        let scores = service
            .get_ability_scores_by_character_id(&character_id)
            .await?;
        Ok(scores.into_iter().map(|s| s.into()).collect())
    }

    /// Get the spells known by a character
    async fn spells(&self, ctx: &Context<'_>, character_id: ID) -> FieldResult<Vec<Spell>> {
        let context = ctx.data::<GraphQLContext>()?;
        let service = SpellServiceImpl::new(
            Arc::new(PgSpellRepository::new(context.db.clone())),
            Arc::new(PgCharacterRepository::new(context.db.clone())),
        );

        let spells = service.get_spells_by_character_id(&character_id).await?;
        Ok(spells.into_iter().map(|s| s.into()).collect())
    }
}
