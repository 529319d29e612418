//! Root mutation object for GraphQL.

use async_graphql::{Context, FieldResult, InputObject, Object, ID};
use std::sync::Arc;

use crate::application::services::{
    AbilityScoreService, AbilityScoreServiceImpl, CharacterService, CharacterServiceImpl,
    NewAbilityScoreDto, NewCharacterDto, NewSpellDto, SpellService, SpellServiceImpl,
    UpdateCharacterDto,
};
use crate::infrastructure::repositories::{
    PgAbilityScoreRepository, PgCharacterRepository, PgSpellRepository,
};
use crate::presentation::graphql::schema::GraphQLContext;
use crate::presentation::graphql::types::{AbilityScore, Character, Spell};

/// Input for creating a character sheet
#[derive(InputObject)]
pub struct NewCharacterInput {
    pub player_id: ID,
    pub name: String,
    pub race: String,
    pub subrace: Option<String>,
    #[graphql(default)]
    pub experience: i32,
    #[graphql(default = 1)]
    pub level: i32,
    #[graphql(default)]
    pub background: String,
    #[graphql(default)]
    pub alignment: String,
    #[graphql(default)]
    pub ideal: String,
    #[graphql(default)]
    pub bond: String,
    #[graphql(default)]
    pub flaw: String,
    #[graphql(default)]
    pub personality_traits: Vec<String>,
    #[graphql(default)]
    pub proficiencies: Vec<String>,
    #[graphql(default)]
    pub languages: Vec<String>,
    pub max_health: i32,
    pub health: i32,
    pub game: Option<String>,
}

/// Input for a partial character update
#[derive(InputObject)]
pub struct UpdateCharacterInput {
    pub id: ID,
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

/// Input for adding an ability score
#[derive(InputObject)]
pub struct NewAbilityScoreInput {
    pub character_id: ID,
    pub ability: String,
    pub score: i32,
}

/// Input for adding a spell
#[derive(InputObject)]
pub struct NewSpellInput {
    pub character_id: ID,
    pub name: String,
    #[graphql(default)]
    pub level: i32,
    pub school: Option<String>,
    #[graphql(default)]
    pub casting_time: String,
    #[graphql(default)]
    pub range: String,
    #[graphql(default)]
    pub duration: String,
    #[graphql(default)]
    pub components: Vec<String>,
    #[graphql(default)]
    pub description: String,
}

/// Root mutation object for GraphQL
pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a new character sheet
    async fn new_character(
        &self,
        ctx: &Context<'_>,
        input: NewCharacterInput,
    ) -> FieldResult<Character> {
        let context = ctx.data::<GraphQLContext>()?;
        let service =
            CharacterServiceImpl::new(Arc::new(PgCharacterRepository::new(context.db.clone())));

        let new_character = NewCharacterDto {
            name: input.name,
            race: input.race,
            subrace: input.subrace,
            experience: input.experience,
            level: input.level,
            background: input.background,
            alignment: input.alignment,
            ideal: input.ideal,
            bond: input.bond,
            flaw: input.flaw,
            personality_traits: input.personality_traits,
            proficiencies: input.proficiencies,
            languages: input.languages,
            max_health: input.max_health,
            health: input.health,
            game: input.game,
        };

        let character = service
            .insert_new_character(&input.player_id, new_character)
            .await?;
        Ok(character.into())
    }

    /// Apply a partial update to a character sheet
    async fn update_character(
        &self,
        ctx: &Context<'_>,
        input: UpdateCharacterInput,
    ) -> FieldResult<Character> {
        let context = ctx.data::<GraphQLContext>()?;
        let service =
            CharacterServiceImpl::new(Arc::new(PgCharacterRepository::new(context.db.clone())));

        // Resolve the owner first so the patch is applied on their behalf
        let existing = service.get_character_by_id(&input.id).await?;

        let update = UpdateCharacterDto {
            name: input.name,
            race: input.race,
            subrace: input.subrace,
            experience: input.experience,
            level: input.level,
            background: input.background,
            alignment: input.alignment,
            ideal: input.ideal,
            bond: input.bond,
            flaw: input.flaw,
            personality_traits: input.personality_traits,
            proficiencies: input.proficiencies,
            languages: input.languages,
            max_health: input.max_health,
            health: input.health,
            is_dead: input.is_dead,
        };

        let character = service
            .update_character(&existing.player_id, &input.id, update)
            .await?;
        Ok(character.into())
    }

    /// Add an ability score to a character
    async fn new_ability_score(
        &self,
        ctx: &Context<'_>,
        input: NewAbilityScoreInput,
    ) -> FieldResult<AbilityScore> {
        let context = ctx.data::<GraphQLContext>()?;
        let character_service =
            CharacterServiceImpl::new(Arc::new(PgCharacterRepository::new(context.db.clone())));
        let service = AbilityScoreServiceImpl::new(
            Arc::new(PgAbilityScoreRepository::new(context.db.clone())),
            Arc::new(PgCharacterRepository::new(context.db.clone())),
        );

        let character = character_service
            .get_character_by_id(&input.character_id)
            .await?;

        let score = service
            .insert_ability_score(
                &character.player_id,
                &input.character_id,
                NewAbilityScoreDto {
                    ability: input.ability,
                    score: input.score,
                },
            )
            .await?;
        Ok(score.into())
    }

    /// Add a spell to a character
    async fn new_spell(&self, ctx: &Context<'_>, input: NewSpellInput) -> FieldResult<Spell> {
        let context = ctx.data::<GraphQLContext>()?;
        let character_service =
            CharacterServiceImpl::new(Arc::new(PgCharacterRepository::new(context.db.clone())));
        let service = SpellServiceImpl::new(
            Arc::new(PgSpellRepository::new(context.db.clone())),
            Arc::new(PgCharacterRepository::new(context.db.clone())),
        );

        let character = character_service
            .get_character_by_id(&input.character_id)
            .await?;

        let new_spell = NewSpellDto {
            name: input.name,
            level: input.level,
            school: input.school,
            casting_time: input.casting_time,
            range: input.range,
            duration: input.duration,
            components: input.components,
            description: input.description,
        };

        let spell = service
            .insert_new_spell(&character.player_id, &input.character_id, new_spell)
            .await?;
        Ok(spell.into())
    }
}
