//! GraphQL representation of a player account.

use async_graphql::{Context, FieldResult, Object, ID};
use std::sync::Arc;

use crate::application::services::{CharacterService, CharacterServiceImpl, UserDto};
use crate::infrastructure::repositories::PgCharacterRepository;
use crate::presentation::graphql::schema::GraphQLContext;

use super::Character;

/// GraphQL representation of a User
#[derive(Clone)]
pub struct User {
    pub inner: UserDto,
}

impl From<UserDto> for User {
    fn from(user: UserDto) -> Self {
        Self { inner: user }
    }
}

#[Object]
impl User {
    /// The unique identifier for the user
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    /// The user's name
    async fn username(&self) -> &str {
        &self.inner.username
    }

    /// When the account was created
    async fn created_at(&self) -> &str {
        &self.inner.created_at
    }

    /// Characters owned by this user
    async fn characters(&self, ctx: &Context<'_>) -> FieldResult<Vec<Character>> {
        let context = ctx.data::<GraphQLContext>()?;
        let service =
            CharacterServiceImpl::new(Arc::new(PgCharacterRepository::new(context.db.clone())));

        let characters = service.get_characters_by_user_id(&self.inner.id).await?;
        Ok(characters.into_iter().map(|c| c.into()).collect())
    }
}
