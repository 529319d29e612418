//! GraphQL representation of an ability score.

use async_graphql::{Object, ID};

use crate::application::services::AbilityScoreDto;

/// GraphQL representation of an AbilityScore
#[derive(Clone)]
pub struct AbilityScore {
    pub inner: AbilityScoreDto,
}

impl From<AbilityScoreDto> for AbilityScore {
    fn from(score: AbilityScoreDto) -> Self {
        Self { inner: score }
    }
}

#[Object]
impl AbilityScore {
    /// The unique identifier for the ability score
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    /// The character this score belongs to
    async fn character_id(&self) -> ID {
        ID(self.inner.character_id.clone())
    }

    /// Which ability this row scores
    async fn ability(&self) -> &str {
        &self.inner.ability
    }

    /// Raw score value
    async fn score(&self) -> i32 {
        self.inner.score
    }

    /// The derived ability modifier
    async fn modifier(&self) -> i32 {
        self.inner.modifier
    }
}
