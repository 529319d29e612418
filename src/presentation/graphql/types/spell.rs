//! GraphQL representation of a spell.

use async_graphql::{Object, ID};

use crate::application::services::SpellDto;

/// GraphQL representation of a Spell
#[derive(Clone)]
pub struct Spell {
    pub inner: SpellDto,
}

impl From<SpellDto> for Spell {
    fn from(spell: SpellDto) -> Self {
        Self { inner: spell }
    }
}

#[Object]
impl Spell {
    /// The unique identifier for the spell
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    /// The character that knows this spell
    async fn character_id(&self) -> ID {
        ID(self.inner.character_id.clone())
    }

    /// The spell's name
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Spell level (0 = cantrip)
    async fn level(&self) -> i32 {
        self.inner.level
    }

    /// School of magic
    async fn school(&self) -> &str {
        &self.inner.school
    }

    /// Casting time
    async fn casting_time(&self) -> &str {
        &self.inner.casting_time
    }

    /// Range
    async fn range(&self) -> &str {
        &self.inner.range
    }

    /// Duration
    async fn duration(&self) -> &str {
        &self.inner.duration
    }

    /// Components required
    async fn components(&self) -> &[String] {
        &self.inner.components
    }

    /// Rules text
    async fn description(&self) -> &str {
        &self.inner.description
    }
}
