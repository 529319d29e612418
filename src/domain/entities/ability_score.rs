//! Ability score entity and repository trait.
//!
//! Maps to the `ability_scores` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// The six abilities, matching the database VARCHAR constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    /// Convert from database string representation.
    /// Accepts both full names and the conventional three-letter codes.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strength" | "str" => Some(Self::Strength),
            "dexterity" | "dex" => Some(Self::Dexterity),
            "constitution" | "con" => Some(Self::Constitution),
            "intelligence" | "int" => Some(Self::Intelligence),
            "wisdom" | "wis" => Some(Self::Wisdom),
            "charisma" | "cha" => Some(Self::Charisma),
            _ => None,
        }
    }

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    /// Conventional three-letter abbreviation.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents one ability score on a character sheet.
///
/// Maps to the `ability_scores` table:
/// - id: TEXT PRIMARY KEY (prefixed ID, `ABL-…`)
/// - character_id: TEXT NOT NULL REFERENCES characters(id)
/// - ability: VARCHAR(20) NOT NULL
/// - score: INTEGER NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// The modifier is derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityScore {
    /// Prefixed ID (primary key)
    pub id: String,

    /// Character this score belongs to
    pub character_id: String,

    /// Which ability this row scores
    pub ability: Ability,

    /// Raw score value (typically 1-30)
    pub score: i32,

    /// Row creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl AbilityScore {
    /// The derived ability modifier: `floor((score - 10) / 2)`.
    pub fn modifier(&self) -> i32 {
        (self.score - 10).div_euclid(2)
    }
}

/// Repository trait for AbilityScore data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AbilityScoreRepository: Send + Sync {
    /// Find an ability score by its prefixed ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<AbilityScore>, AppError>;

    /// Find all ability scores for a character.
    async fn find_by_character_id(
        &self,
        character_id: &str,
    ) -> Result<Vec<AbilityScore>, AppError>;

    /// Create a new ability score row.
    async fn create(&self, score: &AbilityScore) -> Result<AbilityScore, AppError>;

    /// Update an existing ability score row.
    async fn update(&self, score: &AbilityScore) -> Result<AbilityScore, AppError>;

    /// Delete an ability score row.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
