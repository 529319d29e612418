//! Spell entity and repository trait.
//!
//! Maps to the `spells` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Schools of magic, matching the database VARCHAR constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MagicSchool {
    Abjuration,
    Conjuration,
    Divination,
    Enchantment,
    #[default]
    Evocation,
    Illusion,
    Necromancy,
    Transmutation,
}

impl MagicSchool {
    /// Convert from database string representation.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "abjuration" => Self::Abjuration,
            "conjuration" => Self::Conjuration,
            "divination" => Self::Divination,
            "enchantment" => Self::Enchantment,
            "illusion" => Self::Illusion,
            "necromancy" => Self::Necromancy,
            "transmutation" => Self::Transmutation,
            _ => Self::Evocation,
        }
    }

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abjuration => "abjuration",
            Self::Conjuration => "conjuration",
            Self::Divination => "divination",
            Self::Enchantment => "enchantment",
            Self::Evocation => "evocation",
            Self::Illusion => "illusion",
            Self::Necromancy => "necromancy",
            Self::Transmutation => "transmutation",
        }
    }
}

impl std::fmt::Display for MagicSchool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a spell known by a character.
///
/// Maps to the `spells` table:
/// - id: TEXT PRIMARY KEY (prefixed ID, `SPL-…`)
/// - character_id: TEXT NOT NULL REFERENCES characters(id)
/// - name: VARCHAR(100) NOT NULL
/// - level: INTEGER NOT NULL (0 = cantrip)
/// - school: VARCHAR(20) NOT NULL
/// - casting_time: VARCHAR(50) NOT NULL
/// - range: VARCHAR(50) NOT NULL
/// - duration: VARCHAR(50) NOT NULL
/// - components: TEXT[] NOT NULL
/// - description: TEXT NOT NULL DEFAULT ''
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    /// Prefixed ID (primary key)
    pub id: String,

    /// Character that knows this spell
    pub character_id: String,

    /// Spell name (1-100 characters)
    pub name: String,

    /// Spell level, 0-9 (0 = cantrip)
    pub level: i32,

    /// School of magic
    pub school: MagicSchool,

    /// Casting time (e.g. "1 action")
    pub casting_time: String,

    /// Range (e.g. "60 feet")
    pub range: String,

    /// Duration (e.g. "Instantaneous")
    pub duration: String,

    /// Components required ("V", "S", "M")
    pub components: Vec<String>,

    /// Rules text
    pub description: String,

    /// Row creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Spell {
    /// Check if this spell is a cantrip (level 0).
    pub fn is_cantrip(&self) -> bool {
        self.level == 0
    }

    /// Check if the spell requires a material component.
    pub fn requires_material(&self) -> bool {
        self.components.iter().any(|c| c.eq_ignore_ascii_case("M"))
    }
}

impl Default for Spell {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            character_id: String::new(),
            name: String::new(),
            level: 0,
            school: MagicSchool::default(),
            casting_time: String::new(),
            range: String::new(),
            duration: String::new(),
            components: Vec::new(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Repository trait for Spell data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpellRepository: Send + Sync {
    /// Find a spell by its prefixed ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<Spell>, AppError>;

    /// Find all spells known by a character.
    async fn find_by_character_id(&self, character_id: &str) -> Result<Vec<Spell>, AppError>;

    /// Create a new spell row.
    async fn create(&self, spell: &Spell) -> Result<Spell, AppError>;

    /// Update an existing spell row.
    async fn update(&self, spell: &Spell) -> Result<Spell, AppError>;

    /// Delete a spell row.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_spell() -> Spell {
        Spell {
            id: "SPL-test1".to_string(),
            character_id: "CHR-test1".to_string(),
            name: "Fire Bolt".to_string(),
            level: 0,
            school: MagicSchool::Evocation,
            casting_time: "1 action".to_string(),
            range: "120 feet".to_string(),
            duration: "Instantaneous".to_string(),
            components: vec!["V".to_string(), "S".to_string()],
            description: "Hurl a mote of fire.".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_spell_is_cantrip_at_level_zero() {
        let spell = create_test_spell();
        assert!(spell.is_cantrip());
    }

    #[test]
    fn test_spell_is_not_cantrip_above_level_zero() {
        let mut spell = create_test_spell();
        spell.level = 3;
        assert!(!spell.is_cantrip());
    }

    #[test]
    fn test_spell_requires_material() {
        let mut spell = create_test_spell();
        assert!(!spell.requires_material());

        spell.components.push("M".to_string());
        assert!(spell.requires_material());
    }

    #[test]
    fn test_magic_school_from_str_unknown_defaults_to_evocation() {
        assert_eq!(MagicSchool::from_str("chronomancy"), MagicSchool::Evocation);
        assert_eq!(MagicSchool::from_str(""), MagicSchool::Evocation);
    }

    #[test]
    fn test_magic_school_as_str_roundtrip() {
        let schools = vec![
            MagicSchool::Abjuration,
            MagicSchool::Conjuration,
            MagicSchool::Divination,
            MagicSchool::Enchantment,
            MagicSchool::Evocation,
            MagicSchool::Illusion,
            MagicSchool::Necromancy,
            MagicSchool::Transmutation,
        ];

        for school in schools {
            let s = school.as_str();
            assert_eq!(MagicSchool::from_str(s), school, "Roundtrip failed for {:?}", school);
        }
    }

    #[test]
    fn test_spell_serialization() {
        let spell = create_test_spell();
        let serialized = serde_json::to_string(&spell).expect("Failed to serialize spell");

        assert!(serialized.contains("\"school\":\"evocation\""));
        assert!(serialized.contains("\"components\":[\"V\",\"S\"]"));
    }
}
