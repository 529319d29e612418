//! Character entity and repository trait.
//!
//! Maps to the `characters` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Game systems a sheet can belong to, matching the database VARCHAR constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameSystem {
    /// Dungeons & Dragons 5th edition
    #[default]
    Dd5,
    /// Pathfinder
    Pathfinder,
    /// House-ruled / custom system
    Homebrew,
}

impl GameSystem {
    /// Convert from database string representation.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pathfinder" => Self::Pathfinder,
            "homebrew" => Self::Homebrew,
            _ => Self::Dd5,
        }
    }

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dd5 => "dd5",
            Self::Pathfinder => "pathfinder",
            Self::Homebrew => "homebrew",
        }
    }
}

impl std::fmt::Display for GameSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a character sheet.
///
/// Maps to the `characters` table:
/// - id: TEXT PRIMARY KEY (prefixed ID, `CHR-…`)
/// - player_id: TEXT NOT NULL REFERENCES users(id)
/// - name: VARCHAR(100) NOT NULL
/// - race: VARCHAR(50) NOT NULL
/// - subrace: VARCHAR(50) NULL
/// - experience: INTEGER NOT NULL DEFAULT 0
/// - level: INTEGER NOT NULL DEFAULT 1
/// - background: VARCHAR(100) NOT NULL DEFAULT ''
/// - alignment: VARCHAR(50) NOT NULL DEFAULT ''
/// - ideal, bond, flaw: TEXT NOT NULL DEFAULT ''
/// - personality_traits, proficiencies, languages: TEXT[] NOT NULL
/// - max_health, health: INTEGER NOT NULL
/// - is_dead: BOOLEAN NOT NULL DEFAULT FALSE
/// - game: VARCHAR(20) NOT NULL DEFAULT 'dd5'
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Prefixed ID (primary key)
    pub id: String,

    /// Owning user's ID
    pub player_id: String,

    /// Character name (1-100 characters)
    pub name: String,

    /// Race (e.g. "Halfling")
    pub race: String,

    /// Subrace (e.g. "Lightfoot"), if any
    pub subrace: Option<String>,

    /// Accumulated experience points
    pub experience: i32,

    /// Character level
    pub level: i32,

    /// Background (e.g. "Hermit")
    pub background: String,

    /// Alignment (e.g. "Neutral Good")
    pub alignment: String,

    /// Ideal the character lives by
    pub ideal: String,

    /// Bond to people or places
    pub bond: String,

    /// Character flaw
    pub flaw: String,

    /// Personality traits
    pub personality_traits: Vec<String>,

    /// Proficiencies (skills, tools, weapons)
    pub proficiencies: Vec<String>,

    /// Known languages
    pub languages: Vec<String>,

    /// Maximum hit points
    pub max_health: i32,

    /// Current hit points
    pub health: i32,

    /// Whether the character has died
    pub is_dead: bool,

    /// Game system this sheet belongs to
    pub game: GameSystem,

    /// Sheet creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Character {
    /// Check if the character is alive and above zero hit points.
    pub fn is_alive(&self) -> bool {
        !self.is_dead && self.health > 0
    }

    /// Check if the character is at half hit points or below.
    pub fn is_bloodied(&self) -> bool {
        self.max_health > 0 && self.health * 2 <= self.max_health
    }

    /// Check if the character knows the given language (case-insensitive).
    pub fn knows_language(&self, language: &str) -> bool {
        self.languages
            .iter()
            .any(|l| l.eq_ignore_ascii_case(language))
    }
}

impl Default for Character {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            player_id: String::new(),
            name: String::new(),
            race: String::new(),
            subrace: None,
            experience: 0,
            level: 1,
            background: String::new(),
            alignment: String::new(),
            ideal: String::new(),
            bond: String::new(),
            flaw: String::new(),
            personality_traits: Vec::new(),
            proficiencies: Vec::new(),
            languages: Vec::new(),
            max_health: 0,
            health: 0,
            is_dead: false,
            game: GameSystem::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Repository trait for Character data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Find a character by its prefixed ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<Character>, AppError>;

    /// Find all characters belonging to a player.
    async fn find_by_player_id(&self, player_id: &str) -> Result<Vec<Character>, AppError>;

    /// Create a new character sheet.
    async fn create(&self, character: &Character) -> Result<Character, AppError>;

    /// Update an existing character sheet.
    async fn update(&self, character: &Character) -> Result<Character, AppError>;

    /// Delete a character sheet.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    // ==========================================================================
    // GameSystem Tests
    // ==========================================================================

    #[test]
    fn test_game_system_default_is_dd5() {
        assert_eq!(GameSystem::default(), GameSystem::Dd5);
    }

    #[test_case("dd5", GameSystem::Dd5; "dd5 lowercase")]
    #[test_case("DD5", GameSystem::Dd5; "dd5 uppercase")]
    #[test_case("pathfinder", GameSystem::Pathfinder; "pathfinder lowercase")]
    #[test_case("PATHFINDER", GameSystem::Pathfinder; "pathfinder uppercase")]
    #[test_case("homebrew", GameSystem::Homebrew; "homebrew lowercase")]
    fn test_game_system_from_str(input: &str, expected: GameSystem) {
        assert_eq!(GameSystem::from_str(input), expected);
    }

    #[test]
    fn test_game_system_from_str_unknown_defaults_to_dd5() {
        assert_eq!(GameSystem::from_str("unknown"), GameSystem::Dd5);
        assert_eq!(GameSystem::from_str(""), GameSystem::Dd5);
    }

    #[test]
    fn test_game_system_as_str_roundtrip() {
        let systems = vec![GameSystem::Dd5, GameSystem::Pathfinder, GameSystem::Homebrew];

        for system in systems {
            let s = system.as_str();
            let parsed = GameSystem::from_str(s);
            assert_eq!(parsed, system, "Roundtrip failed for {:?}", system);
        }
    }

    #[test]
    fn test_game_system_display() {
        assert_eq!(format!("{}", GameSystem::Dd5), "dd5");
        assert_eq!(format!("{}", GameSystem::Pathfinder), "pathfinder");
    }

    // ==========================================================================
    // Character Entity Tests
    // ==========================================================================

    fn create_test_character() -> Character {
        Character {
            id: "CHR-test1".to_string(),
            player_id: "USR-test1".to_string(),
            name: "Test character".to_string(),
            race: "Halfling".to_string(),
            subrace: Some("Lightfoot".to_string()),
            experience: 0,
            level: 1,
            background: "Hermit".to_string(),
            alignment: "Neutral Good".to_string(),
            ideal: String::new(),
            bond: String::new(),
            flaw: String::new(),
            personality_traits: Vec::new(),
            proficiencies: Vec::new(),
            languages: vec!["Common".to_string(), "Dwarvish".to_string()],
            max_health: 15,
            health: 15,
            is_dead: false,
            game: GameSystem::Dd5,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_character_default() {
        let character = Character::default();

        assert!(character.id.is_empty());
        assert_eq!(character.level, 1);
        assert_eq!(character.experience, 0);
        assert!(!character.is_dead);
        assert_eq!(character.game, GameSystem::Dd5);
        assert!(character.languages.is_empty());
    }

    #[test]
    fn test_character_is_alive_at_full_health() {
        let character = create_test_character();
        assert!(character.is_alive());
    }

    #[test]
    fn test_character_is_not_alive_when_dead() {
        let mut character = create_test_character();
        character.is_dead = true;
        assert!(!character.is_alive());
    }

    #[test]
    fn test_character_is_not_alive_at_zero_health() {
        let mut character = create_test_character();
        character.health = 0;
        assert!(!character.is_alive());
    }

    #[test]
    fn test_character_is_bloodied_at_half_health() {
        let mut character = create_test_character();
        character.health = 7; // max 15
        assert!(character.is_bloodied());
    }

    #[test]
    fn test_character_is_not_bloodied_above_half_health() {
        let mut character = create_test_character();
        character.health = 8; // max 15
        assert!(!character.is_bloodied());
    }

    #[test]
    fn test_character_knows_language_case_insensitive() {
        let character = create_test_character();

        assert!(character.knows_language("Common"));
        assert!(character.knows_language("dwarvish"));
        assert!(!character.knows_language("Elvish"));
    }

    #[test]
    fn test_character_serialization_includes_arrays() {
        let character = create_test_character();

        let serialized =
            serde_json::to_string(&character).expect("Failed to serialize character");

        assert!(serialized.contains("\"languages\":[\"Common\",\"Dwarvish\"]"));
        assert!(serialized.contains("\"game\":\"dd5\""));
        assert!(serialized.contains("\"subrace\":\"Lightfoot\""));
    }
}
