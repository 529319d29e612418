//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! This module provides concrete implementations of the repository traits
//! defined in the domain layer. Each repository handles data access for
//! a specific entity type.
//!
//! ## Available Repositories
//!
//! - **UserRepository** - Player account management
//! - **SessionRepository** - Refresh token sessions
//! - **CharacterRepository** - Character sheet CRUD
//! - **AbilityScoreRepository** - Per-character ability scores
//! - **SpellRepository** - Per-character spells

pub mod ability_score_repository;
pub mod character_repository;
pub mod session_repository;
pub mod spell_repository;
pub mod user_repository;

// Re-export repository structs for convenience
pub use ability_score_repository::PgAbilityScoreRepository;
pub use character_repository::PgCharacterRepository;
pub use session_repository::PgSessionRepository;
pub use spell_repository::PgSpellRepository;
pub use user_repository::PgUserRepository;
