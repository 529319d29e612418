//! # Domain Entities
//!
//! Core domain entities representing the main records in the character
//! sheet system. All entities map directly to their corresponding
//! database tables.
//!
//! ## Core Entities
//!
//! - **User**: Player account with authentication data
//! - **Character**: A character sheet owned by a player
//! - **AbilityScore**: One of the six ability scores on a sheet
//! - **Spell**: A spell known by a character
//!
//! ## Supporting Entities
//!
//! - **Session**: User sessions for JWT refresh token management
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer,
//! following the dependency inversion principle.

mod ability_score;
mod character;
mod session;
mod spell;
mod user;

// Re-export User entity and related types
pub use user::{User, UserRepository};

// Re-export Character entity and related types
pub use character::{Character, CharacterRepository, GameSystem};

// Re-export AbilityScore entity and related types
pub use ability_score::{Ability, AbilityScore, AbilityScoreRepository};

// Re-export Spell entity and related types
pub use spell::{MagicSchool, Spell, SpellRepository};

// Re-export Session entity and related types
pub use session::{Session, SessionRepository};

#[cfg(test)]
pub use ability_score::MockAbilityScoreRepository;
#[cfg(test)]
pub use character::MockCharacterRepository;
#[cfg(test)]
pub use session::MockSessionRepository;
#[cfg(test)]
pub use spell::MockSpellRepository;
#[cfg(test)]
pub use user::MockUserRepository;
