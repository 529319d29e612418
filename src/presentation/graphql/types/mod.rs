//! GraphQL object types wrapping the service DTOs.

mod ability_score;
mod character;
mod spell;
mod user;

pub use ability_score::AbilityScore;
pub use character::Character;
pub use spell::Spell;
pub use user::User;
