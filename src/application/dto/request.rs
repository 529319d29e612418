//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Refresh token request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Update user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

/// Create character request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCharacterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Race must be 1-50 characters"))]
    pub race: String,

    #[validate(length(max = 50, message = "Subrace must be at most 50 characters"))]
    pub subrace: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Experience cannot be negative"))]
    pub experience: i32,

    #[serde(default = "default_level")]
    #[validate(range(min = 1, max = 20, message = "Level must be 1-20"))]
    pub level: i32,

    #[serde(default)]
    pub background: String,

    #[serde(default)]
    pub alignment: String,

    #[serde(default)]
    pub ideal: String,

    #[serde(default)]
    pub bond: String,

    #[serde(default)]
    pub flaw: String,

    #[serde(default)]
    pub personality_traits: Vec<String>,

    #[serde(default)]
    pub proficiencies: Vec<String>,

    #[serde(default)]
    pub languages: Vec<String>,

    #[validate(range(min = 1, message = "Max health must be positive"))]
    pub max_health: i32,

    #[validate(range(min = 0, message = "Health cannot be negative"))]
    pub health: i32,

    pub game: Option<String>,
}

fn default_level() -> i32 {
    1
}

/// Update character request (partial)
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCharacterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Race must be 1-50 characters"))]
    pub race: Option<String>,

    pub subrace: Option<String>,

    #[validate(range(min = 0, message = "Experience cannot be negative"))]
    pub experience: Option<i32>,

    #[validate(range(min = 1, max = 20, message = "Level must be 1-20"))]
    pub level: Option<i32>,

    pub background: Option<String>,
    pub alignment: Option<String>,
    pub ideal: Option<String>,
    pub bond: Option<String>,
    pub flaw: Option<String>,
    pub personality_traits: Option<Vec<String>>,
    pub proficiencies: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,

    #[validate(range(min = 1, message = "Max health must be positive"))]
    pub max_health: Option<i32>,

    #[validate(range(min = 0, message = "Health cannot be negative"))]
    pub health: Option<i32>,

    pub is_dead: Option<bool>,
}

/// Create ability score request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAbilityScoreRequest {
    #[validate(length(min = 1, message = "Ability is required"))]
    pub ability: String,

    #[validate(range(min = 1, max = 30, message = "Score must be 1-30"))]
    pub score: i32,
}

/// Update ability score request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAbilityScoreRequest {
    #[validate(range(min = 1, max = 30, message = "Score must be 1-30"))]
    pub score: i32,
}

/// Create spell request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSpellRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(range(min = 0, max = 9, message = "Level must be 0-9"))]
    pub level: i32,

    pub school: Option<String>,

    #[serde(default)]
    pub casting_time: String,

    #[serde(default)]
    pub range: String,

    #[serde(default)]
    pub duration: String,

    #[serde(default)]
    pub components: Vec<String>,

    #[serde(default)]
    pub description: String,
}

/// Update spell request (partial)
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateSpellRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(range(min = 0, max = 9, message = "Level must be 0-9"))]
    pub level: Option<i32>,

    pub school: Option<String>,
    pub casting_time: Option<String>,
    pub range: Option<String>,
    pub duration: Option<String>,
    pub components: Option<Vec<String>>,
    pub description: Option<String>,
}
