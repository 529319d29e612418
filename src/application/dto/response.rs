//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;
use utoipa::ToSchema;

use crate::application::services::{
    AbilityScoreDto, AuthTokens, CharacterDto, SpellDto, UserDto,
};
use crate::domain::User;

/// Authentication tokens response
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub token_type: String,
}

impl From<AuthTokens> for TokenResponse {
    fn from(tokens: AuthTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.expires_in,
            token_type: tokens.token_type,
        }
    }
}

/// Registration response (includes user and tokens)
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub token_type: String,
}

/// User response
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub created_at: String,
}

impl UserResponse {
    pub fn from_user(user: User, include_email: bool) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: if include_email { Some(user.email) } else { None },
            created_at: user.created_at.to_rfc3339(),
        }
    }

    pub fn from_dto(dto: UserDto, include_email: bool) -> Self {
        Self {
            id: dto.id,
            username: dto.username,
            email: if include_email { Some(dto.email) } else { None },
            created_at: dto.created_at,
        }
    }
}

/// Character response
#[derive(Debug, Serialize, ToSchema)]
pub struct CharacterResponse {
    pub id: String,
    pub player_id: String,
    pub name: String,
    pub race: String,
    pub subrace: Option<String>,
    pub experience: i32,
    pub level: i32,
    pub background: String,
    pub alignment: String,
    pub ideal: String,
    pub bond: String,
    pub flaw: String,
    pub personality_traits: Vec<String>,
    pub proficiencies: Vec<String>,
    pub languages: Vec<String>,
    pub max_health: i32,
    pub health: i32,
    pub is_dead: bool,
    pub game: String,
    pub created_at: String,
}

impl From<CharacterDto> for CharacterResponse {
    fn from(dto: CharacterDto) -> Self {
        Self {
            id: dto.id,
            player_id: dto.player_id,
            name: dto.name,
            race: dto.race,
            subrace: dto.subrace,
            experience: dto.experience,
            level: dto.level,
            background: dto.background,
            alignment: dto.alignment,
            ideal: dto.ideal,
            bond: dto.bond,
            flaw: dto.flaw,
            personality_traits: dto.personality_traits,
            proficiencies: dto.proficiencies,
            languages: dto.languages,
            max_health: dto.max_health,
            health: dto.health,
            is_dead: dto.is_dead,
            game: dto.game,
            created_at: dto.created_at,
        }
    }
}

/// Ability score response
#[derive(Debug, Serialize, ToSchema)]
pub struct AbilityScoreResponse {
    pub id: String,
    pub character_id: String,
    pub ability: String,
    pub score: i32,
    pub modifier: i32,
}

impl From<AbilityScoreDto> for AbilityScoreResponse {
    fn from(dto: AbilityScoreDto) -> Self {
        Self {
            id: dto.id,
            character_id: dto.character_id,
            ability: dto.ability,
            score: dto.score,
            modifier: dto.modifier,
        }
    }
}

/// Spell response
#[derive(Debug, Serialize, ToSchema)]
pub struct SpellResponse {
    pub id: String,
    pub character_id: String,
    pub name: String,
    pub level: i32,
    pub school: String,
    pub casting_time: String,
    pub range: String,
    pub duration: String,
    pub components: Vec<String>,
    pub description: String,
}

impl From<SpellDto> for SpellResponse {
    fn from(dto: SpellDto) -> Self {
        Self {
            id: dto.id,
            character_id: dto.character_id,
            name: dto.name,
            level: dto.level,
            school: dto.school,
            casting_time: dto.casting_time,
            range: dto.range,
            duration: dto.duration,
            components: dto.components,
            description: dto.description,
        }
    }
}
