//! OpenAPI Documentation
//!
//! Generates the OpenAPI document for the REST surface and mounts the
//! Swagger UI at `/api`.

use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use crate::application::dto::request::{
    CreateAbilityScoreRequest, CreateCharacterRequest, CreateSpellRequest, LoginRequest,
    RefreshTokenRequest, RegisterRequest, UpdateAbilityScoreRequest, UpdateCharacterRequest,
    UpdateSpellRequest, UpdateUserRequest,
};
use crate::application::dto::response::{
    AbilityScoreResponse, CharacterResponse, RegisterResponse, SpellResponse, TokenResponse,
    UserResponse,
};
use crate::presentation::http::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Charsheet Server API",
        version = "0.1.0",
        description = "Tabletop RPG character sheet management API",
    ),
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::refresh_token,
        handlers::auth::logout,
        handlers::user::get_current_user,
        handlers::user::update_current_user,
        handlers::user::delete_current_user,
        handlers::user::get_user,
        handlers::character::get_my_characters,
        handlers::character::create_character,
        handlers::character::get_character,
        handlers::character::update_character,
        handlers::character::delete_character,
        handlers::ability_score::get_character_ability_scores,
        handlers::ability_score::create_ability_score,
        handlers::ability_score::get_ability_score,
        handlers::ability_score::update_ability_score,
        handlers::ability_score::delete_ability_score,
        handlers::spell::get_character_spells,
        handlers::spell::create_spell,
        handlers::spell::get_spell,
        handlers::spell::update_spell,
        handlers::spell::delete_spell,
        handlers::health::health_check,
        handlers::health::liveness,
        handlers::health::readiness,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            RefreshTokenRequest,
            UpdateUserRequest,
            CreateCharacterRequest,
            UpdateCharacterRequest,
            CreateAbilityScoreRequest,
            UpdateAbilityScoreRequest,
            CreateSpellRequest,
            UpdateSpellRequest,
            RegisterResponse,
            TokenResponse,
            UserResponse,
            CharacterResponse,
            AbilityScoreResponse,
            SpellResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication operations"),
        (name = "users", description = "Player account operations"),
        (name = "characters", description = "Character sheet operations"),
        (name = "ability-scores", description = "Ability score operations"),
        (name = "spells", description = "Spell operations"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().expect("document should serialize");

        assert!(json.contains("/api/v1/characters"));
        assert!(json.contains("/api/v1/auth/register"));
        assert!(json.contains("bearer_auth"));
    }
}
