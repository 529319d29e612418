//! Character Handlers

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{CreateCharacterRequest, UpdateCharacterRequest};
use crate::application::dto::response::CharacterResponse;
use crate::application::services::{
    CharacterError, CharacterService, CharacterServiceImpl, NewCharacterDto, UpdateCharacterDto,
};
use crate::infrastructure::repositories::PgCharacterRepository;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn character_service(state: &AppState) -> CharacterServiceImpl<PgCharacterRepository> {
    CharacterServiceImpl::new(Arc::new(PgCharacterRepository::new(state.db.clone())))
}

fn map_character_error(e: CharacterError) -> AppError {
    match e {
        CharacterError::NotFound => AppError::NotFound("Character not found".into()),
        CharacterError::NotOwner => {
            AppError::Forbidden("Character belongs to another player".into())
        }
        e => AppError::Internal(e.to_string()),
    }
}

/// List the authenticated user's characters
#[utoipa::path(
    get,
    path = "/api/v1/characters",
    tag = "characters",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The user's characters", body = [CharacterResponse])
    )
)]
pub async fn get_my_characters(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<CharacterResponse>>, AppError> {
    let characters = character_service(&state)
        .get_characters_by_user_id(&auth.user_id)
        .await
        .map_err(map_character_error)?;

    let responses: Vec<CharacterResponse> =
        characters.into_iter().map(CharacterResponse::from).collect();

    Ok(Json(responses))
}

/// Create a new character sheet
#[utoipa::path(
    post,
    path = "/api/v1/characters",
    tag = "characters",
    security(("bearer_auth" = [])),
    request_body = CreateCharacterRequest,
    responses(
        (status = 201, description = "Character created", body = CharacterResponse),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_character(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<CreateCharacterRequest>,
) -> Result<(StatusCode, Json<CharacterResponse>), AppError> {
    // Validate request
    body.validate().map_err(validation_error)?;

    let new_character = NewCharacterDto {
        name: body.name,
        race: body.race,
        subrace: body.subrace,
        experience: body.experience,
        level: body.level,
        background: body.background,
        alignment: body.alignment,
        ideal: body.ideal,
        bond: body.bond,
        flaw: body.flaw,
        personality_traits: body.personality_traits,
        proficiencies: body.proficiencies,
        languages: body.languages,
        max_health: body.max_health,
        health: body.health,
        game: body.game,
    };

    let character = character_service(&state)
        .insert_new_character(&auth.user_id, new_character)
        .await
        .map_err(map_character_error)?;

    Ok((StatusCode::CREATED, Json(CharacterResponse::from(character))))
}

/// Get a character by ID
#[utoipa::path(
    get,
    path = "/api/v1/characters/{character_id}",
    tag = "characters",
    security(("bearer_auth" = [])),
    params(
        ("character_id" = String, Path, description = "Prefixed character ID (CHR-…)")
    ),
    responses(
        (status = 200, description = "The character", body = CharacterResponse),
        (status = 404, description = "Character not found")
    )
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(character_id): Path<String>,
) -> Result<Json<CharacterResponse>, AppError> {
    let character = character_service(&state)
        .get_character_by_id(&character_id)
        .await
        .map_err(map_character_error)?;

    Ok(Json(CharacterResponse::from(character)))
}

/// Update a character sheet
#[utoipa::path(
    patch,
    path = "/api/v1/characters/{character_id}",
    tag = "characters",
    security(("bearer_auth" = [])),
    params(
        ("character_id" = String, Path, description = "Prefixed character ID (CHR-…)")
    ),
    request_body = UpdateCharacterRequest,
    responses(
        (status = 200, description = "Updated character", body = CharacterResponse),
        (status = 403, description = "Character belongs to another player"),
        (status = 404, description = "Character not found")
    )
)]
pub async fn update_character(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(character_id): Path<String>,
    Json(body): Json<UpdateCharacterRequest>,
) -> Result<Json<CharacterResponse>, AppError> {
    // Validate request
    body.validate().map_err(validation_error)?;

    let update = UpdateCharacterDto {
        name: body.name,
        race: body.race,
        subrace: body.subrace,
        experience: body.experience,
        level: body.level,
        background: body.background,
        alignment: body.alignment,
        ideal: body.ideal,
        bond: body.bond,
        flaw: body.flaw,
        personality_traits: body.personality_traits,
        proficiencies: body.proficiencies,
        languages: body.languages,
        max_health: body.max_health,
        health: body.health,
        is_dead: body.is_dead,
    };

    let character = character_service(&state)
        .update_character(&auth.user_id, &character_id, update)
        .await
        .map_err(map_character_error)?;

    Ok(Json(CharacterResponse::from(character)))
}

/// Delete a character sheet
#[utoipa::path(
    delete,
    path = "/api/v1/characters/{character_id}",
    tag = "characters",
    security(("bearer_auth" = [])),
    params(
        ("character_id" = String, Path, description = "Prefixed character ID (CHR-…)")
    ),
    responses(
        (status = 204, description = "Character deleted"),
        (status = 403, description = "Character belongs to another player"),
        (status = 404, description = "Character not found")
    )
)]
pub async fn delete_character(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(character_id): Path<String>,
) -> Result<StatusCode, AppError> {
    character_service(&state)
        .delete_character(&auth.user_id, &character_id)
        .await
        .map_err(map_character_error)?;

    Ok(StatusCode::NO_CONTENT)
}
