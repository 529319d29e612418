//! Spell Handlers

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{CreateSpellRequest, UpdateSpellRequest};
use crate::application::dto::response::SpellResponse;
use crate::application::services::{
    NewSpellDto, SpellError, SpellService, SpellServiceImpl, UpdateSpellDto,
};
use crate::infrastructure::repositories::{PgCharacterRepository, PgSpellRepository};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn spell_service(state: &AppState) -> SpellServiceImpl<PgSpellRepository, PgCharacterRepository> {
    SpellServiceImpl::new(
        Arc::new(PgSpellRepository::new(state.db.clone())),
        Arc::new(PgCharacterRepository::new(state.db.clone())),
    )
}

fn map_spell_error(e: SpellError) -> AppError {
    match e {
        SpellError::NotFound => AppError::NotFound("Spell not found".into()),
        SpellError::CharacterNotFound => AppError::NotFound("Character not found".into()),
        SpellError::NotOwner => AppError::Forbidden("Character belongs to another player".into()),
        e => AppError::Internal(e.to_string()),
    }
}

/// List a character's spells
#[utoipa::path(
    get,
    path = "/api/v1/characters/{character_id}/spells",
    tag = "spells",
    security(("bearer_auth" = [])),
    params(
        ("character_id" = String, Path, description = "Prefixed character ID (CHR-…)")
    ),
    responses(
        (status = 200, description = "The character's spells", body = [SpellResponse])
    )
)]
pub async fn get_character_spells(
    State(state): State<AppState>,
    Path(character_id): Path<String>,
) -> Result<Json<Vec<SpellResponse>>, AppError> {
    let spells = spell_service(&state)
        .get_spells_by_character_id(&character_id)
        .await
        .map_err(map_spell_error)?;

    let responses: Vec<SpellResponse> = spells.into_iter().map(SpellResponse::from).collect();

    Ok(Json(responses))
}

/// Add a spell to a character
#[utoipa::path(
    post,
    path = "/api/v1/characters/{character_id}/spells",
    tag = "spells",
    security(("bearer_auth" = [])),
    params(
        ("character_id" = String, Path, description = "Prefixed character ID (CHR-…)")
    ),
    request_body = CreateSpellRequest,
    responses(
        (status = 201, description = "Spell created", body = SpellResponse),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_spell(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(character_id): Path<String>,
    Json(body): Json<CreateSpellRequest>,
) -> Result<(StatusCode, Json<SpellResponse>), AppError> {
    // Validate request
    body.validate().map_err(validation_error)?;

    let new_spell = NewSpellDto {
        name: body.name,
        level: body.level,
        school: body.school,
        casting_time: body.casting_time,
        range: body.range,
        duration: body.duration,
        components: body.components,
        description: body.description,
    };

    let spell = spell_service(&state)
        .insert_new_spell(&auth.user_id, &character_id, new_spell)
        .await
        .map_err(map_spell_error)?;

    Ok((StatusCode::CREATED, Json(SpellResponse::from(spell))))
}

/// Get a spell by ID
#[utoipa::path(
    get,
    path = "/api/v1/spells/{spell_id}",
    tag = "spells",
    security(("bearer_auth" = [])),
    params(
        ("spell_id" = String, Path, description = "Prefixed spell ID (SPL-…)")
    ),
    responses(
        (status = 200, description = "The spell", body = SpellResponse),
        (status = 404, description = "Spell not found")
    )
)]
pub async fn get_spell(
    State(state): State<AppState>,
    Path(spell_id): Path<String>,
) -> Result<Json<SpellResponse>, AppError> {
    let spell = spell_service(&state)
        .get_spell(&spell_id)
        .await
        .map_err(map_spell_error)?;

    Ok(Json(SpellResponse::from(spell)))
}

/// Update a spell
#[utoipa::path(
    patch,
    path = "/api/v1/spells/{spell_id}",
    tag = "spells",
    security(("bearer_auth" = [])),
    params(
        ("spell_id" = String, Path, description = "Prefixed spell ID (SPL-…)")
    ),
    request_body = UpdateSpellRequest,
    responses(
        (status = 200, description = "Updated spell", body = SpellResponse),
        (status = 403, description = "Character belongs to another player"),
        (status = 404, description = "Spell not found")
    )
)]
pub async fn update_spell(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(spell_id): Path<String>,
    Json(body): Json<UpdateSpellRequest>,
) -> Result<Json<SpellResponse>, AppError> {
    // Validate request
    body.validate().map_err(validation_error)?;

    let update = UpdateSpellDto {
        name: body.name,
        level: body.level,
        school: body.school,
        casting_time: body.casting_time,
        range: body.range,
        duration: body.duration,
        components: body.components,
        description: body.description,
    };

    let spell = spell_service(&state)
        .update_spell(&auth.user_id, &spell_id, update)
        .await
        .map_err(map_spell_error)?;

    Ok(Json(SpellResponse::from(spell)))
}

/// Delete a spell
#[utoipa::path(
    delete,
    path = "/api/v1/spells/{spell_id}",
    tag = "spells",
    security(("bearer_auth" = [])),
    params(
        ("spell_id" = String, Path, description = "Prefixed spell ID (SPL-…)")
    ),
    responses(
        (status = 204, description = "Spell deleted"),
        (status = 404, description = "Spell not found")
    )
)]
pub async fn delete_spell(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(spell_id): Path<String>,
) -> Result<StatusCode, AppError> {
    spell_service(&state)
        .delete_spell(&auth.user_id, &spell_id)
        .await
        .map_err(map_spell_error)?;

    Ok(StatusCode::NO_CONTENT)
}
