//! Ability Score Handlers

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{CreateAbilityScoreRequest, UpdateAbilityScoreRequest};
use crate::application::dto::response::AbilityScoreResponse;
use crate::application::services::{
    AbilityScoreError, AbilityScoreService, AbilityScoreServiceImpl, NewAbilityScoreDto,
};
use crate::infrastructure::repositories::{PgAbilityScoreRepository, PgCharacterRepository};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn ability_score_service(
    state: &AppState,
) -> AbilityScoreServiceImpl<PgAbilityScoreRepository, PgCharacterRepository> {
    AbilityScoreServiceImpl::new(
        Arc::new(PgAbilityScoreRepository::new(state.db.clone())),
        Arc::new(PgCharacterRepository::new(state.db.clone())),
    )
}

fn map_ability_score_error(e: AbilityScoreError) -> AppError {
    match e {
        AbilityScoreError::NotFound => AppError::NotFound("Ability score not found".into()),
        AbilityScoreError::CharacterNotFound => AppError::NotFound("Character not found".into()),
        AbilityScoreError::NotOwner => {
            AppError::Forbidden("Character belongs to another player".into())
        }
        AbilityScoreError::UnknownAbility(name) => {
            AppError::BadRequest(format!("Unknown ability: {}", name))
        }
        AbilityScoreError::Duplicate => {
            AppError::Conflict("Character already has a score for this ability".into())
        }
        e => AppError::Internal(e.to_string()),
    }
}

/// List a character's ability scores
#[utoipa::path(
    get,
    path = "/api/v1/characters/{character_id}/ability-scores",
    tag = "ability-scores",
    security(("bearer_auth" = [])),
    params(
        ("character_id" = String, Path, description = "Prefixed character ID (CHR-…)")
    ),
    responses(
        (status = 200, description = "The character's ability scores", body = [AbilityScoreResponse])
    )
)]
pub async fn get_character_ability_scores(
    State(state): State<AppState>,
    Path(character_id): Path<String>,
) -> Result<Json<Vec<AbilityScoreResponse>>, AppError> {
    let scores = ability_score_service(&state)
        .get_ability_scores_by_character_id(&character_id)
        .await
        .map_err(map_ability_score_error)?;

    let responses: Vec<AbilityScoreResponse> =
        scores.into_iter().map(AbilityScoreResponse::from).collect();

    Ok(Json(responses))
}

/// Add an ability score to a character
#[utoipa::path(
    post,
    path = "/api/v1/characters/{character_id}/ability-scores",
    tag = "ability-scores",
    security(("bearer_auth" = [])),
    params(
        ("character_id" = String, Path, description = "Prefixed character ID (CHR-…)")
    ),
    request_body = CreateAbilityScoreRequest,
    responses(
        (status = 201, description = "Ability score created", body = AbilityScoreResponse),
        (status = 400, description = "Unknown ability or invalid score"),
        (status = 409, description = "Ability already scored for this character")
    )
)]
pub async fn create_ability_score(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(character_id): Path<String>,
    Json(body): Json<CreateAbilityScoreRequest>,
) -> Result<(StatusCode, Json<AbilityScoreResponse>), AppError> {
    // Validate request
    body.validate().map_err(validation_error)?;

    let score = ability_score_service(&state)
        .insert_ability_score(
            &auth.user_id,
            &character_id,
            NewAbilityScoreDto {
                ability: body.ability,
                score: body.score,
            },
        )
        .await
        .map_err(map_ability_score_error)?;

    Ok((StatusCode::CREATED, Json(AbilityScoreResponse::from(score))))
}

/// Get an ability score by ID
#[utoipa::path(
    get,
    path = "/api/v1/ability-scores/{score_id}",
    tag = "ability-scores",
    security(("bearer_auth" = [])),
    params(
        ("score_id" = String, Path, description = "Prefixed ability score ID (ABL-…)")
    ),
    responses(
        (status = 200, description = "The ability score", body = AbilityScoreResponse),
        (status = 404, description = "Ability score not found")
    )
)]
pub async fn get_ability_score(
    State(state): State<AppState>,
    Path(score_id): Path<String>,
) -> Result<Json<AbilityScoreResponse>, AppError> {
    let score = ability_score_service(&state)
        .get_ability_score(&score_id)
        .await
        .map_err(map_ability_score_error)?;

    Ok(Json(AbilityScoreResponse::from(score)))
}

/// Update an ability score value
#[utoipa::path(
    patch,
    path = "/api/v1/ability-scores/{score_id}",
    tag = "ability-scores",
    security(("bearer_auth" = [])),
    params(
        ("score_id" = String, Path, description = "Prefixed ability score ID (ABL-…)")
    ),
    request_body = UpdateAbilityScoreRequest,
    responses(
        (status = 200, description = "Updated ability score", body = AbilityScoreResponse),
        (status = 404, description = "Ability score not found")
    )
)]
pub async fn update_ability_score(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(score_id): Path<String>,
    Json(body): Json<UpdateAbilityScoreRequest>,
) -> Result<Json<AbilityScoreResponse>, AppError> {
    // Validate request
    body.validate().map_err(validation_error)?;

    let score = ability_score_service(&state)
        .update_ability_score(&auth.user_id, &score_id, body.score)
        .await
        .map_err(map_ability_score_error)?;

    Ok(Json(AbilityScoreResponse::from(score)))
}

/// Delete an ability score
#[utoipa::path(
    delete,
    path = "/api/v1/ability-scores/{score_id}",
    tag = "ability-scores",
    security(("bearer_auth" = [])),
    params(
        ("score_id" = String, Path, description = "Prefixed ability score ID (ABL-…)")
    ),
    responses(
        (status = 204, description = "Ability score deleted"),
        (status = 404, description = "Ability score not found")
    )
)]
pub async fn delete_ability_score(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(score_id): Path<String>,
) -> Result<StatusCode, AppError> {
    ability_score_service(&state)
        .delete_ability_score(&auth.user_id, &score_id)
        .await
        .map_err(map_ability_score_error)?;

    Ok(StatusCode::NO_CONTENT)
}
