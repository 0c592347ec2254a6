use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Score, ScoreStore,
    dto::score::{CreateScoreRequest, LeaderboardQuery},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/scores",
    request_body = CreateScoreRequest,
    responses(
        (status = 201, description = "Score recorded successfully", body = Score),
        (status = 400, description = "Validation error")
    ),
    tag = "scores"
)]
pub async fn create_score(
    State(store): State<ScoreStore>,
    Json(req): Json<CreateScoreRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let saved = services::create_score(&store, &req);

    Ok((StatusCode::CREATED, Json(saved)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/scores/leaderboard",
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Ranked scores retrieved successfully", body = Vec<Score>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "scores"
)]
pub async fn get_leaderboard(
    State(store): State<ScoreStore>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Response, WebError> {
    query.validate().map_err(WebError::BadRequest)?;

    let entries = services::leaderboard(&store, &query);

    Ok(Json(entries).into_response())
}
