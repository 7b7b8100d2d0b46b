//! Contest handler implementations

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::Contest,
    services::ContestService,
    state::AppState,
};

use super::request::{CreateContestRequest, UpdateContestRequest};

/// List all contests
pub async fn list_contests(State(state): State<AppState>) -> AppResult<Json<Vec<Contest>>> {
    let contests = ContestService::list_contests(state.store()).await?;
    Ok(Json(contests))
}

/// Get a specific contest
pub async fn get_contest(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Contest>> {
    let Path(id) = path?;
    let contest = ContestService::get_contest(state.store(), id).await?;
    Ok(Json(contest))
}

/// Create a new contest
pub async fn create_contest(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    payload: Result<Json<CreateContestRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Contest>)> {
    let Json(payload) = payload?;

    let contest = ContestService::create_contest(state.store(), payload).await?;
    tracing::debug!(contest_id = contest.id, username = %auth_user.username, "Create authorized");

    Ok((StatusCode::CREATED, Json(contest)))
}

/// Update a contest
pub async fn update_contest(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateContestRequest>, JsonRejection>,
) -> AppResult<Json<Contest>> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let contest = ContestService::update_contest(state.store(), id, payload).await?;
    tracing::debug!(contest_id = id, username = %auth_user.username, "Update authorized");

    Ok(Json(contest))
}

/// Delete a contest
pub async fn delete_contest(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    ContestService::delete_contest(state.store(), id).await?;
    tracing::debug!(contest_id = id, username = %auth_user.username, "Delete authorized");

    Ok(StatusCode::NO_CONTENT)
}

/// List contests for a class level (9, 10, 11, 12 or "other")
pub async fn list_contests_by_class(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Vec<Contest>>> {
    let Path(class_level) = path?;
    let contests = ContestService::list_by_class_level(state.store(), &class_level).await?;
    Ok(Json(contests))
}

/// List contests for a year
pub async fn list_contests_by_year(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Vec<Contest>>> {
    let Path(year) = path?;
    let contests = ContestService::list_by_year(state.store(), year).await?;
    Ok(Json(contests))
}
