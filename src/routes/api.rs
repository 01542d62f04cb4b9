// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for users and exercise logs.

use crate::error::{AppError, Result};
use crate::models::{Exercise, User};
use crate::services::LogQuery;
use crate::time_utils::{format_date_string, parse_calendar_date};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Form, Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// API routes. All endpoints are public.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", post(create_user).get(list_users))
        .route("/api/users/{id}/exercises", post(add_exercise))
        .route("/api/users/{id}/logs", get(get_logs))
}

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

// ─── Users ───────────────────────────────────────────────────

/// Form body for user creation.
///
/// `username` is optional here so a missing field surfaces as our own
/// validation error instead of an extractor rejection.
#[derive(Deserialize)]
struct CreateUserForm {
    username: Option<String>,
}

/// User response (creation and listing).
#[derive(Serialize)]
pub struct UserResponse {
    pub username: String,
    pub id: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}

/// Create a new user.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateUserForm>,
) -> Result<Json<UserResponse>> {
    let username = form
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::Validation("username is required".to_string()))?;

    let user = state.store.create_user(username)?;
    tracing::info!(user_id = %user.id, "User created");

    Ok(Json(user.into()))
}

/// List all users in creation order.
async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<UserResponse>> {
    let users = state
        .store
        .list_users()
        .into_iter()
        .map(UserResponse::from)
        .collect();
    Json(users)
}

// ─── Exercises ───────────────────────────────────────────────

/// Form body for logging an exercise.
#[derive(Deserialize)]
struct ExerciseForm {
    description: Option<String>,
    duration: Option<String>,
    date: Option<String>,
}

/// Validated exercise input, produced before any store mutation.
#[derive(Debug)]
struct NewExercise {
    description: String,
    duration: u32,
    date: NaiveDate,
}

impl NewExercise {
    fn from_form(form: ExerciseForm) -> Result<Self> {
        let description = form
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| AppError::Validation("description is required".to_string()))?
            .to_string();

        let duration: u32 = form
            .duration
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| AppError::Validation("duration is required".to_string()))?
            .parse()
            .map_err(|_| {
                AppError::Validation("duration must be a positive integer".to_string())
            })?;
        if duration == 0 {
            return Err(AppError::Validation(
                "duration must be a positive integer".to_string(),
            ));
        }

        // An absent date means "today"; a present but malformed one is
        // rejected rather than stored as garbage.
        let date = match form.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            Some(raw) => parse_calendar_date(raw).ok_or_else(|| {
                AppError::Validation("date must be a YYYY-MM-DD calendar date".to_string())
            })?,
            None => Utc::now().date_naive(),
        };

        Ok(Self {
            description,
            duration,
            date,
        })
    }
}

/// Created-exercise response.
#[derive(Serialize)]
pub struct CreatedExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: u32,
    pub date: String,
    pub id: String,
}

impl CreatedExerciseResponse {
    fn new(user: &User, exercise: &Exercise) -> Self {
        Self {
            username: user.username.clone(),
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: format_date_string(exercise.date),
            id: user.id.clone(),
        }
    }
}

/// Log an exercise against a user.
async fn add_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<ExerciseForm>,
) -> Result<Json<CreatedExerciseResponse>> {
    let input = NewExercise::from_form(form)?;

    let user = state.store.find_user(&id).ok_or_else(user_not_found)?;

    let exercise = state.store.add_exercise(
        &user.id,
        Exercise {
            description: input.description,
            duration: input.duration,
            date: input.date,
        },
    )?;

    tracing::debug!(user_id = %user.id, date = %exercise.date, "Exercise logged");
    Ok(Json(CreatedExerciseResponse::new(&user, &exercise)))
}

// ─── Logs ────────────────────────────────────────────────────

/// Raw log query parameters.
///
/// All three are kept as strings and parsed leniently by `LogQuery`;
/// malformed values act as if absent.
#[derive(Deserialize)]
struct LogsParams {
    /// Inclusive lower date bound (YYYY-MM-DD)
    from: Option<String>,
    /// Inclusive upper date bound (YYYY-MM-DD)
    to: Option<String>,
    /// Head truncation applied after date filtering
    limit: Option<String>,
}

/// A single formatted log entry.
#[derive(Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: u32,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: format_date_string(exercise.date),
        }
    }
}

/// Filtered exercise log for one user.
#[derive(Serialize)]
pub struct LogResponse {
    pub username: String,
    pub count: usize,
    pub id: String,
    pub log: Vec<LogEntry>,
}

/// Get a user's exercise log with optional date-range and limit filters.
async fn get_logs(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<LogsParams>,
) -> Result<Json<LogResponse>> {
    let user = state.store.find_user(&id).ok_or_else(user_not_found)?;

    let query = LogQuery::from_params(
        params.from.as_deref(),
        params.to.as_deref(),
        params.limit.as_deref(),
    );
    tracing::debug!(
        user_id = %user.id,
        from = ?query.from,
        to = ?query.to,
        limit = ?query.limit,
        "Fetching exercise log"
    );

    let log: Vec<LogEntry> = query
        .apply(&state.store.exercises_for(&user.id))
        .into_iter()
        .map(LogEntry::from)
        .collect();

    Ok(Json(LogResponse {
        username: user.username,
        count: log.len(),
        id: user.id,
        log,
    }))
}
