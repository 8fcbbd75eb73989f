use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
};
use serde::Deserialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    AppState,
    error::AppResult,
    models::{FavoriteSeries, GetSeriesQuery, IgnoredSeries, Paginated, SeriesRequest},
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/users/{user_id}/favorite-series",
            get(list_favorite_series).post(add_favorite_series),
        )
        .route("/users/{user_id}/favorite-series/{series_tmdb_id}", delete(remove_favorite_series))
        .route(
            "/users/{user_id}/ignored-series",
            get(list_ignored_series).post(add_ignored_series),
        )
        .route("/users/{user_id}/ignored-series/{series_tmdb_id}", delete(remove_ignored_series))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    page: Option<u64>,
    page_size: Option<u64>,
}

impl ListQuery {
    fn into_query(self, user_id: String, default_page_size: u64) -> GetSeriesQuery {
        GetSeriesQuery {
            user_id,
            page: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(default_page_size),
        }
    }
}

async fn list_favorite_series(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(q): Query<ListQuery>,
) -> AppResult<Json<Paginated<FavoriteSeries>>> {
    let query = q.into_query(user_id, state.config.default_page_size);
    Ok(Json(state.actions.get_favorite_series.execute(query).await?))
}

async fn add_favorite_series(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(req): Json<SeriesRequest>,
) -> AppResult<(StatusCode, Json<FavoriteSeries>)> {
    let favorite = state.actions.add_favorite_series.execute(&user_id, req.series_tmdb_id).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

async fn remove_favorite_series(
    State(state): State<Arc<AppState>>,
    Path((user_id, series_tmdb_id)): Path<(String, i32)>,
) -> AppResult<StatusCode> {
    state.actions.remove_favorite_series.execute(&user_id, series_tmdb_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_ignored_series(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(q): Query<ListQuery>,
) -> AppResult<Json<Paginated<IgnoredSeries>>> {
    let query = q.into_query(user_id, state.config.default_page_size);
    Ok(Json(state.actions.get_user_ignored_series.execute(query).await?))
}

async fn add_ignored_series(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(req): Json<SeriesRequest>,
) -> AppResult<(StatusCode, Json<IgnoredSeries>)> {
    let ignored = state.actions.add_ignored_series.execute(&user_id, req.series_tmdb_id).await?;
    Ok((StatusCode::CREATED, Json(ignored)))
}

async fn remove_ignored_series(
    State(state): State<Arc<AppState>>,
    Path((user_id, series_tmdb_id)): Path<(String, i32)>,
) -> AppResult<StatusCode> {
    state.actions.remove_ignored_series.execute(&user_id, series_tmdb_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
