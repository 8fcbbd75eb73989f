use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    entities::{favorite_series, ignored_series},
    error::AppError,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FavoriteSeries {
    pub id: i32,
    pub user_id: String,
    pub series_tmdb_id: i32,
    pub created_at: Timestamp,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IgnoredSeries {
    pub id: i32,
    pub user_id: String,
    pub series_tmdb_id: i32,
    pub created_at: Timestamp,
}

/// Payload for creating an entry in either list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSeriesEntry {
    pub user_id: String,
    pub series_tmdb_id: i32,
}

impl NewSeriesEntry {
    pub fn new(user_id: &str, series_tmdb_id: i32) -> Self {
        Self { user_id: user_id.to_string(), series_tmdb_id }
    }
}

/// Largest value SQLite accepts for LIMIT/OFFSET.
const MAX_SQL_BOUND: u64 = i64::MAX as u64;

/// 1-based page selector. Bounds are left to the repository.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Page {
    pub page: u64,
    pub page_size: u64,
}

impl Page {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size).min(MAX_SQL_BOUND)
    }

    pub fn limit(&self) -> u64 {
        self.page_size.min(MAX_SQL_BOUND)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetSeriesQuery {
    pub user_id: String,
    pub page: u64,
    pub page_size: u64,
}

impl GetSeriesQuery {
    pub fn page(&self) -> Page {
        Page::new(self.page, self.page_size)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: u64,
}

#[derive(Debug, Deserialize)]
pub struct SeriesRequest {
    pub series_tmdb_id: i32,
}

impl TryFrom<favorite_series::Model> for FavoriteSeries {
    type Error = AppError;

    fn try_from(row: favorite_series::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            series_tmdb_id: row.series_tmdb_id,
            created_at: Timestamp::from_second(row.created_at)?,
        })
    }
}

impl TryFrom<ignored_series::Model> for IgnoredSeries {
    type Error = AppError;

    fn try_from(row: ignored_series::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            series_tmdb_id: row.series_tmdb_id,
            created_at: Timestamp::from_second(row.created_at)?,
        })
    }
}
