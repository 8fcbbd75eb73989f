use std::sync::Arc;

use super::IGNORED_SERIES;
use crate::{
    error::{AppError, AppResult},
    repositories::IgnoredSeriesRepository,
};

/// Removes a series from a user's ignored list. The entry must exist.
pub struct RemoveIgnoredSeriesAction {
    repository: Arc<dyn IgnoredSeriesRepository>,
}

impl RemoveIgnoredSeriesAction {
    pub fn new(repository: Arc<dyn IgnoredSeriesRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, user_id: &str, series_tmdb_id: i32) -> AppResult<()> {
        if self.repository.find_one(user_id, series_tmdb_id).await?.is_none() {
            return Err(AppError::not_found(IGNORED_SERIES, user_id, series_tmdb_id));
        }

        self.repository.delete(user_id, series_tmdb_id).await
    }
}
