use std::sync::Arc;

use super::FAVORITE_SERIES;
use crate::{
    error::{AppError, AppResult},
    repositories::FavoriteSeriesRepository,
};

pub struct RemoveFavoriteSeriesAction {
    repository: Arc<dyn FavoriteSeriesRepository>,
}

impl RemoveFavoriteSeriesAction {
    pub fn new(repository: Arc<dyn FavoriteSeriesRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, user_id: &str, series_tmdb_id: i32) -> AppResult<()> {
        if self.repository.find_one(user_id, series_tmdb_id).await?.is_none() {
            return Err(AppError::not_found(FAVORITE_SERIES, user_id, series_tmdb_id));
        }

        self.repository.delete(user_id, series_tmdb_id).await
    }
}
