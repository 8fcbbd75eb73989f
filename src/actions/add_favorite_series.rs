use std::sync::Arc;

use super::FAVORITE_SERIES;
use crate::{
    error::{AppError, AppResult},
    logger::{LogRecord, Logger},
    models::{FavoriteSeries, NewSeriesEntry},
    repositories::FavoriteSeriesRepository,
};

/// Adds a series to a user's favorites, refusing duplicates.
pub struct AddFavoriteSeriesAction {
    repository: Arc<dyn FavoriteSeriesRepository>,
    logger: Arc<dyn Logger>,
}

impl AddFavoriteSeriesAction {
    pub fn new(repository: Arc<dyn FavoriteSeriesRepository>, logger: Arc<dyn Logger>) -> Self {
        Self { repository, logger }
    }

    pub async fn execute(&self, user_id: &str, series_tmdb_id: i32) -> AppResult<FavoriteSeries> {
        if self.repository.find_one(user_id, series_tmdb_id).await?.is_some() {
            return Err(AppError::already_exists(
                FAVORITE_SERIES,
                "Series is already in the user's favorites",
                user_id,
                series_tmdb_id,
            ));
        }

        let favorite = self.repository.create(NewSeriesEntry::new(user_id, series_tmdb_id)).await?;

        self.logger.info(
            LogRecord::new("Favorite series added")
                .field("user_id", user_id)
                .field("series_tmdb_id", series_tmdb_id),
        );

        Ok(favorite)
    }
}
