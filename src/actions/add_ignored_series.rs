use std::sync::Arc;

use super::IGNORED_SERIES;
use crate::{
    error::{AppError, AppResult},
    logger::{LogRecord, Logger},
    models::{IgnoredSeries, NewSeriesEntry},
    repositories::IgnoredSeriesRepository,
};

pub struct AddIgnoredSeriesAction {
    repository: Arc<dyn IgnoredSeriesRepository>,
    logger: Arc<dyn Logger>,
}

impl AddIgnoredSeriesAction {
    pub fn new(repository: Arc<dyn IgnoredSeriesRepository>, logger: Arc<dyn Logger>) -> Self {
        Self { repository, logger }
    }

    pub async fn execute(&self, user_id: &str, series_tmdb_id: i32) -> AppResult<IgnoredSeries> {
        if self.repository.find_one(user_id, series_tmdb_id).await?.is_some() {
            return Err(AppError::already_exists(
                IGNORED_SERIES,
                "Series is already ignored by the user",
                user_id,
                series_tmdb_id,
            ));
        }

        let ignored = self.repository.create(NewSeriesEntry::new(user_id, series_tmdb_id)).await?;

        self.logger.info(
            LogRecord::new("Ignored series added")
                .field("user_id", user_id)
                .field("series_tmdb_id", series_tmdb_id),
        );

        Ok(ignored)
    }
}
