use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{FavoriteSeries, GetSeriesQuery, Paginated},
    repositories::FavoriteSeriesRepository,
};

/// Reads one page of a user's favorites along with the full count.
pub struct GetFavoriteSeriesAction {
    repository: Arc<dyn FavoriteSeriesRepository>,
}

impl GetFavoriteSeriesAction {
    pub fn new(repository: Arc<dyn FavoriteSeriesRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, query: GetSeriesQuery) -> AppResult<Paginated<FavoriteSeries>> {
        let (data, total) = futures::try_join!(
            self.repository.find_many(&query.user_id, query.page()),
            self.repository.count(&query.user_id),
        )?;

        Ok(Paginated { data, total })
    }
}
