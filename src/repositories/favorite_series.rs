use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use tracing::debug;

use super::FavoriteSeriesRepository;
use crate::{
    entities::favorite_series,
    error::AppResult,
    models::{FavoriteSeries, NewSeriesEntry, Page},
};

#[derive(Clone)]
pub struct SeaOrmFavoriteSeriesRepository {
    db: DatabaseConnection,
}

impl SeaOrmFavoriteSeriesRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavoriteSeriesRepository for SeaOrmFavoriteSeriesRepository {
    async fn find_one(
        &self,
        user_id: &str,
        series_tmdb_id: i32,
    ) -> AppResult<Option<FavoriteSeries>> {
        let row = favorite_series::Entity::find()
            .filter(favorite_series::Column::UserId.eq(user_id))
            .filter(favorite_series::Column::SeriesTmdbId.eq(series_tmdb_id))
            .one(&self.db)
            .await?;
        row.map(FavoriteSeries::try_from).transpose()
    }

    async fn create(&self, entry: NewSeriesEntry) -> AppResult<FavoriteSeries> {
        let model = favorite_series::ActiveModel {
            id: Default::default(),
            user_id: Set(entry.user_id),
            series_tmdb_id: Set(entry.series_tmdb_id),
            created_at: Set(jiff::Timestamp::now().as_second()),
        };
        let row = model.insert(&self.db).await?;
        debug!(id = row.id, user_id = %row.user_id, series_tmdb_id = row.series_tmdb_id, "inserted favorite series");
        FavoriteSeries::try_from(row)
    }

    async fn find_many(&self, user_id: &str, page: Page) -> AppResult<Vec<FavoriteSeries>> {
        debug!(user_id = %user_id, page = page.page, page_size = page.page_size, "listing favorite series");
        let rows = favorite_series::Entity::find()
            .filter(favorite_series::Column::UserId.eq(user_id))
            .order_by_desc(favorite_series::Column::CreatedAt)
            .order_by_desc(favorite_series::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;
        rows.into_iter().map(FavoriteSeries::try_from).collect()
    }

    async fn count(&self, user_id: &str) -> AppResult<u64> {
        let total = favorite_series::Entity::find()
            .filter(favorite_series::Column::UserId.eq(user_id))
            .count(&self.db)
            .await?;
        Ok(total)
    }

    async fn delete(&self, user_id: &str, series_tmdb_id: i32) -> AppResult<()> {
        let res = favorite_series::Entity::delete_many()
            .filter(favorite_series::Column::UserId.eq(user_id))
            .filter(favorite_series::Column::SeriesTmdbId.eq(series_tmdb_id))
            .exec(&self.db)
            .await?;
        debug!(user_id = %user_id, series_tmdb_id = series_tmdb_id, rows = res.rows_affected, "deleted favorite series");
        Ok(())
    }
}
