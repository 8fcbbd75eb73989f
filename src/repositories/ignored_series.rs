use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use tracing::debug;

use super::IgnoredSeriesRepository;
use crate::{
    entities::ignored_series,
    error::AppResult,
    models::{IgnoredSeries, NewSeriesEntry, Page},
};

#[derive(Clone)]
pub struct SeaOrmIgnoredSeriesRepository {
    db: DatabaseConnection,
}

impl SeaOrmIgnoredSeriesRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IgnoredSeriesRepository for SeaOrmIgnoredSeriesRepository {
    async fn find_one(
        &self,
        user_id: &str,
        series_tmdb_id: i32,
    ) -> AppResult<Option<IgnoredSeries>> {
        let row = ignored_series::Entity::find()
            .filter(ignored_series::Column::UserId.eq(user_id))
            .filter(ignored_series::Column::SeriesTmdbId.eq(series_tmdb_id))
            .one(&self.db)
            .await?;
        row.map(IgnoredSeries::try_from).transpose()
    }

    async fn create(&self, entry: NewSeriesEntry) -> AppResult<IgnoredSeries> {
        let model = ignored_series::ActiveModel {
            id: Default::default(),
            user_id: Set(entry.user_id),
            series_tmdb_id: Set(entry.series_tmdb_id),
            created_at: Set(jiff::Timestamp::now().as_second()),
        };
        let row = model.insert(&self.db).await?;
        debug!(id = row.id, user_id = %row.user_id, series_tmdb_id = row.series_tmdb_id, "inserted ignored series");
        IgnoredSeries::try_from(row)
    }

    async fn find_many(&self, user_id: &str, page: Page) -> AppResult<Vec<IgnoredSeries>> {
        debug!(user_id = %user_id, page = page.page, page_size = page.page_size, "listing ignored series");
        let rows = ignored_series::Entity::find()
            .filter(ignored_series::Column::UserId.eq(user_id))
            .order_by_desc(ignored_series::Column::CreatedAt)
            .order_by_desc(ignored_series::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;
        rows.into_iter().map(IgnoredSeries::try_from).collect()
    }

    async fn count(&self, user_id: &str) -> AppResult<u64> {
        let total = ignored_series::Entity::find()
            .filter(ignored_series::Column::UserId.eq(user_id))
            .count(&self.db)
            .await?;
        Ok(total)
    }

    async fn delete(&self, user_id: &str, series_tmdb_id: i32) -> AppResult<()> {
        let res = ignored_series::Entity::delete_many()
            .filter(ignored_series::Column::UserId.eq(user_id))
            .filter(ignored_series::Column::SeriesTmdbId.eq(series_tmdb_id))
            .exec(&self.db)
            .await?;
        debug!(user_id = %user_id, series_tmdb_id = series_tmdb_id, rows = res.rows_affected, "deleted ignored series");
        Ok(())
    }
}
