mod favorite_series;
mod ignored_series;

use async_trait::async_trait;

pub use favorite_series::SeaOrmFavoriteSeriesRepository;
pub use ignored_series::SeaOrmIgnoredSeriesRepository;

use crate::{
    error::AppResult,
    models::{FavoriteSeries, IgnoredSeries, NewSeriesEntry, Page},
};

#[async_trait]
pub trait FavoriteSeriesRepository: Send + Sync {
    async fn find_one(&self, user_id: &str, series_tmdb_id: i32)
    -> AppResult<Option<FavoriteSeries>>;

    async fn create(&self, entry: NewSeriesEntry) -> AppResult<FavoriteSeries>;

    /// Newest first.
    async fn find_many(&self, user_id: &str, page: Page) -> AppResult<Vec<FavoriteSeries>>;

    async fn count(&self, user_id: &str) -> AppResult<u64>;

    async fn delete(&self, user_id: &str, series_tmdb_id: i32) -> AppResult<()>;
}

#[async_trait]
pub trait IgnoredSeriesRepository: Send + Sync {
    async fn find_one(&self, user_id: &str, series_tmdb_id: i32)
    -> AppResult<Option<IgnoredSeries>>;

    async fn create(&self, entry: NewSeriesEntry) -> AppResult<IgnoredSeries>;

    /// Newest first.
    async fn find_many(&self, user_id: &str, page: Page) -> AppResult<Vec<IgnoredSeries>>;

    async fn count(&self, user_id: &str) -> AppResult<u64>;

    async fn delete(&self, user_id: &str, series_tmdb_id: i32) -> AppResult<()>;
}

#[cfg(test)]
pub mod memory {
    use std::sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    };

    use jiff::Timestamp;

    use super::*;
    use crate::error::AppError;

    #[derive(Clone, Debug)]
    struct Row {
        id: i32,
        user_id: String,
        series_tmdb_id: i32,
        created_at: Timestamp,
    }

    /// Shared storage behind both fakes. Records every delete call and can be
    /// switched to fail all operations with a storage error.
    #[derive(Default)]
    struct MemoryList {
        rows: Mutex<Vec<Row>>,
        deletes: Mutex<Vec<(String, i32)>>,
        failing: AtomicBool,
    }

    impl MemoryList {
        fn check(&self) -> AppResult<()> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(sea_orm::DbErr::Custom("storage offline".to_string()).into());
            }
            Ok(())
        }

        fn find_one(&self, user_id: &str, series_tmdb_id: i32) -> AppResult<Option<Row>> {
            self.check()?;
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .find(|r| r.user_id == user_id && r.series_tmdb_id == series_tmdb_id)
                .cloned())
        }

        fn create(&self, entry: NewSeriesEntry) -> AppResult<Row> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let row = Row {
                id: rows.iter().map(|r| r.id).max().unwrap_or(0) + 1,
                user_id: entry.user_id,
                series_tmdb_id: entry.series_tmdb_id,
                created_at: Timestamp::now(),
            };
            rows.push(row.clone());
            Ok(row)
        }

        fn find_many(&self, user_id: &str, page: Page) -> AppResult<Vec<Row>> {
            self.check()?;
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .rev()
                .filter(|r| r.user_id == user_id)
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .cloned()
                .collect())
        }

        fn count(&self, user_id: &str) -> AppResult<u64> {
            self.check()?;
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().filter(|r| r.user_id == user_id).count() as u64)
        }

        fn delete(&self, user_id: &str, series_tmdb_id: i32) -> AppResult<()> {
            self.check()?;
            self.deletes.lock().unwrap().push((user_id.to_string(), series_tmdb_id));
            self.rows
                .lock()
                .unwrap()
                .retain(|r| !(r.user_id == user_id && r.series_tmdb_id == series_tmdb_id));
            Ok(())
        }
    }

    macro_rules! memory_repository {
        ($name:ident, $repo_trait:ident, $record:ident) => {
            #[derive(Default)]
            pub struct $name {
                list: MemoryList,
            }

            impl $name {
                pub fn new() -> Self {
                    Self::default()
                }

                pub fn seed(&self, user_id: &str, series_tmdb_id: i32) {
                    self.list.create(NewSeriesEntry::new(user_id, series_tmdb_id)).unwrap();
                }

                pub fn fail_all(&self) {
                    self.list.failing.store(true, Ordering::SeqCst);
                }

                pub fn deletes(&self) -> Vec<(String, i32)> {
                    self.list.deletes.lock().unwrap().clone()
                }

                pub fn len(&self) -> usize {
                    self.list.rows.lock().unwrap().len()
                }

                fn to_record(row: Row) -> $record {
                    $record {
                        id: row.id,
                        user_id: row.user_id,
                        series_tmdb_id: row.series_tmdb_id,
                        created_at: row.created_at,
                    }
                }
            }

            #[async_trait]
            impl $repo_trait for $name {
                async fn find_one(
                    &self,
                    user_id: &str,
                    series_tmdb_id: i32,
                ) -> AppResult<Option<$record>> {
                    Ok(self.list.find_one(user_id, series_tmdb_id)?.map(Self::to_record))
                }

                async fn create(&self, entry: NewSeriesEntry) -> AppResult<$record> {
                    Ok(Self::to_record(self.list.create(entry)?))
                }

                async fn find_many(&self, user_id: &str, page: Page) -> AppResult<Vec<$record>> {
                    Ok(self
                        .list
                        .find_many(user_id, page)?
                        .into_iter()
                        .map(Self::to_record)
                        .collect())
                }

                async fn count(&self, user_id: &str) -> AppResult<u64> {
                    self.list.count(user_id)
                }

                async fn delete(&self, user_id: &str, series_tmdb_id: i32) -> AppResult<()> {
                    self.list.delete(user_id, series_tmdb_id)
                }
            }
        };
    }

    memory_repository!(InMemoryFavoriteSeriesRepository, FavoriteSeriesRepository, FavoriteSeries);
    memory_repository!(InMemoryIgnoredSeriesRepository, IgnoredSeriesRepository, IgnoredSeries);

    pub fn is_storage_error(err: &AppError) -> bool {
        matches!(err, AppError::Database(sea_orm::DbErr::Custom(msg)) if msg == "storage offline")
    }
}
