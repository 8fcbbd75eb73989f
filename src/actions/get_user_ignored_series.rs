use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{GetSeriesQuery, IgnoredSeries, Paginated},
    repositories::IgnoredSeriesRepository,
};

pub struct GetUserIgnoredSeriesAction {
    repository: Arc<dyn IgnoredSeriesRepository>,
}

impl GetUserIgnoredSeriesAction {
    pub fn new(repository: Arc<dyn IgnoredSeriesRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, query: GetSeriesQuery) -> AppResult<Paginated<IgnoredSeries>> {
        let (data, total) = futures::try_join!(
            self.repository.find_many(&query.user_id, query.page()),
            self.repository.count(&query.user_id),
        )?;

        Ok(Paginated { data, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryIgnoredSeriesRepository;

    #[tokio::test]
    async fn second_page_holds_the_remainder() {
        let repo = Arc::new(InMemoryIgnoredSeriesRepository::new());
        for id in [60059, 1408, 4194] {
            repo.seed("u1", id);
        }
        let action = GetUserIgnoredSeriesAction::new(repo);

        let query = GetSeriesQuery { user_id: "u1".to_string(), page: 2, page_size: 2 };
        let result = action.execute(query).await.unwrap();

        let ids: Vec<i32> = result.data.iter().map(|s| s.series_tmdb_id).collect();
        assert_eq!(ids, vec![60059]);
        assert_eq!(result.total, 3);
    }

    #[tokio::test]
    async fn unknown_user_has_empty_list() {
        let action = GetUserIgnoredSeriesAction::new(Arc::new(InMemoryIgnoredSeriesRepository::new()));

        let query = GetSeriesQuery { user_id: "nobody".to_string(), page: 1, page_size: 10 };
        let result = action.execute(query).await.unwrap();

        assert!(result.data.is_empty());
        assert_eq!(result.total, 0);
    }
}
