mod add_favorite_series;
mod add_ignored_series;
mod get_favorite_series;
mod get_user_ignored_series;
mod remove_favorite_series;
mod remove_ignored_series;

use std::sync::Arc;

pub use add_favorite_series::AddFavoriteSeriesAction;
pub use add_ignored_series::AddIgnoredSeriesAction;
pub use get_favorite_series::GetFavoriteSeriesAction;
pub use get_user_ignored_series::GetUserIgnoredSeriesAction;
pub use remove_favorite_series::RemoveFavoriteSeriesAction;
pub use remove_ignored_series::RemoveIgnoredSeriesAction;

use crate::{
    logger::Logger,
    repositories::{FavoriteSeriesRepository, IgnoredSeriesRepository},
};

pub const FAVORITE_SERIES: &str = "Favorite Series";
pub const IGNORED_SERIES: &str = "Ignored Series";

/// Every action, wired against one pair of repositories.
pub struct Actions {
    pub add_favorite_series: AddFavoriteSeriesAction,
    pub get_favorite_series: GetFavoriteSeriesAction,
    pub remove_favorite_series: RemoveFavoriteSeriesAction,
    pub add_ignored_series: AddIgnoredSeriesAction,
    pub get_user_ignored_series: GetUserIgnoredSeriesAction,
    pub remove_ignored_series: RemoveIgnoredSeriesAction,
}

impl Actions {
    pub fn new(
        favorites: Arc<dyn FavoriteSeriesRepository>,
        ignored: Arc<dyn IgnoredSeriesRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            add_favorite_series: AddFavoriteSeriesAction::new(favorites.clone(), logger.clone()),
            get_favorite_series: GetFavoriteSeriesAction::new(favorites.clone()),
            remove_favorite_series: RemoveFavoriteSeriesAction::new(favorites),
            add_ignored_series: AddIgnoredSeriesAction::new(ignored.clone(), logger),
            get_user_ignored_series: GetUserIgnoredSeriesAction::new(ignored.clone()),
            remove_ignored_series: RemoveIgnoredSeriesAction::new(ignored),
        }
    }
}
