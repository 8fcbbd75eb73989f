pub mod favorite_series;
pub mod ignored_series;
