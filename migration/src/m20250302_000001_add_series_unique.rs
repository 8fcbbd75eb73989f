use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_favorite_series_unique")
                    .table(FavoriteSeries::Table)
                    .col(FavoriteSeries::UserId)
                    .col(FavoriteSeries::SeriesTmdbId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ignored_series_unique")
                    .table(IgnoredSeries::Table)
                    .col(IgnoredSeries::UserId)
                    .col(IgnoredSeries::SeriesTmdbId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop().name("idx_ignored_series_unique").table(IgnoredSeries::Table).to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_favorite_series_unique")
                    .table(FavoriteSeries::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteSeries {
    Table,
    UserId,
    SeriesTmdbId,
}

#[derive(DeriveIden)]
enum IgnoredSeries {
    Table,
    UserId,
    SeriesTmdbId,
}
