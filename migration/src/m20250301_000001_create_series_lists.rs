use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteSeries::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteSeries::Id))
                    .col(string(FavoriteSeries::UserId))
                    .col(integer(FavoriteSeries::SeriesTmdbId))
                    .col(big_integer(FavoriteSeries::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favorite_series_user_created")
                    .table(FavoriteSeries::Table)
                    .col(FavoriteSeries::UserId)
                    .col(FavoriteSeries::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IgnoredSeries::Table)
                    .if_not_exists()
                    .col(pk_auto(IgnoredSeries::Id))
                    .col(string(IgnoredSeries::UserId))
                    .col(integer(IgnoredSeries::SeriesTmdbId))
                    .col(big_integer(IgnoredSeries::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ignored_series_user_created")
                    .table(IgnoredSeries::Table)
                    .col(IgnoredSeries::UserId)
                    .col(IgnoredSeries::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(IgnoredSeries::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(FavoriteSeries::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteSeries {
    Table,
    Id,
    UserId,
    SeriesTmdbId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum IgnoredSeries {
    Table,
    Id,
    UserId,
    SeriesTmdbId,
    CreatedAt,
}
