use sea_orm_migration::{prelude::*, schema::*};

static IDX_RESORT_COUNTRY: &str = "idx-resort-country";
static IDX_RESORT_NAME: &str = "idx-resort-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resort::Table)
                    .if_not_exists()
                    .col(pk_auto(Resort::Id))
                    .col(string(Resort::Name))
                    .col(string_uniq(Resort::Slug))
                    .col(text_null(Resort::Description))
                    .col(string(Resort::Country))
                    .col(string_null(Resort::Region))
                    .col(string_null(Resort::City))
                    .col(double_null(Resort::Latitude))
                    .col(double_null(Resort::Longitude))
                    .col(string_null(Resort::Timezone))
                    .col(integer_null(Resort::Rank))
                    .col(double_null(Resort::Rating))
                    .col(string_null(Resort::Url))
                    .col(integer_null(Resort::TotalTrails))
                    .col(integer_null(Resort::TotalLifts))
                    .col(double_null(Resort::ElevationBaseM))
                    .col(double_null(Resort::ElevationSummitM))
                    .col(double_null(Resort::VerticalDropM))
                    .col(double_null(Resort::TotalSlopeLengthKm))
                    .col(double_null(Resort::AnnualSnowfallCm))
                    .col(date_null(Resort::SeasonOpen))
                    .col(date_null(Resort::SeasonClose))
                    .col(string_len_null(Resort::Currency, 3))
                    .col(double_null(Resort::AdultDayPrice))
                    .col(json(Resort::Features))
                    .col(double_null(Resort::AverageRating))
                    .col(integer(Resort::TotalReviews).default(0))
                    .col(boolean(Resort::IsActive).default(true))
                    .col(timestamp(Resort::CreatedAt))
                    .col(timestamp(Resort::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RESORT_COUNTRY)
                    .table(Resort::Table)
                    .col(Resort::Country)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RESORT_NAME)
                    .table(Resort::Table)
                    .col(Resort::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_RESORT_NAME).table(Resort::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RESORT_COUNTRY)
                    .table(Resort::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Resort::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Resort {
    Table,
    Id,
    Name,
    Slug,
    Description,
    Country,
    Region,
    City,
    Latitude,
    Longitude,
    Timezone,
    Rank,
    Rating,
    Url,
    TotalTrails,
    TotalLifts,
    ElevationBaseM,
    ElevationSummitM,
    VerticalDropM,
    TotalSlopeLengthKm,
    AnnualSnowfallCm,
    SeasonOpen,
    SeasonClose,
    Currency,
    AdultDayPrice,
    Features,
    AverageRating,
    TotalReviews,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
