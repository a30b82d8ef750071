use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_resort::Resort;

static IDX_WEATHER_RESORT_ID_OBSERVED_AT: &str = "idx-weather-resort_id-observed_at";
static FK_WEATHER_RESORT_ID: &str = "fk-weather-resort_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Weather::Table)
                    .if_not_exists()
                    .col(pk_auto(Weather::Id))
                    .col(integer(Weather::ResortId))
                    .col(timestamp(Weather::ObservedAt))
                    .col(double(Weather::TemperatureC))
                    .col(double_null(Weather::FeelsLikeC))
                    .col(double_null(Weather::Humidity))
                    .col(double_null(Weather::WindSpeedKmh))
                    .col(double_null(Weather::WindDirectionDeg))
                    .col(string_len_null(Weather::WindDirectionText, 4))
                    .col(double_null(Weather::VisibilityKm))
                    .col(double_null(Weather::NewSnow24hCm))
                    .col(double_null(Weather::SnowDepthCm))
                    .col(string(Weather::ConditionsMain))
                    .col(string(Weather::ConditionsDescription))
                    .col(string_len(Weather::Overall, 16))
                    .col(string_len(Weather::VisibilityRating, 16))
                    .col(string_len(Weather::WindEffect, 16))
                    .col(string_len(Weather::TemperatureRating, 16))
                    .col(double_null(Weather::ChillFactor))
                    .col(string_len(Weather::Snowmaking, 16))
                    .col(string_len(Weather::LiftOperations, 16))
                    .col(timestamp(Weather::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WEATHER_RESORT_ID_OBSERVED_AT)
                    .table(Weather::Table)
                    .col(Weather::ResortId)
                    .col(Weather::ObservedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WEATHER_RESORT_ID)
                    .from_tbl(Weather::Table)
                    .from_col(Weather::ResortId)
                    .to_tbl(Resort::Table)
                    .to_col(Resort::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_WEATHER_RESORT_ID)
                    .table(Weather::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WEATHER_RESORT_ID_OBSERVED_AT)
                    .table(Weather::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Weather::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Weather {
    Table,
    Id,
    ResortId,
    ObservedAt,
    TemperatureC,
    FeelsLikeC,
    Humidity,
    WindSpeedKmh,
    WindDirectionDeg,
    WindDirectionText,
    VisibilityKm,
    #[sea_orm(iden = "new_snow_24h_cm")]
    NewSnow24hCm,
    SnowDepthCm,
    ConditionsMain,
    ConditionsDescription,
    Overall,
    VisibilityRating,
    WindEffect,
    TemperatureRating,
    ChillFactor,
    Snowmaking,
    LiftOperations,
    CreatedAt,
}
