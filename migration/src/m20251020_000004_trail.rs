use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_resort::Resort;

static IDX_TRAIL_RESORT_ID: &str = "idx-trail-resort_id";
static IDX_TRAIL_DIFFICULTY: &str = "idx-trail-difficulty";
static FK_TRAIL_RESORT_ID: &str = "fk-trail-resort_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trail::Table)
                    .if_not_exists()
                    .col(pk_auto(Trail::Id))
                    .col(integer(Trail::ResortId))
                    .col(big_integer_null(Trail::OsmId))
                    .col(string(Trail::Name))
                    .col(string(Trail::PisteType))
                    .col(string_len(Trail::Difficulty, 16))
                    .col(string_null(Trail::Grooming))
                    .col(string_len(Trail::Status, 16))
                    .col(boolean(Trail::Lit).default(false))
                    .col(boolean(Trail::Oneway).default(false))
                    .col(boolean(Trail::Abandoned).default(false))
                    .col(boolean(Trail::Gladed).default(false))
                    .col(boolean(Trail::Patrolled).default(true))
                    .col(integer_null(Trail::GroomingPriority))
                    .col(text_null(Trail::Description))
                    .col(double_null(Trail::Latitude))
                    .col(double_null(Trail::Longitude))
                    .col(string_null(Trail::Area))
                    .col(double_null(Trail::LengthM))
                    .col(double_null(Trail::TopElevationM))
                    .col(double_null(Trail::BottomElevationM))
                    .col(double_null(Trail::VerticalDropM))
                    .col(double_null(Trail::AverageGradient))
                    .col(integer(Trail::TechnicalDifficulty))
                    .col(timestamp(Trail::CreatedAt))
                    .col(timestamp(Trail::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRAIL_RESORT_ID)
                    .table(Trail::Table)
                    .col(Trail::ResortId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRAIL_DIFFICULTY)
                    .table(Trail::Table)
                    .col(Trail::Difficulty)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRAIL_RESORT_ID)
                    .from_tbl(Trail::Table)
                    .from_col(Trail::ResortId)
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
                    .name(FK_TRAIL_RESORT_ID)
                    .table(Trail::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRAIL_DIFFICULTY)
                    .table(Trail::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRAIL_RESORT_ID)
                    .table(Trail::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Trail::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Trail {
    Table,
    Id,
    ResortId,
    OsmId,
    Name,
    PisteType,
    Difficulty,
    Grooming,
    Status,
    Lit,
    Oneway,
    Abandoned,
    Gladed,
    Patrolled,
    GroomingPriority,
    Description,
    Latitude,
    Longitude,
    Area,
    LengthM,
    TopElevationM,
    BottomElevationM,
    VerticalDropM,
    AverageGradient,
    TechnicalDifficulty,
    CreatedAt,
    UpdatedAt,
}
