use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_resort::Resort;

static IDX_LIFT_RESORT_ID: &str = "idx-lift-resort_id";
static IDX_LIFT_AERIALWAY: &str = "idx-lift-aerialway";
static FK_LIFT_RESORT_ID: &str = "fk-lift-resort_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lift::Table)
                    .if_not_exists()
                    .col(pk_auto(Lift::Id))
                    .col(integer(Lift::ResortId))
                    .col(big_integer_null(Lift::OsmId))
                    .col(string(Lift::Name))
                    .col(string_len(Lift::Aerialway, 16))
                    .col(integer_null(Lift::Capacity))
                    .col(double_null(Lift::SpeedMps))
                    .col(double_null(Lift::LengthM))
                    .col(double_null(Lift::DurationMin))
                    .col(double_null(Lift::BaseElevationM))
                    .col(double_null(Lift::TopElevationM))
                    .col(double_null(Lift::VerticalRiseM))
                    .col(string_len(Lift::Status, 16))
                    .col(boolean(Lift::Oneway).default(true))
                    .col(boolean(Lift::Lit).default(false))
                    .col(text_null(Lift::Description))
                    .col(double_null(Lift::Latitude))
                    .col(double_null(Lift::Longitude))
                    .col(string_null(Lift::Area))
                    .col(timestamp(Lift::CreatedAt))
                    .col(timestamp(Lift::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LIFT_RESORT_ID)
                    .table(Lift::Table)
                    .col(Lift::ResortId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LIFT_AERIALWAY)
                    .table(Lift::Table)
                    .col(Lift::Aerialway)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LIFT_RESORT_ID)
                    .from_tbl(Lift::Table)
                    .from_col(Lift::ResortId)
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
                    .name(FK_LIFT_RESORT_ID)
                    .table(Lift::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LIFT_AERIALWAY)
                    .table(Lift::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LIFT_RESORT_ID)
                    .table(Lift::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Lift::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Lift {
    Table,
    Id,
    ResortId,
    OsmId,
    Name,
    Aerialway,
    Capacity,
    SpeedMps,
    LengthM,
    DurationMin,
    BaseElevationM,
    TopElevationM,
    VerticalRiseM,
    Status,
    Oneway,
    Lit,
    Description,
    Latitude,
    Longitude,
    Area,
    CreatedAt,
    UpdatedAt,
}
