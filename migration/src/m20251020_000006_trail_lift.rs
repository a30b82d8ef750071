use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000004_trail::Trail, m20251020_000005_lift::Lift};

static IDX_TRAIL_LIFT_TRAIL_ID: &str = "idx-trail_lift-trail_id";
static IDX_TRAIL_LIFT_LIFT_ID: &str = "idx-trail_lift-lift_id";
static FK_TRAIL_LIFT_TRAIL_ID: &str = "fk-trail_lift-trail_id";
static FK_TRAIL_LIFT_LIFT_ID: &str = "fk-trail_lift-lift_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrailLift::Table)
                    .if_not_exists()
                    .col(pk_auto(TrailLift::Id))
                    .col(integer(TrailLift::TrailId))
                    .col(integer(TrailLift::LiftId))
                    .col(string_len(TrailLift::RelationType, 16))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRAIL_LIFT_TRAIL_ID)
                    .table(TrailLift::Table)
                    .col(TrailLift::TrailId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRAIL_LIFT_LIFT_ID)
                    .table(TrailLift::Table)
                    .col(TrailLift::LiftId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRAIL_LIFT_TRAIL_ID)
                    .from_tbl(TrailLift::Table)
                    .from_col(TrailLift::TrailId)
                    .to_tbl(Trail::Table)
                    .to_col(Trail::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRAIL_LIFT_LIFT_ID)
                    .from_tbl(TrailLift::Table)
                    .from_col(TrailLift::LiftId)
                    .to_tbl(Lift::Table)
                    .to_col(Lift::Id)
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
                    .name(FK_TRAIL_LIFT_LIFT_ID)
                    .table(TrailLift::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TRAIL_LIFT_TRAIL_ID)
                    .table(TrailLift::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRAIL_LIFT_LIFT_ID)
                    .table(TrailLift::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRAIL_LIFT_TRAIL_ID)
                    .table(TrailLift::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TrailLift::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TrailLift {
    Table,
    Id,
    TrailId,
    LiftId,
    RelationType,
}
