use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_resort::Resort;

static IDX_RESORT_AREA_RESORT_ID: &str = "idx-resort_area-resort_id";
static FK_RESORT_AREA_RESORT_ID: &str = "fk-resort_area-resort_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResortArea::Table)
                    .if_not_exists()
                    .col(pk_auto(ResortArea::Id))
                    .col(integer(ResortArea::ResortId))
                    .col(string(ResortArea::Name))
                    .col(text_null(ResortArea::Description))
                    .col(integer_null(ResortArea::LiftCount))
                    .col(integer_null(ResortArea::TrailCount))
                    .col(json(ResortArea::Features))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RESORT_AREA_RESORT_ID)
                    .table(ResortArea::Table)
                    .col(ResortArea::ResortId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESORT_AREA_RESORT_ID)
                    .from_tbl(ResortArea::Table)
                    .from_col(ResortArea::ResortId)
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
                    .name(FK_RESORT_AREA_RESORT_ID)
                    .table(ResortArea::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RESORT_AREA_RESORT_ID)
                    .table(ResortArea::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ResortArea::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ResortArea {
    Table,
    Id,
    ResortId,
    Name,
    Description,
    LiftCount,
    TrailCount,
    Features,
}
