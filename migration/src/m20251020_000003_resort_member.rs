use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_resort::Resort;

static IDX_RESORT_MEMBER_RESORT_ID: &str = "idx-resort_member-resort_id";
static IDX_RESORT_MEMBER_REF: &str = "idx-resort_member-ref_type-ref_id";
static FK_RESORT_MEMBER_RESORT_ID: &str = "fk-resort_member-resort_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResortMember::Table)
                    .if_not_exists()
                    .col(pk_auto(ResortMember::Id))
                    .col(integer(ResortMember::ResortId))
                    .col(integer(ResortMember::RefId))
                    .col(string_len(ResortMember::RefType, 16))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RESORT_MEMBER_RESORT_ID)
                    .table(ResortMember::Table)
                    .col(ResortMember::ResortId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RESORT_MEMBER_REF)
                    .table(ResortMember::Table)
                    .col(ResortMember::RefType)
                    .col(ResortMember::RefId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESORT_MEMBER_RESORT_ID)
                    .from_tbl(ResortMember::Table)
                    .from_col(ResortMember::ResortId)
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
                    .name(FK_RESORT_MEMBER_RESORT_ID)
                    .table(ResortMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RESORT_MEMBER_REF)
                    .table(ResortMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RESORT_MEMBER_RESORT_ID)
                    .table(ResortMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ResortMember::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ResortMember {
    Table,
    Id,
    ResortId,
    RefId,
    RefType,
}
