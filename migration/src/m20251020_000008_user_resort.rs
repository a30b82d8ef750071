use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000001_resort::Resort, m20251020_000007_app_user::AppUser};

static IDX_USER_RESORT_UNIQUE: &str = "idx-user_resort-user_id-resort_id-list";
static FK_USER_RESORT_USER_ID: &str = "fk-user_resort-user_id";
static FK_USER_RESORT_RESORT_ID: &str = "fk-user_resort-resort_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserResort::Table)
                    .if_not_exists()
                    .col(pk_auto(UserResort::Id))
                    .col(integer(UserResort::UserId))
                    .col(integer(UserResort::ResortId))
                    .col(string_len(UserResort::List, 16))
                    .col(timestamp(UserResort::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_RESORT_UNIQUE)
                    .table(UserResort::Table)
                    .col(UserResort::UserId)
                    .col(UserResort::ResortId)
                    .col(UserResort::List)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_RESORT_USER_ID)
                    .from_tbl(UserResort::Table)
                    .from_col(UserResort::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_RESORT_RESORT_ID)
                    .from_tbl(UserResort::Table)
                    .from_col(UserResort::ResortId)
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
                    .name(FK_USER_RESORT_RESORT_ID)
                    .table(UserResort::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_RESORT_USER_ID)
                    .table(UserResort::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_RESORT_UNIQUE)
                    .table(UserResort::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserResort::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserResort {
    Table,
    Id,
    UserId,
    ResortId,
    List,
    CreatedAt,
}
