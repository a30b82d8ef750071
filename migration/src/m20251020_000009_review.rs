use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000001_resort::Resort, m20251020_000007_app_user::AppUser};

static IDX_REVIEW_RESORT_ID: &str = "idx-review-resort_id";
static IDX_REVIEW_USER_ID: &str = "idx-review-user_id";
static FK_REVIEW_RESORT_ID: &str = "fk-review-resort_id";
static FK_REVIEW_USER_ID: &str = "fk-review-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::UserId))
                    .col(integer(Review::ResortId))
                    .col(integer(Review::Rating))
                    .col(integer_null(Review::SnowQuality))
                    .col(integer_null(Review::TrailVariety))
                    .col(integer_null(Review::LiftEfficiency))
                    .col(integer_null(Review::ValueForMoney))
                    .col(integer_null(Review::FamilyFriendly))
                    .col(integer_null(Review::ApresSki))
                    .col(integer_null(Review::Accommodation))
                    .col(integer_null(Review::Dining))
                    .col(integer_null(Review::Staff))
                    .col(string_len(Review::Title, 100))
                    .col(text(Review::Content))
                    .col(date(Review::VisitDate))
                    .col(string_len_null(Review::VisitSeason, 24))
                    .col(string_len_null(Review::SkiLevel, 16))
                    .col(string_len_null(Review::GroupType, 24))
                    .col(string_len_null(Review::TripType, 24))
                    .col(string_len_null(Review::WouldReturn, 24))
                    .col(string_len_null(Review::WouldRecommend, 24))
                    .col(integer(Review::HelpfulVotes).default(0))
                    .col(integer(Review::UnhelpfulVotes).default(0))
                    .col(integer(Review::TotalVotes).default(0))
                    .col(double(Review::HelpfulnessRatio).default(0.0))
                    .col(boolean(Review::IsApproved).default(true))
                    .col(boolean(Review::IsFlagged).default(false))
                    .col(json(Review::FlagReasons))
                    .col(timestamp_null(Review::PublishedAt))
                    .col(timestamp(Review::CreatedAt))
                    .col(timestamp(Review::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REVIEW_RESORT_ID)
                    .table(Review::Table)
                    .col(Review::ResortId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REVIEW_USER_ID)
                    .table(Review::Table)
                    .col(Review::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REVIEW_RESORT_ID)
                    .from_tbl(Review::Table)
                    .from_col(Review::ResortId)
                    .to_tbl(Resort::Table)
                    .to_col(Resort::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REVIEW_USER_ID)
                    .from_tbl(Review::Table)
                    .from_col(Review::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
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
                    .name(FK_REVIEW_USER_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_REVIEW_RESORT_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REVIEW_USER_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REVIEW_RESORT_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Review {
    Table,
    Id,
    UserId,
    ResortId,
    Rating,
    SnowQuality,
    TrailVariety,
    LiftEfficiency,
    ValueForMoney,
    FamilyFriendly,
    ApresSki,
    Accommodation,
    Dining,
    Staff,
    Title,
    Content,
    VisitDate,
    VisitSeason,
    SkiLevel,
    GroupType,
    TripType,
    WouldReturn,
    WouldRecommend,
    HelpfulVotes,
    UnhelpfulVotes,
    TotalVotes,
    HelpfulnessRatio,
    IsApproved,
    IsFlagged,
    FlagReasons,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}
