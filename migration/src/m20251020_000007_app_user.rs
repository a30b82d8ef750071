use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AppUser::Id))
                    .col(string_len(AppUser::FirstName, 50))
                    .col(string_len(AppUser::LastName, 50))
                    .col(string_uniq(AppUser::Email))
                    .col(string(AppUser::PasswordHash))
                    .col(string_null(AppUser::Phone))
                    .col(string_null(AppUser::City))
                    .col(string_null(AppUser::State))
                    .col(string_null(AppUser::Country))
                    .col(string_len(AppUser::SkiLevel, 16))
                    .col(string_len_null(AppUser::SnowboardLevel, 16))
                    .col(integer_null(AppUser::YearsOfExperience))
                    .col(string_len(AppUser::PreferredCurrency, 3))
                    .col(string_len(AppUser::Language, 8))
                    .col(boolean(AppUser::Newsletter).default(false))
                    .col(boolean(AppUser::WeatherAlerts).default(false))
                    .col(string_len(AppUser::Role, 16))
                    .col(boolean(AppUser::IsActive).default(true))
                    .col(integer(AppUser::TotalReviews).default(0))
                    .col(integer(AppUser::LoginAttempts).default(0))
                    .col(timestamp_null(AppUser::LockUntil))
                    .col(timestamp_null(AppUser::LastLogin))
                    .col(timestamp(AppUser::CreatedAt))
                    .col(timestamp(AppUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AppUser {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PasswordHash,
    Phone,
    City,
    State,
    Country,
    SkiLevel,
    SnowboardLevel,
    YearsOfExperience,
    PreferredCurrency,
    Language,
    Newsletter,
    WeatherAlerts,
    Role,
    IsActive,
    TotalReviews,
    LoginAttempts,
    LockUntil,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}
