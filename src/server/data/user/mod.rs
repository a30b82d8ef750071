pub mod user_resort;

use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{SkiLevel, UserRole};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::model::user::UpdateProfileDto;

/// Account to insert, with the email already normalized and the password hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with default profile and preferences
    pub async fn create(&self, user: NewUser) -> Result<entity::app_user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::AppUser::insert(entity::app_user::ActiveModel {
            first_name: ActiveValue::Set(user.first_name),
            last_name: ActiveValue::Set(user.last_name),
            email: ActiveValue::Set(user.email),
            password_hash: ActiveValue::Set(user.password_hash),
            ski_level: ActiveValue::Set(SkiLevel::default()),
            preferred_currency: ActiveValue::Set("USD".to_string()),
            language: ActiveValue::Set("en".to_string()),
            newsletter: ActiveValue::Set(true),
            weather_alerts: ActiveValue::Set(true),
            role: ActiveValue::Set(UserRole::default()),
            is_active: ActiveValue::Set(true),
            total_reviews: ActiveValue::Set(0),
            login_attempts: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Finds a user by an already lower-cased email
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Applies the present fields of `changes` to the user
    ///
    /// `changes.password` is ignored, the caller passes the new hash instead.
    pub async fn update_profile(
        &self,
        user: entity::app_user::Model,
        changes: &UpdateProfileDto,
        password_hash: Option<String>,
    ) -> Result<entity::app_user::Model, DbErr> {
        let mut user_am = user.into_active_model();

        if let Some(first_name) = &changes.first_name {
            user_am.first_name = ActiveValue::Set(first_name.clone());
        }
        if let Some(last_name) = &changes.last_name {
            user_am.last_name = ActiveValue::Set(last_name.clone());
        }
        if let Some(email) = &changes.email {
            user_am.email = ActiveValue::Set(email.clone());
        }
        if let Some(password_hash) = password_hash {
            user_am.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(phone) = &changes.phone {
            user_am.phone = ActiveValue::Set(Some(phone.clone()));
        }
        if let Some(location) = &changes.location {
            user_am.city = ActiveValue::Set(location.city.clone());
            user_am.state = ActiveValue::Set(location.state.clone());
            user_am.country = ActiveValue::Set(location.country.clone());
        }
        if let Some(ski_level) = changes.ski_level {
            user_am.ski_level = ActiveValue::Set(ski_level);
        }
        if let Some(snowboard_level) = changes.snowboard_level {
            user_am.snowboard_level = ActiveValue::Set(Some(snowboard_level));
        }
        if let Some(years) = changes.years_of_experience {
            user_am.years_of_experience = ActiveValue::Set(Some(years));
        }
        if let Some(currency) = &changes.preferred_currency {
            user_am.preferred_currency = ActiveValue::Set(currency.clone());
        }
        if let Some(language) = &changes.language {
            user_am.language = ActiveValue::Set(language.clone());
        }
        if let Some(newsletter) = changes.newsletter {
            user_am.newsletter = ActiveValue::Set(newsletter);
        }
        if let Some(weather_alerts) = changes.weather_alerts {
            user_am.weather_alerts = ActiveValue::Set(weather_alerts);
        }
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        user_am.update(self.db).await
    }

    /// Stores the failed attempt counter and optional lock expiry
    pub async fn record_failed_login(
        &self,
        user_id: i32,
        login_attempts: i32,
        lock_until: Option<NaiveDateTime>,
    ) -> Result<(), DbErr> {
        entity::prelude::AppUser::update_many()
            .col_expr(
                entity::app_user::Column::LoginAttempts,
                Expr::value(login_attempts),
            )
            .col_expr(entity::app_user::Column::LockUntil, Expr::value(lock_until))
            .filter(entity::app_user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Clears the lockout state and stamps the login time
    pub async fn record_login(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::AppUser::update_many()
            .col_expr(entity::app_user::Column::LoginAttempts, Expr::value(0))
            .col_expr(
                entity::app_user::Column::LockUntil,
                Expr::value(Option::<NaiveDateTime>::None),
            )
            .col_expr(
                entity::app_user::Column::LastLogin,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::app_user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Adds `delta` to the user's authored review count
    pub async fn adjust_total_reviews(&self, user_id: i32, delta: i32) -> Result<(), DbErr> {
        entity::prelude::AppUser::update_many()
            .col_expr(
                entity::app_user::Column::TotalReviews,
                Expr::col(entity::app_user::Column::TotalReviews).add(delta),
            )
            .filter(entity::app_user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
