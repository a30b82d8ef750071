use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{SkiLevel, UserRole};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_mock_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<entity::app_user::Model, TestError> {
        self.insert_mock_user_with_role(email, password, UserRole::User)
            .await
    }

    pub async fn insert_mock_user_with_role(
        &self,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<entity::app_user::Model, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHash(e.to_string()))?
            .to_string();
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::AppUser::insert(entity::app_user::ActiveModel {
                first_name: ActiveValue::Set("Test".to_string()),
                last_name: ActiveValue::Set("Skier".to_string()),
                email: ActiveValue::Set(email.to_lowercase()),
                password_hash: ActiveValue::Set(password_hash),
                ski_level: ActiveValue::Set(SkiLevel::Beginner),
                preferred_currency: ActiveValue::Set("USD".to_string()),
                language: ActiveValue::Set("en".to_string()),
                newsletter: ActiveValue::Set(false),
                weather_alerts: ActiveValue::Set(false),
                role: ActiveValue::Set(role),
                is_active: ActiveValue::Set(true),
                total_reviews: ActiveValue::Set(0),
                login_attempts: ActiveValue::Set(0),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts an approved review without touching the resort's rating cache.
    pub async fn insert_mock_review(
        &self,
        user_id: i32,
        resort_id: i32,
        rating: i32,
    ) -> Result<entity::review::Model, TestError> {
        let now = Utc::now().naive_utc();
        let visit_date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap_or_default();

        Ok(
            entity::prelude::Review::insert(entity::review::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                resort_id: ActiveValue::Set(resort_id),
                rating: ActiveValue::Set(rating),
                title: ActiveValue::Set(format!("{} star visit", rating)),
                content: ActiveValue::Set("Groomers were in great shape all day.".to_string()),
                visit_date: ActiveValue::Set(visit_date),
                helpful_votes: ActiveValue::Set(0),
                unhelpful_votes: ActiveValue::Set(0),
                total_votes: ActiveValue::Set(0),
                helpfulness_ratio: ActiveValue::Set(0.0),
                is_approved: ActiveValue::Set(true),
                is_flagged: ActiveValue::Set(false),
                flag_reasons: ActiveValue::Set(serde_json::json!([])),
                published_at: ActiveValue::Set(Some(now)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
