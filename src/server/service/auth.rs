//! Account registration, login lockout and profile updates.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use chrono::{Duration, NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginDto, RegisterDto, UpdateProfileDto, UserDto},
    server::{
        data::user::{NewUser, UserRepository},
        error::{auth::AuthError, validation::ValidationError, Error},
    },
};

/// Failed attempts allowed before the account is locked
pub const MAX_LOGIN_ATTEMPTS: i32 = 5;
/// How long a locked account stays locked
pub const LOCK_DURATION_HOURS: i64 = 2;

const MAX_NAME_LEN: usize = 50;
const MIN_PASSWORD_LEN: usize = 6;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account
    ///
    /// Names are trimmed and the email lower-cased before storing.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::ValidationError)` - A name, the email or the password is invalid
    /// - `Err(Error::AuthError(AuthError::EmailAlreadyRegistered))` - Email in use
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register(&self, registration: &RegisterDto) -> Result<UserDto, Error> {
        let first_name = validate_name("first_name", &registration.first_name)?;
        let last_name = validate_name("last_name", &registration.last_name)?;
        let email = validate_email(&registration.email)?;
        validate_password(&registration.password)?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let user = user_repo
            .create(NewUser {
                first_name,
                last_name,
                email,
                password_hash: hash_password(&registration.password)?,
            })
            .await?;

        tracing::info!(user_id = user.id, "Registered new user");

        Ok(UserDto::from(user))
    }

    /// Verifies credentials, tracking failed attempts
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Credentials valid, counters cleared and login time stamped
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(Error::AuthError(AuthError::AccountLocked))` - Lock has not expired yet
    /// - `Err(Error::AuthError(AuthError::AccountDeactivated))` - Account is inactive
    pub async fn login(&self, credentials: &LoginDto) -> Result<UserDto, Error> {
        let email = credentials.email.trim().to_lowercase();
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let now = Utc::now().naive_utc();
        if user.lock_until.is_some_and(|until| until > now) {
            return Err(AuthError::AccountLocked.into());
        }
        if !user.is_active {
            return Err(AuthError::AccountDeactivated.into());
        }

        if !verify_password(&credentials.password, &user.password_hash)? {
            let (attempts, lock_until) = failed_attempt(user.login_attempts, user.lock_until, now);
            user_repo
                .record_failed_login(user.id, attempts, lock_until)
                .await?;

            if lock_until.is_some() {
                tracing::warn!(user_id = user.id, "Locked account after repeated failed logins");
            }

            return Err(AuthError::InvalidCredentials.into());
        }

        user_repo.record_login(user.id).await?;

        let user = user_repo
            .find_by_id(user.id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user.id))?;

        Ok(UserDto::from(user))
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Applies profile changes, re-checking email uniqueness and re-hashing a new password
    pub async fn update_profile(
        &self,
        user_id: i32,
        changes: &UpdateProfileDto,
    ) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let mut changes = changes.clone();
        if let Some(first_name) = &changes.first_name {
            changes.first_name = Some(validate_name("first_name", first_name)?);
        }
        if let Some(last_name) = &changes.last_name {
            changes.last_name = Some(validate_name("last_name", last_name)?);
        }
        if let Some(email) = &changes.email {
            let email = validate_email(email)?;
            if email != user.email && user_repo.find_by_email(&email).await?.is_some() {
                return Err(AuthError::EmailAlreadyRegistered.into());
            }
            changes.email = Some(email);
        }

        let password_hash = match &changes.password {
            Some(password) => {
                validate_password(password)?;
                Some(hash_password(password)?)
            }
            None => None,
        };

        let user = user_repo
            .update_profile(user, &changes, password_hash)
            .await?;

        Ok(UserDto::from(user))
    }
}

/// Attempt counter and lock expiry after one more failed login
///
/// An expired lock restarts the count at 1. Reaching [`MAX_LOGIN_ATTEMPTS`]
/// while unlocked sets a lock for [`LOCK_DURATION_HOURS`].
pub fn failed_attempt(
    login_attempts: i32,
    lock_until: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> (i32, Option<NaiveDateTime>) {
    match lock_until {
        Some(until) if until < now => (1, None),
        Some(until) => (login_attempts + 1, Some(until)),
        None => {
            let attempts = login_attempts + 1;
            let lock = (attempts >= MAX_LOGIN_ATTEMPTS)
                .then(|| now + Duration::hours(LOCK_DURATION_HOURS));

            (attempts, lock)
        }
    }
}

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Returns `Ok(false)` on mismatch and an error only for a malformed stored hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed_hash =
        argon2::PasswordHash::new(hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::PasswordHash(e.to_string())),
    }
}

fn validate_name(field: &str, name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::field(field, "Name is required"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::field(
            field,
            format!("Name cannot exceed {} characters", MAX_NAME_LEN),
        ));
    }

    Ok(name.to_string())
}

/// Lower-cases the email after checking it has a local part and a dotted domain
fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim().to_lowercase();

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(ValidationError::field(
            "email",
            "Please provide a valid email address",
        ));
    }

    Ok(email)
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::field(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }

    Ok(())
}
