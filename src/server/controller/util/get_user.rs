use entity::sea_orm_active_enums::UserRole;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::auth::AuthService,
    },
};

/// Retrieves user information from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserDto)`: User found
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not found in database (session is cleared)
/// - `Err(Error::AuthError(AuthError::AccountDeactivated))`: User was deactivated after logging in
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let Some(user) = AuthService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    if !user.is_active {
        session.clear().await;

        return Err(AuthError::AccountDeactivated.into());
    }

    Ok(user)
}

/// Errors with [`AuthError::Forbidden`] unless the user holds one of `roles`
pub fn require_role(user: &UserDto, roles: &[UserRole]) -> Result<(), Error> {
    if !roles.contains(&user.role) {
        return Err(AuthError::Forbidden(user.id).into());
    }

    Ok(())
}
