use entity::sea_orm_active_enums::ResortList;
use sea_orm::DatabaseConnection;

use crate::{
    model::resort::ResortSummaryDto,
    server::{
        data::{catalog::resort::ResortRepository, user::user_resort::UserResortRepository},
        error::{not_found::NotFoundError, Error},
    },
};

/// Service for a user's favorite and wishlist resorts.
///
/// Each mutation returns the list as it stands afterwards.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn saved_resorts(
        &self,
        user_id: i32,
        list: ResortList,
    ) -> Result<Vec<ResortSummaryDto>, Error> {
        let resorts = UserResortRepository::new(self.db)
            .resorts(user_id, list)
            .await?;

        Ok(resorts.iter().map(ResortSummaryDto::from).collect())
    }

    /// Adds a resort to the list, doing nothing when it is already there
    ///
    /// # Returns
    /// - `Ok(Vec<ResortSummaryDto>)` - The updated list
    /// - `Err(Error::NotFoundError)` - Resort does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn save_resort(
        &self,
        user_id: i32,
        resort_id: i32,
        list: ResortList,
    ) -> Result<Vec<ResortSummaryDto>, Error> {
        if ResortRepository::new(self.db)
            .find_by_id(resort_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Resort(resort_id.to_string()).into());
        }

        UserResortRepository::new(self.db)
            .add(user_id, resort_id, list)
            .await?;

        self.saved_resorts(user_id, list).await
    }

    /// Removes a resort from the list, doing nothing when it is not there
    pub async fn unsave_resort(
        &self,
        user_id: i32,
        resort_id: i32,
        list: ResortList,
    ) -> Result<Vec<ResortSummaryDto>, Error> {
        let result = UserResortRepository::new(self.db)
            .remove(user_id, resort_id, list)
            .await?;

        if result.rows_affected == 0 {
            tracing::debug!(user_id, resort_id, "Resort was not on the user's list");
        }

        self.saved_resorts(user_id, list).await
    }
}
