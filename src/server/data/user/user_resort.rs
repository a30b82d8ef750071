use chrono::Utc;
use entity::sea_orm_active_enums::ResortList;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct UserResortRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserResortRepository<'a, C> {
    /// Creates a new instance of [`UserResortRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a resort to one of the user's lists
    ///
    /// Returns the existing entry when the resort is already on the list.
    pub async fn add(
        &self,
        user_id: i32,
        resort_id: i32,
        list: ResortList,
    ) -> Result<entity::user_resort::Model, DbErr> {
        if let Some(existing) = self.find(user_id, resort_id, list).await? {
            return Ok(existing);
        }

        entity::prelude::UserResort::insert(entity::user_resort::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            resort_id: ActiveValue::Set(resort_id),
            list: ActiveValue::Set(list),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find(
        &self,
        user_id: i32,
        resort_id: i32,
        list: ResortList,
    ) -> Result<Option<entity::user_resort::Model>, DbErr> {
        entity::prelude::UserResort::find()
            .filter(entity::user_resort::Column::UserId.eq(user_id))
            .filter(entity::user_resort::Column::ResortId.eq(resort_id))
            .filter(entity::user_resort::Column::List.eq(list))
            .one(self.db)
            .await
    }

    /// Removes a resort from one of the user's lists
    ///
    /// Returns OK regardless of the entry existing, check
    /// [`DeleteResult::rows_affected`] to confirm the removal.
    pub async fn remove(
        &self,
        user_id: i32,
        resort_id: i32,
        list: ResortList,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::UserResort::delete_many()
            .filter(entity::user_resort::Column::UserId.eq(user_id))
            .filter(entity::user_resort::Column::ResortId.eq(resort_id))
            .filter(entity::user_resort::Column::List.eq(list))
            .exec(self.db)
            .await
    }

    /// Resorts on one of the user's lists, most recently added first
    pub async fn resorts(
        &self,
        user_id: i32,
        list: ResortList,
    ) -> Result<Vec<entity::resort::Model>, DbErr> {
        let entries = entity::prelude::UserResort::find()
            .filter(entity::user_resort::Column::UserId.eq(user_id))
            .filter(entity::user_resort::Column::List.eq(list))
            .order_by_desc(entity::user_resort::Column::CreatedAt)
            .order_by_desc(entity::user_resort::Column::Id)
            .find_also_related(entity::resort::Entity)
            .all(self.db)
            .await?;

        Ok(entries.into_iter().filter_map(|(_, resort)| resort).collect())
    }
}
