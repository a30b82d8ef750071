use entity::sea_orm_active_enums::MemberType;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    /// Creates a new instance of [`MemberRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a trail or lift row as a member of a resort
    pub async fn create(
        &self,
        resort_id: i32,
        ref_id: i32,
        ref_type: MemberType,
    ) -> Result<entity::resort_member::Model, DbErr> {
        entity::prelude::ResortMember::insert(entity::resort_member::ActiveModel {
            resort_id: ActiveValue::Set(resort_id),
            ref_id: ActiveValue::Set(ref_id),
            ref_type: ActiveValue::Set(ref_type),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_resort(
        &self,
        resort_id: i32,
    ) -> Result<Vec<entity::resort_member::Model>, DbErr> {
        entity::prelude::ResortMember::find()
            .filter(entity::resort_member::Column::ResortId.eq(resort_id))
            .order_by_asc(entity::resort_member::Column::Id)
            .all(self.db)
            .await
    }
}
