use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::resort::CreateResortAreaDto;

pub struct AreaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AreaRepository<'a, C> {
    /// Creates a new instance of [`AreaRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create_many(
        &self,
        resort_id: i32,
        areas: &[CreateResortAreaDto],
    ) -> Result<(), DbErr> {
        if areas.is_empty() {
            return Ok(());
        }

        let models = areas.iter().map(|area| entity::resort_area::ActiveModel {
            resort_id: ActiveValue::Set(resort_id),
            name: ActiveValue::Set(area.name.trim().to_string()),
            description: ActiveValue::Set(area.description.clone()),
            lift_count: ActiveValue::Set(area.lift_count),
            trail_count: ActiveValue::Set(area.trail_count),
            features: ActiveValue::Set(serde_json::json!(area.features)),
            ..Default::default()
        });

        entity::prelude::ResortArea::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn find_by_resort(
        &self,
        resort_id: i32,
    ) -> Result<Vec<entity::resort_area::Model>, DbErr> {
        entity::prelude::ResortArea::find()
            .filter(entity::resort_area::Column::ResortId.eq(resort_id))
            .order_by_asc(entity::resort_area::Column::Id)
            .all(self.db)
            .await
    }
}
