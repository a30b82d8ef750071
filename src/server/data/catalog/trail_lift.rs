use entity::sea_orm_active_enums::TrailLiftRelation;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct TrailLiftRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrailLiftRepository<'a, C> {
    /// Creates a new instance of [`TrailLiftRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        trail_id: i32,
        lift_id: i32,
        relation_type: TrailLiftRelation,
    ) -> Result<entity::trail_lift::Model, DbErr> {
        entity::prelude::TrailLift::insert(entity::trail_lift::ActiveModel {
            trail_id: ActiveValue::Set(trail_id),
            lift_id: ActiveValue::Set(lift_id),
            relation_type: ActiveValue::Set(relation_type),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Links of the provided trails paired with the linked lift
    pub async fn lifts_for_trails(
        &self,
        trail_ids: &[i32],
    ) -> Result<Vec<(entity::trail_lift::Model, Option<entity::lift::Model>)>, DbErr> {
        if trail_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TrailLift::find()
            .filter(entity::trail_lift::Column::TrailId.is_in(trail_ids.to_vec()))
            .order_by_asc(entity::trail_lift::Column::Id)
            .find_also_related(entity::lift::Entity)
            .all(self.db)
            .await
    }

    /// Links of the provided lifts with the given relation, paired with the linked trail
    pub async fn trails_for_lifts(
        &self,
        lift_ids: &[i32],
        relation_type: TrailLiftRelation,
    ) -> Result<Vec<(entity::trail_lift::Model, Option<entity::trail::Model>)>, DbErr> {
        if lift_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TrailLift::find()
            .filter(entity::trail_lift::Column::LiftId.is_in(lift_ids.to_vec()))
            .filter(entity::trail_lift::Column::RelationType.eq(relation_type))
            .order_by_asc(entity::trail_lift::Column::Id)
            .find_also_related(entity::trail::Entity)
            .all(self.db)
            .await
    }
}
