use chrono::Utc;
use entity::sea_orm_active_enums::{OperationalStatus, TrailDifficulty};
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    model::catalog::NewTrail,
    util::{pagination::PageRequest, search::any_contains_ci},
};

/// Trail row paired with its owning resort
pub type TrailWithResort = (entity::trail::Model, Option<entity::resort::Model>);

#[derive(Debug, Clone, Default)]
pub struct TrailFilter {
    pub difficulty: Option<TrailDifficulty>,
    pub status: Option<OperationalStatus>,
    pub piste_type: Option<String>,
    pub grooming: Option<String>,
    pub lit: Option<bool>,
    pub resort_id: Option<i32>,
    pub area: Option<String>,
}

impl TrailFilter {
    fn apply(&self, mut query: Select<entity::trail::Entity>) -> Select<entity::trail::Entity> {
        if let Some(difficulty) = self.difficulty {
            query = query.filter(entity::trail::Column::Difficulty.eq(difficulty));
        }
        if let Some(status) = self.status {
            query = query.filter(entity::trail::Column::Status.eq(status));
        }
        if let Some(piste_type) = &self.piste_type {
            query = query.filter(entity::trail::Column::PisteType.eq(piste_type.as_str()));
        }
        if let Some(grooming) = &self.grooming {
            query = query.filter(entity::trail::Column::Grooming.eq(grooming.as_str()));
        }
        if let Some(lit) = self.lit {
            query = query.filter(entity::trail::Column::Lit.eq(lit));
        }
        if let Some(resort_id) = self.resort_id {
            query = query.filter(entity::trail::Column::ResortId.eq(resort_id));
        }
        if let Some(area) = &self.area {
            query = query.filter(entity::trail::Column::Area.eq(area.as_str()));
        }

        query
    }
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct DifficultyRow {
    pub difficulty: String,
    pub count: i64,
    pub open: i64,
    pub total_length_m: f64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct TrailStatusRow {
    pub status: String,
    pub count: i64,
}

pub struct TrailRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrailRepository<'a, C> {
    /// Creates a new instance of [`TrailRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a trail, recomputing its derived fields first
    pub async fn create(&self, trail: NewTrail) -> Result<entity::trail::Model, DbErr> {
        let trail = trail.with_derived_fields();
        let now = Utc::now().naive_utc();

        entity::prelude::Trail::insert(entity::trail::ActiveModel {
            resort_id: ActiveValue::Set(trail.resort_id),
            osm_id: ActiveValue::Set(trail.osm_id),
            name: ActiveValue::Set(trail.name),
            piste_type: ActiveValue::Set(trail.piste_type),
            difficulty: ActiveValue::Set(trail.difficulty),
            grooming: ActiveValue::Set(trail.grooming),
            status: ActiveValue::Set(trail.status),
            lit: ActiveValue::Set(trail.lit),
            oneway: ActiveValue::Set(trail.oneway),
            abandoned: ActiveValue::Set(trail.abandoned),
            gladed: ActiveValue::Set(trail.gladed),
            patrolled: ActiveValue::Set(trail.patrolled),
            grooming_priority: ActiveValue::Set(trail.grooming_priority),
            description: ActiveValue::Set(trail.description),
            latitude: ActiveValue::Set(trail.latitude),
            longitude: ActiveValue::Set(trail.longitude),
            area: ActiveValue::Set(trail.area),
            length_m: ActiveValue::Set(trail.length_m),
            top_elevation_m: ActiveValue::Set(trail.top_elevation_m),
            bottom_elevation_m: ActiveValue::Set(trail.bottom_elevation_m),
            vertical_drop_m: ActiveValue::Set(trail.vertical_drop_m),
            average_gradient: ActiveValue::Set(trail.average_gradient),
            technical_difficulty: ActiveValue::Set(trail.technical_difficulty),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<TrailWithResort>, DbErr> {
        entity::prelude::Trail::find_by_id(id)
            .find_also_related(entity::resort::Entity)
            .one(self.db)
            .await
    }

    /// Trails sorted by name with their resort, returning the page and the total match count
    pub async fn list(
        &self,
        filter: &TrailFilter,
        page: PageRequest,
    ) -> Result<(Vec<TrailWithResort>, u64), DbErr> {
        let paginator = filter
            .apply(entity::prelude::Trail::find())
            .order_by_asc(entity::trail::Column::Name)
            .order_by_asc(entity::trail::Column::Id)
            .find_also_related(entity::resort::Entity)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let trails = paginator.fetch_page(page.index()).await?;

        Ok((trails, total))
    }

    /// Case-insensitive search over name and description
    pub async fn search(
        &self,
        term: Option<&str>,
        filter: &TrailFilter,
        limit: u64,
    ) -> Result<Vec<TrailWithResort>, DbErr> {
        let mut query = filter.apply(entity::prelude::Trail::find());

        if let Some(term) = term {
            query = query.filter(any_contains_ci(
                &[
                    entity::trail::Column::Name,
                    entity::trail::Column::Description,
                ],
                term,
            ));
        }

        query
            .order_by_asc(entity::trail::Column::Name)
            .limit(limit)
            .find_also_related(entity::resort::Entity)
            .all(self.db)
            .await
    }

    /// Trails of one resort sorted by difficulty then name
    pub async fn find_by_resort(
        &self,
        resort_id: i32,
        filter: &TrailFilter,
    ) -> Result<Vec<entity::trail::Model>, DbErr> {
        filter
            .apply(entity::prelude::Trail::find())
            .filter(entity::trail::Column::ResortId.eq(resort_id))
            .order_by_asc(entity::trail::Column::Difficulty)
            .order_by_asc(entity::trail::Column::Name)
            .all(self.db)
            .await
    }

    /// Trail count, open count and total length per difficulty
    pub async fn difficulty_breakdown(
        &self,
        resort_id: Option<i32>,
    ) -> Result<Vec<DifficultyRow>, DbErr> {
        let mut query = entity::prelude::Trail::find()
            .select_only()
            .column(entity::trail::Column::Difficulty)
            .column_as(Expr::cust("COUNT(*)"), "count")
            .column_as(
                Expr::cust("SUM(CASE WHEN status = 'open' THEN 1 ELSE 0 END)"),
                "open",
            )
            .column_as(
                Expr::cust("CAST(COALESCE(SUM(length_m), 0) AS DOUBLE PRECISION)"),
                "total_length_m",
            )
            .group_by(entity::trail::Column::Difficulty);

        if let Some(resort_id) = resort_id {
            query = query.filter(entity::trail::Column::ResortId.eq(resort_id));
        }

        query.into_model::<DifficultyRow>().all(self.db).await
    }

    pub async fn status_counts(&self) -> Result<Vec<TrailStatusRow>, DbErr> {
        entity::prelude::Trail::find()
            .select_only()
            .column(entity::trail::Column::Status)
            .column_as(Expr::cust("COUNT(*)"), "count")
            .group_by(entity::trail::Column::Status)
            .into_model::<TrailStatusRow>()
            .all(self.db)
            .await
    }
}
