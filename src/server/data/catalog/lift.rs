use chrono::Utc;
use entity::sea_orm_active_enums::{AerialwayKind, OperationalStatus};
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    model::catalog::NewLift,
    util::{pagination::PageRequest, search::any_contains_ci},
};

/// Lift row paired with its owning resort
pub type LiftWithResort = (entity::lift::Model, Option<entity::resort::Model>);

#[derive(Debug, Clone, Default)]
pub struct LiftFilter {
    pub aerialway: Option<AerialwayKind>,
    pub status: Option<OperationalStatus>,
    pub lit: Option<bool>,
    pub oneway: Option<bool>,
    pub resort_id: Option<i32>,
    pub area: Option<String>,
}

impl LiftFilter {
    fn apply(&self, mut query: Select<entity::lift::Entity>) -> Select<entity::lift::Entity> {
        if let Some(aerialway) = self.aerialway {
            query = query.filter(entity::lift::Column::Aerialway.eq(aerialway));
        }
        if let Some(status) = self.status {
            query = query.filter(entity::lift::Column::Status.eq(status));
        }
        if let Some(lit) = self.lit {
            query = query.filter(entity::lift::Column::Lit.eq(lit));
        }
        if let Some(oneway) = self.oneway {
            query = query.filter(entity::lift::Column::Oneway.eq(oneway));
        }
        if let Some(resort_id) = self.resort_id {
            query = query.filter(entity::lift::Column::ResortId.eq(resort_id));
        }
        if let Some(area) = &self.area {
            query = query.filter(entity::lift::Column::Area.eq(area.as_str()));
        }

        query
    }
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct AerialwayRow {
    pub aerialway: String,
    pub count: i64,
    pub open: i64,
    pub total_capacity: i64,
    pub avg_capacity: Option<f64>,
    pub avg_duration_min: Option<f64>,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct LiftStatusRow {
    pub status: String,
    pub count: i64,
}

pub struct LiftRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LiftRepository<'a, C> {
    /// Creates a new instance of [`LiftRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a lift, recomputing ride time and vertical rise first
    pub async fn create(&self, lift: NewLift) -> Result<entity::lift::Model, DbErr> {
        let lift = lift.with_derived_fields();
        let now = Utc::now().naive_utc();

        entity::prelude::Lift::insert(entity::lift::ActiveModel {
            resort_id: ActiveValue::Set(lift.resort_id),
            osm_id: ActiveValue::Set(lift.osm_id),
            name: ActiveValue::Set(lift.name),
            aerialway: ActiveValue::Set(lift.aerialway),
            capacity: ActiveValue::Set(lift.capacity),
            speed_mps: ActiveValue::Set(lift.speed_mps),
            length_m: ActiveValue::Set(lift.length_m),
            duration_min: ActiveValue::Set(lift.duration_min),
            base_elevation_m: ActiveValue::Set(lift.base_elevation_m),
            top_elevation_m: ActiveValue::Set(lift.top_elevation_m),
            vertical_rise_m: ActiveValue::Set(lift.vertical_rise_m),
            status: ActiveValue::Set(lift.status),
            oneway: ActiveValue::Set(lift.oneway),
            lit: ActiveValue::Set(lift.lit),
            description: ActiveValue::Set(lift.description),
            latitude: ActiveValue::Set(lift.latitude),
            longitude: ActiveValue::Set(lift.longitude),
            area: ActiveValue::Set(lift.area),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<LiftWithResort>, DbErr> {
        entity::prelude::Lift::find_by_id(id)
            .find_also_related(entity::resort::Entity)
            .one(self.db)
            .await
    }

    /// Lifts sorted by name with their resort, returning the page and the total match count
    pub async fn list(
        &self,
        filter: &LiftFilter,
        page: PageRequest,
    ) -> Result<(Vec<LiftWithResort>, u64), DbErr> {
        let paginator = filter
            .apply(entity::prelude::Lift::find())
            .order_by_asc(entity::lift::Column::Name)
            .order_by_asc(entity::lift::Column::Id)
            .find_also_related(entity::resort::Entity)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let lifts = paginator.fetch_page(page.index()).await?;

        Ok((lifts, total))
    }

    /// Case-insensitive search over name and description
    pub async fn search(
        &self,
        term: Option<&str>,
        filter: &LiftFilter,
        limit: u64,
    ) -> Result<Vec<LiftWithResort>, DbErr> {
        let mut query = filter.apply(entity::prelude::Lift::find());

        if let Some(term) = term {
            query = query.filter(any_contains_ci(
                &[entity::lift::Column::Name, entity::lift::Column::Description],
                term,
            ));
        }

        query
            .order_by_asc(entity::lift::Column::Name)
            .limit(limit)
            .find_also_related(entity::resort::Entity)
            .all(self.db)
            .await
    }

    /// Lifts of one resort sorted by aerialway kind then name
    pub async fn find_by_resort(
        &self,
        resort_id: i32,
        filter: &LiftFilter,
    ) -> Result<Vec<entity::lift::Model>, DbErr> {
        filter
            .apply(entity::prelude::Lift::find())
            .filter(entity::lift::Column::ResortId.eq(resort_id))
            .order_by_asc(entity::lift::Column::Aerialway)
            .order_by_asc(entity::lift::Column::Name)
            .all(self.db)
            .await
    }

    /// Lift count, open count and capacity figures per aerialway kind
    pub async fn aerialway_breakdown(
        &self,
        resort_id: Option<i32>,
    ) -> Result<Vec<AerialwayRow>, DbErr> {
        let mut query = entity::prelude::Lift::find()
            .select_only()
            .column(entity::lift::Column::Aerialway)
            .column_as(Expr::cust("COUNT(*)"), "count")
            .column_as(
                Expr::cust("SUM(CASE WHEN status = 'open' THEN 1 ELSE 0 END)"),
                "open",
            )
            .column_as(Expr::cust("COALESCE(SUM(capacity), 0)"), "total_capacity")
            .column_as(
                Expr::cust("CAST(AVG(capacity) AS DOUBLE PRECISION)"),
                "avg_capacity",
            )
            .column_as(
                Expr::cust("CAST(AVG(duration_min) AS DOUBLE PRECISION)"),
                "avg_duration_min",
            )
            .group_by(entity::lift::Column::Aerialway);

        if let Some(resort_id) = resort_id {
            query = query.filter(entity::lift::Column::ResortId.eq(resort_id));
        }

        query.into_model::<AerialwayRow>().all(self.db).await
    }

    pub async fn status_counts(&self) -> Result<Vec<LiftStatusRow>, DbErr> {
        entity::prelude::Lift::find()
            .select_only()
            .column(entity::lift::Column::Status)
            .column_as(Expr::cust("COUNT(*)"), "count")
            .group_by(entity::lift::Column::Status)
            .into_model::<LiftStatusRow>()
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use entity::sea_orm_active_enums::{AerialwayKind, OperationalStatus};
        use piste_test_utils::prelude::*;

        use crate::server::{data::catalog::lift::LiftRepository, model::catalog::NewLift};

        /// Expect ride time and vertical rise to be derived on insert
        #[tokio::test]
        async fn stores_derived_fields() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let resort = test.catalog().insert_mock_resort("Alta", "US").await?;

            let lift_repo = LiftRepository::new(&test.db);
            let lift = lift_repo
                .create(NewLift {
                    resort_id: resort.id,
                    osm_id: Some(1234),
                    name: "Supreme".to_string(),
                    aerialway: AerialwayKind::ChairLift,
                    capacity: Some(1800),
                    speed_mps: Some(2.5),
                    length_m: Some(1500.0),
                    duration_min: Some(20.0),
                    base_elevation_m: Some(2600.0),
                    top_elevation_m: Some(3200.0),
                    vertical_rise_m: None,
                    status: OperationalStatus::Open,
                    oneway: true,
                    lit: false,
                    description: None,
                    latitude: None,
                    longitude: None,
                    area: None,
                })
                .await?;

            assert_eq!(lift.duration_min, Some(10.0));
            assert_eq!(lift.vertical_rise_m, Some(600.0));

            Ok(())
        }
    }

    mod list {
        use entity::sea_orm_active_enums::{AerialwayKind, OperationalStatus};
        use piste_test_utils::prelude::*;

        use crate::server::{
            data::catalog::lift::{LiftFilter, LiftRepository},
            util::pagination::PageRequest,
        };

        /// Expect aerialway filter to narrow results
        #[tokio::test]
        async fn filters_by_aerialway() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let resort = test.catalog().insert_mock_resort("Alta", "US").await?;
            test.catalog()
                .insert_mock_lift(resort.id, "Collins", AerialwayKind::ChairLift, OperationalStatus::Open, Some(1800))
                .await?;
            test.catalog()
                .insert_mock_lift(resort.id, "Tow", AerialwayKind::RopeTow, OperationalStatus::Open, None)
                .await?;

            let lift_repo = LiftRepository::new(&test.db);
            let filter = LiftFilter {
                aerialway: Some(AerialwayKind::RopeTow),
                ..Default::default()
            };
            let (lifts, total) = lift_repo
                .list(&filter, PageRequest::new(None, None))
                .await?;

            assert_eq!(total, 1);
            assert_eq!(lifts[0].0.name, "Tow");
            assert!(lifts[0].1.is_some());

            Ok(())
        }
    }

    mod aerialway_breakdown {
        use entity::sea_orm_active_enums::{AerialwayKind, OperationalStatus};
        use piste_test_utils::prelude::*;

        use crate::server::data::catalog::lift::LiftRepository;

        /// Expect capacity totals and averages per aerialway kind
        #[tokio::test]
        async fn aggregates_capacity() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let resort = test.catalog().insert_mock_resort("Alta", "US").await?;
            test.catalog()
                .insert_mock_lift(resort.id, "Collins", AerialwayKind::ChairLift, OperationalStatus::Open, Some(1800))
                .await?;
            test.catalog()
                .insert_mock_lift(resort.id, "Wildcat", AerialwayKind::ChairLift, OperationalStatus::Closed, Some(1200))
                .await?;

            let lift_repo = LiftRepository::new(&test.db);
            let rows = lift_repo.aerialway_breakdown(None).await?;

            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].aerialway, "chair_lift");
            assert_eq!((rows[0].count, rows[0].open), (2, 1));
            assert_eq!(rows[0].total_capacity, 3000);
            assert_eq!(rows[0].avg_capacity, Some(1500.0));
            assert_eq!(rows[0].avg_duration_min, None);

            Ok(())
        }
    }
}
