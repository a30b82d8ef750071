use std::collections::HashMap;

use entity::sea_orm_active_enums::TrailLiftRelation;
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::{
        api::{PaginationDto, StatusCountDto},
        lift::{AerialwayStatDto, LiftDto, LiftListParams, LiftSearchParams, TrailRefDto},
        resort::ResortSummaryDto,
    },
    server::{
        data::catalog::{
            lift::{LiftFilter, LiftRepository, LiftWithResort},
            trail_lift::TrailLiftRepository,
        },
        error::{not_found::NotFoundError, Error},
        service::search_term,
        util::{
            filter::parse_filter,
            pagination::{search_limit, PageRequest},
            terrain::round1,
        },
    },
};

pub struct LiftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LiftService<'a> {
    /// Creates a new instance of [`LiftService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Paginated lift list sorted by name, each lift carrying its resort summary
    pub async fn list(&self, params: &LiftListParams) -> Result<(Vec<LiftDto>, PaginationDto), Error> {
        let filter = LiftFilter {
            aerialway: parse_filter("aerialway", params.aerialway.as_deref())?,
            status: parse_filter("status", params.status.as_deref())?,
            lit: params.lit,
            oneway: params.oneway,
            resort_id: params.resort,
            area: None,
        };
        let page = PageRequest::new(params.page, params.limit);

        let (lifts, total) = LiftRepository::new(self.db).list(&filter, page).await?;
        let lifts = with_served_trails(self.db, lifts.into_iter().map(to_dto).collect()).await?;

        Ok((lifts, page.summary(total)))
    }

    pub async fn search(&self, params: &LiftSearchParams) -> Result<Vec<LiftDto>, Error> {
        let filter = LiftFilter {
            aerialway: parse_filter("aerialway", params.aerialway.as_deref())?,
            status: parse_filter("status", params.status.as_deref())?,
            resort_id: params.resort,
            ..Default::default()
        };

        let lifts = LiftRepository::new(self.db)
            .search(
                search_term(params.q.as_deref()),
                &filter,
                search_limit(params.limit),
            )
            .await?;

        Ok(lifts.into_iter().map(to_dto).collect())
    }

    /// Count, open count, average capacity and average ride time per aerialway kind
    pub async fn aerialway_stats(&self) -> Result<Vec<AerialwayStatDto>, Error> {
        let mut rows = LiftRepository::new(self.db)
            .aerialway_breakdown(None)
            .await?;
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.aerialway.cmp(&b.aerialway)));

        Ok(rows
            .into_iter()
            .map(|row| AerialwayStatDto {
                aerialway: row.aerialway,
                count: row.count,
                open: row.open,
                avg_capacity: row.avg_capacity.map(round1),
                avg_duration_min: row.avg_duration_min.map(round1),
            })
            .collect())
    }

    pub async fn status_stats(&self) -> Result<Vec<StatusCountDto>, Error> {
        let mut rows = LiftRepository::new(self.db).status_counts().await?;
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.status.cmp(&b.status)));

        Ok(rows
            .into_iter()
            .map(|row| StatusCountDto {
                status: row.status,
                count: row.count,
            })
            .collect())
    }

    pub async fn detail(&self, lift_id: i32) -> Result<LiftDto, Error> {
        let Some(lift) = LiftRepository::new(self.db).find_by_id(lift_id).await? else {
            return Err(NotFoundError::Lift(lift_id).into());
        };

        let mut lifts = with_served_trails(self.db, vec![to_dto(lift)]).await?;

        lifts.pop().ok_or_else(|| NotFoundError::Lift(lift_id).into())
    }
}

pub(crate) fn to_dto((lift, resort): LiftWithResort) -> LiftDto {
    let mut dto = LiftDto::from(lift);
    dto.resort = resort.as_ref().map(ResortSummaryDto::from);

    dto
}

/// Fills `serves_trails` with the trails that name each lift as their top lift
pub(crate) async fn with_served_trails<C: ConnectionTrait>(
    db: &C,
    mut lifts: Vec<LiftDto>,
) -> Result<Vec<LiftDto>, Error> {
    let positions: HashMap<i32, usize> = lifts
        .iter()
        .enumerate()
        .map(|(index, lift)| (lift.id, index))
        .collect();
    let lift_ids: Vec<i32> = positions.keys().copied().collect();

    let links = TrailLiftRepository::new(db)
        .trails_for_lifts(&lift_ids, TrailLiftRelation::TopLift)
        .await?;

    for (link, trail) in links {
        let (Some(trail), Some(&index)) = (trail, positions.get(&link.lift_id)) else {
            continue;
        };

        lifts[index].serves_trails.push(TrailRefDto::from(&trail));
    }

    Ok(lifts)
}

#[cfg(test)]
mod tests {
    mod search {
        use entity::sea_orm_active_enums::{AerialwayKind, OperationalStatus};
        use piste_test_utils::prelude::*;

        use crate::{model::lift::LiftSearchParams, server::service::lift::LiftService};

        /// Expect a case-insensitive name match limited to the requested count
        #[tokio::test]
        async fn matches_name_ignoring_case() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let resort = test.catalog().insert_mock_resort("Snowbird", "US").await?;
            for name in ["Peruvian Express", "Peruvian Tunnel", "Gadzoom"] {
                test.catalog()
                    .insert_mock_lift(resort.id, name, AerialwayKind::ChairLift, OperationalStatus::Open, None)
                    .await?;
            }

            let service = LiftService::new(&test.db);
            let lifts = service
                .search(&LiftSearchParams {
                    q: Some("peruvian".to_string()),
                    limit: Some(1),
                    ..Default::default()
                })
                .await
                .unwrap();

            assert_eq!(lifts.len(), 1);
            assert_eq!(lifts[0].name, "Peruvian Express");

            Ok(())
        }

        /// Expect a blank query to match every lift
        #[tokio::test]
        async fn blank_query_matches_all() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let resort = test.catalog().insert_mock_resort("Snowbird", "US").await?;
            for name in ["Peruvian Express", "Gadzoom"] {
                test.catalog()
                    .insert_mock_lift(resort.id, name, AerialwayKind::ChairLift, OperationalStatus::Open, None)
                    .await?;
            }

            let service = LiftService::new(&test.db);
            let lifts = service
                .search(&LiftSearchParams {
                    q: Some("  ".to_string()),
                    ..Default::default()
                })
                .await
                .unwrap();

            assert_eq!(lifts.len(), 2);

            Ok(())
        }
    }

    mod detail {
        use entity::sea_orm_active_enums::{
            AerialwayKind, OperationalStatus, TrailDifficulty, TrailLiftRelation,
        };
        use piste_test_utils::prelude::*;

        use crate::server::{
            data::catalog::trail_lift::TrailLiftRepository, service::lift::LiftService,
        };

        /// Expect only trails linked as top lift to be listed as served
        #[tokio::test]
        async fn lists_served_trails() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let resort = test.catalog().insert_mock_resort("Snowbird", "US").await?;
            let lift = test
                .catalog()
                .insert_mock_lift(resort.id, "Tram", AerialwayKind::CableCar, OperationalStatus::Open, Some(1000))
                .await?;
            let cirque = test
                .catalog()
                .insert_mock_trail(resort.id, "Cirque Traverse", TrailDifficulty::Expert, OperationalStatus::Open, None)
                .await?;
            let chip = test
                .catalog()
                .insert_mock_trail(resort.id, "Chip's Run", TrailDifficulty::Intermediate, OperationalStatus::Open, None)
                .await?;
            let link_repo = TrailLiftRepository::new(&test.db);
            link_repo
                .create(cirque.id, lift.id, TrailLiftRelation::TopLift)
                .await?;
            link_repo
                .create(chip.id, lift.id, TrailLiftRelation::ConnectsTo)
                .await?;

            let service = LiftService::new(&test.db);
            let detail = service.detail(lift.id).await.unwrap();

            assert_eq!(detail.serves_trails.len(), 1);
            assert_eq!(detail.serves_trails[0].name, "Cirque Traverse");
            assert_eq!(detail.resort.map(|r| r.name), Some("Snowbird".to_string()));

            Ok(())
        }
    }

    mod aerialway_stats {
        use entity::sea_orm_active_enums::{AerialwayKind, OperationalStatus};
        use piste_test_utils::prelude::*;

        use crate::server::service::lift::LiftService;

        /// Expect the most common aerialway kind first with averaged capacity
        #[tokio::test]
        async fn sorts_by_count() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let resort = test.catalog().insert_mock_resort("Snowbird", "US").await?;
            let lifts = [
                ("Gad 2", AerialwayKind::ChairLift, Some(1800)),
                ("Wilbere", AerialwayKind::ChairLift, Some(1201)),
                ("Tram", AerialwayKind::CableCar, Some(1000)),
            ];
            for (name, aerialway, capacity) in lifts {
                test.catalog()
                    .insert_mock_lift(resort.id, name, aerialway, OperationalStatus::Open, capacity)
                    .await?;
            }

            let service = LiftService::new(&test.db);
            let stats = service.aerialway_stats().await.unwrap();

            assert_eq!(stats[0].aerialway, "chair_lift");
            assert_eq!(stats[0].avg_capacity, Some(1500.5));
            assert_eq!(stats[1].aerialway, "cable_car");

            Ok(())
        }
    }
}
