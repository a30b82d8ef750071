use std::collections::HashMap;

use entity::sea_orm_active_enums::TrailLiftRelation;
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::{
        api::{PaginationDto, StatusCountDto},
        resort::ResortSummaryDto,
        trail::{LiftRefDto, TrailDifficultyStatDto, TrailDto, TrailListParams, TrailSearchParams},
    },
    server::{
        data::catalog::{
            trail::{TrailFilter, TrailRepository, TrailWithResort},
            trail_lift::TrailLiftRepository,
        },
        error::{not_found::NotFoundError, Error},
        service::search_term,
        util::{
            filter::parse_filter,
            pagination::{search_limit, PageRequest},
        },
    },
};

pub struct TrailService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrailService<'a> {
    /// Creates a new instance of [`TrailService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Paginated trail list sorted by name, each trail carrying its resort summary
    ///
    /// # Returns
    /// - `Ok((trails, pagination))` - Requested page with totals
    /// - `Err(Error::ValidationError)` - Unknown `difficulty` or `status` value
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn list(&self, params: &TrailListParams) -> Result<(Vec<TrailDto>, PaginationDto), Error> {
        let filter = TrailFilter {
            difficulty: parse_filter("difficulty", params.difficulty.as_deref())?,
            status: parse_filter("status", params.status.as_deref())?,
            piste_type: params.piste_type.clone(),
            grooming: params.grooming.clone(),
            lit: params.lit,
            resort_id: params.resort,
            area: None,
        };
        let page = PageRequest::new(params.page, params.limit);

        let (trails, total) = TrailRepository::new(self.db).list(&filter, page).await?;
        let trails = with_linked_lifts(self.db, trails.into_iter().map(to_dto).collect()).await?;

        Ok((trails, page.summary(total)))
    }

    pub async fn search(&self, params: &TrailSearchParams) -> Result<Vec<TrailDto>, Error> {
        let filter = TrailFilter {
            difficulty: parse_filter("difficulty", params.difficulty.as_deref())?,
            status: parse_filter("status", params.status.as_deref())?,
            resort_id: params.resort,
            ..Default::default()
        };

        let trails = TrailRepository::new(self.db)
            .search(
                search_term(params.q.as_deref()),
                &filter,
                search_limit(params.limit),
            )
            .await?;

        Ok(trails.into_iter().map(to_dto).collect())
    }

    /// Trail and open trail counts per difficulty, most common first
    pub async fn difficulty_stats(&self) -> Result<Vec<TrailDifficultyStatDto>, Error> {
        let mut rows = TrailRepository::new(self.db)
            .difficulty_breakdown(None)
            .await?;
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.difficulty.cmp(&b.difficulty)));

        Ok(rows
            .into_iter()
            .map(|row| TrailDifficultyStatDto {
                difficulty: row.difficulty,
                count: row.count,
                open: row.open,
            })
            .collect())
    }

    pub async fn status_stats(&self) -> Result<Vec<StatusCountDto>, Error> {
        let mut rows = TrailRepository::new(self.db).status_counts().await?;
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.status.cmp(&b.status)));

        Ok(rows
            .into_iter()
            .map(|row| StatusCountDto {
                status: row.status,
                count: row.count,
            })
            .collect())
    }

    /// Single trail with its resort summary and linked lifts
    pub async fn detail(&self, trail_id: i32) -> Result<TrailDto, Error> {
        let Some(trail) = TrailRepository::new(self.db).find_by_id(trail_id).await? else {
            return Err(NotFoundError::Trail(trail_id).into());
        };

        let mut trails = with_linked_lifts(self.db, vec![to_dto(trail)]).await?;

        trails
            .pop()
            .ok_or_else(|| NotFoundError::Trail(trail_id).into())
    }
}

pub(crate) fn to_dto((trail, resort): TrailWithResort) -> TrailDto {
    let mut dto = TrailDto::from(trail);
    dto.resort = resort.as_ref().map(ResortSummaryDto::from);

    dto
}

/// Fills `top_lifts` and `connects_to` of each trail from its lift links
pub(crate) async fn with_linked_lifts<C: ConnectionTrait>(
    db: &C,
    mut trails: Vec<TrailDto>,
) -> Result<Vec<TrailDto>, Error> {
    let positions: HashMap<i32, usize> = trails
        .iter()
        .enumerate()
        .map(|(index, trail)| (trail.id, index))
        .collect();
    let trail_ids: Vec<i32> = positions.keys().copied().collect();

    let links = TrailLiftRepository::new(db)
        .lifts_for_trails(&trail_ids)
        .await?;

    for (link, lift) in links {
        let (Some(lift), Some(&index)) = (lift, positions.get(&link.trail_id)) else {
            continue;
        };

        let lift_ref = LiftRefDto::from(&lift);
        match link.relation_type {
            TrailLiftRelation::TopLift => trails[index].top_lifts.push(lift_ref),
            TrailLiftRelation::ConnectsTo => trails[index].connects_to.push(lift_ref),
        }
    }

    Ok(trails)
}
