use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::PaginationDto,
        lift::LiftDto,
        resort::{
            AerialwayBreakdownDto, CountryCountDto, CreateResortDto, DifficultyBreakdownDto,
            ResortAreaDto, ResortDetailDto, ResortDto, ResortFiguresDto, ResortLiftParams,
            ResortListParams, ResortMemberDto, ResortSearchParams, ResortStatsDto,
            ResortSummaryDto, ResortTrailParams,
        },
        trail::TrailDto,
    },
    server::{
        data::catalog::{
            area::AreaRepository,
            lift::{LiftFilter, LiftRepository},
            member::MemberRepository,
            resort::{ResortFilter, ResortRepository},
            trail::{TrailFilter, TrailRepository},
        },
        error::{not_found::NotFoundError, validation::ValidationError, Error},
        service::{lift::with_served_trails, search_term, trail::with_linked_lifts},
        util::{
            filter::parse_filter,
            pagination::{search_limit, PageRequest},
            slug::slugify,
            terrain::{elevation_difference, round1},
        },
    },
};

/// Service for browsing and creating resorts.
///
/// Every lookup taking a `key` accepts either the numeric resort ID or its slug.
pub struct ResortService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResortService<'a> {
    /// Creates a new instance of [`ResortService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Paginated list of active resorts sorted by name
    ///
    /// # Arguments
    /// - `params` - Page, limit and the optional `country`, `region` and `name` filters
    ///
    /// # Returns
    /// - `Ok((resorts, pagination))` - Requested page with totals
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn list(
        &self,
        params: &ResortListParams,
    ) -> Result<(Vec<ResortDto>, PaginationDto), Error> {
        let filter = ResortFilter {
            country: params.country.clone(),
            region: params.region.clone(),
            name: params.name.clone(),
        };
        let page = PageRequest::new(params.page, params.limit);

        let (resorts, total) = ResortRepository::new(self.db).list(&filter, page).await?;

        Ok((
            resorts.into_iter().map(ResortDto::from).collect(),
            page.summary(total),
        ))
    }

    pub async fn search(&self, params: &ResortSearchParams) -> Result<Vec<ResortDto>, Error> {
        let resorts = ResortRepository::new(self.db)
            .search(
                search_term(params.q.as_deref()),
                search_term(params.country.as_deref()),
                search_limit(params.limit),
            )
            .await?;

        Ok(resorts.into_iter().map(ResortDto::from).collect())
    }

    /// Active resort count per country, largest first then alphabetical
    pub async fn countries(&self) -> Result<Vec<CountryCountDto>, Error> {
        let mut rows = ResortRepository::new(self.db).country_counts().await?;
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.country.cmp(&b.country)));

        Ok(rows
            .into_iter()
            .map(|row| CountryCountDto {
                country: row.country,
                count: row.count,
            })
            .collect())
    }

    /// Resort with its areas and member references
    ///
    /// # Returns
    /// - `Ok(ResortDetailDto)` - Resort found by ID or slug
    /// - `Err(Error::NotFoundError)` - No resort matches `key`
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn detail(&self, key: &str) -> Result<ResortDetailDto, Error> {
        let resort = self.resolve(key).await?;

        let areas = AreaRepository::new(self.db).find_by_resort(resort.id).await?;
        let members = MemberRepository::new(self.db)
            .find_by_resort(resort.id)
            .await?;

        Ok(ResortDetailDto {
            resort: ResortDto::from(resort),
            areas: areas.into_iter().map(ResortAreaDto::from).collect(),
            members: members.into_iter().map(ResortMemberDto::from).collect(),
        })
    }

    /// Trails of a resort sorted by difficulty then name, with their linked lifts
    pub async fn trails(&self, key: &str, params: &ResortTrailParams) -> Result<Vec<TrailDto>, Error> {
        let resort = self.resolve(key).await?;
        let filter = TrailFilter {
            difficulty: parse_filter("difficulty", params.difficulty.as_deref())?,
            status: parse_filter("status", params.status.as_deref())?,
            area: search_term(params.area.as_deref()).map(str::to_string),
            ..Default::default()
        };

        let trails = TrailRepository::new(self.db)
            .find_by_resort(resort.id, &filter)
            .await?;

        with_linked_lifts(self.db, trails.into_iter().map(TrailDto::from).collect()).await
    }

    /// Lifts of a resort sorted by aerialway kind then name, with the trails they serve
    pub async fn lifts(&self, key: &str, params: &ResortLiftParams) -> Result<Vec<LiftDto>, Error> {
        let resort = self.resolve(key).await?;
        let filter = LiftFilter {
            aerialway: parse_filter("aerialway", params.aerialway.as_deref())?,
            status: parse_filter("status", params.status.as_deref())?,
            area: search_term(params.area.as_deref()).map(str::to_string),
            ..Default::default()
        };

        let lifts = LiftRepository::new(self.db)
            .find_by_resort(resort.id, &filter)
            .await?;

        with_served_trails(self.db, lifts.into_iter().map(LiftDto::from).collect()).await
    }

    /// Per-difficulty and per-aerialway breakdowns, largest first, alongside the resort's own figures
    pub async fn stats(&self, key: &str) -> Result<ResortStatsDto, Error> {
        let resort = self.resolve(key).await?;

        let mut trails = TrailRepository::new(self.db)
            .difficulty_breakdown(Some(resort.id))
            .await?;
        trails.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.difficulty.cmp(&b.difficulty)));
        let mut lifts = LiftRepository::new(self.db)
            .aerialway_breakdown(Some(resort.id))
            .await?;
        lifts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.aerialway.cmp(&b.aerialway)));
        let areas = AreaRepository::new(self.db).find_by_resort(resort.id).await?;

        Ok(ResortStatsDto {
            resort: ResortSummaryDto::from(&resort),
            stats: ResortFiguresDto::from(&resort),
            trails: trails
                .into_iter()
                .map(|row| DifficultyBreakdownDto {
                    difficulty: row.difficulty,
                    count: row.count,
                    total_length_m: round1(row.total_length_m),
                    open: row.open,
                })
                .collect(),
            lifts: lifts
                .into_iter()
                .map(|row| AerialwayBreakdownDto {
                    aerialway: row.aerialway,
                    count: row.count,
                    total_capacity: row.total_capacity,
                    open: row.open,
                })
                .collect(),
            areas: areas.into_iter().map(ResortAreaDto::from).collect(),
        })
    }

    /// Creates a resort together with its areas
    ///
    /// The slug is derived from the provided slug or the name and numbered
    /// when already taken. Vertical drop is derived from base and summit
    /// elevation.
    ///
    /// # Returns
    /// - `Ok(ResortDetailDto)` - The stored resort
    /// - `Err(Error::ValidationError)` - Missing name or country, or out of range coordinates
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, resort: &CreateResortDto) -> Result<ResortDetailDto, Error> {
        validate_resort(resort)?;

        let txn = self.db.begin().await?;

        let resort_repo = ResortRepository::new(&txn);
        let base_slug = slugify(resort.slug.as_deref().unwrap_or(&resort.name));
        let slug = resort_repo.available_slug(&base_slug).await?;
        let vertical_drop =
            elevation_difference(resort.elevation_summit_m, resort.elevation_base_m);

        let created = resort_repo.create(resort, &slug, vertical_drop).await?;

        let area_repo = AreaRepository::new(&txn);
        area_repo.create_many(created.id, &resort.areas).await?;
        let areas = area_repo.find_by_resort(created.id).await?;

        txn.commit().await?;

        tracing::info!(resort_id = created.id, slug = %created.slug, "Created resort");

        Ok(ResortDetailDto {
            resort: ResortDto::from(created),
            areas: areas.into_iter().map(ResortAreaDto::from).collect(),
            members: Vec::new(),
        })
    }

    /// Active or inactive resort by numeric ID or slug
    pub(crate) async fn resolve(&self, key: &str) -> Result<entity::resort::Model, Error> {
        ResortRepository::new(self.db)
            .find_by_key(key)
            .await?
            .ok_or_else(|| NotFoundError::Resort(key.to_string()).into())
    }
}

fn validate_resort(resort: &CreateResortDto) -> Result<(), ValidationError> {
    if resort.name.trim().is_empty() {
        return Err(ValidationError::field("name", "Resort name is required"));
    }
    if resort.name.trim().chars().count() > 100 {
        return Err(ValidationError::field(
            "name",
            "Resort name cannot exceed 100 characters",
        ));
    }
    if resort.country.trim().is_empty() {
        return Err(ValidationError::field("country", "Country is required"));
    }
    if resort.latitude.is_some_and(|lat| !(-90.0..=90.0).contains(&lat)) {
        return Err(ValidationError::field(
            "latitude",
            "Latitude must be between -90 and 90",
        ));
    }
    if resort
        .longitude
        .is_some_and(|lon| !(-180.0..=180.0).contains(&lon))
    {
        return Err(ValidationError::field(
            "longitude",
            "Longitude must be between -180 and 180",
        ));
    }

    Ok(())
}
