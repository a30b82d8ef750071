use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::resort::CreateResortDto,
    server::util::{
        pagination::PageRequest,
        search::{any_contains_ci, contains_ci, equals_ci},
        slug::numbered_slug,
    },
};

/// Filters for the resort list endpoint
#[derive(Debug, Clone, Default)]
pub struct ResortFilter {
    pub country: Option<String>,
    pub region: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, FromQueryResult)]
pub struct CountryCountRow {
    pub country: String,
    pub count: i64,
}

pub struct ResortRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResortRepository<'a, C> {
    /// Creates a new instance of [`ResortRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a resort with an already resolved slug and derived vertical drop
    pub async fn create(
        &self,
        resort: &CreateResortDto,
        slug: &str,
        vertical_drop_m: Option<f64>,
    ) -> Result<entity::resort::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Resort::insert(entity::resort::ActiveModel {
            name: ActiveValue::Set(resort.name.trim().to_string()),
            slug: ActiveValue::Set(slug.to_string()),
            description: ActiveValue::Set(resort.description.clone()),
            country: ActiveValue::Set(resort.country.trim().to_string()),
            region: ActiveValue::Set(resort.region.clone()),
            city: ActiveValue::Set(resort.city.clone()),
            latitude: ActiveValue::Set(resort.latitude),
            longitude: ActiveValue::Set(resort.longitude),
            timezone: ActiveValue::Set(resort.timezone.clone()),
            rank: ActiveValue::Set(resort.rank),
            rating: ActiveValue::Set(resort.rating),
            url: ActiveValue::Set(resort.url.clone()),
            total_trails: ActiveValue::Set(resort.total_trails),
            total_lifts: ActiveValue::Set(resort.total_lifts),
            elevation_base_m: ActiveValue::Set(resort.elevation_base_m),
            elevation_summit_m: ActiveValue::Set(resort.elevation_summit_m),
            vertical_drop_m: ActiveValue::Set(vertical_drop_m),
            total_slope_length_km: ActiveValue::Set(resort.total_slope_length_km),
            annual_snowfall_cm: ActiveValue::Set(resort.annual_snowfall_cm),
            season_open: ActiveValue::Set(resort.season_open),
            season_close: ActiveValue::Set(resort.season_close),
            currency: ActiveValue::Set(resort.currency.clone()),
            adult_day_price: ActiveValue::Set(resort.adult_day_price),
            features: ActiveValue::Set(serde_json::json!(resort.features)),
            average_rating: ActiveValue::Set(None),
            total_reviews: ActiveValue::Set(0),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Resort::find()
            .filter(entity::resort::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// First of `base`, `base-2`, `base-3`, ... not used by another resort
    pub async fn available_slug(&self, base: &str) -> Result<String, DbErr> {
        let mut n = 1;
        loop {
            let candidate = numbered_slug(base, n);
            if !self.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
            n += 1;
        }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::resort::Model>, DbErr> {
        entity::prelude::Resort::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::resort::Model>, DbErr> {
        entity::prelude::Resort::find()
            .filter(entity::resort::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Looks a resort up by numeric ID first, falling back to its slug
    pub async fn find_by_key(&self, key: &str) -> Result<Option<entity::resort::Model>, DbErr> {
        if let Ok(id) = key.parse::<i32>() {
            if let Some(resort) = self.find_by_id(id).await? {
                return Ok(Some(resort));
            }
        }

        self.find_by_slug(key).await
    }

    /// Active resorts sorted by name, returning the page and the total match count
    pub async fn list(
        &self,
        filter: &ResortFilter,
        page: PageRequest,
    ) -> Result<(Vec<entity::resort::Model>, u64), DbErr> {
        let mut query = entity::prelude::Resort::find()
            .filter(entity::resort::Column::IsActive.eq(true))
            .order_by_asc(entity::resort::Column::Name)
            .order_by_asc(entity::resort::Column::Id);

        if let Some(country) = &filter.country {
            query = query.filter(equals_ci(entity::resort::Column::Country, country));
        }
        if let Some(region) = &filter.region {
            query = query.filter(contains_ci(entity::resort::Column::Region, region));
        }
        if let Some(name) = &filter.name {
            query = query.filter(contains_ci(entity::resort::Column::Name, name));
        }

        let paginator = query.paginate(self.db, page.limit);
        let total = paginator.num_items().await?;
        let resorts = paginator.fetch_page(page.index()).await?;

        Ok((resorts, total))
    }

    /// Case-insensitive search over name, description, country and region
    ///
    /// Without a term every active resort matches, up to `limit`.
    pub async fn search(
        &self,
        term: Option<&str>,
        country: Option<&str>,
        limit: u64,
    ) -> Result<Vec<entity::resort::Model>, DbErr> {
        let mut query =
            entity::prelude::Resort::find().filter(entity::resort::Column::IsActive.eq(true));

        if let Some(term) = term {
            query = query.filter(any_contains_ci(
                &[
                    entity::resort::Column::Name,
                    entity::resort::Column::Description,
                    entity::resort::Column::Country,
                    entity::resort::Column::Region,
                ],
                term,
            ));
        }
        if let Some(country) = country {
            query = query.filter(equals_ci(entity::resort::Column::Country, country));
        }

        query
            .order_by_asc(entity::resort::Column::Name)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Number of active resorts per country
    pub async fn country_counts(&self) -> Result<Vec<CountryCountRow>, DbErr> {
        entity::prelude::Resort::find()
            .select_only()
            .column(entity::resort::Column::Country)
            .column_as(Expr::cust("COUNT(*)"), "count")
            .filter(entity::resort::Column::IsActive.eq(true))
            .group_by(entity::resort::Column::Country)
            .into_model::<CountryCountRow>()
            .all(self.db)
            .await
    }

    /// Stores the cached review aggregate for a resort
    pub async fn update_rating(
        &self,
        resort_id: i32,
        average_rating: Option<f64>,
        total_reviews: i32,
    ) -> Result<(), DbErr> {
        entity::prelude::Resort::update_many()
            .col_expr(
                entity::resort::Column::AverageRating,
                Expr::value(average_rating),
            )
            .col_expr(
                entity::resort::Column::TotalReviews,
                Expr::value(total_reviews),
            )
            .col_expr(
                entity::resort::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::resort::Column::Id.eq(resort_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes every resort, cascading to catalog and review rows
    pub async fn delete_all(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::Resort::delete_many().exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use piste_test_utils::prelude::*;

        use crate::{model::resort::CreateResortDto, server::data::catalog::resort::ResortRepository};

        /// Expect the resort to be stored with the provided slug and features
        #[tokio::test]
        async fn creates_resort() -> Result<(), TestError> {
            let test = TestBuilder::new().with_catalog_tables().build().await?;

            let resort_repo = ResortRepository::new(&test.db);
            let dto = CreateResortDto {
                name: "Alta".to_string(),
                country: "United States".to_string(),
                features: vec!["ski-only".to_string()],
                ..Default::default()
            };
            let result = resort_repo.create(&dto, "alta", Some(650.0)).await;

            assert!(result.is_ok(), "Error: {:?}", result);
            let resort = result.unwrap();
            assert_eq!(resort.slug, "alta");
            assert_eq!(resort.vertical_drop_m, Some(650.0));
            assert_eq!(resort.features, serde_json::json!(["ski-only"]));
            assert!(resort.is_active);

            Ok(())
        }

        /// Expect Error when inserting a duplicate slug
        #[tokio::test]
        async fn fails_for_duplicate_slug() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_catalog_tables()
                .with_mock_resort("Alta", "United States")
                .build()
                .await?;

            let resort_repo = ResortRepository::new(&test.db);
            let dto = CreateResortDto {
                name: "Alta".to_string(),
                country: "United States".to_string(),
                ..Default::default()
            };
            let result = resort_repo.create(&dto, "alta", None).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod find_by_key {
        use piste_test_utils::prelude::*;

        use crate::server::data::catalog::resort::ResortRepository;

        /// Expect numeric keys to match IDs and other keys to match slugs
        #[tokio::test]
        async fn finds_by_id_or_slug() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let resort = test
                .catalog()
                .insert_mock_resort("Jackson Hole", "United States")
                .await?;

            let resort_repo = ResortRepository::new(&test.db);
            let by_id = resort_repo.find_by_key(&resort.id.to_string()).await?;
            let by_slug = resort_repo.find_by_key("jackson-hole").await?;
            let missing = resort_repo.find_by_key("nowhere").await?;

            assert_eq!(by_id.map(|r| r.id), Some(resort.id));
            assert_eq!(by_slug.map(|r| r.id), Some(resort.id));
            assert!(missing.is_none());

            Ok(())
        }
    }

    mod available_slug {
        use piste_test_utils::prelude::*;

        use crate::server::data::catalog::resort::ResortRepository;

        /// Expect the base slug when unused and a numbered one after collisions
        #[tokio::test]
        async fn numbers_taken_slugs() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            test.catalog().insert_mock_resort("Big Sky", "US").await?;

            let resort_repo = ResortRepository::new(&test.db);
            let fresh = resort_repo.available_slug("alta").await?;
            let taken = resort_repo.available_slug("big-sky").await?;

            assert_eq!(fresh, "alta");
            assert_eq!(taken, "big-sky-2");

            Ok(())
        }
    }

    mod list {
        use piste_test_utils::prelude::*;

        use crate::server::{
            data::catalog::resort::{ResortFilter, ResortRepository},
            util::pagination::PageRequest,
        };

        /// Expect resorts sorted by name and split into pages
        #[tokio::test]
        async fn paginates_sorted_by_name() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_catalog_tables()
                .with_mock_resort("Zermatt", "Switzerland")
                .with_mock_resort("Alta", "United States")
                .with_mock_resort("Niseko", "Japan")
                .build()
                .await?;

            let resort_repo = ResortRepository::new(&test.db);
            let (first, total) = resort_repo
                .list(&ResortFilter::default(), PageRequest::new(Some(1), Some(2)))
                .await?;
            let (second, _) = resort_repo
                .list(&ResortFilter::default(), PageRequest::new(Some(2), Some(2)))
                .await?;

            assert_eq!(total, 3);
            let names: Vec<_> = first.iter().map(|r| r.name.as_str()).collect();
            assert_eq!(names, vec!["Alta", "Niseko"]);
            assert_eq!(second.len(), 1);
            assert_eq!(second[0].name, "Zermatt");

            Ok(())
        }

        /// Expect country to match case-insensitively and name as a substring
        #[tokio::test]
        async fn filters_by_country_and_name() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_catalog_tables()
                .with_mock_resort("Zermatt", "Switzerland")
                .with_mock_resort("Verbier", "Switzerland")
                .with_mock_resort("Alta", "United States")
                .build()
                .await?;

            let resort_repo = ResortRepository::new(&test.db);
            let filter = ResortFilter {
                country: Some("SWITZERLAND".to_string()),
                name: Some("ERM".to_string()),
                ..Default::default()
            };
            let (resorts, total) = resort_repo
                .list(&filter, PageRequest::new(None, None))
                .await?;

            assert_eq!(total, 1);
            assert_eq!(resorts[0].name, "Zermatt");

            Ok(())
        }
    }

    mod search {
        use piste_test_utils::prelude::*;

        use crate::server::data::catalog::resort::ResortRepository;

        /// Expect matches on country as well as name
        #[tokio::test]
        async fn matches_any_text_column() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_catalog_tables()
                .with_mock_resort("Zermatt", "Switzerland")
                .with_mock_resort("Swiss Valley", "United States")
                .with_mock_resort("Alta", "United States")
                .build()
                .await?;

            let resort_repo = ResortRepository::new(&test.db);
            let result = resort_repo.search(Some("swi"), None, 10).await?;

            let names: Vec<_> = result.iter().map(|r| r.name.as_str()).collect();
            assert_eq!(names, vec!["Swiss Valley", "Zermatt"]);

            Ok(())
        }

        /// Expect LIKE wildcards in the term to be matched literally
        #[tokio::test]
        async fn escapes_wildcards() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_catalog_tables()
                .with_mock_resort("Alta", "United States")
                .build()
                .await?;

            let resort_repo = ResortRepository::new(&test.db);
            let result = resort_repo.search(Some("%"), None, 10).await?;

            assert!(result.is_empty());

            Ok(())
        }
    }

    mod country_counts {
        use piste_test_utils::prelude::*;

        use crate::server::data::catalog::resort::ResortRepository;

        /// Expect one row per country with its resort count
        #[tokio::test]
        async fn groups_by_country() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_catalog_tables()
                .with_mock_resort("Zermatt", "Switzerland")
                .with_mock_resort("Verbier", "Switzerland")
                .with_mock_resort("Alta", "United States")
                .build()
                .await?;

            let resort_repo = ResortRepository::new(&test.db);
            let mut rows = resort_repo.country_counts().await?;
            rows.sort_by(|a, b| a.country.cmp(&b.country));

            assert_eq!(rows.len(), 2);
            assert_eq!((rows[0].country.as_str(), rows[0].count), ("Switzerland", 2));
            assert_eq!((rows[1].country.as_str(), rows[1].count), ("United States", 1));

            Ok(())
        }
    }

    mod update_rating {
        use piste_test_utils::prelude::*;

        use crate::server::data::catalog::resort::ResortRepository;

        /// Expect the cached aggregate to be replaced
        #[tokio::test]
        async fn stores_rating() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_catalog_tables().build().await?;
            let resort = test.catalog().insert_mock_resort("Alta", "US").await?;

            let resort_repo = ResortRepository::new(&test.db);
            resort_repo.update_rating(resort.id, Some(4.5), 2).await?;
            let updated = resort_repo.find_by_id(resort.id).await?.unwrap();

            assert_eq!(updated.average_rating, Some(4.5));
            assert_eq!(updated.total_reviews, 2);

            Ok(())
        }
    }
}
