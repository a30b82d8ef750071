use chrono::Utc;
use entity::sea_orm_active_enums::{SkiLevel, VisitSeason};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, FromQueryResult, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{model::review::CreateReviewDto, server::util::pagination::PageRequest};

/// Review paired with its author
pub type ReviewWithAuthor = (entity::review::Model, Option<entity::app_user::Model>);

#[derive(Debug, Clone, Default)]
pub struct ReviewFilter {
    pub min_rating: Option<i32>,
    pub ski_level: Option<SkiLevel>,
    pub visit_season: Option<VisitSeason>,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct RatingAggregateRow {
    pub average: Option<f64>,
    pub count: i64,
}

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    /// Creates a new instance of [`ReviewRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an approved review, published immediately
    pub async fn create(
        &self,
        user_id: i32,
        resort_id: i32,
        review: &CreateReviewDto,
    ) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let categories = &review.categories;

        entity::prelude::Review::insert(entity::review::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            resort_id: ActiveValue::Set(resort_id),
            rating: ActiveValue::Set(review.rating),
            snow_quality: ActiveValue::Set(categories.snow_quality),
            trail_variety: ActiveValue::Set(categories.trail_variety),
            lift_efficiency: ActiveValue::Set(categories.lift_efficiency),
            value_for_money: ActiveValue::Set(categories.value_for_money),
            family_friendly: ActiveValue::Set(categories.family_friendly),
            apres_ski: ActiveValue::Set(categories.apres_ski),
            accommodation: ActiveValue::Set(categories.accommodation),
            dining: ActiveValue::Set(categories.dining),
            staff: ActiveValue::Set(categories.staff),
            title: ActiveValue::Set(review.title.trim().to_string()),
            content: ActiveValue::Set(review.content.trim().to_string()),
            visit_date: ActiveValue::Set(review.visit_date),
            visit_season: ActiveValue::Set(review.visit_season),
            ski_level: ActiveValue::Set(review.ski_level),
            group_type: ActiveValue::Set(review.group_type),
            trip_type: ActiveValue::Set(review.trip_type),
            would_return: ActiveValue::Set(review.would_return),
            would_recommend: ActiveValue::Set(review.would_recommend),
            helpful_votes: ActiveValue::Set(0),
            unhelpful_votes: ActiveValue::Set(0),
            total_votes: ActiveValue::Set(0),
            helpfulness_ratio: ActiveValue::Set(0.0),
            is_approved: ActiveValue::Set(true),
            is_flagged: ActiveValue::Set(false),
            flag_reasons: ActiveValue::Set(serde_json::json!([])),
            published_at: ActiveValue::Set(Some(now)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_id(&self, review_id: i32) -> Result<Option<entity::review::Model>, DbErr> {
        entity::prelude::Review::find_by_id(review_id)
            .one(self.db)
            .await
    }

    /// Approved reviews of a resort, newest published first
    pub async fn list_approved(
        &self,
        resort_id: i32,
        filter: &ReviewFilter,
        page: PageRequest,
    ) -> Result<(Vec<ReviewWithAuthor>, u64), DbErr> {
        let mut query = entity::prelude::Review::find()
            .filter(entity::review::Column::ResortId.eq(resort_id))
            .filter(entity::review::Column::IsApproved.eq(true));

        if let Some(min_rating) = filter.min_rating {
            query = query.filter(entity::review::Column::Rating.gte(min_rating));
        }
        if let Some(ski_level) = filter.ski_level {
            query = query.filter(entity::review::Column::SkiLevel.eq(ski_level));
        }
        if let Some(visit_season) = filter.visit_season {
            query = query.filter(entity::review::Column::VisitSeason.eq(visit_season));
        }

        let paginator = query
            .order_by_desc(entity::review::Column::PublishedAt)
            .order_by_desc(entity::review::Column::Id)
            .find_also_related(entity::app_user::Entity)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let reviews = paginator.fetch_page(page.index()).await?;

        Ok((reviews, total))
    }

    /// Every approved review of a resort
    pub async fn approved_for_resort(
        &self,
        resort_id: i32,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::ResortId.eq(resort_id))
            .filter(entity::review::Column::IsApproved.eq(true))
            .all(self.db)
            .await
    }

    /// Mean and count of approved ratings for a resort
    pub async fn rating_aggregate(&self, resort_id: i32) -> Result<RatingAggregateRow, DbErr> {
        let row = entity::prelude::Review::find()
            .select_only()
            .column_as(
                Expr::cust("CAST(AVG(rating) AS DOUBLE PRECISION)"),
                "average",
            )
            .column_as(Expr::cust("COUNT(*)"), "count")
            .filter(entity::review::Column::ResortId.eq(resort_id))
            .filter(entity::review::Column::IsApproved.eq(true))
            .into_model::<RatingAggregateRow>()
            .one(self.db)
            .await?;

        Ok(row.unwrap_or(RatingAggregateRow {
            average: None,
            count: 0,
        }))
    }

    pub async fn count_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Adds one helpful or unhelpful vote and refreshes the ratio
    pub async fn record_vote(
        &self,
        review: entity::review::Model,
        helpful: bool,
    ) -> Result<entity::review::Model, DbErr> {
        let (helpful_votes, unhelpful_votes) = if helpful {
            (review.helpful_votes + 1, review.unhelpful_votes)
        } else {
            (review.helpful_votes, review.unhelpful_votes + 1)
        };
        let total_votes = helpful_votes + unhelpful_votes;

        let mut review_am = review.into_active_model();
        review_am.helpful_votes = ActiveValue::Set(helpful_votes);
        review_am.unhelpful_votes = ActiveValue::Set(unhelpful_votes);
        review_am.total_votes = ActiveValue::Set(total_votes);
        review_am.helpfulness_ratio = ActiveValue::Set(helpfulness_ratio(helpful_votes, total_votes));
        review_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        review_am.update(self.db).await
    }

    /// Marks the review flagged, recording `reason` once
    pub async fn flag(
        &self,
        review: entity::review::Model,
        reason: &str,
    ) -> Result<entity::review::Model, DbErr> {
        let mut reasons: Vec<String> =
            serde_json::from_value(review.flag_reasons.clone()).unwrap_or_default();
        if !reason.is_empty() && !reasons.iter().any(|r| r == reason) {
            reasons.push(reason.to_string());
        }

        let mut review_am = review.into_active_model();
        review_am.is_flagged = ActiveValue::Set(true);
        review_am.flag_reasons = ActiveValue::Set(serde_json::json!(reasons));
        review_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        review_am.update(self.db).await
    }

    /// Deletes a review
    ///
    /// Returns OK regardless of the review existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, review_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Review::delete_by_id(review_id)
            .exec(self.db)
            .await
    }
}

/// Share of helpful votes, zero without any votes
pub fn helpfulness_ratio(helpful_votes: i32, total_votes: i32) -> f64 {
    if total_votes <= 0 {
        return 0.0;
    }

    helpful_votes as f64 / total_votes as f64
}

#[cfg(test)]
mod tests {
    /// Expect zero when nobody has voted
    #[test]
    fn ratio_without_votes_is_zero() {
        assert_eq!(super::helpfulness_ratio(0, 0), 0.0);
        assert_eq!(super::helpfulness_ratio(3, 4), 0.75);
    }

    mod list_approved {
        use piste_test_utils::prelude::*;
        use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

        use crate::server::{
            data::review::{ReviewFilter, ReviewRepository},
            util::pagination::PageRequest,
        };

        /// Expect unapproved reviews to be hidden and authors attached
        #[tokio::test]
        async fn hides_unapproved_reviews() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_user_tables().build().await?;
            let resort = test.catalog().insert_mock_resort("Alta", "US").await?;
            let user = test
                .user()
                .insert_mock_user("author@example.com", TEST_PASSWORD)
                .await?;
            test.user().insert_mock_review(user.id, resort.id, 5).await?;
            let hidden = test.user().insert_mock_review(user.id, resort.id, 1).await?;
            let mut hidden_am = hidden.into_active_model();
            hidden_am.is_approved = ActiveValue::Set(false);
            hidden_am.update(&test.db).await?;

            let review_repo = ReviewRepository::new(&test.db);
            let (reviews, total) = review_repo
                .list_approved(resort.id, &ReviewFilter::default(), PageRequest::new(None, None))
                .await?;

            assert_eq!(total, 1);
            assert_eq!(reviews[0].0.rating, 5);
            assert_eq!(reviews[0].1.as_ref().map(|u| u.id), Some(user.id));

            Ok(())
        }

        /// Expect min_rating to exclude lower ratings
        #[tokio::test]
        async fn filters_by_min_rating() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_user_tables().build().await?;
            let resort = test.catalog().insert_mock_resort("Alta", "US").await?;
            let user = test
                .user()
                .insert_mock_user("author@example.com", TEST_PASSWORD)
                .await?;
            for rating in [2, 4, 5] {
                test.user().insert_mock_review(user.id, resort.id, rating).await?;
            }

            let review_repo = ReviewRepository::new(&test.db);
            let filter = ReviewFilter {
                min_rating: Some(4),
                ..Default::default()
            };
            let (_, total) = review_repo
                .list_approved(resort.id, &filter, PageRequest::new(None, None))
                .await?;

            assert_eq!(total, 2);

            Ok(())
        }
    }

    mod rating_aggregate {
        use piste_test_utils::prelude::*;

        use crate::server::data::review::ReviewRepository;

        /// Expect the mean and count of approved ratings
        #[tokio::test]
        async fn averages_ratings() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_user_tables().build().await?;
            let resort = test.catalog().insert_mock_resort("Alta", "US").await?;
            let user = test
                .user()
                .insert_mock_user("author@example.com", TEST_PASSWORD)
                .await?;
            for rating in [3, 4, 4] {
                test.user().insert_mock_review(user.id, resort.id, rating).await?;
            }

            let review_repo = ReviewRepository::new(&test.db);
            let aggregate = review_repo.rating_aggregate(resort.id).await?;

            assert_eq!(aggregate.count, 3);
            let average = aggregate.average.unwrap();
            assert!((average - 11.0 / 3.0).abs() < 1e-9);

            Ok(())
        }

        /// Expect no average for a resort without reviews
        #[tokio::test]
        async fn empty_without_reviews() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_user_tables().build().await?;
            let resort = test.catalog().insert_mock_resort("Alta", "US").await?;

            let review_repo = ReviewRepository::new(&test.db);
            let aggregate = review_repo.rating_aggregate(resort.id).await?;

            assert_eq!(aggregate.count, 0);
            assert_eq!(aggregate.average, None);

            Ok(())
        }
    }

    mod record_vote {
        use piste_test_utils::prelude::*;

        use crate::server::data::review::ReviewRepository;

        /// Expect counters and ratio to follow each vote
        #[tokio::test]
        async fn updates_counters() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_user_tables().build().await?;
            let resort = test.catalog().insert_mock_resort("Alta", "US").await?;
            let user = test
                .user()
                .insert_mock_user("author@example.com", TEST_PASSWORD)
                .await?;
            let review = test.user().insert_mock_review(user.id, resort.id, 4).await?;

            let review_repo = ReviewRepository::new(&test.db);
            let review = review_repo.record_vote(review, true).await?;
            let review = review_repo.record_vote(review, true).await?;
            let review = review_repo.record_vote(review, false).await?;

            assert_eq!(review.helpful_votes, 2);
            assert_eq!(review.unhelpful_votes, 1);
            assert_eq!(review.total_votes, 3);
            assert!((review.helpfulness_ratio - 2.0 / 3.0).abs() < 1e-9);

            Ok(())
        }
    }

    mod flag {
        use piste_test_utils::prelude::*;

        use crate::server::data::review::ReviewRepository;

        /// Expect repeated reasons to be stored once
        #[tokio::test]
        async fn stores_reason_once() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_user_tables().build().await?;
            let resort = test.catalog().insert_mock_resort("Alta", "US").await?;
            let user = test
                .user()
                .insert_mock_user("author@example.com", TEST_PASSWORD)
                .await?;
            let review = test.user().insert_mock_review(user.id, resort.id, 1).await?;

            let review_repo = ReviewRepository::new(&test.db);
            let review = review_repo.flag(review, "spam").await?;
            let review = review_repo.flag(review, "spam").await?;
            let review = review_repo.flag(review, "off-topic").await?;

            assert!(review.is_flagged);
            assert_eq!(review.flag_reasons, serde_json::json!(["spam", "off-topic"]));

            Ok(())
        }
    }
}
