//! Resort reviews and the cached rating they feed.
//!
//! Every write that adds or removes an approved review recomputes the owning
//! resort's `average_rating` and `total_reviews` in the same transaction.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::PaginationDto,
        review::{
            CategoryAverageDto, CategoryRatingsDto, CreateReviewDto, RatingBucketDto, ReviewDto,
            ReviewListParams, ReviewStatsDto,
        },
    },
    server::{
        data::{
            catalog::resort::ResortRepository,
            review::{ReviewFilter, ReviewRepository, ReviewWithAuthor},
            user::UserRepository,
        },
        error::{auth::AuthError, not_found::NotFoundError, validation::ValidationError, Error},
        service::resort::ResortService,
        util::{filter::parse_filter, pagination::PageRequest, terrain::round1},
    },
};

/// Reviews a single user may author
pub const MAX_REVIEWS_PER_USER: u64 = 100;

const MAX_TITLE_LEN: usize = 100;
const MIN_CONTENT_LEN: usize = 10;
const MAX_CONTENT_LEN: usize = 2000;
const MAX_FLAG_REASON_LEN: usize = 200;

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    /// Creates a new instance of [`ReviewService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Approved reviews of a resort, newest published first
    ///
    /// # Arguments
    /// - `resort_key` - Resort ID or slug
    /// - `params` - Page, limit and the optional `min_rating`, `ski_level` and `visit_season` filters
    ///
    /// # Returns
    /// - `Ok((reviews, pagination))` - Requested page with totals
    /// - `Err(Error::NotFoundError)` - Resort does not exist
    /// - `Err(Error::ValidationError)` - Unknown filter value or `min_rating` outside 1 to 5
    pub async fn list(
        &self,
        resort_key: &str,
        params: &ReviewListParams,
    ) -> Result<(Vec<ReviewDto>, PaginationDto), Error> {
        let resort = ResortService::new(self.db).resolve(resort_key).await?;

        if let Some(min_rating) = params.min_rating {
            validate_rating("min_rating", min_rating)?;
        }
        let filter = ReviewFilter {
            min_rating: params.min_rating,
            ski_level: parse_filter("ski_level", params.ski_level.as_deref())?,
            visit_season: parse_filter("visit_season", params.visit_season.as_deref())?,
        };
        let page = PageRequest::new(params.page, params.limit);

        let (reviews, total) = ReviewRepository::new(self.db)
            .list_approved(resort.id, &filter, page)
            .await?;

        Ok((
            reviews.into_iter().map(to_dto).collect(),
            page.summary(total),
        ))
    }

    /// Average, total, per-rating distribution and category averages of approved reviews
    pub async fn stats(&self, resort_key: &str) -> Result<ReviewStatsDto, Error> {
        let resort = ResortService::new(self.db).resolve(resort_key).await?;

        let reviews = ReviewRepository::new(self.db)
            .approved_for_resort(resort.id)
            .await?;

        let ratings: Vec<i32> = reviews.iter().map(|review| review.rating).collect();
        let categories: Vec<CategoryRatingsDto> = reviews
            .into_iter()
            .map(|review| ReviewDto::from(review).categories)
            .collect();

        Ok(summarize(&ratings, &categories))
    }

    /// Stores a new approved review and refreshes the resort rating
    ///
    /// # Returns
    /// - `Ok(ReviewDto)` - The stored review
    /// - `Err(Error::NotFoundError)` - Resort does not exist
    /// - `Err(Error::ValidationError)` - Rating, title, content or visit date invalid
    /// - `Err(Error::AuthError(AuthError::ReviewLimitReached))` - User already authored the maximum
    /// - `Err(Error::DbErr)` - Database operation failed, nothing is stored
    pub async fn create(
        &self,
        user_id: i32,
        resort_key: &str,
        review: &CreateReviewDto,
    ) -> Result<ReviewDto, Error> {
        let resort = ResortService::new(self.db).resolve(resort_key).await?;
        validate_review(review)?;

        let txn = self.db.begin().await?;

        let review_repo = ReviewRepository::new(&txn);
        if review_repo.count_by_user(user_id).await? >= MAX_REVIEWS_PER_USER {
            return Err(AuthError::ReviewLimitReached(user_id).into());
        }

        let created = review_repo.create(user_id, resort.id, review).await?;
        UserRepository::new(&txn)
            .adjust_total_reviews(user_id, 1)
            .await?;
        refresh_resort_rating(&txn, resort.id).await?;

        txn.commit().await?;

        Ok(ReviewDto::from(created))
    }

    /// Counts one helpful or unhelpful vote
    pub async fn vote(&self, review_id: i32, helpful: bool) -> Result<ReviewDto, Error> {
        let review_repo = ReviewRepository::new(self.db);
        let Some(review) = review_repo.find_by_id(review_id).await? else {
            return Err(NotFoundError::Review(review_id).into());
        };

        let review = review_repo.record_vote(review, helpful).await?;

        Ok(ReviewDto::from(review))
    }

    pub async fn flag(&self, review_id: i32, reason: &str) -> Result<ReviewDto, Error> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ValidationError::field("reason", "A reason is required to flag a review").into());
        }
        if reason.chars().count() > MAX_FLAG_REASON_LEN {
            return Err(ValidationError::field(
                "reason",
                format!("Reason cannot exceed {} characters", MAX_FLAG_REASON_LEN),
            )
            .into());
        }

        let review_repo = ReviewRepository::new(self.db);
        let Some(review) = review_repo.find_by_id(review_id).await? else {
            return Err(NotFoundError::Review(review_id).into());
        };

        let review = review_repo.flag(review, reason).await?;

        tracing::info!(review_id, "Review flagged for moderation");

        Ok(ReviewDto::from(review))
    }

    /// Deletes a review authored by `user_id` and refreshes the resort rating
    ///
    /// # Returns
    /// - `Ok(())` - Review deleted
    /// - `Err(Error::NotFoundError)` - Review does not exist
    /// - `Err(Error::AuthError(AuthError::Forbidden))` - Review belongs to another user
    pub async fn delete(&self, user_id: i32, review_id: i32) -> Result<(), Error> {
        let Some(review) = ReviewRepository::new(self.db)
            .find_by_id(review_id)
            .await?
        else {
            return Err(NotFoundError::Review(review_id).into());
        };

        if review.user_id != user_id {
            return Err(AuthError::Forbidden(user_id).into());
        }

        let txn = self.db.begin().await?;

        ReviewRepository::new(&txn).delete(review.id).await?;
        UserRepository::new(&txn)
            .adjust_total_reviews(review.user_id, -1)
            .await?;
        refresh_resort_rating(&txn, review.resort_id).await?;

        txn.commit().await?;

        Ok(())
    }
}

/// Recomputes the cached rounded mean and count of a resort's approved ratings
pub(crate) async fn refresh_resort_rating<C: ConnectionTrait>(
    db: &C,
    resort_id: i32,
) -> Result<(), Error> {
    let aggregate = ReviewRepository::new(db).rating_aggregate(resort_id).await?;
    let average = if aggregate.count > 0 {
        aggregate.average.map(round1)
    } else {
        None
    };

    ResortRepository::new(db)
        .update_rating(resort_id, average, aggregate.count as i32)
        .await?;

    Ok(())
}

fn to_dto((review, author): ReviewWithAuthor) -> ReviewDto {
    let mut dto = ReviewDto::from(review);
    dto.author = author.map(|user| format!("{} {}", user.first_name, user.last_name));

    dto
}

fn summarize(ratings: &[i32], categories: &[CategoryRatingsDto]) -> ReviewStatsDto {
    let total = ratings.len() as i64;
    let average_rating = (total > 0)
        .then(|| round1(ratings.iter().map(|r| *r as f64).sum::<f64>() / total as f64));

    let distribution = (1..=5)
        .rev()
        .map(|rating| RatingBucketDto {
            rating,
            count: ratings.iter().filter(|r| **r == rating).count() as i64,
        })
        .collect();

    let mut averages = Vec::new();
    for index in 0..9 {
        let scores: Vec<i32> = categories
            .iter()
            .filter_map(|c| c.entries()[index].1)
            .collect();
        if scores.is_empty() {
            continue;
        }

        let count = scores.len() as i64;
        averages.push(CategoryAverageDto {
            category: CategoryRatingsDto::default().entries()[index].0.to_string(),
            average: round1(scores.iter().map(|s| *s as f64).sum::<f64>() / count as f64),
            count,
        });
    }

    ReviewStatsDto {
        average_rating,
        total_reviews: total,
        distribution,
        categories: averages,
    }
}

fn validate_rating(field: &str, rating: i32) -> Result<(), ValidationError> {
    if !(1..=5).contains(&rating) {
        return Err(ValidationError::field(field, "Rating must be between 1 and 5"));
    }

    Ok(())
}

fn validate_review(review: &CreateReviewDto) -> Result<(), ValidationError> {
    validate_rating("rating", review.rating)?;
    for (category, rating) in review.categories.entries() {
        if let Some(rating) = rating {
            validate_rating(category, rating)?;
        }
    }

    let title_len = review.title.trim().chars().count();
    if title_len == 0 {
        return Err(ValidationError::field("title", "Review title is required"));
    }
    if title_len > MAX_TITLE_LEN {
        return Err(ValidationError::field(
            "title",
            format!("Title cannot exceed {} characters", MAX_TITLE_LEN),
        ));
    }

    let content_len = review.content.trim().chars().count();
    if !(MIN_CONTENT_LEN..=MAX_CONTENT_LEN).contains(&content_len) {
        return Err(ValidationError::field(
            "content",
            format!(
                "Review content must be between {} and {} characters",
                MIN_CONTENT_LEN, MAX_CONTENT_LEN
            ),
        ));
    }

    if review.visit_date > Utc::now().date_naive() {
        return Err(ValidationError::field(
            "visit_date",
            "Visit date cannot be in the future",
        ));
    }

    Ok(())
}
