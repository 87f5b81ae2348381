use super::{RatingError, RatingStore};
use crate::db;
use crate::models::Rating;
use sqlx::PgPool;

/// Table-backed store. Database failures come back as [`RatingError`]s.
#[derive(Clone)]
pub struct PgRatingStore {
    pool: PgPool,
}

impl PgRatingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn existing(&self, id: i64) -> Result<Rating, RatingError> {
        db::rating::fetch(&self.pool, id)
            .await?
            .ok_or(RatingError::NotFound)
    }
}

#[async_trait::async_trait]
impl RatingStore for PgRatingStore {
    async fn create(&self, rating: Rating) -> Result<Rating, RatingError> {
        db::rating::insert(&self.pool, rating).await
    }

    async fn update(&self, rating: Rating) -> Result<Rating, RatingError> {
        self.existing(rating.id).await?;
        db::rating::update(&self.pool, rating).await
    }

    async fn delete(&self, id: i64) -> Result<(), RatingError> {
        self.existing(id).await?;
        match db::rating::delete(&self.pool, id).await? {
            true => Ok(()),
            // Removed by someone else between the lookup and the delete.
            false => Err(RatingError::NotFound),
        }
    }

    async fn by_id(&self, id: i64) -> Result<Rating, RatingError> {
        self.existing(id).await
    }

    async fn by_target(&self, target: i64) -> Result<Vec<Rating>, RatingError> {
        db::rating::fetch_by_target(&self.pool, target).await
    }
}
