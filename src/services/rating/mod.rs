//! Rating service.
//!
//! Callers talk to a [`RatingValidator`] which checks every new record and
//! then hands it to the [`PgRatingStore`]. Both implement [`RatingStore`], so
//! the validator can wrap any store (tests use an in-memory one).

mod error;
mod store;
mod validator;

pub use error::{RatingError, Reason, ValidationError};
pub use store::PgRatingStore;
pub use validator::{RatingValidator, MAX_COMMENT_LENGTH, MAX_EXTRA_LENGTH};

use crate::models::Rating;
use sqlx::PgPool;
use std::sync::Arc;

/// Persistence contract shared by the validator and the storage layer.
#[async_trait::async_trait]
pub trait RatingStore: Send + Sync {
    /// Persist a new rating and return it with its id assigned.
    async fn create(&self, rating: Rating) -> Result<Rating, RatingError>;

    /// Overwrite every field of an existing rating.
    async fn update(&self, rating: Rating) -> Result<Rating, RatingError>;

    async fn delete(&self, id: i64) -> Result<(), RatingError>;

    async fn by_id(&self, id: i64) -> Result<Rating, RatingError>;

    /// All ratings of a target, possibly none.
    async fn by_target(&self, target: i64) -> Result<Vec<Rating>, RatingError>;
}

/// The rating service as seen by handlers: validation in front of Postgres.
pub fn new_rating_service(pool: PgPool) -> Arc<dyn RatingStore> {
    Arc::new(RatingValidator::new(PgRatingStore::new(pool)))
}
