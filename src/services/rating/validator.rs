use super::{RatingError, RatingStore, Reason, ValidationError};
use crate::models::Rating;

pub const MAX_COMMENT_LENGTH: usize = 512;
pub const MAX_EXTRA_LENGTH: usize = 512;

/// Checks business rules before handing records to the wrapped store.
pub struct RatingValidator<S> {
    inner: S,
}

impl<S: RatingStore> RatingValidator<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn check_new(rating: &Rating) -> Result<(), RatingError> {
        let mut errors = ValidationError::new();

        check_reference(&mut errors, "target", rating.target);
        if rating.score == 0 {
            errors.add("score", Reason::Required);
        }
        check_reference(&mut errors, "user_id", rating.user_id);

        if rating.comment.chars().count() > MAX_COMMENT_LENGTH {
            errors.add("comment", Reason::TooLong);
        }

        match serde_json::to_string(&rating.extra) {
            Ok(raw) if raw.len() > MAX_EXTRA_LENGTH => errors.add("extra", Reason::TooLong),
            Ok(_) => {}
            Err(_) => errors.add("extra", Reason::Invalid),
        }

        errors.into_result()
    }
}

fn check_reference(errors: &mut ValidationError, field: &'static str, value: i64) {
    if value == 0 {
        errors.add(field, Reason::Required);
    } else if value < 0 {
        errors.add(field, Reason::Invalid);
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[async_trait::async_trait]
impl<S: RatingStore> RatingStore for RatingValidator<S> {
    async fn create(&self, mut rating: Rating) -> Result<Rating, RatingError> {
        if let Err(err) = Self::check_new(&rating) {
            tracing::info!(
                target_id = rating.target,
                user_id = rating.user_id,
                "Rating rejected: {}",
                err
            );
            return Err(err);
        }

        if rating.extra.is_null() {
            rating.extra = serde_json::json!({});
        }
        if rating.date == 0 {
            rating.date = now_millis();
        }
        rating.active = true;
        rating.anonymous = true;

        self.inner.create(rating).await
    }

    async fn update(&self, rating: Rating) -> Result<Rating, RatingError> {
        self.inner.update(rating).await
    }

    async fn delete(&self, id: i64) -> Result<(), RatingError> {
        self.inner.delete(id).await
    }

    async fn by_id(&self, id: i64) -> Result<Rating, RatingError> {
        self.inner.by_id(id).await
    }

    async fn by_target(&self, target: i64) -> Result<Vec<Rating>, RatingError> {
        self.inner.by_target(target).await
    }
}
