use crate::models;
use serde::{Deserialize, Serialize};

/// Fields left out of the request stay at their zero value and are
/// reported by the rating validator.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct AddRating {
    pub id: i64, // optional client-chosen id, 0 lets the database pick one
    pub target: i64,
    pub user_id: i64,
    pub score: i32,
    pub comment: Option<String>,
    pub extra: Option<serde_json::Value>,
    pub date: Option<i64>,
}

impl From<AddRating> for models::Rating {
    fn from(form: AddRating) -> Self {
        models::Rating {
            id: form.id,
            target: form.target,
            user_id: form.user_id,
            score: form.score,
            comment: form.comment.unwrap_or_default(),
            extra: form.extra.unwrap_or_default(),
            date: form.date.unwrap_or_default(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_reach_the_model_as_zero() {
        let form: AddRating = serde_json::from_str(r#"{"user_id": 1, "score": 8}"#).unwrap();
        let rating: models::Rating = form.into();

        assert_eq!(0, rating.id);
        assert_eq!(0, rating.target);
        assert_eq!(1, rating.user_id);
        assert_eq!("", rating.comment);
        assert!(rating.extra.is_null());
    }
}
