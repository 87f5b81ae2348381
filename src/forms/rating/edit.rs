use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Full replacement of a rating. Omitted fields are stored as their zero value.
#[derive(Serialize, Deserialize, Debug, Default, Validate)]
#[serde(default)]
pub struct EditRating {
    pub target: i64,
    pub user_id: i64,
    pub score: i32,
    #[validate(max_length = 512)]
    pub comment: String,
    pub extra: Option<serde_json::Value>,
    pub active: bool,
    pub anonymous: bool,
    pub date: i64,
}

impl EditRating {
    pub fn into_rating(self, id: i64) -> models::Rating {
        models::Rating {
            id,
            target: self.target,
            user_id: self.user_id,
            score: self.score,
            comment: self.comment,
            extra: self.extra.unwrap_or_else(|| serde_json::json!({})),
            active: self.active,
            anonymous: self.anonymous,
            date: self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_become_zero_values() {
        let form: EditRating = serde_json::from_str(r#"{"target": 6345, "user_id": 1, "score": 10}"#).unwrap();
        let rating = form.into_rating(999);

        assert_eq!(999, rating.id);
        assert!(!rating.active);
        assert!(!rating.anonymous);
        assert_eq!("", rating.comment);
        assert_eq!(0, rating.date);
        assert_eq!(serde_json::json!({}), rating.extra);
    }

    #[test]
    fn test_comment_limit() {
        let form = EditRating {
            comment: "a".repeat(513),
            ..Default::default()
        };
        assert!(form.validate().is_err());

        let form = EditRating {
            comment: "a".repeat(512),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
    }
}
