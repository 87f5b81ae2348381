use crate::models;
use serde::Serialize;
use std::convert::From;

/// What anyone may see of a rating. The author stays hidden on anonymous ratings.
#[derive(Debug, Serialize, Default, PartialEq)]
pub struct Public {
    pub id: i64,
    pub target: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub score: i32,
    pub comment: String,
    pub extra: serde_json::Value,
    pub date: i64,
}

impl From<models::Rating> for Public {
    fn from(rating: models::Rating) -> Self {
        Self {
            id: rating.id,
            target: rating.target,
            user_id: (!rating.anonymous).then_some(rating.user_id),
            score: rating.score,
            comment: rating.comment,
            extra: rating.extra,
            date: rating.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_author_is_hidden() {
        let mut rating = models::Rating::new();
        rating.id = 7;
        rating.user_id = 42;

        let view = Public::from(rating.clone());
        assert_eq!(None, view.user_id);
        assert!(!serde_json::to_string(&view).unwrap().contains("user_id"));

        rating.anonymous = false;
        assert_eq!(Some(42), Public::from(rating).user_id);
    }
}
