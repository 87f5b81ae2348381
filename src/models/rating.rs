use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, sqlx::FromRow)]
pub struct Rating {
    pub id: i64,
    pub target: i64,  // id of the rated object, owned by another service
    pub user_id: i64, // author
    pub score: i32,
    pub comment: String,
    pub extra: serde_json::Value, // free-form metadata attached by the client
    pub active: bool,             // inactive ratings are hidden from listings
    pub anonymous: bool,
    pub date: i64, // unix milliseconds
}

impl Rating {
    /// A rating carrying the defaults applied to every new record.
    pub fn new() -> Self {
        Self {
            extra: serde_json::json!({}),
            active: true,
            anonymous: true,
            ..Default::default()
        }
    }
}
