pub mod rating;

pub use rating::{new_rating_service, RatingError, RatingStore};
