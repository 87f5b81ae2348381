pub mod health_checks;
pub(crate) mod rating;

pub use health_checks::*;
