mod add;
mod delete;
mod edit;
mod get;

pub use add::*;
pub use delete::*;
pub use edit::*;
pub use get::*;
