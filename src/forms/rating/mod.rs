mod add;
mod edit;

pub use add::AddRating as Add;
pub use edit::EditRating as Edit;
