pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

pub use delete::delete_review;
pub use get::get_reviews_for_game;
pub use patch::update_review;
pub use post::create_review;
