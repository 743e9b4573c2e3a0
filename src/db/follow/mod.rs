pub mod delete;
pub mod get;
pub mod post;

pub use delete::unfollow_user;
pub use get::{is_following, list_followers, list_following, mutual_follows};
pub use post::follow_user;
