pub mod get;
pub mod post;
pub mod rating;

pub use get::{get_all_games, get_game};
pub use post::add_game;
pub use rating::recompute_game_rating;
