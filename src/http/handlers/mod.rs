pub mod feed;
pub mod game;
pub mod review;
pub mod social;
pub mod user;

pub use feed::activity_feed_handler;
pub use game::{add_game_handler, get_all_games_handler, get_game_handler};
pub use review::{
    create_review_handler, delete_review_handler, get_game_reviews_handler, update_review_handler,
};
pub use social::{
    follow_status_handler, follow_suggestions_handler, follow_user_handler,
    list_followers_handler, list_following_handler, mutual_follows_handler,
    unfollow_user_handler,
};
pub use user::{get_user_handler, register_user_handler};
