use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        activity_feed_handler, add_game_handler, create_review_handler, delete_review_handler,
        follow_status_handler, follow_suggestions_handler, follow_user_handler,
        get_all_games_handler, get_game_handler, get_game_reviews_handler, get_user_handler,
        list_followers_handler, list_following_handler, mutual_follows_handler,
        register_user_handler, unfollow_user_handler, update_review_handler,
    },
    middleware::{create_auth_rate_limiter, rate_limit_middleware},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    let auth_rate_limiter = create_auth_rate_limiter();
    let auth_routes = Router::new()
        .route("/users", post(register_user_handler))
        .route_layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(auth_rate_limiter.clone(), req, next)
        }));

    Router::new()
        .merge(auth_routes)
        .route("/users/{user_id}", get(get_user_handler))
        .route("/users/{user_id}/following", get(list_following_handler))
        .route("/users/{user_id}/followers", get(list_followers_handler))
        .route("/games", post(add_game_handler).get(get_all_games_handler))
        .route("/games/{game_id}", get(get_game_handler))
        .route("/games/{game_id}/reviews", get(get_game_reviews_handler))
        .route("/reviews", post(create_review_handler))
        .route(
            "/reviews/{review_id}",
            axum::routing::patch(update_review_handler).delete(delete_review_handler),
        )
        .route(
            "/social/follows/{target_id}",
            post(follow_user_handler)
                .delete(unfollow_user_handler)
                .get(follow_status_handler),
        )
        .route("/social/mutuals/{target_id}", get(mutual_follows_handler))
        .route("/social/suggestions", get(follow_suggestions_handler))
        .route("/feed", get(activity_feed_handler))
        .with_state(state)
}
