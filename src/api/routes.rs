/*
 * Responsibility
 * - URL structure under /api
 * - decide which methods sit behind the token check; route_layer only wraps
 *   routes registered before it, so public routes are added after it
 */
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};

use crate::api::handlers::{auth, posts, profile, users};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/users", user_routes())
        .nest("/auth", auth_routes(state.clone()))
        .nest("/profile", profile_routes(state.clone()))
        .nest("/posts", post_routes(state))
}

fn user_routes() -> Router<AppState> {
    Router::new().route("/", post(users::register))
}

fn auth_routes(state: AppState) -> Router<AppState> {
    // GET (whoami) is private; POST (login) is public.
    Router::new()
        .route("/", get(auth::current_user))
        .route_layer(from_fn_with_state(state, require_auth))
        .route("/", post(auth::login))
}

fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(profile::my_profile))
        .route("/", post(profile::upsert_profile).delete(profile::delete_account))
        .route("/experience", put(profile::add_experience))
        .route("/experience/{entry_id}", delete(profile::delete_experience))
        .route("/education", put(profile::add_education))
        .route("/education/{entry_id}", delete(profile::delete_education))
        .route_layer(from_fn_with_state(state, require_auth))
        // Public: browsing profiles and the GitHub proxy need no token.
        .route("/", get(profile::list_profiles))
        .route("/user/{user_id}", get(profile::profile_by_user))
        .route("/github/{username}", get(profile::github_repos))
}

fn post_routes(state: AppState) -> Router<AppState> {
    // The whole feed is members-only.
    Router::new()
        .route("/", get(posts::list_posts).post(posts::create_post))
        .route("/{post_id}", get(posts::get_post).delete(posts::delete_post))
        .route("/like/{post_id}", put(posts::like_post))
        .route("/unlike/{post_id}", put(posts::unlike_post))
        .route("/comment/{post_id}", post(posts::add_comment))
        .route("/comment/{post_id}/{comment_id}", delete(posts::delete_comment))
        .route_layer(from_fn_with_state(state, require_auth))
}
