// Route definitions

use std::sync::Arc;

use warp::Filter;

use crate::handlers;
use crate::state::AppState;

fn with_state(
    state: Arc<AppState>,
) -> impl Filter<Extract = (Arc<AppState>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || state.clone())
}

pub fn configure_routes(
    state: Arc<AppState>,
) -> impl Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone {
    // POST /chat
    let chat = warp::path("chat")
        .and(warp::path::end())
        .and(warp::post())
        .and(with_state(state))
        .and(warp::body::json())
        .and_then(handlers::chat_handler);

    // GET / (health check)
    let health = warp::path::end()
        .and(warp::get())
        .and_then(handlers::health_handler);

    // Combine routes
    chat.or(health).recover(handlers::handle_rejection)
}
