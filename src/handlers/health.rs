// GET / handler

use std::convert::Infallible;

use crate::models::HealthResponse;

/// Fixed status payload, no side effects
pub async fn health_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&HealthResponse::ok()))
}
