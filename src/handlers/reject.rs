// Rejection type and recovery for the HTTP boundary

use std::convert::Infallible;

use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::models::ErrorResponse;

/// Domain failure carried through warp's rejection machinery
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl warp::reject::Reject for ApiError {}

impl ApiError {
    /// 400 - caller sent an unusable request
    pub fn bad_request(message: impl Into<String>) -> Rejection {
        warp::reject::custom(Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        })
    }

    /// 502 - the upstream inference API failed
    pub fn bad_gateway(message: impl Into<String>) -> Rejection {
        warp::reject::custom(Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
        })
    }

    /// 500 - a dependency of ours failed
    pub fn internal(message: impl Into<String>) -> Rejection {
        warp::reject::custom(Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        })
    }
}

/// Map rejections to JSON error bodies
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "not found".to_string())
    } else if let Some(api_error) = err.find::<ApiError>() {
        (api_error.status, api_error.message.clone())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "method not allowed".to_string(),
        )
    } else {
        tracing::error!(rejection = ?err, "unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".to_string(),
        )
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorResponse { error: message }),
        status,
    ))
}
