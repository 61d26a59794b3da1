use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use weather_core::WeatherError;

use crate::types::ErrorBody;

/// [`WeatherError`] rendered as an HTTP response.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub WeatherError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(ErrorBody::new(self.0.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_error_kind() {
        let cases = [
            (WeatherError::missing_location(), StatusCode::BAD_REQUEST),
            (WeatherError::missing_api_key(), StatusCode::INTERNAL_SERVER_ERROR),
            (WeatherError::UpstreamNotFound, StatusCode::NOT_FOUND),
            (
                WeatherError::UpstreamFailure("connection reset".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError(err).into_response().status(), expected);
        }
    }
}
