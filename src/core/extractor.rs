use axum::{
    extract::{rejection::QueryRejection, FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::error::AppError;

/// Path identifier extractor that rejects non-numeric ids with the error envelope
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(raw) =
            axum::extract::Path::<String>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::BadRequest("invalid id".to_string()))?;

        parse_id(&raw).map(Self)
    }
}

/// Parse a path identifier as a signed 64-bit integer
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest("invalid id".to_string()))
}

/// Lenient query extractor.
///
/// The raw query is read as key/value pairs and only the first value of a
/// repeated key is kept, so `?page=1&page=2` behaves like `?page=1`.
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(AppQueryRejection::Query)?;

        serde_json::from_value(first_values(pairs))
            .map(Self)
            .map_err(AppQueryRejection::Shape)
    }
}

/// Collapse query pairs into an object holding the first value of each key
fn first_values(pairs: Vec<(String, String)>) -> Value {
    let mut map = Map::new();
    for (key, value) in pairs {
        map.entry(key).or_insert(Value::String(value));
    }
    Value::Object(map)
}

pub enum AppQueryRejection {
    Query(QueryRejection),
    Shape(serde_json::Error),
}

impl IntoResponse for AppQueryRejection {
    fn into_response(self) -> Response {
        let message = match self {
            AppQueryRejection::Query(QueryRejection::FailedToDeserializeQueryString(err)) => {
                format!("Invalid query string: {}", err)
            }
            AppQueryRejection::Query(_) => "Failed to parse query string".to_string(),
            AppQueryRejection::Shape(err) => format!("Invalid query string: {}", err),
        };

        AppError::BadRequest(message).into_response()
    }
}
