use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use crate::server::error::Error;

/// Record ID taken from a path segment
///
/// Only non-negative integers that fit the ID column deserialize successfully.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordId(pub i32);

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u32::deserialize(deserializer)?;

        i32::try_from(id)
            .map(RecordId)
            .map_err(serde::de::Error::custom)
    }
}

/// Path extractor which answers 404 when the parameters fail to parse
///
/// A route such as `/people/{people_id}` only matches integer IDs, so `/people/abc` is
/// reported as an unknown route rather than a bad request.
pub struct IdPath<T>(pub T);

impl<S, T> FromRequestParts<S> for IdPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(path = %parts.uri.path(), "Rejected path parameters: {}", rejection);

                Err(Error::api(StatusCode::NOT_FOUND, "Not found"))
            }
        }
    }
}

/// `user_id` read from a JSON request body
///
/// Never rejects: a missing body, invalid JSON, a missing key or a value that is not an
/// integer all yield `BodyUserId(None)`, which handlers treat as matching nothing.
/// Integer strings such as `"3"` are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyUserId(pub Option<i32>);

#[derive(Deserialize)]
struct UserIdBody {
    user_id: Option<Value>,
}

impl<S> FromRequest<S> for BodyUserId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let user_id = match Bytes::from_request(req, state).await {
            Ok(body) => parse_user_id(&body),
            Err(rejection) => {
                tracing::debug!("Failed to read request body: {}", rejection);

                None
            }
        };

        Ok(Self(user_id))
    }
}

fn parse_user_id(body: &[u8]) -> Option<i32> {
    let body: UserIdBody = serde_json::from_slice(body).ok()?;

    match body.user_id? {
        Value::Number(number) => number.as_i64().and_then(|id| i32::try_from(id).ok()),
        Value::String(id) => id.trim().parse().ok(),
        _ => None,
    }
}
