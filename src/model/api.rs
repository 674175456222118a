use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response body keyed by `msg`, used when a looked-up record does not exist
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MsgDto {
    /// The error message
    pub msg: String,
}

/// Response body keyed by `message`, used for confirmations and favorite errors
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// Human readable outcome of the request
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Request body carrying the acting user's ID
///
/// Only used to document the body; handlers decode `user_id` leniently through
/// [`BodyUserId`](crate::server::controller::util::extract::BodyUserId).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserIdDto {
    pub user_id: i32,
}

/// Every documented endpoint path
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SitemapDto {
    pub endpoints: Vec<String>,
}
