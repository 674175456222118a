use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{MessageDto, MsgDto};

/// A record or favorite targeted by a request does not exist.
///
/// Lookups by ID respond with a `msg` body while favorite deletions respond with a
/// `message` body; clients depend on both shapes.
#[derive(Error, Debug)]
pub enum NotFoundError {
    #[error("User ID {0:?} not found in database")]
    User(Option<i32>),
    #[error("People ID {0} not found in database")]
    People(i32),
    #[error("Planet ID {0} not found in database")]
    Planet(i32),
    #[error("No favorite of planet ID {planet_id} found for user ID {user_id:?}")]
    PlanetFavorite {
        user_id: Option<i32>,
        planet_id: i32,
    },
    #[error("No favorite of people ID {people_id} found for user ID {user_id:?}")]
    PeopleFavorite {
        user_id: Option<i32>,
        people_id: i32,
    },
}

impl NotFoundError {
    fn msg(msg: &str) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(MsgDto {
                msg: msg.to_string(),
            }),
        )
            .into_response()
    }

    fn message(message: &str) -> Response {
        (StatusCode::NOT_FOUND, Json(MessageDto::new(message))).into_response()
    }
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::User(_) => Self::msg("User not found"),
            Self::People(_) => Self::msg("People not found"),
            Self::Planet(_) => Self::msg("Planet not found"),
            Self::PlanetFavorite { .. } => Self::message("Planet favorite not found"),
            Self::PeopleFavorite { .. } => Self::message("People favorite not found"),
        }
    }
}
