use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{MessageDto, MsgDto, UserIdDto},
        favorite::FavoriteDto,
        user::UserDto,
    },
    server::{
        controller::util::extract::BodyUserId,
        data::{favorite::FavoriteRepository, user::UserRepository},
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// List every user
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users without their passwords", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserRepository::new(&state.db).get_all().await?;

    let user_dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, Json(user_dtos)))
}

/// List the favorites of the user named in the request body
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    request_body = UserIdDto,
    responses(
        (status = 200, description = "Favorites owned by the user", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = MsgDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    BodyUserId(user_id): BodyUserId,
) -> Result<impl IntoResponse, Error> {
    let Some(user_id) = user_id else {
        return Err(NotFoundError::User(None).into());
    };

    let Some(user) = UserRepository::new(&state.db).get_by_id(user_id).await? else {
        return Err(NotFoundError::User(Some(user_id)).into());
    };

    let favorites = FavoriteRepository::new(&state.db)
        .get_by_user_id(user.id)
        .await?;

    let favorite_dtos: Vec<FavoriteDto> = favorites.into_iter().map(FavoriteDto::from).collect();

    Ok((StatusCode::OK, Json(favorite_dtos)))
}
