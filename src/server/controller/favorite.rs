use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{MessageDto, UserIdDto},
    server::{
        controller::util::extract::{BodyUserId, IdPath, RecordId},
        data::favorite::{FavoriteRepository, FavoriteTarget},
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Add a planet to a user's favorites
///
/// Every call creates a new favorite row, even when the pair is already favorited.
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}/{user_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the planet to favorite"),
        ("user_id" = i32, Path, description = "ID of the user")
    ),
    responses(
        (status = 200, description = "Favorite created", body = MessageDto),
        (status = 500, description = "Internal server error, including unknown user or planet", body = MessageDto)
    ),
)]
pub async fn add_planet_favorite(
    State(state): State<AppState>,
    IdPath(ids): IdPath<(RecordId, RecordId)>,
) -> Result<impl IntoResponse, Error> {
    let (RecordId(planet_id), RecordId(user_id)) = ids;

    let favorite = FavoriteRepository::new(&state.db)
        .create(user_id, FavoriteTarget::Planet(planet_id))
        .await?;

    tracing::info!(
        favorite_id = favorite.id,
        user_id = user_id,
        planet_id = planet_id,
        "Added planet favorite"
    );

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Planet added to favorites successfully")),
    ))
}

/// Add a person to a user's favorites
///
/// Every call creates a new favorite row, even when the pair is already favorited.
#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}/{user_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the person to favorite"),
        ("user_id" = i32, Path, description = "ID of the user")
    ),
    responses(
        (status = 200, description = "Favorite created", body = MessageDto),
        (status = 500, description = "Internal server error, including unknown user or person", body = MessageDto)
    ),
)]
pub async fn add_people_favorite(
    State(state): State<AppState>,
    IdPath(ids): IdPath<(RecordId, RecordId)>,
) -> Result<impl IntoResponse, Error> {
    let (RecordId(people_id), RecordId(user_id)) = ids;

    let favorite = FavoriteRepository::new(&state.db)
        .create(user_id, FavoriteTarget::People(people_id))
        .await?;

    tracing::info!(
        favorite_id = favorite.id,
        user_id = user_id,
        people_id = people_id,
        "Added people favorite"
    );

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("People added to favorites successfully")),
    ))
}

/// Remove a planet from the favorites of the user named in the request body
///
/// Only the oldest matching favorite is removed when duplicates exist.
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the favorited planet")
    ),
    request_body = UserIdDto,
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "Planet favorite not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_planet_favorite(
    State(state): State<AppState>,
    IdPath(RecordId(planet_id)): IdPath<RecordId>,
    BodyUserId(user_id): BodyUserId,
) -> Result<impl IntoResponse, Error> {
    let not_found = NotFoundError::PlanetFavorite { user_id, planet_id };

    let Some(user_id) = user_id else {
        return Err(not_found.into());
    };

    delete_first_favorite(&state, user_id, FavoriteTarget::Planet(planet_id), not_found).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Planet favorite deleted successfully")),
    ))
}

/// Remove a person from the favorites of the user named in the request body
///
/// Only the oldest matching favorite is removed when duplicates exist.
#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the favorited person")
    ),
    request_body = UserIdDto,
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "People favorite not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_people_favorite(
    State(state): State<AppState>,
    IdPath(RecordId(people_id)): IdPath<RecordId>,
    BodyUserId(user_id): BodyUserId,
) -> Result<impl IntoResponse, Error> {
    let not_found = NotFoundError::PeopleFavorite { user_id, people_id };

    let Some(user_id) = user_id else {
        return Err(not_found.into());
    };

    delete_first_favorite(&state, user_id, FavoriteTarget::People(people_id), not_found).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("People favorite deleted successfully")),
    ))
}

async fn delete_first_favorite(
    state: &AppState,
    user_id: i32,
    target: FavoriteTarget,
    not_found: NotFoundError,
) -> Result<(), Error> {
    let favorite_repo = FavoriteRepository::new(&state.db);

    let Some(favorite) = favorite_repo.find_first(user_id, target).await? else {
        return Err(not_found.into());
    };

    favorite_repo.delete(&favorite).await?;

    tracing::info!(
        favorite_id = favorite.id,
        user_id = user_id,
        "Deleted {:?} favorite",
        target
    );

    Ok(())
}
