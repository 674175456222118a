use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{MessageDto, MsgDto},
        people::PersonDto,
    },
    server::{
        controller::util::extract::{IdPath, RecordId},
        data::people::PeopleRepository,
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
    },
};

pub static PEOPLE_TAG: &str = "people";

/// List every person
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "All people", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = PeopleRepository::new(&state.db).get_all().await?;

    let people_dtos: Vec<PersonDto> = people.into_iter().map(PersonDto::from).collect();

    Ok((StatusCode::OK, Json(people_dtos)))
}

/// Get a single person by ID
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = PEOPLE_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the person")
    ),
    responses(
        (status = 200, description = "The person", body = PersonDto),
        (status = 404, description = "People not found", body = MsgDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_people_by_id(
    State(state): State<AppState>,
    IdPath(RecordId(people_id)): IdPath<RecordId>,
) -> Result<impl IntoResponse, Error> {
    let Some(person) = PeopleRepository::new(&state.db)
        .get_by_id(people_id)
        .await?
    else {
        return Err(NotFoundError::People(people_id).into());
    };

    Ok((StatusCode::OK, Json(PersonDto::from(person))))
}
