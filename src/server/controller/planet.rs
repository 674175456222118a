use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{MessageDto, MsgDto},
        planet::PlanetDto,
    },
    server::{
        controller::util::extract::{IdPath, RecordId},
        data::planet::PlanetRepository,
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
    },
};

pub static PLANET_TAG: &str = "planet";

/// List every planet
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetRepository::new(&state.db).get_all().await?;

    let planet_dtos: Vec<PlanetDto> = planets.into_iter().map(PlanetDto::from).collect();

    Ok((StatusCode::OK, Json(planet_dtos)))
}

/// Get a single planet by ID
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the planet")
    ),
    responses(
        (status = 200, description = "The planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = MsgDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_planet_by_id(
    State(state): State<AppState>,
    IdPath(RecordId(planet_id)): IdPath<RecordId>,
) -> Result<impl IntoResponse, Error> {
    let Some(planet) = PlanetRepository::new(&state.db)
        .get_by_id(planet_id)
        .await?
    else {
        return Err(NotFoundError::Planet(planet_id).into());
    };

    Ok((StatusCode::OK, Json(PlanetDto::from(planet))))
}
