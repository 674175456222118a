//! Tests for the planet endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use starwars_api::server::controller::{
    planet::{get_planet_by_id, get_planets},
    util::extract::{IdPath, RecordId},
};

use super::*;

#[tokio::test]
async fn get_planets_returns_all_planets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema_tables()
        .with_planet("Tatooine")
        .build()
        .await?;

    let resp = get_planets(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        response_json(resp).await,
        json!([
            { "id": 1, "name": "Tatooine", "climate": "arid", "terrain": "desert" }
        ])
    );

    Ok(())
}

#[tokio::test]
async fn get_planet_by_id_returns_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema_tables()
        .with_planet("Tatooine")
        .with_planet("Hoth")
        .build()
        .await?;

    let resp = get_planet_by_id(State(test.to_app_state()), IdPath(RecordId(2)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = response_json(resp).await;
    assert_eq!(body["id"], 2);
    assert_eq!(body["name"], "Hoth");

    Ok(())
}

/// Expect 404 with a `msg` body for an unknown planet
#[tokio::test]
async fn get_planet_by_id_not_found_for_unknown_planet() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let result = get_planet_by_id(State(test.to_app_state()), IdPath(RecordId(3))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(response_json(resp).await, json!({ "msg": "Planet not found" }));

    Ok(())
}
