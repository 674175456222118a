//! Tests for the people endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use starwars_api::server::controller::{
    people::{get_people, get_people_by_id},
    util::extract::{IdPath, RecordId},
};

use super::*;

#[tokio::test]
async fn get_people_returns_all_people() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema_tables()
        .with_person("Luke Skywalker")
        .with_person("R2-D2")
        .build()
        .await?;

    let resp = get_people(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = response_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Luke Skywalker", "R2-D2"]);

    Ok(())
}

#[tokio::test]
async fn get_people_returns_empty_array_for_empty_table() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let resp = get_people(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(response_json(resp).await, json!([]));

    Ok(())
}

/// Expect the full person representation with nulls for unset attributes
#[tokio::test]
async fn get_people_by_id_returns_person() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let person = test.people().insert_bare_person("Yoda").await?;

    let resp = get_people_by_id(State(test.to_app_state()), IdPath(RecordId(person.id)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        response_json(resp).await,
        json!({
            "id": person.id,
            "name": "Yoda",
            "height": null,
            "mass": null,
            "hair_color": null,
            "eye_color": null
        })
    );

    Ok(())
}

/// Expect 404 with a `msg` body for an unknown person
#[tokio::test]
async fn get_people_by_id_not_found_for_unknown_person() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let result = get_people_by_id(State(test.to_app_state()), IdPath(RecordId(999_999))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(response_json(resp).await, json!({ "msg": "People not found" }));

    Ok(())
}
