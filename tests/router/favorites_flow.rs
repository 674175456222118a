use axum::http::{Method, StatusCode};
use serde_json::json;

use super::*;

/// Expect a newly added planet favorite to be listed for the user with a null person
#[tokio::test]
async fn added_planet_favorite_is_listed_for_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema_tables()
        .with_user("luke@rebellion.org")
        .with_planet("Tatooine")
        .with_planet("Dagobah")
        .build()
        .await?;

    let resp = send(&test, request(Method::POST, "/favorite/planet/2/1", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        response_json(resp).await,
        json!({ "message": "Planet added to favorites successfully" })
    );

    let resp = send(
        &test,
        request(Method::GET, "/users/favorites", Some(json!({ "user_id": 1 }))),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        response_json(resp).await,
        json!([{ "id": 1, "user_id": 1, "planet_id": 2, "people_id": null }])
    );

    Ok(())
}

/// Expect a repeated delete of the same favorite to return 404 the second time
#[tokio::test]
async fn repeated_delete_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema_tables()
        .with_user("luke@rebellion.org")
        .with_planet("Tatooine")
        .build()
        .await?;

    let resp = send(&test, request(Method::POST, "/favorite/planet/1/1", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let delete = || request(Method::DELETE, "/favorite/planet/1", Some(json!({ "user_id": 1 })));

    let resp = send(&test, delete()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        response_json(resp).await,
        json!({ "message": "Planet favorite deleted successfully" })
    );

    let resp = send(&test, delete()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response_json(resp).await,
        json!({ "message": "Planet favorite not found" })
    );

    Ok(())
}

/// Expect one delete to remove exactly one of two duplicate people favorites
#[tokio::test]
async fn delete_removes_one_duplicate_at_a_time() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema_tables()
        .with_user("luke@rebellion.org")
        .with_person("Yoda")
        .build()
        .await?;

    for _ in 0..2 {
        let resp = send(&test, request(Method::POST, "/favorite/people/1/1/", None)).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = send(
        &test,
        request(Method::DELETE, "/favorite/people/1", Some(json!({ "user_id": 1 }))),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(
        &test,
        request(Method::GET, "/users/favorites", Some(json!({ "user_id": 1 }))),
    )
    .await;
    assert_eq!(
        response_json(resp).await,
        json!([{ "id": 2, "user_id": 1, "planet_id": null, "people_id": 1 }])
    );

    Ok(())
}

/// Expect a body user ID that matches no favorite to return the people favorite not found body
#[tokio::test]
async fn delete_with_unmatched_user_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema_tables()
        .with_user("luke@rebellion.org")
        .with_user("leia@alderaan.gov")
        .with_person("Yoda")
        .build()
        .await?;
    test.favorite().insert_people_favorite(1, 1).await?;

    let resp = send(
        &test,
        request(Method::DELETE, "/favorite/people/1", Some(json!({ "user_id": 2 }))),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response_json(resp).await,
        json!({ "message": "People favorite not found" })
    );

    Ok(())
}
