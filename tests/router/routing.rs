use axum::http::{Method, StatusCode};
use serde_json::json;

use super::*;

/// Expect `GET /users` on an empty table to return an empty array
#[tokio::test]
async fn lists_users_on_empty_table() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let resp = send(&test, request(Method::GET, "/users", None)).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(response_json(resp).await, json!([]));

    Ok(())
}

/// Expect a trailing slash to reach the same handler
#[tokio::test]
async fn treats_trailing_slash_as_same_route() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema_tables()
        .with_person("Luke Skywalker")
        .build()
        .await?;

    let without_slash = send(&test, request(Method::GET, "/people/1", None)).await;
    let with_slash = send(&test, request(Method::GET, "/people/1/", None)).await;

    assert_eq!(without_slash.status(), StatusCode::OK);
    assert_eq!(with_slash.status(), StatusCode::OK);
    assert_eq!(
        response_json(without_slash).await,
        response_json(with_slash).await
    );

    Ok(())
}

/// Expect `GET /people/999999` to return the people not found body
#[tokio::test]
async fn unknown_person_returns_not_found() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let resp = send(&test, request(Method::GET, "/people/999999", None)).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(response_json(resp).await, json!({ "msg": "People not found" }));

    Ok(())
}

/// Expect ids that are not non-negative integers to be rejected before any lookup
#[tokio::test]
async fn non_integer_ids_are_unknown_routes() -> Result<(), TestError> {
    // No tables: reaching a handler would produce a 500 instead of a 404
    let test = test_setup_with_tables!()?;

    let requests = [
        request(Method::GET, "/people/luke", None),
        request(Method::GET, "/people/-1", None),
        request(Method::GET, "/planets/1.5", None),
        request(Method::GET, "/planets/99999999999", None),
        request(Method::POST, "/favorite/planet/abc/1", None),
        request(Method::POST, "/favorite/people/1/abc", None),
        request(Method::DELETE, "/favorite/people/abc", Some(json!({ "user_id": 1 }))),
    ];

    for req in requests {
        let uri = req.uri().to_string();
        let resp = send(&test, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "uri: {}", uri);
        assert_eq!(
            response_json(resp).await,
            json!({ "message": "Not found" }),
            "uri: {}",
            uri
        );
    }

    Ok(())
}

#[tokio::test]
async fn unknown_path_returns_not_found() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let resp = send(&test, request(Method::GET, "/starships", None)).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(response_json(resp).await, json!({ "message": "Not found" }));

    Ok(())
}

/// Expect a malformed body to be treated as an unknown user rather than a bad request
#[tokio::test]
async fn malformed_favorites_body_returns_user_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema_tables()
        .with_user("luke@rebellion.org")
        .build()
        .await?;

    let bodies = ["", "{not json", r#"{"user_id": "luke"}"#, r#"{"id": 1}"#];

    for body in bodies {
        let resp = send(&test, raw_request(Method::GET, "/users/favorites", body)).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "body: {}", body);
        assert_eq!(
            response_json(resp).await,
            json!({ "msg": "User not found" }),
            "body: {}",
            body
        );
    }

    Ok(())
}

/// Expect the sitemap to list every API path
#[tokio::test]
async fn sitemap_lists_endpoints() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = send(&test, request(Method::GET, "/", None)).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = response_json(resp).await;
    let endpoints: Vec<&str> = body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.as_str().unwrap())
        .collect();
    assert_eq!(endpoints.len(), 10);
    for path in [
        "/users",
        "/users/favorites",
        "/people/{people_id}",
        "/planets",
        "/favorite/planet/{planet_id}/{user_id}",
        "/favorite/people/{people_id}",
    ] {
        assert!(endpoints.contains(&path), "missing {}", path);
    }

    Ok(())
}

#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = send(&test, request(Method::GET, "/api/docs/openapi.json", None)).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = response_json(resp).await;
    assert_eq!(body["info"]["title"], "Star Wars API");
    assert!(body["paths"]["/users/favorites"]["get"].is_object());

    Ok(())
}
