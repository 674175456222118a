//! Tests sending requests through the complete application service.
//!
//! These cover behavior that only exists once handlers are mounted: route matching,
//! trailing slash handling, body decoding and end-to-end favorite flows.

mod favorites_flow;
mod routing;

use axum::{body::Body, http::Request, response::Response, Router};
use starwars_api::server::router::app;
use starwars_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{raw_request, request, response_json};

/// Sends a single request through a fresh copy of the application
async fn send(test: &TestContext, req: Request<Body>) -> Response {
    let app: Router = app(test.to_app_state());

    app.oneshot(req).await.expect("Router service is infallible")
}
