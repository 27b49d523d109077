//! BDD step definitions for dashboard feature

use std::sync::Arc;

use addressmon::dashboard::build_router;
use axum::body::Body;
use axum::http::Request;
use cucumber::{then, when};
use tower::ServiceExt;

use crate::steps::loading_steps::scripted_loader;
use crate::world::AddressmonWorld;

#[when("the dashboard index page is requested")]
async fn request_index(world: &mut AddressmonWorld) {
    let app = build_router(Arc::new(scripted_loader(world)));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.dashboard_response_body = Some(String::from_utf8(body.to_vec()).unwrap());
}

#[then(expr = "the response should contain {string}")]
fn response_contains(world: &mut AddressmonWorld, expected: String) {
    let body = world
        .dashboard_response_body
        .as_ref()
        .expect("no response body");
    assert!(
        body.contains(&expected),
        "Expected response to contain '{}', but it didn't.\nResponse body:\n{}",
        expected,
        body
    );
}

#[then(expr = "the response should not contain {string}")]
fn response_does_not_contain(world: &mut AddressmonWorld, unexpected: String) {
    let body = world
        .dashboard_response_body
        .as_ref()
        .expect("no response body");
    assert!(
        !body.contains(&unexpected),
        "Expected response not to contain '{}'.\nResponse body:\n{}",
        unexpected,
        body
    );
}
