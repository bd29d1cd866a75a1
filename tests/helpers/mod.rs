//! Shared setup for the HTTP tests: a router over a virtual clock, plus
//! small request builders.

#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use bindisa::{AppState, Config};
use bindisa_contact::ManualScheduler;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub clock: ManualScheduler,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Opens the contact page and returns the `Cookie` header value of the
    /// visit it started.
    pub async fn visit(&self) -> String {
        let response = self.send(get("/contact", None)).await;

        visit_cookie(&response).expect("visit cookie")
    }
}

pub fn setup_app() -> TestApp {
    let clock = ManualScheduler::new();
    let state = AppState::new(Config::default(), Arc::new(clock.clone()));

    TestApp {
        router: bindisa::router(state.clone()),
        state,
        clock,
    }
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, cookie: Option<&str>, form: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let body = serde_urlencoded::to_string(form).unwrap();
    builder.body(Body::from(body)).unwrap()
}

pub fn fragment(mut request: Request<Body>) -> Request<Body> {
    request
        .headers_mut()
        .insert("ts-request", "true".parse().unwrap());
    request
}

pub fn filled_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Asha"),
        ("phone", "9999999999"),
        ("email", "a@b.com"),
        ("subject", "Soil test"),
        ("message", "Need help"),
    ]
}

/// `name=value` part of the visit `Set-Cookie` header.
pub fn visit_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("contact_visit="))
        .and_then(|v| v.split(';').next())
        .map(str::to_owned)
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();

    String::from_utf8(body.to_vec()).unwrap()
}
