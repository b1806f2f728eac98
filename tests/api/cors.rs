//! Every response has to be readable from any origin.

use std::time::Duration;

use anyhow::Result;
use reqwest::{Method, StatusCode};
use wiremock::{matchers::any, Mock, ResponseTemplate};

use crate::helpers::TestApp;

const ORIGIN: &str = "https://blog.example.com";

fn allow_origin(res: &reqwest::Response) -> Option<String> {
    res.headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[tokio::test]
async fn cors_headers_on_every_route() -> Result<()> {
    let app = TestApp::spawn().await?;

    for path in ["/api", "/invalidpath"] {
        let res = app
            .http_client
            .get(app.url(path))
            .header("Origin", ORIGIN)
            .send()
            .await?;

        assert_eq!(Some("*".to_string()), allow_origin(&res), "for: {path}");
    }

    let res = app
        .http_client
        .post(app.url("/api/subscribe"))
        .header("Origin", ORIGIN)
        .body("{}")
        .send()
        .await?;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, res.status());
    assert_eq!(Some("*".to_string()), allow_origin(&res));

    Ok(())
}

#[tokio::test]
async fn cors_preflight_ok() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .request(Method::OPTIONS, app.url("/api/subscribe"))
        .header("Origin", ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await?;

    assert!(res.status().is_success(), "got: {}", res.status());
    assert_eq!(Some("*".to_string()), allow_origin(&res));
    assert!(res.headers().contains_key("access-control-allow-methods"));

    Ok(())
}

#[tokio::test]
async fn request_id_propagated() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.http_client.get(app.url("/api")).send().await?;
    assert_eq!(StatusCode::OK, res.status());
    assert!(res.headers().contains_key("x-request-id"));

    let res = app.http_client.get(app.url("/invalidpath")).send().await?;
    assert_eq!(StatusCode::NOT_FOUND, res.status());
    assert!(res.headers().contains_key("x-request-id"));

    Ok(())
}

#[tokio::test]
async fn request_id_and_cors_on_error_responses() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(201).set_delay(Duration::from_secs(3)))
        .mount(&app.provider_server)
        .await;

    let cases = [
        ("{}", StatusCode::UNPROCESSABLE_ENTITY),
        ("{", StatusCode::BAD_REQUEST),
        (r#"{"email":"a@b.com"}"#, StatusCode::BAD_GATEWAY),
    ];

    for (body, expected_status) in cases {
        let res = app
            .http_client
            .post(app.url("/api/subscribe"))
            .header("Origin", ORIGIN)
            .body(body)
            .send()
            .await?;

        assert_eq!(expected_status, res.status(), "body: {body}");
        assert!(
            res.headers().contains_key("x-request-id"),
            "missing x-request-id for: {body}"
        );
        assert_eq!(Some("*".to_string()), allow_origin(&res), "body: {body}");
    }

    Ok(())
}
