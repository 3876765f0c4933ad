mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn root_returns_plain_text_greeting() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = reqwest::get(server.url("/")).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res.headers()["content-type"].to_str()?.to_string();
    assert!(content_type.starts_with("text/plain"), "unexpected content type: {}", content_type);
    assert!(!res.text().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = reqwest::get(server.url("/health")).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");

    Ok(())
}

#[tokio::test]
async fn app_shell_is_html() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = reqwest::get(server.url("/app")).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await?;
    assert!(body.contains("<header"), "missing header: {}", body);
    assert!(body.contains("<footer"), "missing footer: {}", body);

    Ok(())
}
