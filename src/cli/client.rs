use anyhow::{anyhow, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Thin HTTP client for the Workout Tracker API
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.http.get(self.url(path)).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// POST a JSON body and return the confirmation text
    pub async fn post(&self, path: &str, body: &Value) -> Result<String> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::confirmation(Self::check(response).await?).await
    }

    pub async fn patch(&self, path: &str, body: &Value) -> Result<String> {
        let response = self.http.patch(self.url(path)).json(body).send().await?;
        Self::confirmation(Self::check(response).await?).await
    }

    pub async fn delete(&self, path: &str) -> Result<String> {
        let response = self.http.delete(self.url(path)).send().await?;
        Self::confirmation(Self::check(response).await?).await
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(anyhow!("{} ({})", error_message(status, &body), status))
    }

    /// Confirmations arrive either as plain text or as a JSON string
    async fn confirmation(response: Response) -> Result<String> {
        let text = response.text().await?;
        Ok(serde_json::from_str::<String>(&text).unwrap_or(text))
    }
}

/// Pull the server's message out of an error body
pub fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
    }
    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.trim().to_string()
    }
}
