//! Client for the third-party form collection endpoint.
//!
//! The endpoint receives a JSON object with the two user fields plus three
//! fixed hidden fields and answers with `{"success": ..., "message": ...}`.
//! Only browser builds can reach it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::core::config::SiteConfig;

/// Validated user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
}

/// Wire body sent to the collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    #[serde(rename = "_subject")]
    pub subject: &'a str,
    /// Captcha is disabled; the endpoint expects the string form.
    #[serde(rename = "_captcha")]
    pub captcha: &'static str,
    #[serde(rename = "_template")]
    pub template: &'a str,
}

impl<'a> Payload<'a> {
    pub fn new(config: &'a SiteConfig, submission: &'a Submission) -> Self {
        Self {
            name: &submission.name,
            email: &submission.email,
            subject: &config.subscribe_subject,
            captcha: "false",
            template: &config.subscribe_template,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The request never completed (offline, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx HTTP status.
    #[error("endpoint answered HTTP {status}")]
    Rejected { status: u16 },
    /// 2xx answer whose body reports failure.
    #[error("endpoint declined submission: {0}")]
    Declined(String),
    /// No browser networking on this target.
    #[error("form submission needs a browser")]
    Unsupported,
}

/// Interpret the endpoint's answer.
///
/// A 2xx status is success unless the body is JSON with `success` set to
/// `false` (boolean or string). Bodies that are not JSON are accepted as-is.
pub fn interpret_response(status: u16, body: &str) -> Result<(), SubmitError> {
    if !(200..300).contains(&status) {
        return Err(SubmitError::Rejected { status });
    }

    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return Ok(());
    };

    let declined = match json.get("success") {
        Some(Value::Bool(ok)) => !ok,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("false"),
        _ => false,
    };

    if declined {
        let message = json
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("no reason given")
            .to_string();
        Err(SubmitError::Declined(message))
    } else {
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn send(config: &SiteConfig, submission: &Submission) -> Result<(), SubmitError> {
    use gloo_net::http::Request;

    let request = Request::post(&config.subscribe_endpoint)
        .header("Accept", "application/json")
        .json(&Payload::new(config, submission))
        .map_err(|err| SubmitError::Network(err.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|err| SubmitError::Network(err.to_string()))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    interpret_response(status, &body)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn send(_config: &SiteConfig, _submission: &Submission) -> Result<(), SubmitError> {
    Err(SubmitError::Unsupported)
}
