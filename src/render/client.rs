// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Plotlink-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Plotlink and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::charts::ChartType;

/// Fallback render endpoint when `VIS_REQUEST_SERVER` is unset.
pub const DEFAULT_VIS_REQUEST_SERVER: &str = "https://antv-studio.alipay.com/api/gpt-vis";

/// Environment variable overriding the render endpoint.
pub const VIS_REQUEST_SERVER_ENV: &str = "VIS_REQUEST_SERVER";

/// Provenance tag the render service expects on every request.
const REQUEST_SOURCE: &str = "mcp-server-chart";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub enum RenderError {
    /// Chart options could not be encoded as a JSON object.
    Encode(serde_json::Error),
    /// The HTTP round-trip failed (connect, timeout, non-2xx status,
    /// or an unparseable response body).
    Http(reqwest::Error),
    /// The service answered but reported failure in its envelope.
    Service { message: String },
    /// The service reported success without a result URL.
    MissingResult,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "cannot encode chart options: {err}"),
            Self::Http(err) => write!(f, "chart render request failed: {err}"),
            Self::Service { message } => f.write_str(message),
            Self::MissingResult => f.write_str("chart render service returned no result"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Response envelope of the render service.
#[derive(Debug, Deserialize)]
struct RenderEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default, rename = "errorMessage")]
    error_message: Option<String>,
    #[serde(default, rename = "resultObj")]
    result_obj: Option<String>,
}

/// HTTP client for the chart-rendering service.
///
/// One POST per chart request, no retries; validation upstream never
/// fails transiently, and callers surface render failures directly.
#[derive(Debug, Clone)]
pub struct RenderClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RenderClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Build a client against `VIS_REQUEST_SERVER`, falling back to the
    /// public GPT-Vis endpoint.
    pub fn from_env() -> Self {
        let endpoint = std::env::var(VIS_REQUEST_SERVER_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_VIS_REQUEST_SERVER.to_owned());
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the render service for a chart URL.
    ///
    /// The body is the flattened chart options plus the chart `type` and
    /// the `source` provenance tag.
    pub async fn generate_chart_url<T: Serialize>(
        &self,
        chart_type: ChartType,
        options: &T,
    ) -> Result<String, RenderError> {
        let body = render_request_body(chart_type, options)?;

        tracing::debug!(chart_type = %chart_type, endpoint = %self.endpoint, "render request");

        let response = self
            .http
            .post(&self.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(RenderError::Http)?
            .error_for_status()
            .map_err(RenderError::Http)?;

        let envelope: RenderEnvelope = response.json().await.map_err(RenderError::Http)?;

        if !envelope.success {
            let message = envelope
                .error_message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| "Unknown error.".to_owned());
            tracing::warn!(chart_type = %chart_type, %message, "render service rejected request");
            return Err(RenderError::Service { message });
        }

        envelope.result_obj.ok_or(RenderError::MissingResult)
    }
}

fn render_request_body<T: Serialize>(
    chart_type: ChartType,
    options: &T,
) -> Result<serde_json::Map<String, Value>, RenderError> {
    let mut body = serde_json::Map::new();
    body.insert("type".to_owned(), Value::String(chart_type.as_str().to_owned()));

    match serde_json::to_value(options).map_err(RenderError::Encode)? {
        Value::Object(fields) => body.extend(fields),
        other => {
            return Err(RenderError::Encode(serde::ser::Error::custom(format!(
                "chart options must serialize to an object, got {other}"
            ))))
        }
    }

    body.insert("source".to_owned(), Value::String(REQUEST_SOURCE.to_owned()));
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{ChartType, LineChartParams};

    #[test]
    fn request_body_carries_type_options_and_source() {
        let params: LineChartParams = serde_json::from_value(serde_json::json!({
            "data": [{ "time": "2015", "value": 23 }]
        }))
        .expect("line params");

        let body = render_request_body(ChartType::Line, &params).expect("body");
        assert_eq!(body["type"], "line");
        assert_eq!(body["source"], "mcp-server-chart");
        assert_eq!(body["width"], 600);
        assert_eq!(body["data"][0]["time"], "2015");
    }

    #[test]
    fn from_env_falls_back_to_public_endpoint() {
        // The test environment does not set VIS_REQUEST_SERVER.
        let client = RenderClient::from_env();
        assert_eq!(client.endpoint(), DEFAULT_VIS_REQUEST_SERVER);
    }

    #[test]
    fn envelope_failure_surfaces_service_message() {
        let envelope: RenderEnvelope = serde_json::from_value(serde_json::json!({
            "success": false,
            "errorMessage": "render backend unavailable"
        }))
        .expect("envelope");
        assert!(!envelope.success);
        assert_eq!(envelope.error_message.as_deref(), Some("render backend unavailable"));
    }
}
