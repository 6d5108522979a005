// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Plotlink-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Plotlink and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end checks through the streamable HTTP transport: a JSON-RPC
//! `tools/call` POST travels the same path an MCP client uses.

use super::tests::MockRenderServer;
use super::*;

use axum::body::{to_bytes, Body};
use axum::http::Request;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::{StreamableHttpServerConfig, StreamableHttpService};
use serde_json::json;

fn streamable_service(
    server: ChartMcp,
) -> StreamableHttpService<ChartMcp, LocalSessionManager> {
    let config = StreamableHttpServerConfig {
        stateful_mode: false,
        sse_keep_alive: None,
        ..StreamableHttpServerConfig::default()
    };
    let session_manager = Arc::new(LocalSessionManager::default());
    StreamableHttpService::new(move || Ok(server.clone()), session_manager, config)
}

async fn post_tools_call(
    service: &StreamableHttpService<ChartMcp, LocalSessionManager>,
    tool: &str,
    arguments: serde_json::Value,
) -> String {
    let body = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": { "name": tool, "arguments": arguments }
    })
    .to_string();

    let response = service
        .handle(
            Request::builder()
                .method("POST")
                .uri("/mcp")
                .header(axum::http::header::ACCEPT, "application/json, text/event-stream")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .expect("request"),
        )
        .await;

    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let response_body = Body::new(response.into_body());
    let bytes = tokio::time::timeout(
        std::time::Duration::from_secs(3),
        to_bytes(response_body, usize::MAX),
    )
    .await
    .expect("timeout collecting response body")
    .expect("collect response body");

    String::from_utf8_lossy(&bytes).into_owned()
}

#[tokio::test]
async fn tools_call_returns_chart_url_over_streamable_http() {
    let mock = MockRenderServer::spawn(json!({
        "success": true,
        "resultObj": "https://charts.example/e2e"
    }))
    .await;
    let service = streamable_service(mock.server());

    let raw = post_tools_call(
        &service,
        "generate_pie_chart",
        json!({ "data": [{ "category": "a", "value": 27 }, { "category": "b", "value": 73 }] }),
    )
    .await;

    assert!(raw.contains("https://charts.example/e2e"), "unexpected response: {raw}");

    let body = mock.last_request().await;
    assert_eq!(body["type"], "pie");
    assert_eq!(body["source"], "mcp-server-chart");
}

#[tokio::test]
async fn tools_call_surfaces_validation_error_over_streamable_http() {
    let mock = MockRenderServer::spawn(json!({
        "success": true,
        "resultObj": "https://charts.example/should-not-render"
    }))
    .await;
    let service = streamable_service(mock.server());

    let raw = post_tools_call(
        &service,
        "generate_mind_map",
        json!({
            "data": {
                "name": "剪映视频剪辑指南",
                "children": [
                    { "name": "特效素材", "children": [{ "name": "文字动画" }] },
                    { "name": "文字动画" }
                ]
            }
        }),
    )
    .await;

    assert!(
        raw.contains("Invalid parameters: node's name '文字动画' should be unique."),
        "unexpected response: {raw}"
    );
    // Validation failed before dispatch, so the renderer saw nothing.
    assert!(mock.requests.lock().await.is_empty());
}

#[tokio::test]
async fn tools_call_rejects_unknown_tool_before_validation() {
    let mock = MockRenderServer::spawn(json!({ "success": true, "resultObj": "unused" })).await;
    let service = streamable_service(mock.server());

    let raw = post_tools_call(&service, "generate_gantt_chart", json!({})).await;

    assert!(raw.contains("generate_gantt_chart"), "unexpected response: {raw}");
    assert!(mock.requests.lock().await.is_empty());
}
