// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Plotlink-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Plotlink and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::*;

use std::collections::BTreeSet;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use rmcp::model::ErrorCode;
use serde_json::{json, Value};
use tokio::sync::Mutex;

/// In-process stand-in for the render service; records every request
/// body and answers with a fixed envelope.
pub(super) struct MockRenderServer {
    endpoint: String,
    pub(super) requests: Arc<Mutex<Vec<Value>>>,
}

impl MockRenderServer {
    pub(super) async fn spawn(response: Value) -> Self {
        type Shared = (Arc<Mutex<Vec<Value>>>, Arc<Value>);

        let requests = Arc::new(Mutex::new(Vec::new()));
        let state: Shared = (requests.clone(), Arc::new(response));

        let app = Router::new()
            .route(
                "/",
                post(|State((requests, response)): State<Shared>, Json(body): Json<Value>| async move {
                    requests.lock().await.push(body);
                    Json(response.as_ref().clone())
                }),
            )
            .with_state(state);

        let listener =
            tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.expect("bind mock render server");
        let addr = listener.local_addr().expect("mock render server addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { endpoint: format!("http://{addr}/"), requests }
    }

    pub(super) fn server(&self) -> ChartMcp {
        ChartMcp::with_render_client(RenderClient::new(self.endpoint.clone()))
    }

    pub(super) async fn last_request(&self) -> Value {
        self.requests.lock().await.last().cloned().expect("at least one render request")
    }
}

fn chart_url_envelope(url: &str) -> Value {
    json!({ "success": true, "errorMessage": null, "resultObj": url })
}

/// Server whose render endpoint is unreachable; only good for calls that
/// must fail before any network I/O.
fn offline_server() -> ChartMcp {
    ChartMcp::with_render_client(RenderClient::new("http://127.0.0.1:9/unreachable"))
}

fn result_text(result: &CallToolResult) -> String {
    let value = serde_json::to_value(result).expect("serialize tool result");
    value["content"][0]["text"].as_str().expect("text content").to_owned()
}

#[test]
fn tools_advertise_descriptions_and_schemas() {
    let tools = ChartMcp::tool_router().list_all();
    assert_eq!(tools.len(), ChartType::ALL.len());

    let mut seen_names = BTreeSet::new();
    for tool in &tools {
        let name = tool.name.to_string();
        assert!(seen_names.insert(name.clone()), "duplicate tool name: {name}");
        assert!(
            ChartType::from_tool_name(&name).is_some(),
            "tool not in the chart-type registry: {name}"
        );

        let description = tool.description.as_deref().unwrap_or("");
        assert!(!description.trim().is_empty(), "tool missing description: {name}");

        assert_eq!(
            tool.input_schema.get("type").and_then(|value| value.as_str()),
            Some("object"),
            "tool with non-object input schema: {name}"
        );
    }

    for chart_type in ChartType::ALL {
        assert!(
            seen_names.contains(chart_type.tool_name()),
            "chart type without a tool: {chart_type}"
        );
    }
}

#[test]
fn graph_tool_schemas_require_nodes_and_edges() {
    let tools = ChartMcp::tool_router().list_all();
    let flow = tools
        .iter()
        .find(|tool| tool.name == "generate_flow_diagram")
        .expect("flow diagram tool");

    let schema = serde_json::to_value(flow.input_schema.as_ref()).expect("schema to value");
    let required: Vec<&str> = schema["required"]
        .as_array()
        .expect("required list")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(required.contains(&"data"), "data should be required: {required:?}");
}

#[tokio::test]
async fn line_chart_posts_options_and_returns_url() {
    let mock = MockRenderServer::spawn(chart_url_envelope("https://charts.example/abc123")).await;
    let server = mock.server();

    let params: LineChartParams = serde_json::from_value(json!({
        "data": [{ "time": "2015", "value": 23 }, { "time": "2016", "value": 32 }],
        "title": "sales"
    }))
    .expect("line params");

    let result =
        server.generate_line_chart(Parameters(params)).await.expect("line chart call");
    assert_eq!(result_text(&result), "https://charts.example/abc123");

    let body = mock.last_request().await;
    assert_eq!(body["type"], "line");
    assert_eq!(body["source"], "mcp-server-chart");
    assert_eq!(body["title"], "sales");
    assert_eq!(body["width"], 600);
    assert_eq!(body["data"][1]["value"], 32.0);
}

#[tokio::test]
async fn render_service_failure_becomes_internal_error() {
    let mock = MockRenderServer::spawn(json!({
        "success": false,
        "errorMessage": "render backend unavailable"
    }))
    .await;
    let server = mock.server();

    let params: PieChartParams = serde_json::from_value(json!({
        "data": [{ "category": "a", "value": 27 }]
    }))
    .expect("pie params");

    let err = server.generate_pie_chart(Parameters(params)).await.expect_err("render failure");
    assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    assert_eq!(err.message, "Failed to generate chart: render backend unavailable");
}

#[tokio::test]
async fn flow_diagram_rejects_duplicate_node_names() {
    let server = offline_server();
    let params: FlowDiagramParams = serde_json::from_value(json!({
        "data": {
            "nodes": [{ "name": "A" }, { "name": "B" }, { "name": "A" }, { "name": "B" }],
            "edges": []
        }
    }))
    .expect("flow params");

    let err = server.generate_flow_diagram(Parameters(params)).await.expect_err("duplicate node");
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.message, "Invalid parameters: node's name 'A' should be unique.");
}

#[tokio::test]
async fn flow_diagram_requires_at_least_one_node() {
    let server = offline_server();
    let params: FlowDiagramParams =
        serde_json::from_value(json!({ "data": { "nodes": [], "edges": [] } }))
            .expect("flow params");

    let err = server.generate_flow_diagram(Parameters(params)).await.expect_err("empty nodes");
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.message, "Invalid parameters: At least one node is required.");
}

#[tokio::test]
async fn dangling_target_reported_before_duplicate_pair() {
    let server = offline_server();
    let params: NetworkGraphParams = serde_json::from_value(json!({
        "data": {
            "nodes": [{ "name": "A" }, { "name": "B" }],
            "edges": [
                { "source": "A", "target": "B" },
                { "source": "A", "target": "B" },
                { "source": "A", "target": "C" }
            ]
        }
    }))
    .expect("network params");

    let err = server.generate_network_graph(Parameters(params)).await.expect_err("dangling");
    assert_eq!(err.message, "Invalid parameters: edge's target 'C' should exist in nodes.");
}

#[tokio::test]
async fn network_graph_accepts_opposite_direction_edges() {
    let mock = MockRenderServer::spawn(chart_url_envelope("https://charts.example/net1")).await;
    let server = mock.server();

    let params: NetworkGraphParams = serde_json::from_value(json!({
        "data": {
            "nodes": [{ "name": "A" }, { "name": "B" }],
            "edges": [
                { "source": "A", "target": "B" },
                { "source": "B", "target": "A" }
            ]
        }
    }))
    .expect("network params");

    let result =
        server.generate_network_graph(Parameters(params)).await.expect("network graph call");
    assert_eq!(result_text(&result), "https://charts.example/net1");

    let body = mock.last_request().await;
    assert_eq!(body["type"], "network-graph");
}

#[tokio::test]
async fn network_graph_rejects_duplicate_edge_pair() {
    let server = offline_server();
    let params: NetworkGraphParams = serde_json::from_value(json!({
        "data": {
            "nodes": [{ "name": "KnowledgeBase" }, { "name": "Model" }],
            "edges": [
                { "source": "KnowledgeBase", "target": "Model" },
                { "source": "KnowledgeBase", "target": "Model" }
            ]
        }
    }))
    .expect("network params");

    let err = server.generate_network_graph(Parameters(params)).await.expect_err("dup pair");
    assert_eq!(
        err.message,
        "Invalid parameters: edge pair 'KnowledgeBase-Model' should be unique."
    );
}

#[tokio::test]
async fn mind_map_rejects_duplicates_across_branches() {
    let server = offline_server();
    let params: MindMapParams = serde_json::from_value(json!({
        "data": {
            "name": "Root",
            "children": [
                { "name": "Child1" },
                { "name": "Child2", "children": [{ "name": "Child1" }] }
            ]
        }
    }))
    .expect("mind map params");

    let err = server.generate_mind_map(Parameters(params)).await.expect_err("duplicate name");
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.message, "Invalid parameters: node's name 'Child1' should be unique.");
}

#[tokio::test]
async fn fishbone_accepts_unique_tree_and_posts_wire_type() {
    let mock = MockRenderServer::spawn(chart_url_envelope("https://charts.example/fish")).await;
    let server = mock.server();

    let params: FishboneDiagramParams = serde_json::from_value(json!({
        "data": {
            "name": "quality issue",
            "children": [
                { "name": "people", "children": [{ "name": "training" }] },
                { "name": "process" }
            ]
        }
    }))
    .expect("fishbone params");

    let result =
        server.generate_fishbone_diagram(Parameters(params)).await.expect("fishbone call");
    assert_eq!(result_text(&result), "https://charts.example/fish");
    assert_eq!(mock.last_request().await["type"], "fishbone-diagram");
}

#[tokio::test]
async fn treemap_uniqueness_spans_sibling_roots() {
    let server = offline_server();
    let params: TreemapChartParams = serde_json::from_value(json!({
        "data": [
            { "name": "Design", "value": 70, "children": [{ "name": "Tech", "value": 20 }] },
            { "name": "Tech", "value": 25 }
        ]
    }))
    .expect("treemap params");

    let err = server.generate_treemap_chart(Parameters(params)).await.expect_err("dup across roots");
    assert_eq!(err.message, "Invalid parameters: node's name 'Tech' should be unique.");
}

#[tokio::test]
async fn empty_data_is_rejected_before_any_network_io() {
    let server = offline_server();
    let params: AreaChartParams =
        serde_json::from_value(json!({ "data": [] })).expect("area params");

    let err = server.generate_area_chart(Parameters(params)).await.expect_err("empty data");
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.message, "Invalid parameters: Area chart data cannot be empty.");
}

#[tokio::test]
async fn dual_axes_requires_categories_and_series() {
    let server = offline_server();

    let params: DualAxesChartParams = serde_json::from_value(json!({
        "categories": [],
        "series": [{ "type": "column", "data": [1.0] }]
    }))
    .expect("dual axes params");
    let err = server.generate_dual_axes_chart(Parameters(params)).await.expect_err("no categories");
    assert_eq!(err.message, "Invalid parameters: Dual axes chart categories cannot be empty.");

    let params: DualAxesChartParams = serde_json::from_value(json!({
        "categories": ["2015"],
        "series": []
    }))
    .expect("dual axes params");
    let err = server.generate_dual_axes_chart(Parameters(params)).await.expect_err("no series");
    assert_eq!(err.message, "Invalid parameters: Dual axes chart series cannot be empty.");
}

#[tokio::test]
async fn validation_outcome_is_stable_across_repeated_calls() {
    let server = offline_server();
    let payload = json!({
        "data": {
            "nodes": [{ "name": "A" }, { "name": "A" }],
            "edges": []
        }
    });

    for _ in 0..2 {
        let params: NetworkGraphParams =
            serde_json::from_value(payload.clone()).expect("network params");
        let err = server.generate_network_graph(Parameters(params)).await.expect_err("dup node");
        assert_eq!(err.message, "Invalid parameters: node's name 'A' should be unique.");
    }
}
