// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Plotlink-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Plotlink and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plotlink CLI entrypoint.
//!
//! By default this serves MCP over stdio (intended for tool
//! integrations). `--transport streamable` serves streamable HTTP at
//! `http://127.0.0.1:<port><endpoint>`; `--transport sse` serves SSE at
//! `http://127.0.0.1:<port>/sse`.

use std::error::Error;
use std::sync::Arc;

use axum::Router;
use rmcp::transport::sse_server::SseServer;
use rmcp::transport::{
    streamable_http_server::session::local::LocalSessionManager, StreamableHttpServerConfig,
    StreamableHttpService,
};
use tracing_subscriber::EnvFilter;

use plotlink::mcp::ChartMcp;
use plotlink::render::VIS_REQUEST_SERVER_ENV;

const DEFAULT_PORT: u16 = 1122;
const DEFAULT_STREAMABLE_ENDPOINT: &str = "/mcp";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [-t stdio]\n  {program} -t streamable [-p <port>] [-e <endpoint>]\n  {program} -t sse [-p <port>]\n\nOptions:\n  -t, --transport <stdio|sse|streamable>  transport to serve MCP over (default stdio)\n  -p, --port <port>                       HTTP port for sse/streamable (default {DEFAULT_PORT})\n  -e, --endpoint <path>                   HTTP path for streamable (default {DEFAULT_STREAMABLE_ENDPOINT})\n\nThe SSE transport serves GET /sse and POST /message.\n\nSet {VIS_REQUEST_SERVER_ENV} to point chart rendering at a different endpoint."
    );
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Transport {
    #[default]
    Stdio,
    Sse,
    Streamable,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    transport: Transport,
    port: Option<u16>,
    endpoint: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();
    let mut transport_set = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-t" | "--transport" => {
                if transport_set {
                    return Err(());
                }
                options.transport = match args.next().ok_or(())?.as_str() {
                    "stdio" => Transport::Stdio,
                    "sse" => Transport::Sse,
                    "streamable" => Transport::Streamable,
                    _ => return Err(()),
                };
                transport_set = true;
            }
            "-p" | "--port" => {
                if options.port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.port = Some(port);
            }
            "-e" | "--endpoint" => {
                if options.endpoint.is_some() {
                    return Err(());
                }
                options.endpoint = Some(args.next().ok_or(())?);
            }
            _ => return Err(()),
        }
    }

    if options.transport == Transport::Stdio
        && (options.port.is_some() || options.endpoint.is_some())
    {
        return Err(());
    }

    if options.transport == Transport::Sse && options.endpoint.is_some() {
        return Err(());
    }

    Ok(options)
}

async fn run_streamable_server(
    mcp: ChartMcp,
    port: u16,
    endpoint: String,
) -> Result<(), Box<dyn Error>> {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;

    let config = StreamableHttpServerConfig {
        stateful_mode: true,
        ..StreamableHttpServerConfig::default()
    };
    let session_manager = Arc::new(LocalSessionManager::default());
    let mcp_service = StreamableHttpService::new(move || Ok(mcp.clone()), session_manager, config);

    let router = Router::new().nest_service(endpoint.as_str(), mcp_service);
    tracing::info!(port, endpoint = %endpoint, "serving MCP over streamable HTTP");
    axum::serve(listener, router).await?;
    Ok(())
}

async fn run_sse_server(mcp: ChartMcp, port: u16) -> Result<(), Box<dyn Error>> {
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
    let ct = SseServer::serve(addr).await?.with_service(move || mcp.clone());
    tracing::info!(%addr, "serving MCP over SSE");
    ct.cancelled().await;
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "plotlink".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .init();

        let mcp = ChartMcp::new();
        let port = options.port.unwrap_or(DEFAULT_PORT);
        let endpoint = options
            .endpoint
            .unwrap_or_else(|| DEFAULT_STREAMABLE_ENDPOINT.to_owned());

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        match options.transport {
            Transport::Stdio => runtime.block_on(mcp.serve_stdio())?,
            Transport::Sse => runtime.block_on(run_sse_server(mcp, port))?,
            Transport::Streamable => {
                runtime.block_on(run_streamable_server(mcp, port, endpoint))?
            }
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("plotlink: {err}");
        std::process::exit(1);
    }
}
