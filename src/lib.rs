// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Plotlink-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Plotlink and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plotlink — chart-generation MCP server backed by the AntV GPT-Vis render service.
//!
//! Agents call one `generate_*` tool per chart type; parameters are
//! schema-checked, graph/tree payloads are validated for relational
//! integrity, and the request is forwarded to the render service, which
//! replies with a shareable chart URL.

pub mod charts;
pub mod mcp;
pub mod model;
pub mod render;
