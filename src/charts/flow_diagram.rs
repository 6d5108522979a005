// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Plotlink-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Plotlink and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{default_height, default_width, Theme};
use crate::model::GraphData;

/// Input for a flow diagram showing the steps and decision points of a
/// process.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FlowDiagramParams {
    /// Data for flow diagram chart, such as, { nodes: [{ name: 'node1' },
    /// { name: 'node2' }], edges: [{ source: 'node1', target: 'node2',
    /// name: 'edge1' }] }.
    pub data: GraphData,
    /// Set the theme for the chart, optional, default is 'default'.
    #[serde(default)]
    pub theme: Theme,
    /// Set the width of chart, default is 600.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Set the height of chart, default is 400.
    #[serde(default = "default_height")]
    pub height: u32,
}
