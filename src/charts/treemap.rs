// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Plotlink-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Plotlink and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{default_height, default_width};
use crate::model::TreemapNode;

/// Input for a treemap displaying hierarchical data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TreemapChartParams {
    /// Data for treemap chart, such as, [{ name: 'Design', value: 70,
    /// children: [{ name: 'Tech', value: 20 }] }].
    #[schemars(length(min = 1))]
    pub data: Vec<TreemapNode>,
    /// Set the width of chart, default is 600.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Set the height of chart, default is 400.
    #[serde(default = "default_height")]
    pub height: u32,
    /// Set the title of chart.
    #[serde(default)]
    pub title: String,
}
