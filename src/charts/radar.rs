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

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RadarItem {
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Input for a radar chart displaying multidimensional data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RadarChartParams {
    /// Data for radar chart, such as, [{ name: 'Design', value: 70 }].
    #[schemars(length(min = 1))]
    pub data: Vec<RadarItem>,
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
