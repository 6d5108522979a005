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

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AreaPoint {
    pub time: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Input for an area chart showing data trends under continuous
/// independent variables.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AreaChartParams {
    /// Data for area chart, such as, [{ time: '2018', value: 99.9 }].
    #[schemars(length(min = 1))]
    pub data: Vec<AreaPoint>,
    /// Whether stacking is enabled. When enabled, area charts require a
    /// 'group' field in the data.
    #[serde(default)]
    pub stack: bool,
    /// Set the theme for the chart, optional, default is 'default'.
    #[serde(default)]
    pub theme: Theme,
    /// Set the width of chart, default is 600.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Set the height of chart, default is 400.
    #[serde(default = "default_height")]
    pub height: u32,
    /// Set the title of chart.
    #[serde(default)]
    pub title: String,
    /// Set the x-axis title of chart.
    #[serde(default, rename = "axisXTitle")]
    pub axis_x_title: String,
    /// Set the y-axis title of chart.
    #[serde(default, rename = "axisYTitle")]
    pub axis_y_title: String,
}
