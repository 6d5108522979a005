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
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// Input for a scatter chart showing the relationship between two
/// variables.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScatterChartParams {
    /// Data for scatter chart, such as, [{ x: 10, y: 15 }].
    #[schemars(length(min = 1))]
    pub data: Vec<ScatterPoint>,
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
