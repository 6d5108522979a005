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

/// Input for a histogram showing the frequency of data points within
/// ranges.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HistogramChartParams {
    /// Data for histogram chart, such as, [ 78, 88, 60, 100, 95 ].
    #[schemars(length(min = 1))]
    pub data: Vec<f64>,
    /// Number of intervals to define the number of intervals in a
    /// histogram.
    #[serde(default, rename = "binNumber", skip_serializing_if = "Option::is_none")]
    pub bin_number: Option<u32>,
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
