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

/// The optional value can be 'column' or 'line'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DualAxesSeriesType {
    Column,
    Line,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DualAxesSeries {
    /// The optional value can be 'column' or 'line'.
    #[serde(rename = "type")]
    pub series_type: DualAxesSeriesType,
    /// When type is column, the data represents quantities, such as
    /// [91.9, 99.1, 101.6, 114.4, 121]. When type is line, the data
    /// represents ratios and its values are recommended to be less than 1,
    /// such as [0.055, 0.06, 0.062, 0.07, 0.075].
    pub data: Vec<f64>,
    /// Set the y-axis title of the chart series, such as,
    /// axisYTitle: '销售额'.
    #[serde(default, rename = "axisYTitle")]
    pub axis_y_title: String,
}

/// Input for a dual axes chart combining a column series with a line
/// series over shared categories.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DualAxesChartParams {
    /// Categories for dual axes chart, such as, ['2015', '2016', '2017'].
    #[schemars(length(min = 1))]
    pub categories: Vec<String>,
    /// Series for dual axes chart, such as, [{ type: 'column', data:
    /// [91.9, 99.1, 101.6, 114.4, 121], axisYTitle: '销售额' }, { type:
    /// 'line', data: [0.055, 0.06, 0.062, 0.07, 0.075], axisYTitle:
    /// '利润率' }].
    #[schemars(length(min = 1))]
    pub series: Vec<DualAxesSeries>,
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
}
