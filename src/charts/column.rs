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
pub struct ColumnDatum {
    pub category: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

fn default_group() -> bool {
    true
}

/// Input for a column chart comparing categorical data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ColumnChartParams {
    /// Data for column chart, such as, [{ category: '北京', value: 825, group: '油车' }].
    #[schemars(length(min = 1))]
    pub data: Vec<ColumnDatum>,
    /// Whether grouping is enabled. When enabled, column charts require a
    /// 'group' field in the data. When `group` is true, `stack` should be
    /// false.
    #[serde(default = "default_group")]
    pub group: bool,
    /// Whether stacking is enabled. When enabled, column charts require a
    /// 'group' field in the data. When `stack` is true, `group` should be
    /// false.
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
