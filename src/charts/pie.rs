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
pub struct PieSlice {
    pub category: String,
    pub value: f64,
}

/// Input for a pie chart showing the proportion of parts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PieChartParams {
    /// Data for pie chart, such as, [{ category: '分类一', value: 27 }].
    #[schemars(length(min = 1))]
    pub data: Vec<PieSlice>,
    /// Set the pie chart as a donut chart. Set the value to 0.6 to enable
    /// it.
    #[serde(default, rename = "innerRadius")]
    pub inner_radius: f64,
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_radius_defaults_to_zero_and_renames() {
        let params: PieChartParams = serde_json::from_value(serde_json::json!({
            "data": [{ "category": "a", "value": 27 }]
        }))
        .expect("minimal pie params");
        assert_eq!(params.inner_radius, 0.0);

        let donut: PieChartParams = serde_json::from_value(serde_json::json!({
            "data": [{ "category": "a", "value": 27 }],
            "innerRadius": 0.6
        }))
        .expect("donut pie params");
        assert_eq!(donut.inner_radius, 0.6);
        assert_eq!(serde_json::to_value(&donut).expect("serialize")["innerRadius"], 0.6);
    }
}
