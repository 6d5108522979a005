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
pub struct WordWeight {
    pub text: String,
    pub value: f64,
}

/// Input for a word cloud showing word frequency or weight through text
/// size.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WordCloudChartParams {
    /// Data for word cloud chart, such as, [{ value: 4.272, text: '形成' }].
    #[schemars(length(min = 1))]
    pub data: Vec<WordWeight>,
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
