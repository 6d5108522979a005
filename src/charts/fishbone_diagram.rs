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
use crate::model::TreeNode;

/// Input for a fishbone diagram displaying the causes or effects of a
/// core problem.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FishboneDiagramParams {
    /// Data for fishbone diagram chart, such as, { name: 'main topic',
    /// children: [{ name: 'topic 1', children: [{ name: 'subtopic 1-1' }]
    /// }] }.
    pub data: TreeNode,
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
