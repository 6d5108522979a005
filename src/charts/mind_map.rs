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
use crate::model::TreeNode;

/// Input for a mind map organizing information hierarchically around a
/// central topic.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MindMapParams {
    /// Data for mind map chart, such as, { name: 'main topic', children:
    /// [{ name: 'topic 1', children: [{ name: 'subtopic 1-1' }] }] }.
    pub data: TreeNode,
    /// Set the width of chart, default is 600.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Set the height of chart, default is 400.
    #[serde(default = "default_height")]
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recursive_tree_literal_deserializes() {
        let params: MindMapParams = serde_json::from_value(serde_json::json!({
            "data": {
                "name": "main topic",
                "children": [
                    { "name": "topic 1", "children": [{ "name": "subtopic 1-1" }] },
                    { "name": "topic 2" }
                ]
            }
        }))
        .expect("mind map params");

        assert_eq!(params.data.name, "main topic");
        let children = params.data.children.as_deref().expect("children");
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].children.as_deref().expect("nested")[0].name, "subtopic 1-1");
        assert!(children[1].children.is_none());
    }
}
