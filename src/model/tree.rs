// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Plotlink-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Plotlink and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Recursive named tree literal used by mind maps and fishbone diagrams.
///
/// Children are nested literals, not references, so the shape cannot
/// express a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TreeNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

/// Value-carrying tree literal used by treemap charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TreemapNode {
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreemapNode>>,
}

/// Seam for tree validation: any node with a name and nested children.
pub trait TreeLike: Sized {
    fn name(&self) -> &str;
    fn children(&self) -> &[Self];
}

impl TreeLike for TreeNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or(&[])
    }
}

impl TreeLike for TreemapNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or(&[])
    }
}

impl TreeNode {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: None,
        }
    }

    pub fn branch(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            children: Some(children),
        }
    }
}
