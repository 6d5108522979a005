// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Plotlink-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Plotlink and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Validated chart data shapes.
//!
//! Graph payloads (nodes + edges) and recursive tree payloads carry
//! relational invariants that JSON-schema checking cannot express;
//! [`validate`] enforces them before a request reaches the renderer.

pub mod graph;
pub mod tree;
pub mod validate;

pub use graph::{Edge, GraphData, Node};
pub use tree::{TreeLike, TreeNode, TreemapNode};
pub use validate::{validate_forest, validate_graph, validate_tree, ValidateError};
