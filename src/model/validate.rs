// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Plotlink-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Plotlink and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Relational-integrity checks for graph and tree payloads.
//!
//! Shape checking (field presence and types) happens during parameter
//! deserialization; these functions assume well-typed input and decide
//! only whether the cross-field invariants hold. Each call allocates its
//! own tracking sets, reports the first violation it finds, and never
//! accumulates errors.

use std::collections::HashSet;
use std::fmt;

use super::graph::GraphData;
use super::tree::TreeLike;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    DuplicateNodeName(String),
    DanglingEdgeSource(String),
    DanglingEdgeTarget(String),
    DuplicateEdgePair(String, String),
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNodeName(name) => {
                write!(f, "Invalid parameters: node's name '{name}' should be unique.")
            }
            Self::DanglingEdgeSource(source) => {
                write!(f, "Invalid parameters: edge's source '{source}' should exist in nodes.")
            }
            Self::DanglingEdgeTarget(target) => {
                write!(f, "Invalid parameters: edge's target '{target}' should exist in nodes.")
            }
            Self::DuplicateEdgePair(source, target) => {
                write!(f, "Invalid parameters: edge pair '{source}-{target}' should be unique.")
            }
        }
    }
}

impl std::error::Error for ValidateError {}

/// Check a node/edge graph: node names unique, edge endpoints resolve,
/// ordered `(source, target)` pairs unique.
///
/// The three checks run as separate full passes in that order, so the
/// reported error is always from the lowest-numbered failing check no
/// matter where in the input the violation sits. Within a pass the first
/// violation in list order wins.
pub fn validate_graph(data: &GraphData) -> Result<(), ValidateError> {
    let node_names: HashSet<&str> = data.nodes.iter().map(|node| node.name.as_str()).collect();

    let mut unique_names = HashSet::with_capacity(data.nodes.len());
    for node in &data.nodes {
        if !unique_names.insert(node.name.as_str()) {
            return Err(ValidateError::DuplicateNodeName(node.name.clone()));
        }
    }

    for edge in &data.edges {
        if !node_names.contains(edge.source.as_str()) {
            return Err(ValidateError::DanglingEdgeSource(edge.source.clone()));
        }
        if !node_names.contains(edge.target.as_str()) {
            return Err(ValidateError::DanglingEdgeTarget(edge.target.clone()));
        }
    }

    let mut edge_pairs = HashSet::with_capacity(data.edges.len());
    for edge in &data.edges {
        if !edge_pairs.insert((edge.source.as_str(), edge.target.as_str())) {
            return Err(ValidateError::DuplicateEdgePair(
                edge.source.clone(),
                edge.target.clone(),
            ));
        }
    }

    Ok(())
}

/// Check that every node name in a tree is unique across the whole tree,
/// not just among siblings.
///
/// Pre-order depth-first traversal: parent before children, children in
/// listed order. The first duplicate encountered wins.
pub fn validate_tree<T: TreeLike>(root: &T) -> Result<(), ValidateError> {
    let mut seen = HashSet::new();
    check_uniqueness(root, &mut seen)
}

/// [`validate_tree`] over a list of roots sharing one seen-set, so
/// uniqueness is global across the whole forest.
pub fn validate_forest<T: TreeLike>(roots: &[T]) -> Result<(), ValidateError> {
    let mut seen = HashSet::new();
    for root in roots {
        check_uniqueness(root, &mut seen)?;
    }
    Ok(())
}

fn check_uniqueness<'a, T: TreeLike>(
    node: &'a T,
    seen: &mut HashSet<&'a str>,
) -> Result<(), ValidateError> {
    if !seen.insert(node.name()) {
        return Err(ValidateError::DuplicateNodeName(node.name().to_owned()));
    }
    for child in node.children() {
        check_uniqueness(child, seen)?;
    }
    Ok(())
}
