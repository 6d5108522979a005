// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Plotlink-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Plotlink and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Declarative per-chart parameter schemas.
//!
//! One module per chart type. Each defines a `…Params` struct whose
//! serde/schemars derives produce both the wire shape sent to the render
//! service and the JSON schema advertised through MCP. Field doc
//! comments become schema descriptions.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod area;
pub mod bar;
pub mod column;
pub mod dual_axes;
pub mod fishbone_diagram;
pub mod flow_diagram;
pub mod histogram;
pub mod line;
pub mod mind_map;
pub mod network_graph;
pub mod pie;
pub mod radar;
pub mod scatter;
pub mod treemap;
pub mod word_cloud;

pub use area::AreaChartParams;
pub use bar::BarChartParams;
pub use column::ColumnChartParams;
pub use dual_axes::{DualAxesChartParams, DualAxesSeries, DualAxesSeriesType};
pub use fishbone_diagram::FishboneDiagramParams;
pub use flow_diagram::FlowDiagramParams;
pub use histogram::HistogramChartParams;
pub use line::LineChartParams;
pub use mind_map::MindMapParams;
pub use network_graph::NetworkGraphParams;
pub use pie::PieChartParams;
pub use radar::RadarChartParams;
pub use scatter::ScatterChartParams;
pub use treemap::TreemapChartParams;
pub use word_cloud::WordCloudChartParams;

/// The closed set of chart types the server can render.
///
/// `as_str` is the wire identifier the render service expects;
/// `tool_name` is the MCP-visible tool name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartType {
    Area,
    Bar,
    Column,
    DualAxes,
    FishboneDiagram,
    FlowDiagram,
    Histogram,
    Line,
    MindMap,
    NetworkGraph,
    Pie,
    Radar,
    Scatter,
    Treemap,
    WordCloud,
}

impl ChartType {
    pub const ALL: [ChartType; 15] = [
        ChartType::Area,
        ChartType::Bar,
        ChartType::Column,
        ChartType::DualAxes,
        ChartType::FishboneDiagram,
        ChartType::FlowDiagram,
        ChartType::Histogram,
        ChartType::Line,
        ChartType::MindMap,
        ChartType::NetworkGraph,
        ChartType::Pie,
        ChartType::Radar,
        ChartType::Scatter,
        ChartType::Treemap,
        ChartType::WordCloud,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartType::Area => "area",
            ChartType::Bar => "bar",
            ChartType::Column => "column",
            ChartType::DualAxes => "dual-axes",
            ChartType::FishboneDiagram => "fishbone-diagram",
            ChartType::FlowDiagram => "flow-diagram",
            ChartType::Histogram => "histogram",
            ChartType::Line => "line",
            ChartType::MindMap => "mind-map",
            ChartType::NetworkGraph => "network-graph",
            ChartType::Pie => "pie",
            ChartType::Radar => "radar",
            ChartType::Scatter => "scatter",
            ChartType::Treemap => "treemap",
            ChartType::WordCloud => "word-cloud",
        }
    }

    pub fn tool_name(self) -> &'static str {
        match self {
            ChartType::Area => "generate_area_chart",
            ChartType::Bar => "generate_bar_chart",
            ChartType::Column => "generate_column_chart",
            ChartType::DualAxes => "generate_dual_axes_chart",
            ChartType::FishboneDiagram => "generate_fishbone_diagram",
            ChartType::FlowDiagram => "generate_flow_diagram",
            ChartType::Histogram => "generate_histogram_chart",
            ChartType::Line => "generate_line_chart",
            ChartType::MindMap => "generate_mind_map",
            ChartType::NetworkGraph => "generate_network_graph",
            ChartType::Pie => "generate_pie_chart",
            ChartType::Radar => "generate_radar_chart",
            ChartType::Scatter => "generate_scatter_chart",
            ChartType::Treemap => "generate_treemap_chart",
            ChartType::WordCloud => "generate_word_cloud_chart",
        }
    }

    pub fn from_tool_name(name: &str) -> Option<ChartType> {
        Self::ALL.into_iter().find(|chart_type| chart_type.tool_name() == name)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set the theme for the chart, optional, default is 'default'.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Academy,
}

pub(crate) fn default_width() -> u32 {
    600
}

pub(crate) fn default_height() -> u32 {
    400
}
