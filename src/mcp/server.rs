// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Plotlink-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Plotlink and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};
use serde::Serialize;

use crate::charts::{
    AreaChartParams, BarChartParams, ChartType, ColumnChartParams, DualAxesChartParams,
    FishboneDiagramParams, FlowDiagramParams, HistogramChartParams, LineChartParams, MindMapParams,
    NetworkGraphParams, PieChartParams, RadarChartParams, ScatterChartParams, TreemapChartParams,
    WordCloudChartParams,
};
use crate::model::{validate_forest, validate_graph, validate_tree, ValidateError};
use crate::render::RenderClient;

#[derive(Clone)]
pub struct ChartMcp {
    render: Arc<RenderClient>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ChartMcp {
    /// Build a server against the endpoint named by `VIS_REQUEST_SERVER`
    /// (or the public GPT-Vis endpoint when unset).
    pub fn new() -> Self {
        Self::with_render_client(RenderClient::from_env())
    }

    pub fn with_render_client(render: RenderClient) -> Self {
        Self {
            render: Arc::new(render),
            tool_router: Self::tool_router(),
        }
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    async fn render_chart<T: Serialize>(
        &self,
        chart_type: ChartType,
        options: &T,
    ) -> Result<CallToolResult, ErrorData> {
        let url = self.render.generate_chart_url(chart_type, options).await.map_err(|err| {
            ErrorData::internal_error(format!("Failed to generate chart: {err}"), None)
        })?;
        Ok(CallToolResult::success(vec![Content::text(url)]))
    }

    /// Generate a line chart to show trends over time, such as, the ratio
    /// of Apple computer sales to Apple's profits changed from 2000 to
    /// 2016.
    #[tool(name = "generate_line_chart")]
    async fn generate_line_chart(
        &self,
        params: Parameters<LineChartParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = params.0;
        require_non_empty(&params.data, "Line chart data")?;
        self.render_chart(ChartType::Line, &params).await
    }

    /// Generate a column chart, which are best for comparing categorical
    /// data, such as, when values are close, column charts are preferable
    /// because our eyes are better at judging height than other visual
    /// elements like area or angles.
    #[tool(name = "generate_column_chart")]
    async fn generate_column_chart(
        &self,
        params: Parameters<ColumnChartParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = params.0;
        require_non_empty(&params.data, "Column chart data")?;
        self.render_chart(ChartType::Column, &params).await
    }

    /// Generate a area chart to show data trends under continuous
    /// independent variables and observe the overall data trend, such as,
    /// displacement = velocity (average or instantaneous) × time: s = v ×
    /// t. If the x-axis is time (t) and the y-axis is velocity (v) at each
    /// moment, an area chart allows you to observe the trend of velocity
    /// over time and infer the distance traveled by the area's size.
    #[tool(name = "generate_area_chart")]
    async fn generate_area_chart(
        &self,
        params: Parameters<AreaChartParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = params.0;
        require_non_empty(&params.data, "Area chart data")?;
        self.render_chart(ChartType::Area, &params).await
    }

    /// Generate a pie chart to show the proportion of parts, such as,
    /// market share and budget allocation.
    #[tool(name = "generate_pie_chart")]
    async fn generate_pie_chart(
        &self,
        params: Parameters<PieChartParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = params.0;
        require_non_empty(&params.data, "Pie chart data")?;
        self.render_chart(ChartType::Pie, &params).await
    }

    /// Generate a bar chart to show data for numerical comparisons among
    /// different categories, such as, comparing categorical data and for
    /// horizontal comparisons.
    #[tool(name = "generate_bar_chart")]
    async fn generate_bar_chart(
        &self,
        params: Parameters<BarChartParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = params.0;
        require_non_empty(&params.data, "Bar chart data")?;
        self.render_chart(ChartType::Bar, &params).await
    }

    /// Generate a histogram chart to show the frequency of data points
    /// within a certain range. It can observe data distribution, such as,
    /// normal and skewed distributions, and identify data concentration
    /// areas and extreme points.
    #[tool(name = "generate_histogram_chart")]
    async fn generate_histogram_chart(
        &self,
        params: Parameters<HistogramChartParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = params.0;
        require_non_empty(&params.data, "Histogram chart data")?;
        self.render_chart(ChartType::Histogram, &params).await
    }

    /// Generate a scatter chart to show the relationship between two
    /// variables, helps discover their relationship or trends, such as,
    /// the strength of correlation, data distribution patterns.
    #[tool(name = "generate_scatter_chart")]
    async fn generate_scatter_chart(
        &self,
        params: Parameters<ScatterChartParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = params.0;
        require_non_empty(&params.data, "Scatter chart data")?;
        self.render_chart(ChartType::Scatter, &params).await
    }

    /// Generate a word cloud chart to show word frequency or weight
    /// through text size variation, such as, analyzing common words in
    /// social media, reviews, or feedback.
    #[tool(name = "generate_word_cloud_chart")]
    async fn generate_word_cloud_chart(
        &self,
        params: Parameters<WordCloudChartParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = params.0;
        require_non_empty(&params.data, "Word cloud chart data")?;
        self.render_chart(ChartType::WordCloud, &params).await
    }

    /// Generate a radar chart to display multidimensional data (four
    /// dimensions or more), such as, evaluate Huawei and Apple phones in
    /// terms of five dimensions: ease of use, functionality, camera,
    /// benchmark scores, and battery life.
    #[tool(name = "generate_radar_chart")]
    async fn generate_radar_chart(
        &self,
        params: Parameters<RadarChartParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = params.0;
        require_non_empty(&params.data, "Radar chart data")?;
        self.render_chart(ChartType::Radar, &params).await
    }

    /// Generate a treemap chart to display hierarchical data and can
    /// intuitively show comparisons between items at the same level, such
    /// as, show disk space usage with treemap.
    #[tool(name = "generate_treemap_chart")]
    async fn generate_treemap_chart(
        &self,
        params: Parameters<TreemapChartParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = params.0;
        require_non_empty(&params.data, "Treemap chart data")?;
        validate_forest(&params.data).map_err(invalid_params)?;
        self.render_chart(ChartType::Treemap, &params).await
    }

    /// Generate a dual axes chart which is a combination chart that
    /// integrates two different chart types, typically combining a bar
    /// chart with a line chart to display both the trend and comparison
    /// of data, such as, the trend of sales and profit over time.
    #[tool(name = "generate_dual_axes_chart")]
    async fn generate_dual_axes_chart(
        &self,
        params: Parameters<DualAxesChartParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = params.0;
        require_non_empty(&params.categories, "Dual axes chart categories")?;
        require_non_empty(&params.series, "Dual axes chart series")?;
        self.render_chart(ChartType::DualAxes, &params).await
    }

    /// Generate a mind map chart to organizes and presents information in
    /// a hierarchical structure with branches radiating from a central
    /// topic, such as, a diagram showing the relationship between a main
    /// topic and its subtopics.
    #[tool(name = "generate_mind_map")]
    async fn generate_mind_map(
        &self,
        params: Parameters<MindMapParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = params.0;
        validate_tree(&params.data).map_err(invalid_params)?;
        self.render_chart(ChartType::MindMap, &params).await
    }

    /// Generate a fishbone diagram chart to uses a fish skeleton, like
    /// structure to display the causes or effects of a core problem, with
    /// the problem as the fish head and the causes/effects as the fish
    /// bones. It suits problems that can be split into multiple related
    /// factors.
    #[tool(name = "generate_fishbone_diagram")]
    async fn generate_fishbone_diagram(
        &self,
        params: Parameters<FishboneDiagramParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = params.0;
        validate_tree(&params.data).map_err(invalid_params)?;
        self.render_chart(ChartType::FishboneDiagram, &params).await
    }

    /// Generate a flow diagram chart to show the steps and decision points
    /// of a process or system, such as, scenarios requiring linear process
    /// presentation.
    #[tool(name = "generate_flow_diagram")]
    async fn generate_flow_diagram(
        &self,
        params: Parameters<FlowDiagramParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = params.0;
        if params.data.nodes.is_empty() {
            return Err(ErrorData::invalid_params(
                "Invalid parameters: At least one node is required.",
                None,
            ));
        }
        validate_graph(&params.data).map_err(invalid_params)?;
        self.render_chart(ChartType::FlowDiagram, &params).await
    }

    /// Generate a network graph chart to show relationships (edges)
    /// between entities (nodes), such as, relationships between people in
    /// social networks.
    #[tool(name = "generate_network_graph")]
    async fn generate_network_graph(
        &self,
        params: Parameters<NetworkGraphParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = params.0;
        validate_graph(&params.data).map_err(invalid_params)?;
        self.render_chart(ChartType::NetworkGraph, &params).await
    }
}

impl Default for ChartMcp {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for ChartMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Chart generation server. Every tool validates its parameters, renders the \
                 chart remotely, and returns a shareable chart URL (tools: \
                 generate_area_chart, generate_bar_chart, generate_column_chart, \
                 generate_dual_axes_chart, generate_fishbone_diagram, generate_flow_diagram, \
                 generate_histogram_chart, generate_line_chart, generate_mind_map, \
                 generate_network_graph, generate_pie_chart, generate_radar_chart, \
                 generate_scatter_chart, generate_treemap_chart, generate_word_cloud_chart)"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn invalid_params(err: ValidateError) -> ErrorData {
    ErrorData::invalid_params(err.to_string(), None)
}

fn require_non_empty<T>(items: &[T], what: &str) -> Result<(), ErrorData> {
    if items.is_empty() {
        return Err(ErrorData::invalid_params(
            format!("Invalid parameters: {what} cannot be empty."),
            None,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests;

#[cfg(test)]
mod e2e;
