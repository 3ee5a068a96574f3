use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;
use std::time::Duration;

/// Counters accumulated over one render pass.
#[derive(Debug, Default, Clone)]
pub struct RenderMetrics {
    nodes: u64,
    composites: u64,
    clipped_cells: u64,
    max_depth: u64,
    flattened_cells: u64,
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_node(&mut self, depth: usize) {
        self.nodes = self.nodes.saturating_add(1);
        self.max_depth = self.max_depth.max(depth as u64);
    }

    pub fn record_composite(&mut self, clipped: usize) {
        self.composites = self.composites.saturating_add(1);
        self.clipped_cells = self.clipped_cells.saturating_add(clipped as u64);
    }

    pub fn record_flatten(&mut self, cells: usize) {
        self.flattened_cells = self.flattened_cells.saturating_add(cells as u64);
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn clipped_cells(&self) -> u64 {
        self.clipped_cells
    }

    pub fn snapshot(&self, elapsed: Duration) -> MetricSnapshot {
        MetricSnapshot {
            elapsed_us: elapsed.as_micros() as u64,
            nodes: self.nodes,
            composites: self.composites,
            clipped_cells: self.clipped_cells,
            max_depth: self.max_depth,
            flattened_cells: self.flattened_cells,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub elapsed_us: u64,
    pub nodes: u64,
    pub composites: u64,
    pub clipped_cells: u64,
    pub max_depth: u64,
    pub flattened_cells: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Debug, target, "render_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("elapsed_us".to_string(), json!(self.elapsed_us));
        map.insert("nodes".to_string(), json!(self.nodes));
        map.insert("composites".to_string(), json!(self.composites));
        map.insert("clipped_cells".to_string(), json!(self.clipped_cells));
        map.insert("max_depth".to_string(), json!(self.max_depth));
        map.insert("flattened_cells".to_string(), json!(self.flattened_cells));
        map
    }
}
