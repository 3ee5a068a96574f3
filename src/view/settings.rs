use std::time::Instant;

use serde_json::json;

use crate::canvas::Canvas;
use crate::error::{LayoutError, Result};
use crate::geometry::Size;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::{MetricSnapshot, RenderMetrics};
use crate::style::Color;

use super::core::{FillQuery, View};

pub const DEFAULT_RENDER_TARGET: &str = "room_view::render";

/// Configuration knobs for a render call.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Optional structured logger told about every render pass.
    pub logger: Option<Logger>,
    /// Background used by nodes with the debug overlay switched on.
    pub debug_color: Color,
    /// Target field on emitted log events.
    pub log_target: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            logger: None,
            debug_color: Color::RED,
            log_target: DEFAULT_RENDER_TARGET.to_string(),
        }
    }
}

impl RenderSettings {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_debug_color(mut self, color: Color) -> Self {
        self.debug_color = color;
        self
    }

    fn report_success(&self, size: Size, snapshot: &MetricSnapshot) {
        let Some(logger) = &self.logger else {
            return;
        };
        let mut fields = snapshot.as_fields();
        fields.insert("width".to_string(), json!(size.width));
        fields.insert("height".to_string(), json!(size.height));
        let event = event_with_fields(LogLevel::Debug, &self.log_target, "render_complete", fields);
        let _ = logger.log_event(event);
    }

    fn report_failure(&self, err: &LayoutError) {
        let Some(logger) = &self.logger else {
            return;
        };
        let event = event_with_fields(
            LogLevel::Error,
            &self.log_target,
            "render_failed",
            [
                json_kv("error", err.to_string()),
                json_kv("configuration", err.is_configuration()),
            ],
        );
        let _ = logger.log_event(event);
    }
}

/// State owned by a single render call: settings, counters and the current
/// tree depth. Nothing here outlives the call.
pub(crate) struct RenderPass<'s> {
    pub(crate) settings: &'s RenderSettings,
    pub(crate) metrics: RenderMetrics,
    depth: usize,
}

impl<'s> RenderPass<'s> {
    pub(crate) fn new_root(settings: &'s RenderSettings) -> Self {
        Self {
            settings,
            metrics: RenderMetrics::new(),
            depth: 0,
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Render `child` one level below the current node.
    pub(crate) fn render_child(&mut self, child: &View, fill: Option<FillQuery<'_>>) -> Result<Canvas> {
        self.depth += 1;
        let rendered = child.render_node(self, fill);
        self.depth -= 1;
        rendered
    }

    pub(crate) fn composite(&mut self, target: &mut Canvas, child: &Canvas, x: isize, y: isize) {
        let clipped = target.composite(child, x, y);
        self.metrics.record_composite(clipped);
    }
}

/// Run a root render, report it through the settings' logger and hand the
/// finished canvas to `finish`.
pub(crate) fn execute<T>(
    root: &View,
    settings: &RenderSettings,
    finish: impl FnOnce(Canvas, &mut RenderMetrics) -> T,
) -> Result<T> {
    let started = Instant::now();
    let mut pass = RenderPass::new_root(settings);
    match root.render_node(&mut pass, None) {
        Ok(canvas) => {
            let size = canvas.size();
            let value = finish(canvas, &mut pass.metrics);
            settings.report_success(size, &pass.metrics.snapshot(started.elapsed()));
            Ok(value)
        }
        Err(err) => {
            settings.report_failure(&err);
            Err(err)
        }
    }
}
