// SPDX-License-Identifier: MIT

//! The Report Writer: renders a minimal post-run summary to a filesystem
//! path after every run, success or failure.

use async_trait::async_trait;
use rlci_core::{Event, EventSink, RunRecord};
use std::path::PathBuf;
use std::sync::Arc;

/// Default report path: the only compatibility point of the report.
pub const DEFAULT_REPORT_PATH: &str = "/opt/rlci/html/index.html";

#[async_trait]
pub trait ReportWriter: Send + Sync {
    async fn write(&self, record: &RunRecord);
}

/// Writes an HTML report at a fixed filesystem path, overwritten by every
/// run. HTML specifics beyond the pipeline name and per-stage-command
/// fields are unstable and intentionally minimal.
pub struct HtmlReportWriter {
    path: PathBuf,
    sink: Arc<dyn EventSink>,
}

impl HtmlReportWriter {
    pub fn new(path: impl Into<PathBuf>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            path: path.into(),
            sink,
        }
    }

    pub fn default_path(sink: Arc<dyn EventSink>) -> Self {
        Self::new(DEFAULT_REPORT_PATH, sink)
    }
}

#[async_trait]
impl ReportWriter for HtmlReportWriter {
    async fn write(&self, record: &RunRecord) {
        let html = render(record);
        if let Some(parent) = self.path.parent() {
            if let Err(error) = tokio::fs::create_dir_all(parent).await {
                tracing::warn!(path = %parent.display(), %error, "could not create report directory");
                return;
            }
        }
        match tokio::fs::write(&self.path, html).await {
            Ok(()) => self.sink.emit(Event::WriteFile(self.path.clone())),
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "could not write report")
            }
        }
    }
}

fn render(record: &RunRecord) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head><title>");
    html.push_str(&escape(&record.pipeline_name));
    html.push_str("</title></head>\n<body>\n");
    html.push_str("<h1>");
    html.push_str(&escape(&record.pipeline_name));
    html.push_str("</h1>\n<p>");
    html.push_str(if record.success { "SUCCESS" } else { "FAIL" });
    html.push_str("</p>\n<ul>\n");
    for stage in &record.stage_commands {
        html.push_str("<li><code>");
        html.push_str(&escape(&stage.command.join(" ")));
        html.push_str("</code> &rarr; ");
        match stage.returncode {
            Some(code) => html.push_str(&code.to_string()),
            None => html.push_str("(running)"),
        }
        html.push_str("<pre>");
        for line in &stage.output {
            html.push_str(&escape(line));
            html.push('\n');
        }
        html.push_str("</pre></li>\n");
    }
    html.push_str("</ul>\n</body>\n</html>\n");
    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Test/null variant: discards, recording only the [`Event::WriteFile`]
/// intent via the shared sink (no filesystem access at all).
pub struct NullReportWriter {
    sink: Arc<dyn EventSink>,
    path: PathBuf,
}

impl NullReportWriter {
    pub fn new(path: impl Into<PathBuf>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            path: path.into(),
            sink,
        }
    }
}

#[async_trait]
impl ReportWriter for NullReportWriter {
    async fn write(&self, _record: &RunRecord) {
        self.sink.emit(Event::WriteFile(self.path.clone()));
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
