//! Page timing metrics.

use std::time::Duration;

use serde::Serialize;
use storefront_core::{RequestContext, TimingContext};

/// Timings of one streamed page.
#[derive(Debug, Clone, Serialize)]
pub struct PageMetrics {
    pub request_id: String,
    pub path: String,
    pub locale: String,
    /// Time to shell flush (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_shell_us: Option<u64>,
    /// Time to first section (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_first_section_us: Option<u64>,
    /// Time to full page (microseconds).
    pub total_us: u64,
    pub sections: Vec<SectionMetrics>,
}

/// Timing of a single section.
#[derive(Debug, Clone, Serialize)]
pub struct SectionMetrics {
    pub name: String,
    /// From request start to section start (microseconds).
    pub start_us: u64,
    /// From request start to section sent (microseconds).
    pub sent_us: u64,
    pub duration_us: u64,
}

fn micros(d: Duration) -> u64 {
    d.as_micros() as u64
}

impl PageMetrics {
    pub fn collect(ctx: &RequestContext, timing: &TimingContext) -> Self {
        Self {
            request_id: ctx.request_id.to_string(),
            path: ctx.path.clone(),
            locale: ctx.locale.code().to_string(),
            time_to_shell_us: timing.time_to_shell().map(micros),
            time_to_first_section_us: timing.time_to_first_section().map(micros),
            total_us: micros(timing.elapsed()),
            sections: timing
                .section_timings()
                .into_iter()
                .map(|s| SectionMetrics {
                    name: s.name,
                    start_us: micros(s.start),
                    sent_us: micros(s.sent),
                    duration_us: micros(s.duration),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Emit the page summary and one debug event per section.
    pub fn log(&self) {
        for section in &self.sections {
            tracing::debug!(
                section = %section.name,
                start_us = section.start_us,
                duration_us = section.duration_us,
                "section timing"
            );
        }
        tracing::info!(
            request_id = %self.request_id,
            time_to_shell_us = self.time_to_shell_us,
            time_to_first_section_us = self.time_to_first_section_us,
            total_us = self.total_us,
            sections = self.sections.len(),
            "page complete"
        );
    }
}
