//! Page render lifecycle and timing marks.

use std::time::{Duration, Instant};

/// Phases of a streamed page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Render started, nothing sent yet.
    Start,
    /// Shell HTML has been flushed to the client.
    ShellSent,
    /// A named section has been sent.
    SectionSent(String),
    /// The page is complete.
    Completion,
    /// An error occurred.
    Error(String),
}

/// Timing marks collected while a page streams.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    shell_sent: Option<Instant>,
    sections: Vec<SectionMark>,
}

#[derive(Debug, Clone)]
struct SectionMark {
    name: String,
    started: Instant,
    sent: Option<Instant>,
}

impl TimingContext {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            shell_sent: None,
            sections: Vec::new(),
        }
    }

    /// Record that the shell went out.
    pub fn mark_shell_sent(&mut self) {
        self.shell_sent = Some(Instant::now());
    }

    /// Mark section start.
    pub fn mark_section_start(&mut self, section: &str) {
        self.sections.push(SectionMark {
            name: section.to_string(),
            started: Instant::now(),
            sent: None,
        });
    }

    /// Mark the most recent start of `section` as sent.
    pub fn mark_section_sent(&mut self, section: &str) {
        if let Some(mark) = self
            .sections
            .iter_mut()
            .rev()
            .find(|m| m.name == section && m.sent.is_none())
        {
            mark.sent = Some(Instant::now());
        }
    }

    /// Elapsed time since the render started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time to shell flush.
    pub fn time_to_shell(&self) -> Option<Duration> {
        self.shell_sent.map(|t| t.duration_since(self.start))
    }

    /// Time to the first section sent.
    pub fn time_to_first_section(&self) -> Option<Duration> {
        self.sections
            .iter()
            .filter_map(|m| m.sent)
            .map(|t| t.duration_since(self.start))
            .min()
    }

    /// Timing for a specific section.
    pub fn section_timing(&self, section: &str) -> Option<SectionTiming> {
        self.sections
            .iter()
            .find(|m| m.name == section)
            .and_then(|m| self.timing_of(m))
    }

    /// Timings of every completed section, in send order.
    pub fn section_timings(&self) -> Vec<SectionTiming> {
        self.sections.iter().filter_map(|m| self.timing_of(m)).collect()
    }

    fn timing_of(&self, mark: &SectionMark) -> Option<SectionTiming> {
        let sent = mark.sent?;
        Some(SectionTiming {
            name: mark.name.clone(),
            start: mark.started.duration_since(self.start),
            sent: sent.duration_since(self.start),
            duration: sent.duration_since(mark.started),
        })
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing information for a section.
#[derive(Debug, Clone)]
pub struct SectionTiming {
    pub name: String,
    /// Offset from render start to section start.
    pub start: Duration,
    /// Offset from render start to section sent.
    pub sent: Duration,
    /// Time spent producing and sending the section.
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_timings_in_send_order() {
        let mut timing = TimingContext::new();
        assert!(timing.time_to_shell().is_none());

        timing.mark_shell_sent();
        timing.mark_section_start("hero");
        timing.mark_section_sent("hero");
        timing.mark_section_start("departments");
        timing.mark_section_sent("departments");
        timing.mark_section_start("featured");

        assert!(timing.time_to_shell().is_some());
        assert!(timing.time_to_first_section().is_some());

        let names: Vec<_> = timing.section_timings().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["hero", "departments"]);
        assert!(timing.section_timing("featured").is_none());
    }
}
