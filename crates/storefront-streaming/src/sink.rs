//! Shell-first streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use storefront_core::{LifecyclePhase, SectionError, TimingContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    Initial,
    ShellSent,
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over any `Sink<Vec<u8>>`: Spin's `OutgoingBody` when serving, a
/// plain `Vec<Vec<u8>>` when rendering to a file or in tests.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
        }
    }

    /// Send the shell opening. Must be called exactly once, before any section.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), SectionError> {
        if self.state != SinkState::Initial {
            return Err(SectionError::ShellAlreadySent);
        }

        self.write(html).await?;
        self.timing.mark_shell_sent();
        self.state = SinkState::ShellSent;
        Ok(())
    }

    /// Send a named section. Sections go out in call order.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), SectionError> {
        self.ensure_open()?;

        self.timing.mark_section_start(name);
        self.write(html).await?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());
        tracing::debug!(section = name, bytes = html.len(), "section sent");
        Ok(())
    }

    /// Send the shell closing and complete the page.
    pub async fn finish(&mut self, closing: &str) -> Result<(), SectionError> {
        self.ensure_open()?;

        self.write(closing).await?;
        self.inner
            .flush()
            .await
            .map_err(|e| SectionError::StreamError(e.to_string()))?;
        self.state = SinkState::Completed;
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), SectionError> {
        match self.state {
            SinkState::Initial => Err(SectionError::ShellNotSent),
            SinkState::Completed => Err(SectionError::Completed),
            SinkState::ShellSent => Ok(()),
        }
    }

    async fn write(&mut self, html: &str) -> Result<(), SectionError> {
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| SectionError::StreamError(e.to_string()))
    }

    /// Names of the sections sent so far.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match (self.state, self.sections_sent.last()) {
            (SinkState::Initial, _) => LifecyclePhase::Start,
            (SinkState::ShellSent, None) => LifecyclePhase::ShellSent,
            (SinkState::ShellSent, Some(last)) => LifecyclePhase::SectionSent(last.clone()),
            (SinkState::Completed, _) => LifecyclePhase::Completion,
        }
    }

    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sink() -> StreamingSink<Vec<Vec<u8>>, std::convert::Infallible> {
        StreamingSink::new(Vec::new(), TimingContext::new())
    }

    #[tokio::test]
    async fn test_section_before_shell_is_rejected() {
        let mut sink = sink();
        let err = sink.send_section("hero", "<section></section>").await.unwrap_err();
        assert!(matches!(err, SectionError::ShellNotSent));
        assert_eq!(sink.phase(), LifecyclePhase::Start);
    }

    #[tokio::test]
    async fn test_shell_then_sections_in_order() {
        let mut sink = sink();
        sink.send_shell("<html>").await.unwrap();
        assert_eq!(sink.phase(), LifecyclePhase::ShellSent);

        sink.send_section("hero", "<h1>").await.unwrap();
        sink.send_section("trust", "<ul>").await.unwrap();
        assert_eq!(sink.phase(), LifecyclePhase::SectionSent("trust".to_string()));
        assert_eq!(sink.sections_sent(), ["hero", "trust"]);

        sink.finish("</html>").await.unwrap();
        assert_eq!(sink.phase(), LifecyclePhase::Completion);

        let chunks = sink.into_inner();
        let page: Vec<u8> = chunks.concat();
        assert_eq!(String::from_utf8(page).unwrap(), "<html><h1><ul></html>");
    }

    #[tokio::test]
    async fn test_second_shell_and_late_sections_fail() {
        let mut sink = sink();
        sink.send_shell("<html>").await.unwrap();
        assert!(matches!(
            sink.send_shell("<html>").await,
            Err(SectionError::ShellAlreadySent)
        ));

        sink.finish("</html>").await.unwrap();
        assert!(matches!(
            sink.send_section("late", "x").await,
            Err(SectionError::Completed)
        ));
    }
}
