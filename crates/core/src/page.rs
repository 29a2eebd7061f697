//! State of the summary page: the URL being typed, the busy flag, the latest
//! result and its reveal.
//!
//! The page never performs I/O itself. [`SummaryPage::submit`] hands out a
//! ticket, the front-end runs the request, and [`SummaryPage::resolve`]
//! brings the outcome back.

use crate::{
    config::RevealConfig, render::RenderedText, types::SummaryResult, typewriter::Typewriter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub id: RequestId,
    pub url: String,
}

/// What to do with a response that belongs to an older submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StaleResponsePolicy {
    /// Apply every response in arrival order.
    #[default]
    LastWriteWins,
    /// Ignore responses superseded by a newer submit.
    DiscardStale,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PageOptions {
    pub reveal: RevealConfig,
    pub stale_responses: StaleResponsePolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitLabel {
    Send,
    Processing,
}

impl SubmitLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitLabel::Send => "Send",
            SubmitLabel::Processing => "Processing...",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub enabled: bool,
    pub label: SubmitLabel,
}

#[derive(Debug, Default)]
pub struct SummaryPage {
    options: PageOptions,
    query: String,
    busy: bool,
    result: Option<SummaryResult>,
    typewriter: Typewriter,
    next_request: u64,
    latest_request: Option<RequestId>,
}

impl SummaryPage {
    pub fn new(options: PageOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn submit_button(&self) -> SubmitButton {
        if self.busy {
            SubmitButton {
                enabled: false,
                label: SubmitLabel::Processing,
            }
        } else {
            SubmitButton {
                enabled: true,
                label: SubmitLabel::Send,
            }
        }
    }

    /// Start a request for the current query. The query is passed through
    /// untouched, empty or not.
    pub fn submit(&mut self) -> SubmitTicket {
        let id = RequestId(self.next_request);
        self.next_request += 1;
        self.latest_request = Some(id);

        self.busy = true;
        self.result = None;
        self.typewriter.set_text("");

        SubmitTicket {
            id,
            url: self.query.clone(),
        }
    }

    /// Store the outcome of request `id`. Returns false if the policy
    /// dropped it.
    pub fn resolve(&mut self, id: RequestId, result: SummaryResult) -> bool {
        if self.options.stale_responses == StaleResponsePolicy::DiscardStale
            && self.latest_request != Some(id)
        {
            tracing::debug!(?id, "discarding stale summary response");
            return false;
        }

        self.busy = false;
        self.typewriter.set_text(result.text());
        if !self.options.reveal.enabled {
            self.typewriter.finish();
        }
        self.result = Some(result);
        true
    }

    pub fn summary(&self) -> Option<&str> {
        self.result.as_ref().map(SummaryResult::text)
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    /// Advance the reveal if `generation` is still current.
    pub fn reveal_tick(&mut self, generation: u64) -> bool {
        self.typewriter.tick_for(generation)
    }

    /// True while a reveal timer should be running.
    pub fn needs_ticks(&self) -> bool {
        self.result.is_some() && !self.typewriter.is_complete()
    }

    /// The summary panel, present only while there is a non-empty summary.
    pub fn summary_view(&self) -> Option<RenderedText> {
        match self.summary() {
            Some(text) if !text.is_empty() => Some(self.typewriter.render()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::types::FALLBACK_MESSAGE;

    fn page() -> SummaryPage {
        SummaryPage::new(PageOptions::default())
    }

    #[test]
    fn submit_sets_busy_and_clears_result() {
        let mut page = page();
        page.set_query("https://youtu.be/abc");
        let first = page.submit();
        page.resolve(first.id, SummaryResult::Success("old".into()));
        assert!(page.summary().is_some());

        let ticket = page.submit();
        assert_eq!(ticket.url, "https://youtu.be/abc");
        assert!(page.is_busy());
        assert!(page.summary().is_none());
        assert!(page.summary_view().is_none());
        assert_eq!(
            page.submit_button(),
            SubmitButton {
                enabled: false,
                label: SubmitLabel::Processing
            }
        );
    }

    #[test]
    fn empty_query_is_submitted_unchecked() {
        let mut page = page();
        assert_eq!(page.submit().url, "");
    }

    #[test]
    fn resolve_clears_busy_on_success_and_failure() {
        let mut page = page();
        let ticket = page.submit();
        page.resolve(ticket.id, SummaryResult::Success("ok".into()));
        assert!(!page.is_busy());

        let ticket = page.submit();
        page.resolve(ticket.id, SummaryResult::Failure);
        assert!(!page.is_busy());
        assert_eq!(page.summary(), Some(FALLBACK_MESSAGE));
        assert_eq!(page.submit_button().label, SubmitLabel::Send);
    }

    #[test]
    fn resubmitting_same_query_issues_new_request() {
        let mut page = page();
        page.set_query("u");
        let a = page.submit();
        let b = page.submit();
        assert_ne!(a.id, b.id);
        assert_eq!(a.url, b.url);
    }

    #[test]
    fn reveal_runs_until_complete() {
        let mut page = page();
        let ticket = page.submit();
        page.resolve(ticket.id, SummaryResult::Success("Line one\nLine two".into()));
        assert!(page.needs_ticks());
        assert!(page.summary_view().unwrap().cursor);

        let generation = page.typewriter().generation();
        while page.reveal_tick(generation) {}

        let view = page.summary_view().unwrap();
        assert_eq!(view.lines, vec!["Line one", "Line two"]);
        assert!(!view.cursor);
        assert!(!page.needs_ticks());
    }

    #[test]
    fn disabled_reveal_shows_full_text_at_once() {
        let mut page = SummaryPage::new(PageOptions {
            reveal: RevealConfig {
                enabled: false,
                speed: Duration::from_millis(2),
            },
            ..PageOptions::default()
        });
        let ticket = page.submit();
        page.resolve(ticket.id, SummaryResult::Success("all\nat once".into()));
        let view = page.summary_view().unwrap();
        assert_eq!(view.joined(), "all\nat once");
        assert!(!view.cursor);
        assert!(!page.needs_ticks());
    }

    #[test]
    fn new_summary_restarts_reveal() {
        let mut page = page();
        let ticket = page.submit();
        page.resolve(ticket.id, SummaryResult::Success("first".into()));
        let old_generation = page.typewriter().generation();
        page.reveal_tick(old_generation);

        let ticket = page.submit();
        page.resolve(ticket.id, SummaryResult::Success("second".into()));
        assert!(!page.reveal_tick(old_generation));
        assert_eq!(page.typewriter().revealed(), "");
        assert!(page.reveal_tick(page.typewriter().generation()));
        assert_eq!(page.typewriter().revealed(), "s");
    }

    #[test]
    fn last_write_wins_by_default() {
        let mut page = page();
        let older = page.submit();
        let newer = page.submit();
        assert!(page.resolve(newer.id, SummaryResult::Success("new".into())));
        assert!(page.resolve(older.id, SummaryResult::Success("old".into())));
        assert_eq!(page.summary(), Some("old"));
    }

    #[test]
    fn discard_stale_keeps_newest() {
        let mut page = SummaryPage::new(PageOptions {
            stale_responses: StaleResponsePolicy::DiscardStale,
            ..PageOptions::default()
        });
        let older = page.submit();
        let newer = page.submit();
        assert!(!page.resolve(older.id, SummaryResult::Success("old".into())));
        assert!(page.is_busy());
        assert!(page.resolve(newer.id, SummaryResult::Success("new".into())));
        assert_eq!(page.summary(), Some("new"));
        assert!(!page.is_busy());
    }

    #[test]
    fn empty_summary_hides_panel() {
        let mut page = page();
        let ticket = page.submit();
        page.resolve(ticket.id, SummaryResult::Success(String::new()));
        assert!(page.summary_view().is_none());
        assert!(!page.needs_ticks());
    }
}
