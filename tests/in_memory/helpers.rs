//! Shared test helpers for in-memory interaction integration tests.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use rstest::fixture;

use waypost::redirect::adapters::memory::StaticRedirectSource;
use waypost::redirect::domain::{
    Choice, FormRequest, LinkBuilder, LinkReply, RedirectEntry, ResolveError,
};
use waypost::redirect::ports::reporting::{ErrorReporter, InteractionContext};
use waypost::redirect::ports::responder::{Responder, RespondResult};
use waypost::redirect::ports::source::RedirectSource;
use waypost::redirect::services::{InteractionService, RedirectCache, RedirectResolver};

/// One recorded responder invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    /// `reply_ephemeral` with the notice content.
    Ephemeral(String),
    /// `reply_with_link` with the full reply.
    Link(LinkReply),
    /// `show_form` with the full form request.
    Form(FormRequest),
    /// `respond_choices` with the suggestion list.
    Choices(Vec<Choice>),
}

/// Responder that records every delivery for later assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingResponder {
    events: Arc<RwLock<Vec<Recorded>>>,
}

impl RecordingResponder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded deliveries in order.
    pub fn events(&self) -> Vec<Recorded> {
        self.events
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn record(&self, event: Recorded) {
        if let Ok(mut guard) = self.events.write() {
            guard.push(event);
        }
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn reply_ephemeral(&self, content: &str) -> RespondResult<()> {
        self.record(Recorded::Ephemeral(content.to_owned()));
        Ok(())
    }

    async fn reply_with_link(&self, reply: &LinkReply) -> RespondResult<()> {
        self.record(Recorded::Link(reply.clone()));
        Ok(())
    }

    async fn show_form(&self, form: &FormRequest) -> RespondResult<()> {
        self.record(Recorded::Form(form.clone()));
        Ok(())
    }

    async fn respond_choices(&self, choices: &[Choice]) -> RespondResult<()> {
        self.record(Recorded::Choices(choices.to_vec()));
        Ok(())
    }
}

/// Reporter that records every report for later assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    reports: Arc<RwLock<Vec<(ResolveError, InteractionContext)>>>,
}

impl RecordingReporter {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded reports in order.
    pub fn reports(&self) -> Vec<(ResolveError, InteractionContext)> {
        self.reports
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ErrorReporter for RecordingReporter {
    async fn report(&self, error: &ResolveError, context: &InteractionContext) {
        if let Ok(mut guard) = self.reports.write() {
            guard.push((error.clone(), context.clone()));
        }
    }
}

/// Provides the redirect list used across interaction tests.
#[fixture]
pub fn entries() -> Vec<RedirectEntry> {
    vec![
        RedirectEntry::new("config", "Configuration", "Open the configuration panel"),
        RedirectEntry::new("oauth", "OAuth", "Finish an OAuth flow")
            .with_param("token", "required")
            .with_param("label?", "optional"),
        RedirectEntry::new("cloud", "Cloud (legacy)", "Old cloud page").deprecated(),
    ]
}

/// Provides an interaction context for reporting assertions.
#[fixture]
pub fn context() -> InteractionContext {
    InteractionContext::new("{\"id\":\"1\"}", "user#1", "#general", "/my redirect:a")
}

/// Everything a test needs to drive the full interaction flow.
pub struct Harness<S>
where
    S: RedirectSource,
{
    /// Service under test.
    pub service: InteractionService<S, RecordingReporter, RecordingResponder>,
    /// Responder recording every delivery.
    pub responder: Arc<RecordingResponder>,
    /// Reporter recording every suppressed error.
    pub reporter: Arc<RecordingReporter>,
}

/// Builds a harness over the given source.
pub fn harness<S>(source: Arc<S>) -> Harness<S>
where
    S: RedirectSource,
{
    let links = LinkBuilder::from_base("https://my.home-assistant.io").expect("valid base");
    let reporter = Arc::new(RecordingReporter::new());
    let responder = Arc::new(RecordingResponder::new());
    let resolver = RedirectResolver::new(
        RedirectCache::new(source),
        links,
        Arc::clone(&reporter),
    );
    Harness {
        service: InteractionService::new(resolver, Arc::clone(&responder)),
        responder,
        reporter,
    }
}

/// Builds a harness over a static source serving `entries`.
pub fn static_harness(list: Vec<RedirectEntry>) -> Harness<StaticRedirectSource> {
    harness(Arc::new(StaticRedirectSource::new(list)))
}
