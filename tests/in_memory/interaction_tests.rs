//! Full interaction flows driven through the `Responder` port.

use std::collections::BTreeMap;

use rstest::rstest;

use waypost::redirect::adapters::memory::StaticRedirectSource;
use waypost::redirect::domain::{Choice, RedirectEntry};
use waypost::redirect::ports::reporting::InteractionContext;
use waypost::redirect::services::InteractionService;

use crate::in_memory::helpers::{
    Recorded, RecordingReporter, RecordingResponder, context, entries, static_harness,
};

type Service = InteractionService<StaticRedirectSource, RecordingReporter, RecordingResponder>;

#[rstest]
fn command_definition_describes_the_my_command() {
    let definition = Service::command_definition();

    assert_eq!(definition.name, "my");
    assert!(
        definition
            .options
            .iter()
            .any(|option| option.name == "redirect" && option.required && option.autocomplete)
    );
}

#[rstest]
#[tokio::test]
async fn simple_redirect_ends_in_a_link_reply(entries: Vec<RedirectEntry>) {
    let harness = static_harness(entries);

    harness
        .service
        .handle_command("config")
        .await
        .expect("delivery should succeed");

    let events = harness.responder.events();
    assert_eq!(events.len(), 1);
    let Some(Recorded::Link(reply)) = events.first() else {
        panic!("expected a link reply, got {events:?}");
    };
    assert_eq!(reply.title, "Configuration");
    assert_eq!(
        reply.url.as_str(),
        "https://my.home-assistant.io/create-link/?redirect=config"
    );
}

#[rstest]
#[tokio::test]
async fn parameterised_redirect_shows_a_form_then_replies_with_the_link(
    entries: Vec<RedirectEntry>,
) {
    let harness = static_harness(entries);

    harness
        .service
        .handle_command("oauth")
        .await
        .expect("delivery should succeed");

    let events = harness.responder.events();
    let Some(Recorded::Form(form)) = events.first() else {
        panic!("expected a form, got {events:?}");
    };
    assert_eq!(form.id, "oauth");
    assert_eq!(form.fields.len(), 2);

    let fields = BTreeMap::from([
        ("token".to_owned(), "T".to_owned()),
        ("label".to_owned(), "L".to_owned()),
    ]);
    harness
        .service
        .handle_form_submit("oauth", &fields)
        .await
        .expect("delivery should succeed");

    let events_after = harness.responder.events();
    let Some(Recorded::Link(reply)) = events_after.last() else {
        panic!("expected a link reply, got {events_after:?}");
    };
    assert_eq!(reply.title, "OAuth");
    assert_eq!(reply.url.path(), "/redirect/oauth/");
    let pairs: BTreeMap<String, String> = reply.url.query_pairs().into_owned().collect();
    assert_eq!(pairs, fields);
}

#[rstest]
#[tokio::test]
async fn unknown_keyword_ends_in_the_not_found_notice(entries: Vec<RedirectEntry>) {
    let harness = static_harness(entries);

    harness
        .service
        .handle_command("missing")
        .await
        .expect("delivery should succeed");

    assert_eq!(
        harness.responder.events(),
        vec![Recorded::Ephemeral("Could not find information".to_owned())]
    );
}

#[rstest]
#[tokio::test]
async fn reload_keyword_acknowledges_ephemerally(entries: Vec<RedirectEntry>) {
    let harness = static_harness(entries);

    harness
        .service
        .handle_command("reload")
        .await
        .expect("delivery should succeed");

    assert_eq!(
        harness.responder.events(),
        vec![Recorded::Ephemeral("My redirect list reloaded".to_owned())]
    );
}

#[rstest]
#[tokio::test]
async fn autocomplete_delivers_matching_choices(
    entries: Vec<RedirectEntry>,
    context: InteractionContext,
) {
    let harness = static_harness(entries);

    harness
        .service
        .handle_autocomplete("conf", &context)
        .await
        .expect("delivery should succeed");

    assert_eq!(
        harness.responder.events(),
        vec![Recorded::Choices(vec![Choice::new(
            "Configuration",
            "config"
        )])]
    );
    assert!(harness.reporter.reports().is_empty());
}

#[rstest]
#[tokio::test]
async fn autocomplete_excludes_deprecated_entries(
    entries: Vec<RedirectEntry>,
    context: InteractionContext,
) {
    let harness = static_harness(entries);

    harness
        .service
        .handle_autocomplete("cloud", &context)
        .await
        .expect("delivery should succeed");

    assert_eq!(
        harness.responder.events(),
        vec![Recorded::Choices(Vec::new())],
        "deprecated entries must not surface even on an exact match"
    );
}

#[rstest]
#[tokio::test]
async fn form_submission_missing_a_required_field_is_refused(entries: Vec<RedirectEntry>) {
    let harness = static_harness(entries);
    harness
        .service
        .handle_command("oauth")
        .await
        .expect("delivery should succeed");

    let fields = BTreeMap::from([("label".to_owned(), "L".to_owned())]);
    harness
        .service
        .handle_form_submit("oauth", &fields)
        .await
        .expect("delivery should succeed");

    let events = harness.responder.events();
    let Some(Recorded::Ephemeral(notice)) = events.last() else {
        panic!("expected an ephemeral notice, got {events:?}");
    };
    assert!(
        notice.contains("token"),
        "notice should name the missing field: {notice}"
    );
}
