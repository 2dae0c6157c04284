// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::{Path, PathBuf};

use pitchdeck::deck::{Deck, DeckError, DeckIssue};
use pitchdeck::model::SlideId;
use pitchdeck::nav::KeyInput;
use pitchdeck::presentation::{NavigationOutcome, Presentation};
use rstest::{fixture, rstest};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("decks").join(name)
}

fn id(value: &str) -> SlideId {
    SlideId::new(value).expect("slide id")
}

#[fixture]
fn quarterly() -> Deck {
    Deck::load(fixture_path("quarterly.json")).expect("quarterly deck")
}

#[rstest]
fn fixture_deck_is_consistent(quarterly: Deck) {
    assert_eq!(quarterly.title(), "Quarterly Review");
    assert_eq!(quarterly.len(), 3);
    let report = quarterly.validate();
    assert!(report.is_clean(), "unexpected issues: {:?}", report.issues());
}

#[rstest]
fn walks_the_whole_deck_forward_and_back(quarterly: Deck) {
    let mut presentation = Presentation::new(quarterly, None).expect("presentation");
    let mut visited = vec![presentation.current().clone()];

    // 1 (intro) + 3 stages + 1 (leave numbers) = 5 forward presses reach the last slide.
    for _ in 0..5 {
        if let Some(NavigationOutcome::Moved { to, .. }) =
            presentation.dispatch_key(KeyInput::ArrowRight)
        {
            visited.push(to);
        }
    }
    assert_eq!(visited, vec![id("/intro"), id("/numbers"), id("/outlook")]);
    assert_eq!(presentation.dispatch_key(KeyInput::ArrowRight), None);

    assert_eq!(
        presentation.dispatch_key(KeyInput::ArrowLeft),
        Some(NavigationOutcome::Moved { from: id("/outlook"), to: id("/numbers") })
    );
    assert_eq!(
        presentation.dispatch_key(KeyInput::ArrowLeft),
        Some(NavigationOutcome::Moved { from: id("/numbers"), to: id("/intro") })
    );
    assert_eq!(presentation.dispatch_key(KeyInput::ArrowLeft), None);
    assert_eq!(presentation.transitions(), 4);
    assert_eq!(presentation.listener_count(), 1);
}

#[rstest]
fn remounting_a_reveal_slide_starts_it_over(quarterly: Deck) {
    let mut presentation = Presentation::new(quarterly, Some(id("/numbers"))).expect("presentation");
    presentation.dispatch_key(KeyInput::Space);
    presentation.dispatch_key(KeyInput::Space);
    assert_eq!(presentation.reveal().and_then(|cursor| cursor.step()), Some(1));

    presentation.navigate(&id("/outlook"));
    presentation.navigate(&id("/numbers"));
    assert_eq!(presentation.reveal().and_then(|cursor| cursor.step()), None);
}

#[rstest]
fn enter_is_not_a_synonym_unless_configured(quarterly: Deck) {
    let mut presentation = Presentation::new(quarterly, Some(id("/numbers"))).expect("presentation");
    assert_eq!(presentation.dispatch_key(KeyInput::Enter), None);
    assert_eq!(presentation.reveal().and_then(|cursor| cursor.step()), None);
}

#[rstest]
fn clicks_reveal_and_request_scroll_at_the_configured_stage(quarterly: Deck) {
    let mut presentation = Presentation::new(quarterly, Some(id("/numbers"))).expect("presentation");
    presentation.click();
    presentation.click();
    assert!(!presentation.take_scroll_request());
    presentation.click();
    assert!(presentation.take_scroll_request());
    assert_eq!(
        presentation.click(),
        Some(NavigationOutcome::Moved { from: id("/numbers"), to: id("/outlook") })
    );
}

#[test]
fn demo_deck_check_reports_known_problems() {
    let report = Deck::demo().expect("demo deck").validate();
    assert!(report.has_errors());
    assert!(report
        .issues()
        .iter()
        .any(|issue| matches!(issue, DeckIssue::DanglingTarget { slide, .. } if slide.as_str() == "/testing")));
    assert!(report
        .issues()
        .iter()
        .any(|issue| matches!(issue, DeckIssue::ForwardCycle { .. })));
}

#[test]
fn conflicting_duplicate_is_rejected_at_load() {
    let err = Deck::load(fixture_path("conflicting.json")).expect_err("conflict");
    assert!(matches!(err, DeckError::ConflictingDefinition { ref slide } if slide.as_str() == "/a"));
    assert_eq!(
        err.to_string(),
        "slide /a is defined more than once with different content or links"
    );
}

#[test]
fn malformed_link_names_its_field() {
    let err = Deck::load(fixture_path("bad-link.json")).expect_err("bad link");
    assert!(matches!(err, DeckError::InvalidId { ref field, .. } if field == "slides[0].next"));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = Deck::load(fixture_path("unknown-field.json")).expect_err("unknown field");
    assert!(matches!(err, DeckError::Json { path: Some(_), .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Deck::load(fixture_path("does-not-exist.json")).expect_err("missing");
    assert!(matches!(err, DeckError::Io { .. }));
}
