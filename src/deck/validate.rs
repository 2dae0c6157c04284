// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Static checks over a deck's link table.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use super::Deck;
use crate::model::{LinkKind, SlideId};

/// Minimum fuzzy similarity (0..1) for a slide to be offered as a replacement for a dangling id.
const SUGGESTION_MIN_SCORE: f64 = 0.55;
const PREFIX_MATCH_SCORE: f64 = 0.75;
const MIN_PREFIX_STEM: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckIssue {
    SelfLoop {
        slide: SlideId,
        link: LinkKind,
    },
    DanglingTarget {
        slide: SlideId,
        link: LinkKind,
        target: SlideId,
        suggestion: Option<SlideId>,
    },
    /// `slide.next = target`, but `target.previous` is not `slide`.
    Asymmetric {
        slide: SlideId,
        target: SlideId,
        back: Option<SlideId>,
    },
    Unreachable {
        slide: SlideId,
    },
    /// Following `next` from the start slide enters a loop over these slides.
    ForwardCycle {
        slides: Vec<SlideId>,
    },
}

impl DeckIssue {
    pub fn severity(&self) -> Severity {
        match self {
            Self::SelfLoop { .. } | Self::DanglingTarget { .. } => Severity::Error,
            Self::Asymmetric { .. } | Self::Unreachable { .. } | Self::ForwardCycle { .. } => {
                Severity::Warning
            }
        }
    }
}

impl fmt::Display for DeckIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop { slide, link } => write!(f, "{slide}: {link} points at itself"),
            Self::DanglingTarget { slide, link, target, suggestion } => {
                write!(f, "{slide}: {link} target {target} is not in the deck")?;
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean {suggestion}?)")?;
                }
                Ok(())
            }
            Self::Asymmetric { slide, target, back } => match back {
                Some(back) => write!(f, "{slide}: next is {target}, but {target}.previous is {back}"),
                None => write!(f, "{slide}: next is {target}, but {target} has no previous"),
            },
            Self::Unreachable { slide } => {
                write!(f, "{slide}: not reachable from the start slide")
            }
            Self::ForwardCycle { slides } => {
                f.write_str("next links loop: ")?;
                for (idx, slide) in slides.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(" -> ")?;
                    }
                    write!(f, "{slide}")?;
                }
                if let Some(first) = slides.first() {
                    write!(f, " -> {first}")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<DeckIssue>,
}

impl ValidationReport {
    pub fn issues(&self) -> &[DeckIssue] {
        &self.issues
    }

    pub fn errors(&self) -> impl Iterator<Item = &DeckIssue> + '_ {
        self.issues.iter().filter(|issue| issue.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &DeckIssue> + '_ {
        self.issues.iter().filter(|issue| issue.severity() == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Emits every issue as a `tracing` event at a level matching its severity.
    pub fn log(&self) {
        for issue in &self.issues {
            match issue.severity() {
                Severity::Error => tracing::error!(%issue, "deck validation"),
                Severity::Warning => tracing::warn!(%issue, "deck validation"),
            }
        }
    }
}

pub(super) fn validate(deck: &Deck) -> ValidationReport {
    let mut issues = Vec::new();

    for slide in deck.slides() {
        for link in LinkKind::ALL {
            let Some(target) = slide.link(link) else {
                continue;
            };

            if target == slide.id() {
                issues.push(DeckIssue::SelfLoop { slide: slide.id().clone(), link });
                continue;
            }

            let Some(target_slide) = deck.slide(target.as_str()) else {
                issues.push(DeckIssue::DanglingTarget {
                    slide: slide.id().clone(),
                    link,
                    target: target.clone(),
                    suggestion: suggest_slide(deck, target.as_str()),
                });
                continue;
            };

            if link != LinkKind::Next {
                continue;
            }
            let back = target_slide.link(LinkKind::Previous);
            if back != Some(slide.id()) {
                issues.push(DeckIssue::Asymmetric {
                    slide: slide.id().clone(),
                    target: target.clone(),
                    back: back.cloned(),
                });
            }
        }
    }

    if let Some(cycle) = forward_cycle(deck) {
        issues.push(DeckIssue::ForwardCycle { slides: cycle });
    }

    let reachable = reachable_from_start(deck);
    for slide in deck.slides() {
        if !reachable.contains(slide.id()) {
            issues.push(DeckIssue::Unreachable { slide: slide.id().clone() });
        }
    }

    ValidationReport { issues }
}

/// Closest existing slide id to `target`, if any is similar enough to be a plausible typo.
pub fn suggest_slide(deck: &Deck, target: &str) -> Option<SlideId> {
    let mut best: Option<(f64, &SlideId)> = None;

    for slide in deck.slides() {
        let candidate = slide.id();
        let mut score = rapidfuzz::fuzz::ratio(target.chars(), candidate.as_str().chars());
        if extends_stem(target, candidate.as_str()) || extends_stem(candidate.as_str(), target) {
            score = score.max(PREFIX_MATCH_SCORE);
        }
        if score < SUGGESTION_MIN_SCORE {
            continue;
        }
        if best.map_or(true, |(best_score, _)| score > best_score) {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, id)| id.clone())
}

/// True when `longer` is `stem` followed by a further `-` or `/` segment, e.g. `/revenue-projection`
/// over `/revenue`. Stems shorter than [`MIN_PREFIX_STEM`] characters never qualify.
fn extends_stem(longer: &str, stem: &str) -> bool {
    if stem.trim_start_matches('/').chars().count() < MIN_PREFIX_STEM {
        return false;
    }
    longer
        .strip_prefix(stem)
        .is_some_and(|rest| rest.starts_with('-') || rest.starts_with('/'))
}

fn reachable_from_start(deck: &Deck) -> BTreeSet<SlideId> {
    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::new();
    seen.insert(deck.start().clone());
    queue.push_back(deck.start().clone());

    while let Some(id) = queue.pop_front() {
        let Some(slide) = deck.slide(id.as_str()) else {
            continue;
        };
        for link in LinkKind::ALL {
            let Some(target) = slide.link(link) else {
                continue;
            };
            if deck.contains(target.as_str()) && seen.insert(target.clone()) {
                queue.push_back(target.clone());
            }
        }
    }

    seen
}

fn forward_cycle(deck: &Deck) -> Option<Vec<SlideId>> {
    let mut path: Vec<SlideId> = Vec::new();
    let mut current = Some(deck.start().clone());

    while let Some(id) = current {
        if let Some(idx) = path.iter().position(|seen| *seen == id) {
            // A self-loop is already reported on its own.
            if path.len() - idx == 1 {
                return None;
            }
            return Some(path.split_off(idx));
        }
        let slide = deck.slide(id.as_str())?;
        current = slide.next().cloned();
        path.push(id);
    }

    None
}
