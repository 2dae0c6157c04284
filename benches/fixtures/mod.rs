// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Deterministic deck fixtures (no RNG).

use pitchdeck::deck::file::{RevealFile, RevealStartFile, SlideFile, StageFile, SynonymFile};
use pitchdeck::deck::{Deck, DeckFile};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Large,
}

impl Case {
    fn slide_count(self) -> usize {
        match self {
            Self::Small => 24,
            Self::Large => 2_000,
        }
    }
}

fn slide_id(idx: usize) -> String {
    format!("/slide-{idx:05}")
}

/// A mostly linear deck. Every 7th slide carries a reveal, every 50th slide's `previous` skips
/// one slide back, and the last slide links to a slide that does not exist.
pub fn deck_file(case: Case) -> DeckFile {
    let count = case.slide_count();
    let slides = (0..count)
        .map(|idx| {
            let next = if idx + 1 < count {
                Some(slide_id(idx + 1))
            } else {
                Some("/slide-missing".to_owned())
            };
            let previous = match idx {
                0 => None,
                idx if idx % 50 == 0 && idx >= 2 => Some(slide_id(idx - 2)),
                idx => Some(slide_id(idx - 1)),
            };
            let reveal = (idx % 7 == 3).then(|| RevealFile {
                stages: (0..5)
                    .map(|stage| StageFile {
                        label: Some(format!("{stage}")),
                        text: format!("stage {stage} of slide {idx}"),
                        detail: None,
                    })
                    .collect(),
                start: RevealStartFile::Unstarted,
                synonyms: vec![SynonymFile::Space],
                scroll_at: Some(2),
                finale: None,
            });
            SlideFile {
                id: slide_id(idx),
                next,
                previous,
                heading: format!("Slide {idx}"),
                subtitle: None,
                body: vec![format!("Body text for slide {idx}.")],
                reveal,
            }
        })
        .collect();

    DeckFile { title: "Bench".to_owned(), start: None, slides }
}

pub fn deck(case: Case) -> Deck {
    Deck::from_file(deck_file(case)).expect("bench deck")
}

pub fn deck_json(case: Case) -> String {
    serde_json::to_string(&deck_file(case)).expect("serialize bench deck")
}
