// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deck configuration: the static table of slides and their neighbour links.
//!
//! Decks are loaded from JSON (see [`file::DeckFile`]) and checked with [`Deck::validate`].
//! Loading only rejects what cannot be presented at all (malformed ids, conflicting duplicate
//! definitions, a missing start slide); inconsistent links are left for validation to report.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::{
    RevealSpec, RevealSpecError, RevealStage, SlideContent, SlideId, SlideIdError, SlideNode,
};

pub mod file;
pub mod validate;

pub use file::{deck_file_schema, DeckFile};
pub use validate::{DeckIssue, Severity, ValidationReport};

const DEMO_DECK_JSON: &str = include_str!("../../data/demo-deck.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    title: String,
    start: SlideId,
    order: Vec<SlideId>,
    slides: BTreeMap<SlideId, SlideNode>,
}

impl Deck {
    /// Builds a deck from slides in presentation order.
    ///
    /// A slide listed twice with identical content is kept once. A slide listed twice with any
    /// difference is rejected: neither definition is assumed to be the authoritative one.
    pub fn new(
        title: impl Into<String>,
        slides: Vec<SlideNode>,
        start: Option<SlideId>,
    ) -> Result<Self, DeckError> {
        let mut order = Vec::with_capacity(slides.len());
        let mut by_id = BTreeMap::new();

        for slide in slides {
            match by_id.get(slide.id()) {
                Some(existing) if *existing == slide => {
                    tracing::warn!(slide = %slide.id(), "duplicate slide definition collapsed");
                }
                Some(_) => {
                    return Err(DeckError::ConflictingDefinition { slide: slide.id().clone() });
                }
                None => {
                    order.push(slide.id().clone());
                    by_id.insert(slide.id().clone(), slide);
                }
            }
        }

        let Some(first) = order.first().cloned() else {
            return Err(DeckError::Empty);
        };
        let start = start.unwrap_or(first);
        if !by_id.contains_key(&start) {
            return Err(DeckError::MissingStart { start });
        }

        Ok(Self { title: title.into(), start, order, slides: by_id })
    }

    pub fn from_file(file: DeckFile) -> Result<Self, DeckError> {
        let mut slides = Vec::with_capacity(file.slides.len());
        for (idx, slide) in file.slides.into_iter().enumerate() {
            slides.push(slide_from_file(idx, slide)?);
        }

        let start = file.start.map(|start| parse_id("start".to_owned(), start)).transpose()?;
        Self::new(file.title, slides, start)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DeckError> {
        let file: DeckFile =
            serde_json::from_str(json).map_err(|source| DeckError::Json { path: None, source })?;
        Self::from_file(file)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|source| DeckError::Io { path: path.to_path_buf(), source })?;
        let file: DeckFile = serde_json::from_str(&json)
            .map_err(|source| DeckError::Json { path: Some(path.to_path_buf()), source })?;
        Self::from_file(file)
    }

    /// The built-in Argus AI investor deck.
    pub fn demo() -> Result<Self, DeckError> {
        Self::from_json_str(DEMO_DECK_JSON)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start(&self) -> &SlideId {
        &self.start
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn slide(&self, id: &str) -> Option<&SlideNode> {
        self.slides.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slides.contains_key(id)
    }

    /// Slides in the order they were listed.
    pub fn slides(&self) -> impl Iterator<Item = &SlideNode> + '_ {
        self.order.iter().filter_map(|id| self.slides.get(id))
    }

    /// Zero-based index of `id` in listing order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.order.iter().position(|candidate| candidate.as_str() == id)
    }

    pub fn validate(&self) -> ValidationReport {
        validate::validate(self)
    }
}

fn slide_from_file(idx: usize, slide: file::SlideFile) -> Result<SlideNode, DeckError> {
    let id = parse_id(format!("slides[{idx}].id"), slide.id)?;
    let next = slide.next.map(|next| parse_id(format!("slides[{idx}].next"), next)).transpose()?;
    let previous = slide
        .previous
        .map(|previous| parse_id(format!("slides[{idx}].previous"), previous))
        .transpose()?;

    let content =
        SlideContent::new(slide.heading).with_subtitle(slide.subtitle).with_body(slide.body);

    let reveal = match slide.reveal {
        Some(reveal) => {
            let stages = reveal
                .stages
                .into_iter()
                .map(|stage| {
                    RevealStage::new(stage.text)
                        .with_label(stage.label)
                        .with_detail(stage.detail)
                })
                .collect();
            let spec = RevealSpec::new(stages)
                .and_then(|spec| spec.with_scroll_at(reveal.scroll_at))
                .map_err(|source| DeckError::InvalidReveal { slide: id.clone(), source })?;
            Some(
                spec.with_start(reveal.start.into())
                    .with_synonyms(reveal.synonyms.into_iter().map(Into::into))
                    .with_finale(reveal.finale),
            )
        }
        None => None,
    };

    Ok(SlideNode::new(id, content).with_links(next, previous).with_reveal(reveal))
}

fn parse_id(field: String, value: String) -> Result<SlideId, DeckError> {
    SlideId::new(&value).map_err(|source| DeckError::InvalidId { field, value, source })
}

#[derive(Debug)]
pub enum DeckError {
    Io { path: PathBuf, source: io::Error },
    Json { path: Option<PathBuf>, source: serde_json::Error },
    InvalidId { field: String, value: String, source: SlideIdError },
    InvalidReveal { slide: SlideId, source: RevealSpecError },
    ConflictingDefinition { slide: SlideId },
    MissingStart { start: SlideId },
    Empty,
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path: Some(path), source } => {
                write!(f, "json error at {path:?}: {source}")
            }
            Self::Json { path: None, source } => write!(f, "json error: {source}"),
            Self::InvalidId { field, value, source } => {
                write!(f, "invalid {field} {value:?}: {source}")
            }
            Self::InvalidReveal { slide, source } => {
                write!(f, "invalid reveal on slide {slide}: {source}")
            }
            Self::ConflictingDefinition { slide } => write!(
                f,
                "slide {slide} is defined more than once with different content or links"
            ),
            Self::MissingStart { start } => write!(f, "start slide {start} is not in the deck"),
            Self::Empty => f.write_str("deck has no slides"),
        }
    }
}

impl std::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            Self::InvalidReveal { source, .. } => Some(source),
            Self::ConflictingDefinition { .. } | Self::MissingStart { .. } | Self::Empty => None,
        }
    }
}
