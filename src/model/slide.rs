// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;

use super::ids::SlideId;

/// One page of a deck plus its static neighbour links.
///
/// Links are taken verbatim from the deck configuration: `previous` is not required to point back
/// at whichever slide links forward here, and either link may name a slide that does not exist.
/// Both conditions are reported by deck validation rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideNode {
    id: SlideId,
    next: Option<SlideId>,
    previous: Option<SlideId>,
    content: SlideContent,
    reveal: Option<RevealSpec>,
}

impl SlideNode {
    pub fn new(id: SlideId, content: SlideContent) -> Self {
        Self { id, next: None, previous: None, content, reveal: None }
    }

    pub fn with_links(mut self, next: Option<SlideId>, previous: Option<SlideId>) -> Self {
        self.next = next;
        self.previous = previous;
        self
    }

    pub fn with_reveal(mut self, reveal: Option<RevealSpec>) -> Self {
        self.reveal = reveal;
        self
    }

    pub fn id(&self) -> &SlideId {
        &self.id
    }

    pub fn next(&self) -> Option<&SlideId> {
        self.next.as_ref()
    }

    pub fn previous(&self) -> Option<&SlideId> {
        self.previous.as_ref()
    }

    pub fn link(&self, link: LinkKind) -> Option<&SlideId> {
        match link {
            LinkKind::Next => self.next(),
            LinkKind::Previous => self.previous(),
        }
    }

    pub fn content(&self) -> &SlideContent {
        &self.content
    }

    pub fn reveal(&self) -> Option<&RevealSpec> {
        self.reveal.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LinkKind {
    Next,
    Previous,
}

impl LinkKind {
    pub const ALL: [LinkKind; 2] = [LinkKind::Next, LinkKind::Previous];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static copy shown on a slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideContent {
    heading: String,
    subtitle: Option<String>,
    body: Vec<String>,
}

impl SlideContent {
    pub fn new(heading: impl Into<String>) -> Self {
        Self { heading: heading.into(), subtitle: None, body: Vec::new() }
    }

    pub fn with_subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle;
        self
    }

    pub fn with_body(mut self, body: Vec<String>) -> Self {
        self.body = body;
        self
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn body(&self) -> &[String] {
        &self.body
    }
}

/// Where a reveal cursor sits when its slide is mounted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealStart {
    /// Nothing revealed yet; the first advance shows stage 0.
    #[default]
    Unstarted,
    /// Stage 0 is visible on mount.
    First,
}

/// Extra keys that advance a reveal cursor in addition to `ArrowRight` and pointer clicks.
///
/// These never apply at deck level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvanceSynonym {
    Space,
    Enter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStage {
    label: Option<String>,
    text: String,
    detail: Option<String>,
}

impl RevealStage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { label: None, text: text.into(), detail: None }
    }

    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    pub fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

/// Staged reveal configuration for one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSpec {
    stages: Vec<RevealStage>,
    start: RevealStart,
    synonyms: SmallVec<[AdvanceSynonym; 2]>,
    scroll_at: Option<usize>,
    finale: Option<String>,
}

impl RevealSpec {
    pub fn new(stages: Vec<RevealStage>) -> Result<Self, RevealSpecError> {
        if stages.is_empty() {
            return Err(RevealSpecError::NoStages);
        }
        Ok(Self {
            stages,
            start: RevealStart::default(),
            synonyms: SmallVec::new(),
            scroll_at: None,
            finale: None,
        })
    }

    pub fn with_start(mut self, start: RevealStart) -> Self {
        self.start = start;
        self
    }

    pub fn with_synonyms(mut self, synonyms: impl IntoIterator<Item = AdvanceSynonym>) -> Self {
        self.synonyms.clear();
        for synonym in synonyms {
            if !self.synonyms.contains(&synonym) {
                self.synonyms.push(synonym);
            }
        }
        self
    }

    pub fn with_scroll_at(mut self, scroll_at: Option<usize>) -> Result<Self, RevealSpecError> {
        if let Some(stage) = scroll_at {
            if stage > self.max_step() {
                return Err(RevealSpecError::ScrollStageOutOfRange {
                    stage,
                    max_step: self.max_step(),
                });
            }
        }
        self.scroll_at = scroll_at;
        Ok(self)
    }

    pub fn with_finale(mut self, finale: Option<String>) -> Self {
        self.finale = finale;
        self
    }

    pub fn stages(&self) -> &[RevealStage] {
        &self.stages
    }

    /// Index of the last stage; always `stages().len() - 1`.
    pub fn max_step(&self) -> usize {
        self.stages.len() - 1
    }

    pub fn start(&self) -> RevealStart {
        self.start
    }

    pub fn synonyms(&self) -> &[AdvanceSynonym] {
        &self.synonyms
    }

    pub fn scroll_at(&self) -> Option<usize> {
        self.scroll_at
    }

    pub fn finale(&self) -> Option<&str> {
        self.finale.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealSpecError {
    NoStages,
    ScrollStageOutOfRange { stage: usize, max_step: usize },
}

impl fmt::Display for RevealSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStages => f.write_str("reveal must declare at least one stage"),
            Self::ScrollStageOutOfRange { stage, max_step } => {
                write!(f, "reveal scroll_at stage {stage} is past the last stage {max_step}")
            }
        }
    }
}

impl std::error::Error for RevealSpecError {}

#[cfg(test)]
mod tests {
    use super::{AdvanceSynonym, RevealSpec, RevealSpecError, RevealStage};

    fn stages(n: usize) -> Vec<RevealStage> {
        (0..n).map(|idx| RevealStage::new(format!("stage {idx}"))).collect()
    }

    #[test]
    fn reveal_spec_requires_stages() {
        assert_eq!(RevealSpec::new(Vec::new()), Err(RevealSpecError::NoStages));
    }

    #[test]
    fn reveal_spec_max_step_is_last_index() {
        let spec = RevealSpec::new(stages(8)).expect("spec");
        assert_eq!(spec.max_step(), 7);
    }

    #[test]
    fn reveal_spec_rejects_scroll_stage_past_end() {
        let err = RevealSpec::new(stages(3)).expect("spec").with_scroll_at(Some(3)).unwrap_err();
        assert_eq!(err, RevealSpecError::ScrollStageOutOfRange { stage: 3, max_step: 2 });
    }

    #[test]
    fn reveal_spec_dedupes_synonyms() {
        let spec = RevealSpec::new(stages(1)).expect("spec").with_synonyms([
            AdvanceSynonym::Space,
            AdvanceSynonym::Enter,
            AdvanceSynonym::Space,
        ]);
        assert_eq!(spec.synonyms(), &[AdvanceSynonym::Space, AdvanceSynonym::Enter]);
    }
}
