// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{RevealSpec, RevealStart};

/// Step cursor for a slide that discloses its content one stage at a time.
///
/// `step` is `None` until the first stage is revealed and otherwise stays in `0..=max_step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealCursor {
    step: Option<usize>,
    max_step: usize,
    scroll_at: Option<usize>,
}

/// Result of moving a [`RevealCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// The cursor changed locally. `scroll` is set when the move landed on the slide's scroll
    /// stage from below.
    Stage { step: usize, scroll: bool },
    /// No local movement is left in that direction; the deck should navigate instead.
    Exhausted,
}

impl RevealCursor {
    pub fn new(max_step: usize, start: RevealStart) -> Self {
        let step = match start {
            RevealStart::Unstarted => None,
            RevealStart::First => Some(0),
        };
        Self { step, max_step, scroll_at: None }
    }

    pub fn from_spec(spec: &RevealSpec) -> Self {
        Self::new(spec.max_step(), spec.start()).with_scroll_at(spec.scroll_at())
    }

    pub fn with_scroll_at(mut self, scroll_at: Option<usize>) -> Self {
        self.scroll_at = scroll_at.filter(|stage| *stage <= self.max_step);
        self
    }

    pub fn step(&self) -> Option<usize> {
        self.step
    }

    pub fn max_step(&self) -> usize {
        self.max_step
    }

    pub fn stage_count(&self) -> usize {
        self.max_step + 1
    }

    pub fn is_started(&self) -> bool {
        self.step.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.step == Some(self.max_step)
    }

    pub fn is_revealed(&self, stage: usize) -> bool {
        self.step.is_some_and(|step| stage <= step)
    }

    pub fn advance(&mut self) -> CursorMove {
        let step = match self.step {
            None => 0,
            Some(step) if step < self.max_step => step + 1,
            Some(_) => return CursorMove::Exhausted,
        };
        self.step = Some(step);
        CursorMove::Stage { step, scroll: self.scroll_at == Some(step) }
    }

    /// Steps back one stage. Stage 0 and the unstarted sentinel are both exhausted: retreating
    /// from either leaves the slide.
    pub fn retreat(&mut self) -> CursorMove {
        match self.step {
            Some(step) if step > 0 => {
                self.step = Some(step - 1);
                CursorMove::Stage { step: step - 1, scroll: false }
            }
            _ => CursorMove::Exhausted,
        }
    }
}
