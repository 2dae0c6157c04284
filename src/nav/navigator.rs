// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::hub::KeyInput;
use crate::model::{SlideId, SlideNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("forward"),
            Self::Backward => f.write_str("backward"),
        }
    }
}

/// A request to move the deck to another slide.
///
/// A `Transition` only exists when its target was configured, so holding one is the "handle is
/// present" case; deck boundaries are represented by its absence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition {
    direction: Direction,
    target: SlideId,
}

impl Transition {
    pub fn new(direction: Direction, target: SlideId) -> Self {
        Self { direction, target }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn target(&self) -> &SlideId {
        &self.target
    }

    /// Performs the transition against `router`.
    pub fn follow<R: Router + ?Sized>(&self, router: &mut R) -> R::Outcome {
        router.push(&self.target)
    }
}

/// The page-transition side effect a navigator drives.
pub trait Router {
    type Outcome;

    fn push(&mut self, target: &SlideId) -> Self::Outcome;
}

/// Maps arrow keys to transitions for one mounted slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideNavigator {
    next: Option<SlideId>,
    previous: Option<SlideId>,
}

impl SlideNavigator {
    pub fn new(next: Option<SlideId>, previous: Option<SlideId>) -> Self {
        Self { next, previous }
    }

    pub fn for_slide(slide: &SlideNode) -> Self {
        Self::new(slide.next().cloned(), slide.previous().cloned())
    }

    pub fn next(&self) -> Option<&SlideId> {
        self.next.as_ref()
    }

    pub fn previous(&self) -> Option<&SlideId> {
        self.previous.as_ref()
    }

    pub fn on_next(&self) -> Option<Transition> {
        self.next.clone().map(|target| Transition::new(Direction::Forward, target))
    }

    pub fn on_previous(&self) -> Option<Transition> {
        self.previous.clone().map(|target| Transition::new(Direction::Backward, target))
    }

    /// Deck-level key handling: only the arrow keys navigate.
    pub fn handle_key(&self, key: KeyInput) -> Option<Transition> {
        match key {
            KeyInput::ArrowRight => self.on_next(),
            KeyInput::ArrowLeft => self.on_previous(),
            KeyInput::Space | KeyInput::Enter | KeyInput::Other => None,
        }
    }
}
