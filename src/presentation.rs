// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The running presentation: which slide is mounted and how input moves between slides.

use crate::deck::{Deck, DeckError};
use crate::model::{SlideId, SlideNode};
use crate::nav::{KeyInput, KeyboardHub, NavigationBinding, RevealCursor, Router, Transition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Moved { from: SlideId, to: SlideId },
    /// The target is not in the deck; the current slide stays mounted.
    Dangling { target: SlideId },
    /// The target is the slide already on screen.
    Unchanged,
}

/// Owns the deck, the key hub, and the binding of the one mounted slide.
#[derive(Debug)]
pub struct Presentation {
    deck: Deck,
    hub: KeyboardHub,
    current: SlideId,
    binding: Option<NavigationBinding>,
    transitions: usize,
}

impl Presentation {
    /// Mounts `start`, or the deck's own start slide when `None`.
    pub fn new(deck: Deck, start: Option<SlideId>) -> Result<Self, DeckError> {
        let current = start.unwrap_or_else(|| deck.start().clone());
        if !deck.contains(current.as_str()) {
            return Err(DeckError::MissingStart { start: current });
        }

        let mut presentation =
            Self { deck, hub: KeyboardHub::new(), current, binding: None, transitions: 0 };
        presentation.mount();
        Ok(presentation)
    }

    fn mount(&mut self) {
        self.binding = None;
        self.binding = self
            .deck
            .slide(self.current.as_str())
            .map(|slide| NavigationBinding::mount(&self.hub, slide));
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current(&self) -> &SlideId {
        &self.current
    }

    pub fn current_slide(&self) -> Option<&SlideNode> {
        self.deck.slide(self.current.as_str())
    }

    pub fn reveal(&self) -> Option<RevealCursor> {
        self.binding.as_ref().and_then(NavigationBinding::reveal)
    }

    /// One-based index of the mounted slide and the deck size.
    pub fn position(&self) -> (usize, usize) {
        let index = self.deck.position(self.current.as_str()).map_or(0, |idx| idx + 1);
        (index, self.deck.len())
    }

    /// Number of completed slide transitions since the presentation started.
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    pub fn listener_count(&self) -> usize {
        self.hub.listener_count()
    }

    pub fn take_scroll_request(&self) -> bool {
        self.binding.as_ref().is_some_and(NavigationBinding::take_scroll_request)
    }

    /// Routes a key through the hub and applies the resulting transition, if any.
    pub fn dispatch_key(&mut self, key: KeyInput) -> Option<NavigationOutcome> {
        let transition = self.hub.dispatch(key).into_iter().next()?;
        Some(self.apply(&transition))
    }

    /// Pointer click anywhere on the mounted slide.
    pub fn click(&mut self) -> Option<NavigationOutcome> {
        let transition = self.binding.as_ref()?.click()?;
        Some(self.apply(&transition))
    }

    fn apply(&mut self, transition: &Transition) -> NavigationOutcome {
        tracing::debug!(
            from = %self.current,
            to = %transition.target(),
            direction = %transition.direction(),
            "transition"
        );
        transition.follow(self)
    }

    pub fn navigate(&mut self, target: &SlideId) -> NavigationOutcome {
        if *target == self.current {
            return NavigationOutcome::Unchanged;
        }
        if !self.deck.contains(target.as_str()) {
            tracing::warn!(from = %self.current, target = %target, "navigation target is not in the deck");
            return NavigationOutcome::Dangling { target: target.clone() };
        }

        let from = std::mem::replace(&mut self.current, target.clone());
        self.mount();
        self.transitions += 1;
        NavigationOutcome::Moved { from, to: target.clone() }
    }

    pub fn go_to_start(&mut self) -> NavigationOutcome {
        let start = self.deck.start().clone();
        self.navigate(&start)
    }
}

impl Router for Presentation {
    type Outcome = NavigationOutcome;

    fn push(&mut self, target: &SlideId) -> NavigationOutcome {
        self.navigate(target)
    }
}
