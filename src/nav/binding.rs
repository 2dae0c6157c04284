// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

use super::hub::{KeyInput, KeyboardHub, ListenerGuard};
use super::navigator::{SlideNavigator, Transition};
use super::reveal::{CursorMove, RevealCursor};
use crate::model::{AdvanceSynonym, SlideId, SlideNode};

#[derive(Debug)]
struct BindingState {
    navigator: SlideNavigator,
    reveal: Option<RevealCursor>,
    synonyms: SmallVec<[AdvanceSynonym; 2]>,
    pending_scroll: bool,
}

impl BindingState {
    fn advance(&mut self) -> Option<Transition> {
        let Some(cursor) = self.reveal.as_mut() else {
            return self.navigator.on_next();
        };
        match cursor.advance() {
            CursorMove::Stage { step, scroll } => {
                if scroll {
                    self.pending_scroll = true;
                }
                tracing::trace!(step, scroll, "reveal advanced");
                None
            }
            CursorMove::Exhausted => self.navigator.on_next(),
        }
    }

    fn retreat(&mut self) -> Option<Transition> {
        let Some(cursor) = self.reveal.as_mut() else {
            return self.navigator.on_previous();
        };
        match cursor.retreat() {
            CursorMove::Stage { step, .. } => {
                tracing::trace!(step, "reveal retreated");
                None
            }
            CursorMove::Exhausted => self.navigator.on_previous(),
        }
    }

    fn is_synonym(&self, key: KeyInput) -> bool {
        let synonym = match key {
            KeyInput::Space => AdvanceSynonym::Space,
            KeyInput::Enter => AdvanceSynonym::Enter,
            _ => return false,
        };
        self.reveal.is_some() && self.synonyms.contains(&synonym)
    }

    fn handle_key(&mut self, key: KeyInput) -> Option<Transition> {
        match key {
            KeyInput::ArrowRight => self.advance(),
            KeyInput::ArrowLeft => self.retreat(),
            key if self.is_synonym(key) => self.advance(),
            _ => None,
        }
    }
}

/// Input wiring for the mounted slide.
///
/// Owns the slide's navigator and (optionally) its reveal cursor, and keeps exactly one
/// listener registered with the [`KeyboardHub`] for as long as the binding lives.
#[derive(Debug)]
pub struct NavigationBinding {
    slide: SlideId,
    state: Rc<RefCell<BindingState>>,
    guard: Option<ListenerGuard>,
}

impl NavigationBinding {
    pub fn mount(hub: &KeyboardHub, slide: &SlideNode) -> Self {
        let reveal = slide.reveal();
        let state = BindingState {
            navigator: SlideNavigator::for_slide(slide),
            reveal: reveal.map(RevealCursor::from_spec),
            synonyms: reveal
                .map(|spec| spec.synonyms().iter().copied().collect())
                .unwrap_or_default(),
            pending_scroll: false,
        };

        let mut binding = Self {
            slide: slide.id().clone(),
            state: Rc::new(RefCell::new(state)),
            guard: None,
        };
        binding.attach(hub);
        tracing::debug!(slide = %binding.slide, "binding mounted");
        binding
    }

    fn attach(&mut self, hub: &KeyboardHub) {
        // Release first so a re-registration never briefly holds two listeners.
        self.guard = None;
        let state = Rc::clone(&self.state);
        self.guard = Some(hub.subscribe(move |key| state.borrow_mut().handle_key(key)));
    }

    pub fn slide(&self) -> &SlideId {
        &self.slide
    }

    pub fn navigator(&self) -> SlideNavigator {
        self.state.borrow().navigator.clone()
    }

    /// Swaps the navigation targets, re-registering the hub listener.
    pub fn retarget(&mut self, hub: &KeyboardHub, navigator: SlideNavigator) {
        self.state.borrow_mut().navigator = navigator;
        self.attach(hub);
        tracing::debug!(slide = %self.slide, "binding retargeted");
    }

    pub fn reveal(&self) -> Option<RevealCursor> {
        self.state.borrow().reveal
    }

    pub fn advance(&self) -> Option<Transition> {
        self.state.borrow_mut().advance()
    }

    pub fn retreat(&self) -> Option<Transition> {
        self.state.borrow_mut().retreat()
    }

    /// Pointer click anywhere on the slide. Only reveal slides react to it.
    pub fn click(&self) -> Option<Transition> {
        let mut state = self.state.borrow_mut();
        if state.reveal.is_none() {
            return None;
        }
        state.advance()
    }

    pub fn handle_key(&self, key: KeyInput) -> Option<Transition> {
        self.state.borrow_mut().handle_key(key)
    }

    /// Returns `true` once per scroll-into-view request raised by an advance.
    pub fn take_scroll_request(&self) -> bool {
        std::mem::take(&mut self.state.borrow_mut().pending_scroll)
    }
}

impl Drop for NavigationBinding {
    fn drop(&mut self) {
        tracing::debug!(slide = %self.slide, "binding unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::NavigationBinding;
    use crate::model::{
        AdvanceSynonym, RevealSpec, RevealStage, RevealStart, SlideContent, SlideId, SlideNode,
    };
    use crate::nav::hub::{KeyInput, KeyboardHub};
    use crate::nav::navigator::{Direction, SlideNavigator, Transition};

    fn id(value: &str) -> SlideId {
        SlideId::new(value).expect("slide id")
    }

    fn plain(value: &str, next: Option<&str>, previous: Option<&str>) -> SlideNode {
        SlideNode::new(id(value), SlideContent::new(value)).with_links(next.map(id), previous.map(id))
    }

    fn stages(count: usize) -> Vec<RevealStage> {
        (0..count).map(|idx| RevealStage::new(format!("stage {idx}"))).collect()
    }

    fn breadth() -> SlideNode {
        let spec = RevealSpec::new(stages(8))
            .expect("reveal")
            .with_synonyms([AdvanceSynonym::Space, AdvanceSynonym::Enter])
            .with_scroll_at(Some(3))
            .expect("scroll stage");
        plain("/breadth-of-impact", Some("/crash-detection"), Some("/problem"))
            .with_reveal(Some(spec))
    }

    #[test]
    fn mount_attaches_one_listener_and_drop_releases_it() {
        let hub = KeyboardHub::new();
        for _ in 0..5 {
            let binding = NavigationBinding::mount(&hub, &breadth());
            assert_eq!(hub.listener_count(), 1);
            drop(binding);
            assert_eq!(hub.listener_count(), 0);
        }
    }

    #[test]
    fn retarget_keeps_a_single_listener() {
        let hub = KeyboardHub::new();
        let mut binding = NavigationBinding::mount(&hub, &plain("/tam", Some("/solution"), None));
        binding.retarget(&hub, SlideNavigator::new(Some(id("/camera-acquisition")), None));
        binding.retarget(&hub, SlideNavigator::new(Some(id("/roadmap")), None));

        assert_eq!(hub.listener_count(), 1);
        assert_eq!(
            hub.dispatch(KeyInput::ArrowRight),
            vec![Transition::new(Direction::Forward, id("/roadmap"))]
        );
    }

    #[test]
    fn hub_dispatch_drives_the_reveal_before_navigating() {
        let hub = KeyboardHub::new();
        let binding = NavigationBinding::mount(&hub, &breadth());

        for _ in 0..8 {
            assert!(hub.dispatch(KeyInput::ArrowRight).is_empty());
        }
        assert_eq!(binding.reveal().and_then(|cursor| cursor.step()), Some(7));
        assert_eq!(
            hub.dispatch(KeyInput::ArrowRight),
            vec![Transition::new(Direction::Forward, id("/crash-detection"))]
        );
    }

    #[test]
    fn synonyms_advance_only_where_configured() {
        let hub = KeyboardHub::new();
        let with_synonyms = NavigationBinding::mount(&hub, &breadth());
        assert_eq!(with_synonyms.handle_key(KeyInput::Space), None);
        assert_eq!(with_synonyms.handle_key(KeyInput::Enter), None);
        assert_eq!(with_synonyms.reveal().and_then(|cursor| cursor.step()), Some(1));
        drop(with_synonyms);

        let roadmap = plain("/roadmap", Some("/timeline"), None).with_reveal(Some(
            RevealSpec::new(stages(3)).expect("reveal").with_start(RevealStart::First),
        ));
        let without = NavigationBinding::mount(&hub, &roadmap);
        assert_eq!(without.handle_key(KeyInput::Space), None);
        assert_eq!(without.reveal().and_then(|cursor| cursor.step()), Some(0));

        let flat = NavigationBinding::mount(&hub, &plain("/tam", Some("/roadmap"), None));
        assert_eq!(flat.handle_key(KeyInput::Enter), None);
    }

    #[test]
    fn synonym_on_exhausted_reveal_navigates_forward() {
        let hub = KeyboardHub::new();
        let binding = NavigationBinding::mount(&hub, &breadth());
        for _ in 0..8 {
            binding.handle_key(KeyInput::Space);
        }
        assert_eq!(
            binding.handle_key(KeyInput::Enter),
            Some(Transition::new(Direction::Forward, id("/crash-detection")))
        );
    }

    #[test]
    fn click_advances_reveal_and_ignores_plain_slides() {
        let hub = KeyboardHub::new();
        let binding = NavigationBinding::mount(&hub, &breadth());
        assert_eq!(binding.click(), None);
        assert_eq!(binding.reveal().and_then(|cursor| cursor.step()), Some(0));
        drop(binding);

        let flat = NavigationBinding::mount(&hub, &plain("/tam", Some("/roadmap"), None));
        assert_eq!(flat.click(), None);
    }

    #[test]
    fn retreat_at_first_stage_leaves_the_slide() {
        let hub = KeyboardHub::new();
        let binding = NavigationBinding::mount(&hub, &breadth());
        binding.advance();
        binding.advance();
        assert_eq!(binding.retreat(), None);
        assert_eq!(
            binding.retreat(),
            Some(Transition::new(Direction::Backward, id("/problem")))
        );
    }

    #[test]
    fn scroll_request_is_raised_once() {
        let hub = KeyboardHub::new();
        let binding = NavigationBinding::mount(&hub, &breadth());
        for _ in 0..3 {
            binding.advance();
            assert!(!binding.take_scroll_request());
        }
        binding.advance();
        assert!(binding.take_scroll_request());
        assert!(!binding.take_scroll_request());

        binding.advance();
        assert!(!binding.take_scroll_request());
    }
}
