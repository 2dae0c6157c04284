// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Slide navigation: the key hub, per-slide navigators, and reveal cursors.

pub mod binding;
pub mod hub;
pub mod navigator;
pub mod reveal;

pub use binding::NavigationBinding;
pub use hub::{KeyInput, KeyboardHub, ListenerGuard, ListenerId};
pub use navigator::{Direction, Router, SlideNavigator, Transition};
pub use reveal::{CursorMove, RevealCursor};
